//! In-memory user store for handler tests

use async_trait::async_trait;
use jobboard_common::RepositoryError;
use std::sync::Mutex;

use super::UserStore;
use crate::domain::entities::{NewUser, User};

/// `UserStore` backed by a vector; ids start at 1
#[derive(Default)]
pub struct InMemoryUserStore {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every stored user
    pub fn users(&self) -> Vec<User> {
        self.users.lock().map(|users| users.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
        let users = self
            .users
            .lock()
            .map_err(|_| RepositoryError::Connection(sqlx::Error::PoolClosed))?;
        Ok(users.iter().find(|u| u.username == username).cloned())
    }

    async fn create(&self, new_user: &NewUser) -> Result<User, RepositoryError> {
        let mut users = self
            .users
            .lock()
            .map_err(|_| RepositoryError::Connection(sqlx::Error::PoolClosed))?;

        if users.iter().any(|u| u.username == new_user.username()) {
            return Err(RepositoryError::AlreadyExists);
        }

        let user = User {
            id: users.len() as i64 + 1,
            username: new_user.username().to_string(),
            password_hash: new_user.password_hash().to_string(),
        };
        users.push(user.clone());
        Ok(user)
    }
}
