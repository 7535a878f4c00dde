//! Repository implementations for Accounts domain

#[cfg(test)]
pub mod memory;
pub mod users;

use async_trait::async_trait;
use jobboard_common::RepositoryError;

use crate::domain::entities::{NewUser, User};

pub use users::UserRepository;

/// Store operations the account handlers depend on
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Find a user by exact, case-sensitive username
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError>;

    /// Insert a user, returning [`RepositoryError::AlreadyExists`] when the
    /// username is taken
    async fn create(&self, new_user: &NewUser) -> Result<User, RepositoryError>;
}
