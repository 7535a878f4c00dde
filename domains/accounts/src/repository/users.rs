//! User repository

use async_trait::async_trait;
use jobboard_common::db::is_unique_violation;
use jobboard_common::RepositoryError;
use sqlx::AnyPool;

use super::UserStore;
use crate::domain::entities::{NewUser, User};

#[derive(Clone)]
pub struct UserRepository {
    pool: AnyPool,
}

impl UserRepository {
    pub fn new(pool: AnyPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn create(&self, new_user: &NewUser) -> Result<User, RepositoryError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, password)
            VALUES ($1, $2)
            RETURNING id, username, password
            "#,
        )
        .bind(new_user.username())
        .bind(new_user.password_hash())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                RepositoryError::AlreadyExists
            } else {
                RepositoryError::Connection(e)
            }
        })?;

        Ok(user)
    }
}
