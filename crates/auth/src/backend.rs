//! Concrete authentication backend
//!
//! Wraps `AuthConfig` and owns the credential operations the account
//! handlers need: hashing at registration, verification and token issuing
//! at login.

use std::sync::Arc;
use tokio::sync::OnceCell;

use crate::claims::AccessClaims;
use crate::config::AuthConfig;
use crate::error::AuthResult;
use crate::jwt::{issue_access_token, validate_access_token, IssuedToken};
use crate::password::{hash_password, verify_password};

/// Concrete authentication backend, cloned into each domain state.
#[derive(Clone)]
pub struct AuthBackend {
    config: AuthConfig,
    /// Hash checked against when the username is unknown, so both login
    /// failure paths cost one bcrypt verification.
    decoy_hash: Arc<OnceCell<String>>,
}

impl AuthBackend {
    pub fn new(config: AuthConfig) -> Self {
        Self {
            config,
            decoy_hash: Arc::new(OnceCell::new()),
        }
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Salted one-way hash of `password` at the configured cost
    pub async fn hash_password(&self, password: &str) -> AuthResult<String> {
        hash_password(password, self.config.bcrypt_cost).await
    }

    /// Check `password` against a stored hash
    pub async fn verify_password(&self, password: &str, stored_hash: &str) -> AuthResult<bool> {
        verify_password(password, stored_hash).await
    }

    /// Burn one verification for a login whose username does not exist.
    ///
    /// Always returns `false`.
    pub async fn verify_unknown_user(&self, password: &str) -> AuthResult<bool> {
        let decoy = self
            .decoy_hash
            .get_or_try_init(|| hash_password("decoy-password", self.config.bcrypt_cost))
            .await?;
        verify_password(password, decoy).await?;
        Ok(false)
    }

    /// Sign an access token for a successfully authenticated user
    pub fn issue_token(&self, user_id: i64, username: &str) -> AuthResult<IssuedToken> {
        issue_access_token(user_id, username, &self.config)
    }

    /// Validate a token previously returned by [`AuthBackend::issue_token`]
    pub fn validate_token(&self, token: &str) -> AuthResult<AccessClaims> {
        validate_access_token(token, &self.config)
    }
}
