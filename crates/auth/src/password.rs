//! Password hashing and verification
//!
//! bcrypt embeds a random per-password salt in its output, so hashing the
//! same password twice yields two different strings that both verify.
//! Both operations are CPU-bound and run on the blocking thread pool.

use crate::error::{AuthError, AuthResult};

/// Hash a password with bcrypt at the given cost.
pub async fn hash_password(password: &str, cost: u32) -> AuthResult<String> {
    let password = password.to_string();

    tokio::task::spawn_blocking(move || {
        bcrypt::hash(password, cost).map_err(|e| AuthError::Hashing(e.to_string()))
    })
    .await
    .map_err(|e| AuthError::Hashing(format!("Task join error: {}", e)))?
}

/// Verify a password against a stored bcrypt hash.
///
/// `Ok(false)` means the password does not match; `Err` means the stored
/// hash could not be parsed.
pub async fn verify_password(password: &str, hash: &str) -> AuthResult<bool> {
    let password = password.to_string();
    let hash = hash.to_string();

    tokio::task::spawn_blocking(move || {
        bcrypt::verify(password, &hash).map_err(|e| AuthError::Hashing(e.to_string()))
    })
    .await
    .map_err(|e| AuthError::Hashing(format!("Task join error: {}", e)))?
}
