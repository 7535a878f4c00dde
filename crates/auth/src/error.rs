//! Authentication errors

use jobboard_common::Error;

pub type AuthResult<T> = Result<T, AuthError>;

/// Authentication error
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Password hashing failed: {0}")]
    Hashing(String),

    #[error("Token creation failed: {0}")]
    TokenCreation(String),

    #[error("Invalid or expired token")]
    InvalidToken,
}

impl From<AuthError> for Error {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidToken => Error::Authentication(err.to_string()),
            AuthError::Hashing(_) | AuthError::TokenCreation(_) => Error::Internal(err.to_string()),
        }
    }
}
