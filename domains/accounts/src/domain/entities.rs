//! Domain entities for the Jobboard accounts domain

use jobboard_common::{Error, Result};

/// Storage limit of the `users.username` column
pub const MAX_USERNAME_LENGTH: usize = 80;

/// Storage limit of the `users.password` column
pub const MAX_PASSWORD_HASH_LENGTH: usize = 128;

pub const REGISTER_FIELDS_REQUIRED: &str = "All fields are required.";
pub const LOGIN_FIELDS_REQUIRED: &str = "Username and password are required.";
pub const USERNAME_TAKEN: &str = "Username already taken.";
/// Shared by the unknown-user and wrong-password paths
pub const INVALID_CREDENTIALS: &str = "Invalid username or password.";

/// User entity
///
/// Deliberately not `Serialize`: the stored hash must never reach a
/// response body.
#[derive(Clone, PartialEq, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[sqlx(rename = "password")]
    pub password_hash: String,
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("password_hash", &"<redacted>")
            .finish()
    }
}

/// A user that has not been persisted yet
#[derive(Clone, PartialEq)]
pub struct NewUser {
    username: String,
    password_hash: String,
}

impl NewUser {
    /// Create a new user with validation
    pub fn new(username: String, password_hash: String) -> Result<Self> {
        validate_username(&username)?;

        if password_hash.is_empty() || password_hash.len() > MAX_PASSWORD_HASH_LENGTH {
            return Err(Error::Internal(format!(
                "Password hash must be 1-{} characters",
                MAX_PASSWORD_HASH_LENGTH
            )));
        }

        Ok(Self {
            username,
            password_hash,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }
}

impl std::fmt::Debug for NewUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewUser")
            .field("username", &self.username)
            .field("password_hash", &"<redacted>")
            .finish()
    }
}

/// Validate a username against the column limits
pub fn validate_username(username: &str) -> Result<()> {
    if username.is_empty() {
        return Err(Error::Validation(REGISTER_FIELDS_REQUIRED.to_string()));
    }

    if username.chars().count() > MAX_USERNAME_LENGTH {
        return Err(Error::Validation(format!(
            "Username must be at most {} characters.",
            MAX_USERNAME_LENGTH
        )));
    }

    Ok(())
}
