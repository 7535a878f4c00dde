//! Authentication primitives for the Jobboard API
//!
//! Provides salted password hashing (bcrypt, on the blocking pool) and
//! signed, expiring access tokens (HS256 JWT). Domain states hold an
//! [`AuthBackend`] and call it from their handlers.

mod backend;
mod claims;
mod config;
mod error;
mod jwt;
mod password;

pub use backend::AuthBackend;
pub use claims::AccessClaims;
pub use config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use jwt::IssuedToken;
pub use password::{hash_password, verify_password};
