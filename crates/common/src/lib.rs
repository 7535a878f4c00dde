//! Shared utilities, configuration, and error handling for Jobboard
//!
//! This crate provides common functionality used across the Jobboard service:
//! - Configuration management following 12-factor principles
//! - Error types and their HTTP mapping
//! - Database pool setup and embedded migrations
//! - Request body extraction with validation

pub mod config;
pub mod db;
pub mod error;
pub mod extractors;

pub use config::Config;
pub use db::{connect, run_migrations, Backend, RepositoryError};
pub use error::{Error, Result};
pub use extractors::ValidatedJson;
