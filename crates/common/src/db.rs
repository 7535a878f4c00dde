//! Shared database types for Jobboard
//!
//! The store is reached through the sqlx `Any` driver so the same
//! repositories run against the embedded SQLite default and PostgreSQL.

use crate::error::Error;
use sqlx::any::{install_default_drivers, AnyPoolOptions};
use sqlx::migrate::Migrator;
use sqlx::AnyPool;
use thiserror::Error;

static SQLITE_MIGRATIONS: Migrator = sqlx::migrate!("./migrations/sqlite");
static POSTGRES_MIGRATIONS: Migrator = sqlx::migrate!("./migrations/postgres");

/// Database-specific error types
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Record already exists")]
    AlreadyExists,

    #[error("Database connection error: {0}")]
    Connection(#[from] sqlx::Error),

    #[error("Unsupported database URL: {0}")]
    UnsupportedUrl(String),

    #[error("Migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl From<RepositoryError> for Error {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::AlreadyExists => Error::Conflict("Record already exists".to_string()),
            RepositoryError::Connection(e) => Error::Database(e),
            RepositoryError::UnsupportedUrl(url) => {
                Error::Internal(format!("Unsupported database URL: {url}"))
            }
            RepositoryError::Migration(e) => Error::Internal(format!("Migration failed: {e}")),
        }
    }
}

/// Storage engine selected by the connection URL scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Sqlite,
    Postgres,
}

impl Backend {
    pub fn from_url(url: &str) -> Result<Self, RepositoryError> {
        if url.starts_with("sqlite:") {
            Ok(Backend::Sqlite)
        } else if url.starts_with("postgres:") || url.starts_with("postgresql:") {
            Ok(Backend::Postgres)
        } else {
            // Never echo the URL itself, it may carry credentials
            let scheme = url.split(':').next().unwrap_or_default();
            Err(RepositoryError::UnsupportedUrl(format!("{scheme}:")))
        }
    }

    fn migrator(self) -> &'static Migrator {
        match self {
            Backend::Sqlite => &SQLITE_MIGRATIONS,
            Backend::Postgres => &POSTGRES_MIGRATIONS,
        }
    }
}

/// Open a connection pool for `database_url`
pub async fn connect(database_url: &str, max_connections: u32) -> Result<AnyPool, RepositoryError> {
    Backend::from_url(database_url)?;
    install_default_drivers();

    let pool = AnyPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    Ok(pool)
}

/// Apply the embedded migrations for `backend`
pub async fn run_migrations(pool: &AnyPool, backend: Backend) -> Result<(), RepositoryError> {
    backend.migrator().run(pool).await?;
    tracing::info!(?backend, "Database migrations applied");
    Ok(())
}

/// True when the error is a unique constraint violation raised by the store
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.is_unique_violation())
}
