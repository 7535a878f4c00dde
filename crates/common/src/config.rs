//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables to ensure
//! clean separation between code and config.

use anyhow::Result;
use std::env;
use std::fmt;

/// Embedded SQLite file used when `DATABASE_URL` is unset
pub const DEFAULT_DATABASE_URL: &str = "sqlite://jobboard.db?mode=rwc";

/// Signing secret used when `SECRET_KEY` is unset. Development only.
pub const DEFAULT_SECRET_KEY: &str = "mysecretkey";

/// Matches bcrypt's own default cost
pub const DEFAULT_BCRYPT_COST: u32 = 12;

/// bcrypt accepts costs in this range
const BCRYPT_COST_RANGE: std::ops::RangeInclusive<u32> = 4..=31;

/// Longest accepted access token lifetime (one year)
pub const MAX_JWT_EXPIRY_SECONDS: i64 = 365 * 24 * 60 * 60;

#[derive(Clone)]
pub struct Config {
    /// Database connection URL (`sqlite:` or `postgres:`)
    pub database_url: String,
    pub database_max_connections: u32,
    pub run_migrations: bool,

    /// Token signing
    pub secret_key: String,
    pub jwt_issuer: Option<String>,
    pub jwt_expiry_seconds: i64,

    /// Password hashing cost factor
    pub bcrypt_cost: u32,

    /// Runtime configuration
    pub rust_log: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret_key = match lookup("SECRET_KEY") {
            Some(key) if !key.is_empty() => key,
            _ => DEFAULT_SECRET_KEY.to_string(),
        };

        let bcrypt_cost = match lookup("BCRYPT_COST") {
            Some(raw) => {
                let cost: u32 = raw
                    .parse()
                    .map_err(|_| anyhow::anyhow!("BCRYPT_COST must be an integer, got {raw:?}"))?;
                if !BCRYPT_COST_RANGE.contains(&cost) {
                    anyhow::bail!(
                        "BCRYPT_COST must be between {} and {}",
                        BCRYPT_COST_RANGE.start(),
                        BCRYPT_COST_RANGE.end()
                    );
                }
                cost
            }
            None => DEFAULT_BCRYPT_COST,
        };

        let config = Self {
            database_url: lookup("DATABASE_URL")
                .filter(|url| !url.is_empty())
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            database_max_connections: lookup("DATABASE_MAX_CONNECTIONS")
                .and_then(|v| v.parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(5),
            run_migrations: lookup("RUN_MIGRATIONS")
                .map(|v| !matches!(v.to_ascii_lowercase().as_str(), "false" | "0" | "no"))
                .unwrap_or(true),

            secret_key,
            jwt_issuer: lookup("JWT_ISSUER").filter(|v| !v.is_empty()),
            jwt_expiry_seconds: lookup("JWT_EXPIRY_SECONDS")
                .and_then(|v| v.parse().ok())
                .filter(|secs| (1..=MAX_JWT_EXPIRY_SECONDS).contains(secs))
                .unwrap_or(3600),

            bcrypt_cost,

            rust_log: lookup("RUST_LOG")
                .unwrap_or_else(|| "jobboard=info,tower_http=info".to_string()),
            port: lookup("PORT")
                .unwrap_or_else(|| "5000".to_string())
                .parse()
                .unwrap_or(5000),
        };

        Ok(config)
    }

    /// True when tokens are signed with the built-in development secret
    pub fn uses_default_secret(&self) -> bool {
        self.secret_key == DEFAULT_SECRET_KEY
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &self.database_url)
            .field("database_max_connections", &self.database_max_connections)
            .field("run_migrations", &self.run_migrations)
            .field("secret_key", &"<redacted>")
            .field("jwt_issuer", &self.jwt_issuer)
            .field("jwt_expiry_seconds", &self.jwt_expiry_seconds)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .field("rust_log", &self.rust_log)
            .field("port", &self.port)
            .finish()
    }
}
