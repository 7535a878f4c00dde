//! Authentication configuration

use jobboard_common::Config;

/// Authentication configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub issuer: Option<String>,
    pub token_ttl_seconds: i64,
    pub bcrypt_cost: u32,
}

impl From<&Config> for AuthConfig {
    fn from(config: &Config) -> Self {
        Self {
            jwt_secret: config.secret_key.clone(),
            issuer: config.jwt_issuer.clone(),
            token_ttl_seconds: config.jwt_expiry_seconds,
            bcrypt_cost: config.bcrypt_cost,
        }
    }
}
