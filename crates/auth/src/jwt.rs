//! Access token issuing and validation

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::claims::AccessClaims;
use crate::config::AuthConfig;
use crate::error::AuthError;

/// A freshly signed access token
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub claims: AccessClaims,
}

/// Sign an HS256 access token for a user
pub(crate) fn issue_access_token(
    user_id: i64,
    username: &str,
    config: &AuthConfig,
) -> Result<IssuedToken, AuthError> {
    let now = Utc::now().timestamp();
    let exp = now
        .checked_add(config.token_ttl_seconds)
        .ok_or_else(|| AuthError::TokenCreation("token lifetime overflows".to_string()))?;
    let claims = AccessClaims {
        sub: user_id.to_string(),
        username: username.to_string(),
        iat: now as u64,
        exp: exp as u64,
        iss: config.issuer.clone(),
    };

    let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_ref());
    let token = encode(&Header::new(Algorithm::HS256), &claims, &encoding_key)
        .map_err(|e| AuthError::TokenCreation(e.to_string()))?;

    Ok(IssuedToken { token, claims })
}

/// Validate an access token's signature, expiry and (when configured) issuer
pub(crate) fn validate_access_token(
    token: &str,
    config: &AuthConfig,
) -> Result<AccessClaims, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_aud = false;
    validation.set_required_spec_claims(&["exp", "sub"]);

    if let Some(iss) = &config.issuer {
        validation.set_issuer(&[iss]);
    }

    let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_ref());

    let token_data = decode::<AccessClaims>(token, &decoding_key, &validation).map_err(|e| {
        tracing::debug!(error = %e, "JWT validation failed");
        AuthError::InvalidToken
    })?;

    Ok(token_data.claims)
}
