//! Registration and login API handlers
//!
//! Implements:
//! - POST /api/register — Create a user with a salted password hash
//! - POST /api/login — Verify credentials and issue an access token

use axum::{extract::State, http::StatusCode, Json};
use jobboard_common::{Error, RepositoryError, Result, ValidatedJson};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::middleware::AccountsState;
use crate::domain::entities::{
    validate_username, NewUser, INVALID_CREDENTIALS, LOGIN_FIELDS_REQUIRED,
    REGISTER_FIELDS_REQUIRED, USERNAME_TAKEN,
};

/// Request for `POST /api/register`
#[derive(Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(
        required(message = "All fields are required."),
        length(min = 1, message = "All fields are required.")
    )]
    pub username: Option<String>,

    #[validate(
        required(message = "All fields are required."),
        length(min = 1, message = "All fields are required.")
    )]
    pub password: Option<String>,
}

/// Request for `POST /api/login`
#[derive(Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(
        required(message = "Username and password are required."),
        length(min = 1, message = "Username and password are required.")
    )]
    pub username: Option<String>,

    #[validate(
        required(message = "Username and password are required."),
        length(min = 1, message = "Username and password are required.")
    )]
    pub password: Option<String>,
}

/// Response carrying a confirmation message
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Response for a successful login
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub access_token: String,
}

/// Take both credential fields out of an already-validated request
fn credentials(
    username: Option<String>,
    password: Option<String>,
    missing: &str,
) -> Result<(String, String)> {
    username
        .zip(password)
        .ok_or_else(|| Error::Validation(missing.to_string()))
}

/// POST /api/register — Create a user account
pub async fn register(
    State(state): State<AccountsState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<MessageResponse>)> {
    let (username, password) =
        credentials(request.username, request.password, REGISTER_FIELDS_REQUIRED)?;
    validate_username(&username)?;

    if state.users.find_by_username(&username).await?.is_some() {
        tracing::debug!(username = %username, "Registration rejected, username taken");
        return Err(Error::Conflict(USERNAME_TAKEN.to_string()));
    }

    let password_hash = state.auth.hash_password(&password).await?;
    let new_user = NewUser::new(username, password_hash)?;

    // The unique constraint settles registrations that race past the pre-check
    let user = state.users.create(&new_user).await.map_err(|e| match e {
        RepositoryError::AlreadyExists => Error::Conflict(USERNAME_TAKEN.to_string()),
        other => other.into(),
    })?;

    tracing::info!(user_id = user.id, username = %user.username, "User registered");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Sign-up successful!".to_string(),
        }),
    ))
}

/// POST /api/login — Exchange credentials for an access token
pub async fn login(
    State(state): State<AccountsState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    let (username, password) =
        credentials(request.username, request.password, LOGIN_FIELDS_REQUIRED)?;
    let auth = &state.auth;

    let user = state.users.find_by_username(&username).await?;

    let verified = match &user {
        Some(user) => auth.verify_password(&password, &user.password_hash).await?,
        None => auth.verify_unknown_user(&password).await?,
    };

    let user = match user {
        Some(user) if verified => user,
        _ => {
            tracing::debug!(username = %username, "Login rejected");
            return Err(Error::Authentication(INVALID_CREDENTIALS.to_string()));
        }
    };

    let issued = auth.issue_token(user.id, &user.username)?;

    tracing::info!(user_id = user.id, username = %user.username, "User logged in");

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        access_token: issued.token,
    }))
}
