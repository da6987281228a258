//! Registration and login handlers.

use axum::extract::State;
use secrecy::SecretString;
use serde::Deserialize;
use tracing::instrument;

use crate::error::Result;
use crate::extract::JsonOrDefault;
use crate::models::{ApiResponse, User};
use crate::services::AuthService;
use crate::state::AppState;

/// Registration request body.
#[derive(Default, Deserialize)]
pub struct RegisterPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Login request body.
#[derive(Default, Deserialize)]
pub struct LoginPayload {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

fn secret(password: Option<String>) -> SecretString {
    SecretString::from(password.unwrap_or_default())
}

/// Register a reader.
#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    JsonOrDefault(payload): JsonOrDefault<RegisterPayload>,
) -> Result<ApiResponse<User>> {
    let password = secret(payload.password);

    let user = AuthService::new(state.catalog()).register(
        payload.name.as_deref().unwrap_or_default(),
        payload.email.as_deref().unwrap_or_default(),
        &password,
    )?;

    Ok(ApiResponse::created("User registered successfully.", user))
}

/// Log in with email and password.
#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    JsonOrDefault(payload): JsonOrDefault<LoginPayload>,
) -> Result<ApiResponse<User>> {
    let password = secret(payload.password);

    let user = AuthService::new(state.catalog())
        .login(payload.email.as_deref().unwrap_or_default(), &password)?;

    Ok(ApiResponse::ok("Login successful.", user))
}
