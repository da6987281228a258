//! Unified error handling with Sentry integration.
//!
//! Every layer's error converges on [`AppError`], which renders a failure
//! envelope. Server errors are captured to Sentry before responding and their
//! details are never sent to the client.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::lookup::LookupError;
use crate::models::ApiResponse;
use crate::services::AuthError;
use crate::store::StoreError;

const INTERNAL_MESSAGE: &str = "Internal server error";
const UPSTREAM_FAILURE_MESSAGE: &str = "Error fetching books from the external API.";
const UPSTREAM_TIMEOUT_MESSAGE: &str = "The external API did not respond in time.";

/// Application-level error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Catalog operation failed.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Authentication operation failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// External volumes lookup failed.
    #[error("Lookup error: {0}")]
    Lookup(#[from] LookupError),

    /// Malformed request from the client.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(format!("Invalid request body: {}", rejection.body_text()))
    }
}

impl AppError {
    /// The HTTP status this error is reported with.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Store(err) if err.is_not_found() => StatusCode::NOT_FOUND,
            Self::Store(_) | Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Auth(err) => match err {
                AuthError::MissingFields(_) | AuthError::UserAlreadyExists => {
                    StatusCode::BAD_REQUEST
                }
                AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
                AuthError::PasswordHash => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::Lookup(LookupError::Timeout(_)) => StatusCode::GATEWAY_TIMEOUT,
            Self::Lookup(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    /// The message sent to the client.
    #[must_use]
    pub fn client_message(&self) -> String {
        match self {
            Self::Store(err) => err.to_string(),
            Self::Auth(err) => match err {
                AuthError::MissingFields(msg) => (*msg).to_string(),
                AuthError::InvalidCredentials => "Invalid email or password.".to_string(),
                AuthError::UserAlreadyExists => StoreError::EmailTaken.to_string(),
                AuthError::PasswordHash => INTERNAL_MESSAGE.to_string(),
            },
            Self::Lookup(LookupError::Timeout(_)) => UPSTREAM_TIMEOUT_MESSAGE.to_string(),
            Self::Lookup(_) => UPSTREAM_FAILURE_MESSAGE.to_string(),
            Self::Validation(msg) | Self::NotFound(msg) => msg.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Capture server errors to Sentry
        if status.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        } else {
            tracing::debug!(error = %self, status = %status, "Request rejected");
        }

        ApiResponse::failure(status, self.client_message()).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
