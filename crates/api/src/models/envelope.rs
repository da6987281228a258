//! Uniform JSON response envelope.
//!
//! Every response body, success or failure, has the shape
//! `{"success": bool, "message": string, "data"?: ...}`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// The response body wrapper.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T> {
    /// Whether the request succeeded.
    pub success: bool,
    /// Human-readable outcome.
    pub message: String,
    /// Payload, omitted on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// A successful envelope carrying `data`.
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }
}

impl Envelope<()> {
    /// A failed envelope with no payload.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }
}

/// A status code paired with an envelope.
///
/// Handlers return `Result<ApiResponse<T>, AppError>`; errors render their own
/// failure envelope.
#[derive(Debug)]
pub struct ApiResponse<T> {
    status: StatusCode,
    envelope: Envelope<T>,
}

impl<T> ApiResponse<T> {
    /// `200 OK` with data.
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self::with_status(StatusCode::OK, message, data)
    }

    /// `201 Created` with data.
    pub fn created(message: impl Into<String>, data: T) -> Self {
        Self::with_status(StatusCode::CREATED, message, data)
    }

    /// Arbitrary status with data.
    pub fn with_status(status: StatusCode, message: impl Into<String>, data: T) -> Self {
        Self {
            status,
            envelope: Envelope::success(message, data),
        }
    }

    /// The status code that will be sent.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }
}

impl ApiResponse<()> {
    /// A failure envelope with the given status.
    pub fn failure(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            envelope: Envelope::failure(message),
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (self.status, Json(self.envelope)).into_response()
    }
}
