//! Error types for the HTTP API.
//!
//! [`ApiError`] unifies every failure a handler can report and converts into
//! the JSON envelope the control view expects:
//! `{"status": "error", "error": <code>, "message": <text>}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use wheel_core::dispatcher::DispatchError;

/// Errors that can occur in the API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The dispatcher refused the command.
    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    /// The request body is not a valid command request.
    #[error("malformed request body: {0}")]
    MalformedBody(String),

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Stable machine-readable code for the error kind.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Dispatch(DispatchError::InvalidAction(_)) => "invalid_action",
            Self::Dispatch(DispatchError::InvalidPayload { .. }) => "invalid_payload",
            Self::MalformedBody(_) => "malformed_body",
            Self::Internal(_) => "internal",
        }
    }

    /// HTTP status for the error kind.
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Dispatch(_) | Self::MalformedBody(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = serde_json::json!({
            "status": "error",
            "error": self.code(),
            "message": self.to_string(),
        });

        (status, axum::Json(body)).into_response()
    }
}
