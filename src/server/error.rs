//! Dev Server Error Types
//!
//! Proxy failures become JSON error responses; bind and IO failures end
//! `serve` with an error.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Dev server error types
#[derive(Error, Debug)]
pub enum ServerError {
    /// The backend could not be reached or its body could not be read
    #[error("Backend request to {url} failed: {message}")]
    Upstream { url: String, message: String },

    /// Server error
    #[error("Internal error: {0}")]
    Internal(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error response body
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

/// Error details
#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ServerError::Upstream { .. } => (StatusCode::BAD_GATEWAY, "BAD_GATEWAY"),
            ServerError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
            ServerError::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "IO_ERROR"),
        };

        tracing::error!(error_code = %code, error_message = %self, "Proxy error occurred");

        let body = ErrorResponse {
            error: ErrorBody {
                code: code.to_string(),
                message: self.to_string(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for dev server operations
pub type ServerResult<T> = Result<T, ServerError>;
