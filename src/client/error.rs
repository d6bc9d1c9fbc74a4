//! Fetch error types
//!
//! Transport-neutral so both the reqwest and the gloo-net clients map into it.

use thiserror::Error;

use super::Endpoint;

/// Errors that can occur while reading from the dashboard API
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    /// The request never produced a response (connection refused, timeout, CORS)
    #[error("Request to {endpoint} failed: {message}")]
    Transport { endpoint: Endpoint, message: String },

    /// Any non-success HTTP status
    #[error("HTTP error from {endpoint}: status {status}")]
    Status { endpoint: Endpoint, status: u16 },

    /// The body was not the JSON shape the endpoint promises
    #[error("Invalid response from {endpoint}: {message}")]
    Decode { endpoint: Endpoint, message: String },
}

impl FetchError {
    pub fn endpoint(&self) -> Endpoint {
        match self {
            FetchError::Transport { endpoint, .. }
            | FetchError::Status { endpoint, .. }
            | FetchError::Decode { endpoint, .. } => *endpoint,
        }
    }
}

/// Result type alias for API reads
pub type FetchResult<T> = Result<T, FetchError>;
