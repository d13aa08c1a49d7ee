//! Application error types.
//!
//! Every gateway operation resolves to one of these terminal errors;
//! nothing is retried or recovered.

use reqwest::StatusCode;
use thiserror::Error;

/// Result alias used across the workspace.
pub type AppResult<T> = Result<T, AppError>;

/// Errors surfaced by gateway client operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// The gateway could not be reached at all.
    #[error("cannot connect to gateway: {0}")]
    Connection(String),

    /// The request exceeded its deadline.
    #[error("request timed out: {0}")]
    Timeout(String),

    /// The gateway answered with an error status.
    #[error("gateway returned HTTP {status}: {body}")]
    Http { status: StatusCode, body: String },

    /// The response body did not match the expected shape.
    #[error("invalid gateway response: {0}")]
    InvalidResponse(String),

    /// Request-side validation failed before anything was sent.
    #[error("validation error: {0}")]
    Validation(String),

    /// Any other transport-level failure.
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
}

impl AppError {
    /// Classifies a reqwest error into connection, timeout or other.
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::Timeout(err.to_string())
        } else if err.is_connect() {
            AppError::Connection(err.to_string())
        } else {
            AppError::Request(err)
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidResponse(err.to_string())
    }
}
