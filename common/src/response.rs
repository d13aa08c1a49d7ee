//! Gateway response envelope types.
//!
//! The gateway wraps every JSON payload in a common envelope; these types
//! mirror it on the consuming side.

use serde::Deserialize;

use crate::errors::{AppError, AppResult};

/// Standard gateway response envelope.
///
/// Older gateway builds omit the `success` flag on some endpoints, so it
/// defaults to `true` when absent.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    /// Whether the request was successful.
    #[serde(default = "default_success")]
    pub success: bool,

    /// Response payload (present on success).
    pub data: Option<T>,

    /// Short error description (present on failure).
    pub error: Option<String>,

    /// Human-readable error message.
    pub message: Option<String>,

    /// Pagination information for list responses.
    pub pagination: Option<Pagination>,
}

fn default_success() -> bool {
    true
}

/// Pagination information attached to list responses (camelCase on the wire).
#[derive(Debug, Clone, Deserialize)]
pub struct Pagination {
    /// Total number of items.
    pub total: u64,

    /// Current page number (1-based).
    pub page: u32,

    /// Number of items per page.
    pub limit: u32,

    /// Total number of pages.
    #[serde(rename = "totalPages")]
    pub total_pages: u32,

    /// Whether there is a next page.
    #[serde(rename = "hasNext")]
    pub has_next: bool,

    /// Whether there is a previous page.
    #[serde(rename = "hasPrev")]
    pub has_prev: bool,
}

impl<T> ApiEnvelope<T> {
    /// Extracts the `data` payload, failing when the gateway omitted it.
    pub fn into_data(self) -> AppResult<T> {
        self.data.ok_or_else(|| {
            let detail = self
                .message
                .or(self.error)
                .unwrap_or_else(|| "response body has no `data` field".to_string());
            AppError::InvalidResponse(detail)
        })
    }
}
