//! Gateway health models.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Health check response from the gateway.
///
/// Extra body fields are ignored; only the fields the client reports on
/// are kept.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    /// Gateway status (e.g. "healthy").
    pub status: String,

    /// Database connectivity as reported by the gateway (e.g. "connected").
    pub database: String,

    /// Timestamp reported by the gateway, if any.
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}
