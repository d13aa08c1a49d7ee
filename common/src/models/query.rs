//! SQL query models.
//!
//! Contains the request body for the query endpoint and the row shapes
//! returned by it.

use serde::Serialize;
use validator::Validate;

/// Request body for the query endpoint.
///
/// Serializes exactly as `{"query": ..., "params": [...]}`. The client
/// performs no SQL validation or sanitization; the gateway is trusted to
/// parameterize safely.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct QueryRequest {
    /// SQL statement to execute (parameterized with $1, $2, ...).
    #[validate(length(min = 1, message = "SQL statement is required"))]
    pub query: String,

    /// Positional query parameters.
    pub params: Vec<serde_json::Value>,
}

impl QueryRequest {
    /// Creates a new query request.
    pub fn new(sql: impl Into<String>, params: Vec<serde_json::Value>) -> Self {
        Self {
            query: sql.into(),
            params,
        }
    }
}

/// A single result row as returned by the gateway.
pub type Row = serde_json::Map<String, serde_json::Value>;

/// Query result rows; vector order is the gateway's row order.
pub type QueryRows = Vec<Row>;
