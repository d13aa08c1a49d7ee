//! Shared library for the gateway client workspace.
//!
//! Contains configuration, error types, the gateway response envelope,
//! and the data models exchanged with the database gateway.

pub mod config;
pub mod errors;
pub mod models;
pub mod response;

// Re-export commonly used types
pub use config::GatewayConfig;
pub use errors::{AppError, AppResult};
