//! Shared data models exchanged with the database gateway.

pub mod health;
pub mod query;
pub mod table;

// Re-export commonly used types
pub use health::HealthStatus;
pub use query::{QueryRequest, QueryRows, Row};
pub use table::{ColumnDescriptor, FieldInfo, TableDescriptor, TableInfo};
