//! Table and schema models.
//!
//! Contains models for the table listing, schema and table detail endpoints.

use serde::{Deserialize, Serialize};

/// A table entry returned by the list-tables endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableDescriptor {
    /// Table name.
    pub table_name: String,
    /// Table type (e.g. "BASE TABLE", "VIEW").
    pub table_type: String,
}

/// A column entry returned by the schema endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// Column name.
    pub column_name: String,
    /// Column data type.
    pub data_type: String,
}

/// Detailed table information from the table-info endpoint.
///
/// The gateway serializes these fields in camelCase.
#[derive(Debug, Clone, Deserialize)]
pub struct TableInfo {
    /// Table name.
    pub table: String,

    /// Total number of rows in the table.
    #[serde(rename = "totalRows")]
    pub total_rows: u64,

    /// Column details.
    pub fields: Vec<FieldInfo>,

    /// Number of columns.
    #[serde(rename = "fieldCount")]
    pub field_count: usize,
}

/// Full column details in a table-info response.
#[derive(Debug, Clone, Deserialize)]
pub struct FieldInfo {
    /// Column name.
    pub column_name: String,

    /// Column data type.
    pub data_type: String,

    /// Maximum length for character types.
    #[serde(default)]
    pub character_maximum_length: Option<i64>,

    /// Whether the column is nullable ("YES"/"NO").
    pub is_nullable: String,

    /// Default value expression, if any.
    #[serde(default)]
    pub column_default: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_descriptor_round_trip() {
        let descriptor: TableDescriptor =
            serde_json::from_str(r#"{"table_name":"users","table_type":"BASE TABLE"}"#).unwrap();
        assert_eq!(descriptor.table_name, "users");
        assert_eq!(descriptor.table_type, "BASE TABLE");
    }

    #[test]
    fn test_table_info_camel_case() {
        let info: TableInfo = serde_json::from_str(
            r#"{
                "success": true,
                "table": "users",
                "totalRows": 42,
                "fields": [
                    {
                        "column_name": "id",
                        "data_type": "integer",
                        "character_maximum_length": null,
                        "is_nullable": "NO",
                        "column_default": "nextval('users_id_seq'::regclass)"
                    }
                ],
                "fieldCount": 1
            }"#,
        )
        .unwrap();
        assert_eq!(info.table, "users");
        assert_eq!(info.total_rows, 42);
        assert_eq!(info.field_count, 1);
        assert_eq!(info.fields[0].is_nullable, "NO");
    }
}
