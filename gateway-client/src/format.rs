//! 结果输出格式化模块

use common::models::{ColumnDescriptor, Row, TableDescriptor};

/// 将表名列表拼接为单行预览，最多展示 `max` 个
pub fn table_preview(tables: &[TableDescriptor], max: usize) -> String {
    let names: Vec<&str> = tables
        .iter()
        .take(max)
        .map(|t| t.table_name.as_str())
        .collect();
    let mut line = names.join(", ");
    if tables.len() > max {
        line.push_str(", ...");
    }
    line
}

/// 将一行查询结果渲染为 `k=v, k=v` 形式
pub fn format_row(row: &Row) -> String {
    row.iter()
        .map(|(key, value)| format!("{}={}", key, render_value(value)))
        .collect::<Vec<_>>()
        .join(", ")
}

/// 渲染单个字段描述，形如 `name: type`
pub fn format_column(column: &ColumnDescriptor) -> String {
    format!("{}: {}", column.column_name, column.data_type)
}

fn render_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => "NULL".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn descriptor(name: &str) -> TableDescriptor {
        TableDescriptor {
            table_name: name.to_string(),
            table_type: "BASE TABLE".to_string(),
        }
    }

    #[test]
    fn test_table_preview_truncates() {
        let tables = vec![descriptor("a"), descriptor("b"), descriptor("c")];
        assert_eq!(table_preview(&tables, 2), "a, b, ...");
    }

    #[test]
    fn test_table_preview_short_list() {
        let tables = vec![descriptor("users")];
        assert_eq!(table_preview(&tables, 10), "users");
    }

    #[test]
    fn test_format_row() {
        let mut row = Row::new();
        row.insert("id".to_string(), json!(1));
        row.insert("name".to_string(), json!("alice"));
        row.insert("deleted_at".to_string(), json!(null));
        let rendered = format_row(&row);
        assert!(rendered.contains("id=1"));
        assert!(rendered.contains("name=alice"));
        assert!(rendered.contains("deleted_at=NULL"));
    }

    #[test]
    fn test_format_column() {
        let column = ColumnDescriptor {
            column_name: "id".to_string(),
            data_type: "integer".to_string(),
        };
        assert_eq!(format_column(&column), "id: integer");
    }
}
