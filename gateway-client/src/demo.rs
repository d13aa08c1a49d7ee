//! 演示流程模块
//!
//! 固定顺序执行：健康检查 → 列出数据表 → 执行查询 → 获取表结构。

use serde_json::json;
use tracing::error;

use common::config::GatewayConfig;
use common::errors::{AppError, AppResult};

use crate::client::GatewayClient;
use crate::format;

/// 演示查询：读取 information_schema 中 public 模式下的前 5 张表
const DEMO_QUERY: &str = "SELECT table_name, table_type FROM information_schema.tables \
     WHERE table_schema = $1 LIMIT 5";

/// 按固定顺序执行演示流程
pub async fn run_demo(config: &GatewayConfig) -> AppResult<()> {
    let client = GatewayClient::new(config)?;

    // 1. 健康检查
    println!("\n1. Health check...");
    let health = client.health_check().await?;
    println!("   Status: {}", health.status);
    println!("   Database: {}", health.database);

    // 2. 列出数据表
    println!("\n2. List all tables...");
    let tables = client.list_tables().await?;
    println!("   Found {} tables", tables.len());
    if !tables.is_empty() {
        println!("   {}", format::table_preview(&tables, 10));
    }

    // 3. 执行查询
    println!("\n3. Query database (SELECT)...");
    let rows = client.query(DEMO_QUERY, vec![json!("public")]).await?;
    println!("   Query successful, {} rows", rows.len());
    for row in &rows {
        println!("   - {}", format::format_row(row));
    }

    // 4. 获取第一个表的结构（表列表为空时跳过）
    if let Some(first) = tables.first() {
        println!("\n4. Get schema for table: {}", first.table_name);
        let schema = client.get_schema(&first.table_name).await?;
        println!("   {} columns", schema.len());
        for column in &schema {
            println!("   - {}", format::format_column(column));
        }
    }

    Ok(())
}

/// 根据执行结果计算进程退出码（任何失败均为 1）
pub fn exit_code(result: &AppResult<()>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(_) => 1,
    }
}

/// 打印失败原因与排查提示
pub fn report_error(err: &AppError) {
    match err {
        AppError::Connection(detail) => {
            error!(detail = %detail, "cannot reach gateway");
            eprintln!("\nError: cannot connect to the gateway!");
            eprintln!("The gateway service does not appear to be running.");
            eprintln!("Start it first, e.g.: docker compose up -d");
        }
        AppError::Http { status, body } => {
            error!(status = %status, "gateway returned an error status");
            eprintln!("\nHTTP error");
            eprintln!("   Status: {}", status);
            eprintln!("   Response: {}", body);
        }
        other => {
            error!(error = %other, "request failed");
            eprintln!("\nError: {}", other);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_exit_code_success() {
        assert_eq!(exit_code(&Ok(())), 0);
    }

    #[test]
    fn test_exit_code_failure_for_every_variant() {
        let errors = vec![
            AppError::Connection("refused".to_string()),
            AppError::Timeout("deadline exceeded".to_string()),
            AppError::Http {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                body: r#"{"error":"boom"}"#.to_string(),
            },
            AppError::InvalidResponse("no data".to_string()),
            AppError::Validation("SQL statement is required".to_string()),
        ];
        for err in errors {
            assert_eq!(exit_code(&Err(err)), 1);
        }
    }

    #[tokio::test]
    async fn test_exit_code_failure_for_transport_error() {
        // 非法 URL 在发送时产生 reqwest 错误
        let err = reqwest::Client::new()
            .get("http://")
            .send()
            .await
            .map(|_| ())
            .unwrap_err();
        assert_eq!(exit_code(&Err(AppError::Request(err))), 1);
    }
}
