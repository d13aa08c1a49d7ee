//! 网关客户端模块

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use validator::Validate;

use common::config::GatewayConfig;
use common::errors::{AppError, AppResult};
use common::models::{
    ColumnDescriptor, HealthStatus, QueryRequest, QueryRows, Row, TableDescriptor, TableInfo,
};
use common::response::{ApiEnvelope, Pagination};

/// 请求超时时间（秒）
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// API Key 请求头
const API_KEY_HEADER: &str = "X-API-Key";

/// 数据库网关客户端
///
/// 持有复用的 HTTP 会话，默认携带 JSON Content-Type；
/// 配置了 API Key 时每个请求附加 `X-API-Key` 头。
pub struct GatewayClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl GatewayClient {
    /// 根据配置创建客户端
    pub fn new(config: &GatewayConfig) -> AppResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(key) = &config.api_key {
            let value = HeaderValue::from_str(key)
                .map_err(|e| AppError::Validation(format!("invalid API key: {}", e)))?;
            headers.insert(API_KEY_HEADER, value);
        }

        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .default_headers(headers)
            .build()
            .map_err(AppError::Request)?;

        Ok(Self {
            base_url: config.api_base(),
            http_client,
        })
    }

    /// 网关健康检查
    ///
    /// 健康响应没有 `data` 包装，整个响应体即为载荷。
    pub async fn health_check(&self) -> AppResult<HealthStatus> {
        let url = format!("{}/health", self.base_url);
        let body = self.get_text(&url).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// 列出所有数据表
    pub async fn list_tables(&self) -> AppResult<Vec<TableDescriptor>> {
        let url = format!("{}/tables", self.base_url);
        let body = self.get_text(&url).await?;
        parse_envelope::<Vec<TableDescriptor>>(&body)?.into_data()
    }

    /// 执行参数化 SELECT 查询
    pub async fn query(
        &self,
        sql: &str,
        params: Vec<serde_json::Value>,
    ) -> AppResult<QueryRows> {
        let request = QueryRequest::new(sql, params);
        request.validate()?;

        let url = format!("{}/query", self.base_url);
        let response = self
            .http_client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(AppError::from_reqwest)?;
        let body = check_status(response).await?;
        parse_envelope::<QueryRows>(&body)?.into_data()
    }

    /// 获取表结构（字段名与类型）
    pub async fn get_schema(&self, table_name: &str) -> AppResult<Vec<ColumnDescriptor>> {
        let url = format!("{}/schema/{}", self.base_url, table_name);
        let body = self.get_text(&url).await?;
        parse_envelope::<Vec<ColumnDescriptor>>(&body)?.into_data()
    }

    /// 获取表详情（总行数与完整字段信息）
    ///
    /// 该响应的字段位于顶层，不经过 `data` 包装。
    pub async fn table_info(&self, table_name: &str) -> AppResult<TableInfo> {
        let url = format!("{}/table/{}/info", self.base_url, table_name);
        let body = self.get_text(&url).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// 分页读取表数据
    pub async fn table_data(
        &self,
        table_name: &str,
        page: u32,
        limit: u32,
    ) -> AppResult<(QueryRows, Option<Pagination>)> {
        let url = format!("{}/table/{}/data", self.base_url, table_name);
        let response = self
            .http_client
            .get(&url)
            .query(&[("page", page), ("limit", limit)])
            .send()
            .await
            .map_err(AppError::from_reqwest)?;
        let body = check_status(response).await?;

        let mut envelope = parse_envelope::<QueryRows>(&body)?;
        let pagination = envelope.pagination.take();
        let rows = envelope.into_data()?;
        Ok((rows, pagination))
    }

    /// 按字段值读取单行数据
    pub async fn table_row(&self, table_name: &str, field: &str, id: &str) -> AppResult<Row> {
        let url = format!("{}/table/{}/row", self.base_url, table_name);
        let response = self
            .http_client
            .get(&url)
            .query(&[("field", field), ("id", id)])
            .send()
            .await
            .map_err(AppError::from_reqwest)?;
        let body = check_status(response).await?;
        parse_envelope::<Row>(&body)?.into_data()
    }

    /// 发送 GET 请求并返回校验过状态码的响应体
    async fn get_text(&self, url: &str) -> AppResult<String> {
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(AppError::from_reqwest)?;
        check_status(response).await
    }
}

/// 校验响应状态码，错误状态连同原始响应体转换为 `AppError::Http`
async fn check_status(response: reqwest::Response) -> AppResult<String> {
    let status = response.status();
    let body = response.text().await.map_err(AppError::from_reqwest)?;
    if status.is_client_error() || status.is_server_error() {
        return Err(AppError::Http { status, body });
    }
    Ok(body)
}

fn parse_envelope<T: DeserializeOwned>(body: &str) -> AppResult<ApiEnvelope<T>> {
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let config = GatewayConfig::new("http://localhost:3000");
        assert!(GatewayClient::new(&config).is_ok());
    }

    #[test]
    fn test_client_creation_with_api_key() {
        let config = GatewayConfig::new("http://localhost:3000").with_api_key("secret");
        assert!(GatewayClient::new(&config).is_ok());
    }

    #[test]
    fn test_client_rejects_non_ascii_api_key() {
        let config = GatewayConfig::new("http://localhost:3000").with_api_key("bad\nkey");
        assert!(matches!(
            GatewayClient::new(&config),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_base_url_from_config() {
        let config = GatewayConfig::new("http://localhost:3000/");
        let client = GatewayClient::new(&config).unwrap();
        assert_eq!(client.base_url, "http://localhost:3000/api/db");
    }
}
