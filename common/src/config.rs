//! Client configuration.
//!
//! Loaded once from environment variables at startup, immutable thereafter.

/// Default gateway base URL when `GATEWAY_URL` is not set.
pub const DEFAULT_GATEWAY_URL: &str = "http://localhost:3000";

/// Gateway client configuration.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Base URL of the gateway service.
    pub gateway_url: String,
    /// Optional API key sent as the `X-API-Key` header.
    pub api_key: Option<String>,
}

impl GatewayConfig {
    /// Loads configuration from environment variables.
    ///
    /// - `GATEWAY_URL` (default `http://localhost:3000`)
    /// - `API_KEY` (unset or empty means no key header is sent)
    pub fn from_env() -> Self {
        let gateway_url = std::env::var("GATEWAY_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_GATEWAY_URL.to_string());

        let api_key = std::env::var("API_KEY")
            .ok()
            .filter(|v| !v.trim().is_empty());

        Self {
            gateway_url,
            api_key,
        }
    }

    /// Creates a configuration with an explicit gateway URL and no API key.
    pub fn new(gateway_url: impl Into<String>) -> Self {
        Self {
            gateway_url: gateway_url.into(),
            api_key: None,
        }
    }

    /// Sets the API key.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Returns the base path for database endpoints: `{gateway_url}/api/db`.
    pub fn api_base(&self) -> String {
        format!("{}/api/db", self.gateway_url.trim_end_matches('/'))
    }
}
