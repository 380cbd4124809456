//! Client configuration

use std::time::Duration;

use serde::Deserialize;
use url::Url;

use crate::error::{ClientError, Result};

/// 默认 API 地址
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/api/superheroes";
/// 默认连接超时（秒）
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Settings for [`RestSuperheroApi`](crate::RestSuperheroApi).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Collection endpoint; both GET and POST go here.
    pub endpoint: String,
    /// Whole-request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Retries for transient failures. 0 disables retrying.
    pub max_retries: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            max_retries: 0,
        }
    }
}

impl ClientConfig {
    /// Config pointing at `endpoint` with default timeouts.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }

    /// Parse and check the endpoint. Only `http` and `https` are accepted.
    pub fn endpoint_url(&self) -> Result<Url> {
        let url = Url::parse(self.endpoint.trim()).map_err(|e| ClientError::InvalidConfig {
            field: "endpoint".to_string(),
            detail: e.to_string(),
        })?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(ClientError::InvalidConfig {
                field: "endpoint".to_string(),
                detail: format!("unsupported scheme '{other}'"),
            }),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}
