//! 配置服务
//!
//! 读取 `<config_dir>/humble-heroes-tui/config.json`，
//! 环境变量 `HUMBLE_HEROES_API_URL` 优先于文件中的 `api_url`。

use std::path::PathBuf;

use humble_heroes_client::ClientConfig;
use serde::Deserialize;
use thiserror::Error;

use crate::i18n::Language;
use crate::view::theme::Theme;

/// 覆盖 API 地址的环境变量
pub const API_URL_ENV: &str = "HUMBLE_HEROES_API_URL";

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_url: String,
    pub request_timeout_secs: u64,
    pub connect_timeout_secs: u64,
    pub max_retries: u32,
    pub theme: Theme,
    /// BCP 47 语言代码，如 `en-US`、`zh-CN`
    pub language: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let client = ClientConfig::default();
        Self {
            api_url: client.endpoint,
            request_timeout_secs: client.request_timeout_secs,
            connect_timeout_secs: client.connect_timeout_secs,
            max_retries: client.max_retries,
            theme: Theme::Dark,
            language: Language::EnUs.code().to_string(),
        }
    }
}

impl AppConfig {
    /// 解析 JSON 配置，缺失字段取默认值
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    /// 用环境变量覆盖 API 地址（空白值忽略）
    #[must_use]
    pub fn with_env_override(mut self, api_url: Option<String>) -> Self {
        if let Some(url) = api_url.map(|u| u.trim().to_string()) {
            if !url.is_empty() {
                self.api_url = url;
            }
        }
        self
    }

    /// 界面语言；无法识别时回退到英文
    pub fn language(&self) -> Language {
        Language::from_code(&self.language).unwrap_or_default()
    }

    /// 转换为 HTTP 客户端配置
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            endpoint: self.api_url.clone(),
            request_timeout_secs: self.request_timeout_secs,
            connect_timeout_secs: self.connect_timeout_secs,
            max_retries: self.max_retries,
        }
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig, ConfigError>;
}

/// 基于 JSON 文件的配置服务
pub struct JsonConfigService {
    path: PathBuf,
}

impl JsonConfigService {
    /// 使用默认路径
    pub fn new() -> Self {
        let dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("humble-heroes-tui");
        Self::with_path(dir.join("config.json"))
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 加载配置，失败时记录日志并使用默认值，最后应用环境变量
    pub fn load_or_default(&self) -> AppConfig {
        self.load_with_override(std::env::var(API_URL_ENV).ok())
    }

    fn load_with_override(&self, api_url: Option<String>) -> AppConfig {
        let config = self.load().unwrap_or_else(|e| {
            log::warn!("Using default configuration: {e}");
            AppConfig::default()
        });
        config.with_env_override(api_url)
    }
}

impl ConfigService for JsonConfigService {
    fn load(&self) -> Result<AppConfig, ConfigError> {
        // 文件不存在不算错误
        if !self.path.exists() {
            log::debug!("No config file at {}", self.path.display());
            return Ok(AppConfig::default());
        }

        let content = std::fs::read_to_string(&self.path).map_err(|source| ConfigError::Io {
            path: self.path.display().to_string(),
            source,
        })?;
        let config = AppConfig::from_json(&content)?;
        log::info!("Loaded configuration from {}", self.path.display());
        Ok(config)
    }
}
