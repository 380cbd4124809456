use serde::{Deserialize, Serialize};

/// Unified error type for all superhero API operations.
///
/// Each variant names the `operation` that failed (`"list"`, `"create"`, ...)
/// plus variant-specific context. All variants are serializable for structured
/// error reporting.
///
/// # Retryable Errors
///
/// The following variants represent transient failures that may succeed on retry:
/// - [`NetworkError`](Self::NetworkError): network connectivity issues
/// - [`Timeout`](Self::Timeout): request timed out
/// - [`HttpStatus`](Self::HttpStatus) with a 429 or 502–504 status
///
/// Retries only happen when [`ClientConfig::max_retries`](crate::ClientConfig)
/// is non-zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ClientError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    NetworkError {
        /// Operation that produced the error.
        operation: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Operation that produced the error.
        operation: String,
        /// Error details.
        detail: String,
    },

    /// The API answered with a non-2xx status.
    HttpStatus {
        /// Operation that produced the error.
        operation: String,
        /// HTTP status code.
        status: u16,
        /// Response body, if it could be read.
        raw_message: Option<String>,
    },

    /// Failed to parse the API response.
    ParseError {
        /// Operation that produced the error.
        operation: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// Failed to serialize a request body.
    SerializationError {
        /// Operation that produced the error.
        operation: String,
        /// Details about the serialization failure.
        detail: String,
    },

    /// The client configuration is unusable (bad endpoint URL, etc.).
    InvalidConfig {
        /// Name of the offending setting.
        field: String,
        /// Description of what's wrong.
        detail: String,
    },
}

impl ClientError {
    /// 是否为预期行为（用户输入、资源不存在等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::HttpStatus { status, .. } => (400..500).contains(status),
            Self::InvalidConfig { .. } => true,
            _ => false,
        }
    }

    /// Whether retrying the same request could succeed.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            Self::NetworkError { .. } | Self::Timeout { .. } => true,
            Self::HttpStatus { status, .. } => *status == 429 || (502..=504).contains(status),
            _ => false,
        }
    }
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { operation, detail } => {
                write!(f, "[{operation}] Network error: {detail}")
            }
            Self::Timeout { operation, detail } => {
                write!(f, "[{operation}] Request timeout: {detail}")
            }
            Self::HttpStatus {
                operation,
                status,
                raw_message,
            } => {
                if let Some(msg) = raw_message.as_deref().filter(|m| !m.is_empty()) {
                    write!(f, "[{operation}] HTTP {status}: {msg}")
                } else {
                    write!(f, "[{operation}] HTTP {status}")
                }
            }
            Self::ParseError { operation, detail } => {
                write!(f, "[{operation}] Parse error: {detail}")
            }
            Self::SerializationError { operation, detail } => {
                write!(f, "[{operation}] Serialization error: {detail}")
            }
            Self::InvalidConfig { field, detail } => {
                write!(f, "Invalid configuration '{field}': {detail}")
            }
        }
    }
}

impl std::error::Error for ClientError {}

/// Convenience type alias for `Result<T, ClientError>`.
pub type Result<T> = std::result::Result<T, ClientError>;
