//! Generic HTTP client tools
//!
//! Sending, status classification, logging and body parsing shared by every
//! API call. Callers construct the `RequestBuilder` themselves.

use std::time::Duration;

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::ClientError;
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the response text
    ///
    /// Any non-2xx status becomes [`ClientError::HttpStatus`].
    ///
    /// # Arguments
    /// * `request_builder` - configured request constructor (URL, headers, body)
    /// * `operation` - operation name (for logging and errors)
    /// * `method_name` - request method name (such as "GET", "POST", used for logs)
    /// * `url` - target URL (for logging)
    pub async fn execute_request(
        request_builder: RequestBuilder,
        operation: &str,
        method_name: &str,
        url: &str,
    ) -> Result<String, ClientError> {
        log::debug!("[{operation}] {method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ClientError::Timeout {
                    operation: operation.to_string(),
                    detail: e.to_string(),
                }
            } else {
                ClientError::NetworkError {
                    operation: operation.to_string(),
                    detail: e.to_string(),
                }
            }
        })?;

        let status = response.status();
        log::debug!("[{operation}] Response Status: {}", status.as_u16());

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::warn!(
                "[{operation}] HTTP {} from {url}: {}",
                status.as_u16(),
                truncate_for_log(&body)
            );
            return Err(ClientError::HttpStatus {
                operation: operation.to_string(),
                status: status.as_u16(),
                raw_message: Some(body),
            });
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| ClientError::NetworkError {
                operation: operation.to_string(),
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!(
            "[{operation}] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok(response_text)
    }

    /// Parse JSON response
    pub fn parse_json<T>(response_text: &str, operation: &str) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{operation}] JSON parse failed: {e}");
            log::error!(
                "[{operation}] Raw response: {}",
                truncate_for_log(response_text)
            );
            ClientError::ParseError {
                operation: operation.to_string(),
                detail: e.to_string(),
            }
        })
    }

    /// Performs an HTTP request with retries on transient failures
    ///
    /// # Retry strategy
    /// - Only transient errors are retried (see [`ClientError::is_transient`])
    /// - Exponential backoff: 100ms, 200ms, 400ms, 800ms, ... (maximum 10 seconds)
    /// - `max_retries == 0` sends exactly once
    pub async fn execute_request_with_retry(
        request_builder: RequestBuilder,
        operation: &str,
        method_name: &str,
        url: &str,
        max_retries: u32,
    ) -> Result<String, ClientError> {
        if max_retries == 0 {
            return Self::execute_request(request_builder, operation, method_name, url).await;
        }

        let mut last_error = None;

        for attempt in 0..=max_retries {
            // RequestBuilder can only be sent once
            let Some(req) = request_builder.try_clone() else {
                log::warn!("[{operation}] Cannot clone request, disabling retry");
                return Self::execute_request(request_builder, operation, method_name, url).await;
            };

            match Self::execute_request(req, operation, method_name, url).await {
                Ok(text) => return Ok(text),
                Err(e) if attempt < max_retries && e.is_transient() => {
                    let delay = backoff_delay(attempt);
                    log::warn!(
                        "[{}] Request failed (attempt {}/{}), retrying in {:.1}s: {}",
                        operation,
                        attempt + 1,
                        max_retries,
                        delay.as_secs_f32(),
                        e
                    );
                    tokio::time::sleep(delay).await;
                    last_error = Some(e);
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_error.unwrap_or_else(|| ClientError::NetworkError {
            operation: operation.to_string(),
            detail: "All retries exhausted with no error captured".to_string(),
        }))
    }
}

/// Exponential backoff: 100ms, 200ms, 400ms, ... capped at 10 seconds
fn backoff_delay(attempt: u32) -> Duration {
    let capped_attempt = attempt.min(20);
    let delay_ms = 100_u64.saturating_mul(1_u64 << capped_attempt);
    Duration::from_millis(delay_ms.min(10_000))
}
