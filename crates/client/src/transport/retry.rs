//! Retry helper for HTTP requests with exponential backoff.
//!
//! Requests answered with HTTP 429 (Too Many Requests) are retried after
//! `base_backoff * 2^attempt`; any other response is returned as is.

use std::time::Duration;

use reqwest::{RequestBuilder, Response};
use tracing::debug;

use crate::error::{ClientError, Result};

/// Retry settings for rate-limited requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the first attempt.
    pub max_retries: usize,
    /// Delay before the first retry; doubled for every further retry.
    pub base_backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: tire_config::constants::DEFAULT_MAX_RETRIES,
            base_backoff: Duration::from_secs(1),
        }
    }
}

impl RetryPolicy {
    fn backoff(&self, attempt: usize) -> Duration {
        self.base_backoff
            .saturating_mul(2u32.saturating_pow(attempt.min(16) as u32))
    }
}

/// Send `builder`, retrying HTTP 429 responses according to `policy`.
///
/// # Errors
///
/// Returns `ClientError::MaxRetriesExceeded` when the service keeps answering
/// 429, and `ClientError::HttpError` for transport failures.
pub async fn send_request_with_retry(builder: RequestBuilder, policy: RetryPolicy) -> Result<Response> {
    for attempt in 0..=policy.max_retries {
        let attempt_builder = match builder.try_clone() {
            Some(cloned) => cloned,
            None if attempt == 0 => {
                debug!("Request builder cannot be cloned, single attempt only");
                return builder.send().await.map_err(ClientError::from);
            }
            None => {
                debug!("Cannot clone request builder for retry");
                return Err(ClientError::MaxRetriesExceeded(attempt));
            }
        };

        let response = attempt_builder.send().await?;
        if !ClientError::is_retryable_status(response.status().as_u16()) {
            if attempt > 0 {
                debug!(attempt = attempt + 1, "Request succeeded after retry");
            }
            return Ok(response);
        }

        if attempt < policy.max_retries {
            let backoff = policy.backoff(attempt);
            debug!(
                attempt = attempt + 1,
                max_attempts = policy.max_retries + 1,
                backoff_ms = backoff.as_millis() as u64,
                "Rate limited (HTTP 429), retrying with exponential backoff"
            );
            tokio::time::sleep(backoff).await;
        }
    }

    debug!(
        attempts = policy.max_retries + 1,
        "Max retries exhausted for rate-limited request"
    );
    Err(ClientError::MaxRetriesExceeded(policy.max_retries + 1))
}
