//! Client builder for constructing [`SearchClient`] instances.
//!
//! This module is responsible for:
//! - Copying connection settings out of a [`Configuration`]
//! - Validating the base URL and the selected client adapter
//! - Configuring the underlying REST transport (timeouts, retries)
//!
//! # What this module does NOT handle:
//! - Actual requests (handled by [`SearchClient`] methods in `mod.rs`)
//!
//! # Invariants
//! - The base URL is an absolute http(s) URL with a host and no trailing slash
//! - Only [`ClientAdapter::Rest`] can be built; custom adapters are rejected

use std::time::Duration;

use tire_config::constants::{DEFAULT_PRETTY, DEFAULT_TIMEOUT_SECS, DEFAULT_URL};
use tire_config::{ClientAdapter, Configuration, Logger};

use crate::client::SearchClient;
use crate::error::{ClientError, Result};
use crate::transport::{RestClient, RetryPolicy};

/// Builder for creating a new [`SearchClient`].
///
/// # Example
///
/// ```rust,ignore
/// use tire_client::SearchClient;
///
/// let client = SearchClient::builder()
///     .from_config(&tire_config::snapshot())
///     .timeout(Duration::from_secs(10))
///     .build()?;
/// ```
#[derive(Debug)]
pub struct SearchClientBuilder {
    url: String,
    index_name: Option<String>,
    adapter: ClientAdapter,
    pretty: bool,
    logger: Option<Logger>,
    timeout: Duration,
    retry: RetryPolicy,
}

impl Default for SearchClientBuilder {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            index_name: None,
            adapter: ClientAdapter::Rest,
            pretty: DEFAULT_PRETTY,
            logger: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            retry: RetryPolicy::default(),
        }
    }
}

impl SearchClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take url, index name, adapter, pretty flag and logger from `config`.
    pub fn from_config(mut self, config: &Configuration) -> Self {
        self.url = config.url().to_string();
        self.index_name = config.index_name().map(str::to_string);
        self.adapter = config.client().clone();
        self.pretty = config.pretty();
        self.logger = config.logger().cloned();
        self
    }

    /// Set the base URL. Trailing slashes are removed.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn index_name(mut self, index_name: impl Into<String>) -> Self {
        self.index_name = Some(index_name.into());
        self
    }

    pub fn adapter(mut self, adapter: ClientAdapter) -> Self {
        self.adapter = adapter;
        self
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Log every request and response to `logger`.
    pub fn logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Set the request timeout. Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the maximum number of retries for rate-limited requests.
    ///
    /// Default is 3 retries with exponential backoff (1s, 2s, 4s delays).
    pub fn max_retries(mut self, retries: usize) -> Self {
        self.retry.max_retries = retries;
        self
    }

    /// Set the delay before the first retry.
    pub fn retry_backoff(mut self, backoff: Duration) -> Self {
        self.retry.base_backoff = backoff;
        self
    }

    /// Build the [`SearchClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::UnsupportedAdapter`] for custom adapters,
    /// [`ClientError::InvalidUrl`] if the URL is not an absolute http(s) URL,
    /// and `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<SearchClient> {
        if let ClientAdapter::Custom(_) = &self.adapter {
            return Err(ClientError::UnsupportedAdapter(self.adapter.to_string()));
        }

        let url = validate_and_normalize_url(&self.url)?;
        let transport = RestClient::with_options(self.timeout, self.retry)?;

        Ok(SearchClient {
            transport,
            url,
            index_name: self.index_name,
            pretty: self.pretty,
            logger: self.logger,
        })
    }
}

/// Validates and normalizes a base URL string.
///
/// Validation rules:
/// - Trim surrounding whitespace
/// - Parse as an absolute URL with an http or https scheme and a host
/// - Normalize by stripping trailing slashes
fn validate_and_normalize_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ClientError::InvalidUrl("url is required".to_string()));
    }

    let parsed = url::Url::parse(trimmed).map_err(|e| {
        ClientError::InvalidUrl(format!(
            "{trimmed}: must be an absolute http(s) URL with a host (e.g. http://localhost:9200): {e}"
        ))
    })?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(ClientError::InvalidUrl(format!(
            "{trimmed}: scheme must be http or https, got: {scheme}"
        )));
    }

    if parsed.host_str().is_none() {
        return Err(ClientError::InvalidUrl(format!("{trimmed}: host is required")));
    }

    Ok(tire_config::strip_trailing_slashes(parsed.as_str()).to_string())
}
