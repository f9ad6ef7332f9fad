//! Built-in REST transport.
//!
//! This module is responsible for:
//! - Sending GET/POST/PUT/DELETE/HEAD requests with an optional string body
//! - Retrying rate-limited requests (see [`retry`])
//! - Turning every HTTP exchange into a [`Response`]
//!
//! # What this module does NOT handle:
//! - Composing URLs from configuration (see [`crate::client`])
//! - Request/response logging (see [`crate::client`])

mod retry;

use std::time::Duration;

use reqwest::Method;
use reqwest::header::CONTENT_TYPE;

use crate::error::Result;
use crate::response::Response;
use tire_config::constants::{DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT_SECS};

pub use retry::{RetryPolicy, send_request_with_retry};

/// REST adapter backed by `reqwest`.
///
/// Corresponds to [`tire_config::ClientAdapter::Rest`].
#[derive(Debug, Clone)]
pub struct RestClient {
    http: reqwest::Client,
    retry: RetryPolicy,
}

impl RestClient {
    /// Create a client with the default timeout and retry policy.
    pub fn new() -> Result<Self> {
        Self::with_options(Duration::from_secs(DEFAULT_TIMEOUT_SECS), RetryPolicy::default())
    }

    /// Create a client with an explicit timeout and retry policy.
    pub fn with_options(timeout: Duration, retry: RetryPolicy) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS))
            .build()?;
        Ok(Self::from_http(http, retry))
    }

    /// Wrap an existing `reqwest::Client`.
    pub fn from_http(http: reqwest::Client, retry: RetryPolicy) -> Self {
        Self { http, retry }
    }

    /// Send `method` to `url` with an optional JSON body.
    pub async fn request(&self, method: Method, url: &str, body: Option<&str>) -> Result<Response> {
        let mut builder = self.http.request(method.clone(), url);
        if let Some(body) = body {
            builder = builder
                .header(CONTENT_TYPE, "application/json")
                .body(body.to_string());
        }

        tracing::debug!(method = %method, url = %url, "sending request");
        let response = send_request_with_retry(builder, self.retry).await?;
        Response::from_reqwest(response).await
    }

    pub async fn get(&self, url: &str, body: Option<&str>) -> Result<Response> {
        self.request(Method::GET, url, body).await
    }

    pub async fn post(&self, url: &str, body: &str) -> Result<Response> {
        self.request(Method::POST, url, Some(body)).await
    }

    pub async fn put(&self, url: &str, body: &str) -> Result<Response> {
        self.request(Method::PUT, url, Some(body)).await
    }

    pub async fn delete(&self, url: &str) -> Result<Response> {
        self.request(Method::DELETE, url, None).await
    }

    pub async fn head(&self, url: &str) -> Result<Response> {
        self.request(Method::HEAD, url, None).await
    }
}
