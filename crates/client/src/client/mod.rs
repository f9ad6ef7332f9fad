//! Configuration-driven search client.
//!
//! This module provides [`SearchClient`], which sends requests to the URL
//! and index named by a [`tire_config::Configuration`] through the built-in
//! REST transport.
//!
//! # Submodules
//! - [`builder`]: Client construction from configuration
//! - [`curl`]: curl reproductions written to the request log
//!
//! # What this module does NOT handle:
//! - Retrying rate-limited requests (delegated to [`crate::transport`])
//! - Building search or index request bodies
//!
//! # Invariants
//! - When a logger is configured, every request is logged before it is sent
//!   and every response after it is received; log failures never fail a request
//! - With `pretty` enabled every URL carries `pretty=true`

pub mod builder;
pub mod curl;

use std::time::Instant;

use reqwest::Method;
use tire_config::{Configuration, Logger};

use crate::error::Result;
use crate::response::Response;
use crate::transport::RestClient;

/// Search service client bound to one base URL and optional index.
///
/// ```rust,ignore
/// tire_config::configure(|c| c.set_index_url("http://localhost:9200/articles"));
///
/// let client = SearchClient::from_global()?;
/// let response = client.get("_search", Some(r#"{"query":{"match_all":{}}}"#)).await?;
/// ```
#[derive(Debug, Clone)]
pub struct SearchClient {
    pub(crate) transport: RestClient,
    pub(crate) url: String,
    pub(crate) index_name: Option<String>,
    pub(crate) pretty: bool,
    pub(crate) logger: Option<Logger>,
}

impl SearchClient {
    /// Create a new client builder.
    pub fn builder() -> builder::SearchClientBuilder {
        builder::SearchClientBuilder::new()
    }

    /// Build a client from `config` with default transport settings.
    pub fn from_config(config: &Configuration) -> Result<Self> {
        Self::builder().from_config(config).build()
    }

    /// Build a client from the process-wide configuration.
    pub fn from_global() -> Result<Self> {
        Self::from_config(&tire_config::snapshot())
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn index_name(&self) -> Option<&str> {
        self.index_name.as_deref()
    }

    pub fn pretty(&self) -> bool {
        self.pretty
    }

    pub fn logger(&self) -> Option<&Logger> {
        self.logger.as_ref()
    }

    /// URL for `path` relative to the configured index (or the base URL
    /// without one).
    pub fn endpoint(&self, path: &str) -> String {
        let base = match &self.index_name {
            Some(index) => format!("{}/{}", self.url, index),
            None => self.url.clone(),
        };
        self.join(base, path)
    }

    /// URL for `path` relative to the base URL, ignoring the index.
    pub fn root_endpoint(&self, path: &str) -> String {
        self.join(self.url.clone(), path)
    }

    fn join(&self, mut base: String, path: &str) -> String {
        let path = path.trim_start_matches('/');
        if !path.is_empty() {
            base.push('/');
            base.push_str(path);
        }
        if self.pretty {
            base.push(if path.contains('?') { '&' } else { '?' });
            base.push_str("pretty=true");
        }
        base
    }

    /// Send `method` to `path` (relative to the index) and log the exchange.
    pub async fn request(&self, method: Method, path: &str, body: Option<&str>) -> Result<Response> {
        let url = self.endpoint(path);
        self.send(method, path, &url, body).await
    }

    /// Send `method` to `path` relative to the base URL.
    pub async fn request_root(
        &self,
        method: Method,
        path: &str,
        body: Option<&str>,
    ) -> Result<Response> {
        let url = self.root_endpoint(path);
        self.send(method, path, &url, body).await
    }

    async fn send(&self, method: Method, path: &str, url: &str, body: Option<&str>) -> Result<Response> {
        if let Some(logger) = &self.logger {
            let curl = curl::to_curl(&method, url, body);
            let _ = logger.log_request(&endpoint_name(&method, path), self.index_name.as_deref(), &curl);
        }

        let started = Instant::now();
        let response = self.transport.request(method, url, body).await?;
        let took = started.elapsed().as_millis() as u64;

        tracing::debug!(url = %url, status = response.status, took_ms = took, "received response");
        if let Some(logger) = &self.logger {
            let _ = logger.log_response(response.status, Some(took), &response.body);
        }

        Ok(response)
    }

    pub async fn get(&self, path: &str, body: Option<&str>) -> Result<Response> {
        self.request(Method::GET, path, body).await
    }

    pub async fn post(&self, path: &str, body: &str) -> Result<Response> {
        self.request(Method::POST, path, Some(body)).await
    }

    pub async fn put(&self, path: &str, body: &str) -> Result<Response> {
        self.request(Method::PUT, path, Some(body)).await
    }

    pub async fn delete(&self, path: &str) -> Result<Response> {
        self.request(Method::DELETE, path, None).await
    }

    pub async fn head(&self, path: &str) -> Result<Response> {
        self.request(Method::HEAD, path, None).await
    }

    /// Whether the configured index exists (`HEAD /index`).
    pub async fn index_exists(&self) -> Result<bool> {
        Ok(self.head("").await?.is_success())
    }
}

/// Name logged for a request: the first `_action` segment of the path, or
/// the HTTP method when the path has none.
fn endpoint_name(method: &Method, path: &str) -> String {
    path.split(['/', '?'])
        .find(|segment| segment.starts_with('_'))
        .map(str::to_string)
        .unwrap_or_else(|| method.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(index: Option<&str>, pretty: bool) -> SearchClient {
        let mut builder = SearchClient::builder()
            .url("http://localhost:9200/")
            .pretty(pretty);
        if let Some(index) = index {
            builder = builder.index_name(index);
        }
        builder.build().unwrap()
    }

    #[test]
    fn test_endpoint_with_index() {
        let client = client(Some("articles"), false);
        assert_eq!(client.endpoint("_search"), "http://localhost:9200/articles/_search");
        assert_eq!(client.endpoint("/_search"), "http://localhost:9200/articles/_search");
        assert_eq!(client.endpoint(""), "http://localhost:9200/articles");
    }

    #[test]
    fn test_endpoint_without_index() {
        let client = client(None, false);
        assert_eq!(client.endpoint("_cluster/health"), "http://localhost:9200/_cluster/health");
    }

    #[test]
    fn test_root_endpoint_ignores_index() {
        let client = client(Some("articles"), false);
        assert_eq!(client.root_endpoint("_aliases"), "http://localhost:9200/_aliases");
    }

    #[test]
    fn test_pretty_appends_query_parameter() {
        let client = client(Some("articles"), true);
        assert_eq!(
            client.endpoint("_search"),
            "http://localhost:9200/articles/_search?pretty=true"
        );
        assert_eq!(
            client.endpoint("_search?size=5"),
            "http://localhost:9200/articles/_search?size=5&pretty=true"
        );
    }

    #[test]
    fn test_endpoint_name() {
        assert_eq!(endpoint_name(&Method::GET, "_search"), "_search");
        assert_eq!(endpoint_name(&Method::POST, "article/1/_update"), "_update");
        assert_eq!(endpoint_name(&Method::PUT, "article/1"), "PUT");
        assert_eq!(endpoint_name(&Method::GET, "_search?q=title:one"), "_search");
    }
}
