//! The configuration store.
//!
//! Responsibilities:
//! - Hold the connection URL, index name, client adapter, logger, pretty flag
//!   and document wrapper.
//! - Resolve the URL from `ELASTICSEARCH_URL` or the built-in default while it
//!   has not been set explicitly.
//! - Normalize URL-like values and split composite index URLs.
//! - Reset one or all settings to their defaults.
//!
//! Does NOT handle:
//! - Process-wide access and locking (see `global.rs`).
//! - Sending requests (see client crate).
//!
//! Invariants:
//! - `url` and `index_name` never end with `/`.
//! - The environment is consulted at most once between an explicit `set_url`
//!   or reset and the next one; the resolved value is cached.
//! - Accessors never fail and perform no validation beyond normalization.

use std::sync::OnceLock;

use crate::constants::{DEFAULT_PRETTY, DEFAULT_URL, URL_ENV_VAR};
use crate::env::env_var_or_none;
use crate::logger::{LogDevice, Logger, LoggerOptions};
use crate::normalize::{IndexUrlParts, split_index_url, strip_trailing_slashes};
use crate::types::{ClientAdapter, DocumentWrapper, Setting};

#[cfg(test)]
mod tests;

/// Settings shared by every component that talks to the search service.
///
/// Create one with [`Configuration::new`] and pass it by reference, or use the
/// process-wide instance in [`crate::global`].
#[derive(Debug, Clone)]
pub struct Configuration {
    url: OnceLock<String>,
    index_name: Option<String>,
    client: ClientAdapter,
    logger: Option<Logger>,
    pretty: bool,
    wrapper: Option<DocumentWrapper>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            url: OnceLock::new(),
            index_name: None,
            client: ClientAdapter::default(),
            logger: None,
            pretty: DEFAULT_PRETTY,
            wrapper: None,
        }
    }
}

impl Configuration {
    /// Create a configuration with every setting at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Service base URL.
    ///
    /// Falls back to `ELASTICSEARCH_URL` and then to `http://localhost:9200`
    /// when no URL has been set. The fallback is resolved on the first read
    /// and cached until the next `set_url` or reset.
    pub fn url(&self) -> &str {
        self.url.get_or_init(resolve_url)
    }

    /// Set the service base URL. Trailing slashes are stripped.
    pub fn set_url(&mut self, url: impl AsRef<str>) {
        let url = strip_trailing_slashes(url.as_ref()).to_string();
        tracing::debug!(url = %url, "configured url");
        self.url = OnceLock::from(url);
    }

    /// Target index name, `None` unless set.
    pub fn index_name(&self) -> Option<&str> {
        self.index_name.as_deref()
    }

    /// Set the target index name. Trailing slashes are stripped; a name that
    /// is empty afterwards clears the setting.
    pub fn set_index_name(&mut self, name: impl AsRef<str>) {
        let name = strip_trailing_slashes(name.as_ref());
        tracing::debug!(index_name = %name, "configured index name");
        self.index_name = (!name.is_empty()).then(|| name.to_string());
    }

    /// Composite `url/index_name`, or `None` without an index name.
    pub fn index_url(&self) -> Option<String> {
        self.index_name
            .as_deref()
            .map(|name| format!("{}/{}", self.url(), name))
    }

    /// Set URL and index name together from a composite index URL.
    ///
    /// The last path segment becomes the index name and everything before it
    /// the URL:
    /// - an empty (or slash-only) value clears the index name and keeps the URL;
    /// - an absolute URL without a path sets the URL and clears the index name;
    /// - a value without any `/` sets only the index name.
    pub fn set_index_url(&mut self, value: impl AsRef<str>) {
        match split_index_url(value.as_ref()) {
            IndexUrlParts::Empty => {
                tracing::debug!("empty index url, clearing index name");
                self.index_name = None;
            }
            IndexUrlParts::BaseOnly(url) => {
                self.set_url(url);
                self.index_name = None;
            }
            IndexUrlParts::IndexOnly(name) => self.set_index_name(name),
            IndexUrlParts::Both { url, index_name } => {
                self.set_url(url);
                self.set_index_name(index_name);
            }
        }
    }

    /// HTTP client adapter, the built-in REST adapter by default.
    pub fn client(&self) -> &ClientAdapter {
        &self.client
    }

    /// Set the HTTP client adapter. Stored as given.
    pub fn set_client(&mut self, client: ClientAdapter) {
        tracing::debug!(client = %client, "configured client adapter");
        self.client = client;
    }

    /// Request/response logger, `None` unless set.
    pub fn logger(&self) -> Option<&Logger> {
        self.logger.as_ref()
    }

    /// Wrap `device` in a [`Logger`], store it and return it.
    pub fn set_logger(&mut self, device: impl Into<LogDevice>, options: LoggerOptions) -> &Logger {
        let logger = Logger::new(device, options);
        tracing::debug!(device = %logger.device(), level = %logger.level(), "configured logger");
        self.logger.insert(logger)
    }

    /// Whether pretty-printed responses are requested. Defaults to `true`.
    pub fn pretty(&self) -> bool {
        self.pretty
    }

    pub fn set_pretty(&mut self, pretty: bool) {
        self.pretty = pretty;
    }

    /// Result document wrapper override, `None` unless set.
    pub fn wrapper(&self) -> Option<&DocumentWrapper> {
        self.wrapper.as_ref()
    }

    pub fn set_wrapper(&mut self, wrapper: DocumentWrapper) {
        self.wrapper = Some(wrapper);
    }

    /// Restore every setting to its default.
    ///
    /// The next `url()` read consults the environment again.
    pub fn reset(&mut self) {
        tracing::debug!("reset all settings");
        *self = Self::default();
    }

    /// Restore a single setting to its default, leaving the others untouched.
    pub fn reset_setting(&mut self, setting: Setting) {
        tracing::debug!(setting = %setting, "reset setting");
        match setting {
            Setting::Url => self.url = OnceLock::new(),
            Setting::IndexName => self.index_name = None,
            Setting::Client => self.client = ClientAdapter::default(),
            Setting::Logger => self.logger = None,
            Setting::Pretty => self.pretty = DEFAULT_PRETTY,
            Setting::Wrapper => self.wrapper = None,
        }
    }
}

fn resolve_url() -> String {
    match env_var_or_none(URL_ENV_VAR) {
        Some(url) => {
            tracing::debug!(var = URL_ENV_VAR, url = %url, "using url from environment");
            strip_trailing_slashes(&url).to_string()
        }
        None => DEFAULT_URL.to_string(),
    }
}
