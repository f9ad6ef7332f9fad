//! Configuration for the Tire search client.
//!
//! This crate holds the settings shared by every component that talks to the
//! search service: base URL (with `ELASTICSEARCH_URL` fallback), index name,
//! HTTP client adapter, request logger, pretty-print flag and result wrapper.

mod configuration;
pub mod constants;
pub mod env;
mod error;
pub mod global;
mod logger;
mod normalize;
pub mod types;

pub use configuration::Configuration;
pub use error::ConfigError;
pub use global::{configure, reset, snapshot, with_config};
pub use logger::{LogDevice, Logger, LoggerOptions};
pub use normalize::strip_trailing_slashes;
pub use types::{ClientAdapter, DocumentWrapper, Setting};
