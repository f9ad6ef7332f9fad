//! REST client for the Tire search library.
//!
//! This crate sends requests to an Elasticsearch-compatible service using
//! the URL, index name, client adapter, pretty flag and logger held in a
//! [`tire_config::Configuration`].

pub mod client;
pub mod error;
mod response;
pub mod transport;

pub use client::SearchClient;
pub use client::builder::SearchClientBuilder;
pub use client::curl::to_curl;
pub use error::{ClientError, Result};
pub use response::Response;
pub use transport::{RestClient, RetryPolicy};
