//! Error types for the search client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during search client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Response body could not be decoded.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The configured client adapter is not one this crate can drive.
    #[error("Unsupported client adapter: {0}")]
    UnsupportedAdapter(String),

    /// Maximum retries exceeded.
    #[error("Maximum retries exceeded ({0} attempts)")]
    MaxRetriesExceeded(usize),
}

impl ClientError {
    /// Check if an HTTP status code is retried by the transport.
    ///
    /// Only 429 (Too Many Requests) is retried; every other status is handed
    /// back to the caller as a response.
    pub fn is_retryable_status(status: u16) -> bool {
        status == 429
    }
}
