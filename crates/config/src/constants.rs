//! Centralized constants for the Tire workspace.
//!
//! Default values used across crates live here so the store and the
//! transport agree on them.

// =============================================================================
// Connection Defaults
// =============================================================================

/// Default search service endpoint used when neither an explicit URL nor
/// `ELASTICSEARCH_URL` is available.
pub const DEFAULT_URL: &str = "http://localhost:9200";

/// Environment variable consulted for the service URL while `url` is unset.
pub const URL_ENV_VAR: &str = "ELASTICSEARCH_URL";

/// Environment variable that disables `.env` loading when set to `1` or `true`.
pub const DOTENV_DISABLED_VAR: &str = "DOTENV_DISABLED";

// =============================================================================
// Output Defaults
// =============================================================================

/// Pretty-printed responses are requested unless turned off.
pub const DEFAULT_PRETTY: bool = true;

/// Level reported by a logger created without an explicit level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Timestamp layout written at the head of every request/response log entry.
pub const LOG_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S:%3f";

// =============================================================================
// Transport Defaults
// =============================================================================

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default maximum number of retries for rate-limited requests.
pub const DEFAULT_MAX_RETRIES: usize = 3;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;
