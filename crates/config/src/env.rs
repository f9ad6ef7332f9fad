//! Environment variable access for configuration.
//!
//! Responsibilities:
//! - Read environment variables with empty/whitespace filtering.
//! - Load an optional `.env` file into the process environment.
//!
//! Does NOT handle:
//! - Deciding when the environment is consulted (see `configuration.rs`).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - The `DOTENV_DISABLED` variable is checked before any `.env` file is read.

use std::path::Path;

use crate::constants::DOTENV_DISABLED_VAR;
use crate::error::ConfigError;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            // No trimming needed, return original to avoid allocation
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Check if dotenv loading is disabled via environment variable.
fn dotenv_disabled() -> bool {
    matches!(
        std::env::var(DOTENV_DISABLED_VAR).ok().as_deref(),
        Some("true") | Some("1")
    )
}

/// Check if a dotenv error indicates the file was not found.
fn is_not_found(err: &dotenvy::Error) -> bool {
    matches!(
        err,
        dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
    )
}

/// Load environment variables from a `.env` file if present.
///
/// Call this before the first `url()` read so `ELASTICSEARCH_URL` from the
/// file takes part in the fallback. Missing `.env` files are ignored.
///
/// # Errors
///
/// - `ConfigError::DotenvParse` when the file has invalid syntax.
/// - `ConfigError::DotenvIo` when the file exists but cannot be read.
///
/// SAFETY: Error messages never include raw .env line contents to prevent secret leakage.
pub fn load_dotenv() -> Result<(), ConfigError> {
    if dotenv_disabled() {
        tracing::debug!("dotenv loading disabled via {}", DOTENV_DISABLED_VAR);
        return Ok(());
    }

    match dotenvy::dotenv() {
        Ok(path) => {
            tracing::debug!(path = %path.display(), "loaded .env file");
            Ok(())
        }
        Err(e) => map_dotenv_error(e),
    }
}

/// Like [`load_dotenv`], but reads the file at `path` instead of searching
/// for `.env` from the current directory.
pub fn load_dotenv_from(path: impl AsRef<Path>) -> Result<(), ConfigError> {
    if dotenv_disabled() {
        tracing::debug!("dotenv loading disabled via {}", DOTENV_DISABLED_VAR);
        return Ok(());
    }

    let path = path.as_ref();
    match dotenvy::from_path(path) {
        Ok(()) => {
            tracing::debug!(path = %path.display(), "loaded .env file");
            Ok(())
        }
        Err(e) => map_dotenv_error(e),
    }
}

/// Missing files are not an error; everything else maps to a `ConfigError`.
fn map_dotenv_error(err: dotenvy::Error) -> Result<(), ConfigError> {
    match err {
        e if is_not_found(&e) => Ok(()),
        dotenvy::Error::LineParse(_, idx) => Err(ConfigError::DotenvParse { error_index: idx }),
        dotenvy::Error::Io(io_err) => Err(ConfigError::DotenvIo {
            kind: io_err.kind(),
        }),
        _ => Err(ConfigError::DotenvUnknown),
    }
}
