//! Process-wide configuration instance.
//!
//! Responsibilities:
//! - Lazily create a single shared [`Configuration`] behind an `RwLock`.
//! - Provide closure-based read and write access.
//!
//! Does NOT handle:
//! - Anything a caller can do with an explicitly owned `Configuration`;
//!   prefer passing one by reference where the call graph allows it.
//!
//! Invariants:
//! - The instance is created on first access and lives for the process.
//! - A poisoned lock is recovered; accessors never panic.

use std::sync::{OnceLock, PoisonError, RwLock};

use crate::configuration::Configuration;

static CONFIGURATION: OnceLock<RwLock<Configuration>> = OnceLock::new();

/// The process-wide configuration lock.
pub fn global() -> &'static RwLock<Configuration> {
    CONFIGURATION.get_or_init(|| RwLock::new(Configuration::default()))
}

/// Mutate the process-wide configuration.
///
/// ```rust,ignore
/// tire_config::configure(|config| {
///     config.set_url("http://search.internal:9200");
///     config.set_pretty(false);
/// });
/// ```
pub fn configure<R>(f: impl FnOnce(&mut Configuration) -> R) -> R {
    let mut guard = global().write().unwrap_or_else(PoisonError::into_inner);
    f(&mut *guard)
}

/// Read the process-wide configuration.
pub fn with_config<R>(f: impl FnOnce(&Configuration) -> R) -> R {
    let guard = global().read().unwrap_or_else(PoisonError::into_inner);
    f(&*guard)
}

/// Copy of the process-wide configuration, e.g. to hand to a client.
pub fn snapshot() -> Configuration {
    with_config(Configuration::clone)
}

/// Restore every process-wide setting to its default.
pub fn reset() {
    configure(Configuration::reset);
}
