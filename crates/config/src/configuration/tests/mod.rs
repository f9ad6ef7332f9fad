//! Tests for the configuration store.
//!
//! Responsibilities:
//! - Test defaults, setters and normalization of every setting.
//! - Test environment fallback and its precedence against explicit values.
//! - Test full and per-setting reset.
//!
//! Invariants:
//! - Tests touching `ELASTICSEARCH_URL` use `serial_test` and `env_lock()`
//!   and scope the variable with `temp_env`.

use std::sync::Mutex;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}
