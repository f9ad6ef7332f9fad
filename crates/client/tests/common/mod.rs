//! Common test utilities for integration tests.
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)

use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use std::time::Duration;

// Re-export commonly used types for test convenience
#[allow(unused_imports)]
pub use tire_client::{ClientError, RestClient, RetryPolicy, SearchClient};
#[allow(unused_imports)]
pub use tire_config::{Configuration, LogDevice, Logger, LoggerOptions};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Retry policy with millisecond backoff so rate-limit tests stay fast.
#[allow(dead_code)]
pub fn fast_retry(max_retries: usize) -> RetryPolicy {
    RetryPolicy {
        max_retries,
        base_backoff: Duration::from_millis(10),
    }
}

/// In-memory log device whose contents can be inspected after the fact.
#[derive(Clone, Default)]
#[allow(dead_code)]
pub struct CapturedLog(Arc<Mutex<Vec<u8>>>);

#[allow(dead_code)]
impl CapturedLog {
    pub fn device(&self) -> LogDevice {
        LogDevice::writer(self.clone())
    }

    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for CapturedLog {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
