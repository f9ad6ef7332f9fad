//! Request/response logger attached to the configuration.
//!
//! Responsibilities:
//! - Wrap an output device (stderr, stdout, a file path, or any writer).
//! - Write timestamped request entries (with a curl reproduction) and
//!   response entries (status, timing, commented JSON body).
//!
//! Does NOT handle:
//! - Diagnostic logging of the library itself (that goes through `tracing`).
//! - Building the curl command (see client crate).
//!
//! Invariants:
//! - Constructing a logger never fails; file devices are opened lazily, in
//!   append mode, on the first write.
//! - Clones share the same underlying device.
//! - Every write is flushed immediately.

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

use crate::constants::{DEFAULT_LOG_LEVEL, LOG_TIME_FORMAT};

/// Output device a [`Logger`] writes to.
pub enum LogDevice {
    Stderr,
    Stdout,
    /// Path of a file opened in append mode (created when missing).
    File(PathBuf),
    /// Any caller-provided writer.
    Writer(Box<dyn Write + Send>),
}

impl LogDevice {
    /// Wrap an arbitrary writer.
    pub fn writer(writer: impl Write + Send + 'static) -> Self {
        Self::Writer(Box::new(writer))
    }

    fn describe(&self) -> String {
        match self {
            Self::Stderr => "stderr".to_string(),
            Self::Stdout => "stdout".to_string(),
            Self::File(path) => path.display().to_string(),
            Self::Writer(_) => "writer".to_string(),
        }
    }
}

impl fmt::Debug for LogDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LogDevice({})", self.describe())
    }
}

impl From<PathBuf> for LogDevice {
    fn from(path: PathBuf) -> Self {
        Self::File(path)
    }
}

impl From<&str> for LogDevice {
    fn from(path: &str) -> Self {
        Self::File(PathBuf::from(path))
    }
}

impl From<String> for LogDevice {
    fn from(path: String) -> Self {
        Self::File(PathBuf::from(path))
    }
}

/// Options accepted alongside the device when creating a logger.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoggerOptions {
    /// Log level reported by [`Logger::level`]; defaults to `"info"`.
    pub level: Option<String>,
}

impl LoggerOptions {
    pub fn with_level(level: impl Into<String>) -> Self {
        Self {
            level: Some(level.into()),
        }
    }
}

enum Sink {
    Stderr,
    Stdout,
    Unopened(PathBuf),
    File(File),
    Writer(Box<dyn Write + Send>),
}

impl Sink {
    fn write_all(&mut self, message: &str) -> io::Result<()> {
        match self {
            Sink::Stderr => write_flushed(&mut io::stderr().lock(), message),
            Sink::Stdout => write_flushed(&mut io::stdout().lock(), message),
            Sink::File(file) => write_flushed(file, message),
            Sink::Writer(writer) => write_flushed(writer, message),
            Sink::Unopened(path) => {
                let mut file = OpenOptions::new().create(true).append(true).open(&*path)?;
                write_flushed(&mut file, message)?;
                *self = Sink::File(file);
                Ok(())
            }
        }
    }
}

fn write_flushed(writer: &mut impl Write, message: &str) -> io::Result<()> {
    writer.write_all(message.as_bytes())?;
    writer.flush()
}

/// Logger wrapping an output device.
#[derive(Clone)]
pub struct Logger {
    sink: Arc<Mutex<Sink>>,
    device: String,
    options: LoggerOptions,
}

impl Logger {
    /// Create a logger around `device`.
    pub fn new(device: impl Into<LogDevice>, options: LoggerOptions) -> Self {
        let device = device.into();
        let description = device.describe();
        let sink = match device {
            LogDevice::Stderr => Sink::Stderr,
            LogDevice::Stdout => Sink::Stdout,
            LogDevice::File(path) => Sink::Unopened(path),
            LogDevice::Writer(writer) => Sink::Writer(writer),
        };

        Self {
            sink: Arc::new(Mutex::new(sink)),
            device: description,
            options,
        }
    }

    /// Configured level, `"info"` unless set through [`LoggerOptions`].
    pub fn level(&self) -> &str {
        self.options.level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }

    /// Human-readable name of the device (`stderr`, a file path, ...).
    pub fn device(&self) -> &str {
        &self.device
    }

    /// Write `message` verbatim to the device.
    pub fn write(&self, message: &str) -> io::Result<()> {
        let mut sink = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
        sink.write_all(message).inspect_err(|e| {
            tracing::warn!(device = %self.device, error = %e, "failed to write log entry");
        })
    }

    /// Log an outgoing request.
    ///
    /// `endpoint` names the API action (e.g. `_search`), `params` is an
    /// optional free-form description such as the target indices.
    pub fn log_request(&self, endpoint: &str, params: Option<&str>, curl: &str) -> io::Result<()> {
        self.write(&format_request(&timestamp(), endpoint, params, curl))
    }

    /// Log a received response. `took` is the elapsed time in milliseconds.
    pub fn log_response(
        &self,
        status: impl fmt::Display,
        took: Option<u64>,
        json: &str,
    ) -> io::Result<()> {
        self.write(&format_response(&timestamp(), &status.to_string(), took, json))
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("device", &self.device)
            .field("level", &self.level())
            .finish()
    }
}

fn timestamp() -> String {
    chrono::Local::now().format(LOG_TIME_FORMAT).to_string()
}

/// Render a request entry:
///
/// ```text
/// # 2024-03-01 18:20:42:032 [_search] (["articles"])
/// #
/// curl -X GET 'http://localhost:9200/articles/_search?pretty=true'
/// ```
fn format_request(time: &str, endpoint: &str, params: Option<&str>, curl: &str) -> String {
    let mut content = format!("# {time} [{endpoint}]");
    if let Some(params) = params {
        content.push_str(&format!(" ({params})"));
    }
    content.push_str("\n#\n");
    content.push_str(curl);
    content.push_str("\n\n");
    content
}

/// Render a response entry:
///
/// ```text
/// # 2024-03-01 18:20:42:036 [200] (4 msec)
/// #
/// # {
/// #   "took" : 4
/// # }
/// ```
fn format_response(time: &str, status: &str, took: Option<u64>, json: &str) -> String {
    let mut content = format!("# {time} [{status}]");
    if let Some(took) = took {
        content.push_str(&format!(" ({took} msec)"));
    }
    if !json.trim().is_empty() {
        content.push_str("\n#\n");
        for line in json.split_inclusive('\n') {
            content.push_str("# ");
            content.push_str(line);
        }
    }
    content.push_str("\n\n");
    content
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    #[test]
    fn test_default_level_is_info() {
        let logger = Logger::new(LogDevice::Stderr, LoggerOptions::default());
        assert_eq!(logger.level(), "info");
        assert_eq!(logger.device(), "stderr");
    }

    #[test]
    fn test_level_from_options() {
        let logger = Logger::new(LogDevice::Stderr, LoggerOptions::with_level("debug"));
        assert_eq!(logger.level(), "debug");
    }

    #[test]
    fn test_write_to_writer_device() {
        let buffer = SharedBuffer::default();
        let logger = Logger::new(LogDevice::writer(buffer.clone()), LoggerOptions::default());

        logger.write("hello").unwrap();
        logger.clone().write(" world").unwrap();

        assert_eq!(buffer.contents(), "hello world");
    }

    #[test]
    fn test_format_request_with_params() {
        let entry = format_request(
            "2024-03-01 18:20:42:032",
            "_search",
            Some(r#"["articles"]"#),
            "curl -X GET 'http://localhost:9200/articles/_search'",
        );
        assert_eq!(
            entry,
            "# 2024-03-01 18:20:42:032 [_search] ([\"articles\"])\n#\ncurl -X GET 'http://localhost:9200/articles/_search'\n\n"
        );
    }

    #[test]
    fn test_format_request_without_params() {
        let entry = format_request("T", "_refresh", None, "curl -X POST 'x'");
        assert_eq!(entry, "# T [_refresh]\n#\ncurl -X POST 'x'\n\n");
    }

    #[test]
    fn test_format_response_comments_every_json_line() {
        let entry = format_response("T", "200", Some(4), "{\n  \"took\" : 4\n}");
        assert_eq!(entry, "# T [200] (4 msec)\n#\n# {\n#   \"took\" : 4\n# }\n\n");
    }

    #[test]
    fn test_format_response_blank_body() {
        let entry = format_response("T", "404", None, "   ");
        assert_eq!(entry, "# T [404]\n\n");
    }

    #[test]
    fn test_log_request_writes_entry() {
        let buffer = SharedBuffer::default();
        let logger = Logger::new(LogDevice::writer(buffer.clone()), LoggerOptions::default());

        logger
            .log_request("_search", None, "curl -X GET 'http://localhost:9200'")
            .unwrap();

        let contents = buffer.contents();
        assert!(contents.starts_with("# "));
        assert!(contents.contains("[_search]\n#\ncurl -X GET 'http://localhost:9200'\n\n"));
    }

    #[test]
    fn test_file_device_opened_lazily_in_append_mode() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("tire.log");
        std::fs::write(&path, "existing\n").unwrap();

        let logger = Logger::new(path.clone(), LoggerOptions::default());
        logger.write("appended\n").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "existing\nappended\n");
    }

    #[test]
    fn test_unwritable_file_device_reports_error_on_write() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("missing-dir").join("tire.log");

        let logger = Logger::new(path, LoggerOptions::default());
        assert!(logger.write("entry").is_err());
    }

    struct PanickingWriter(SharedBuffer);

    impl Write for PanickingWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if buf == b"panic" {
                panic!("writer failed mid-entry");
            }
            self.0.write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_recovers_from_poisoned_sink() {
        let buffer = SharedBuffer::default();
        let logger = Logger::new(
            LogDevice::writer(PanickingWriter(buffer.clone())),
            LoggerOptions::default(),
        );

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| logger.write("panic")));
        assert!(result.is_err());
        assert!(logger.sink.is_poisoned());

        logger.write("after").unwrap();
        assert_eq!(buffer.contents(), "after");
    }
}
