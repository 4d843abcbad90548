//! Test capture sink for deterministic logging assertions
//!
//! This module provides a sink that keeps records in memory so tests can
//! assert on exactly what reached the native facility.

use super::console::format_line;
use super::LogSinkConfiguration;
use crate::bootstrap::try_register_with;
use crate::config::BootstrapConfig;
use logboot_types::{LogLevel, ModuleTag};
use std::sync::{Arc, Mutex, OnceLock};

/// A captured log record with all its parts
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CapturedRecord {
    pub module: ModuleTag,
    pub level: LogLevel,
    pub file: Option<String>,
    pub line: u32,
    pub message: String,
}

impl CapturedRecord {
    /// The line the console sink would have written for this record
    pub fn console_line(&self) -> String {
        format_line(self.level, self.file.as_deref(), self.line, &self.message)
    }
}

/// Factory for capture sinks
pub struct CaptureSink;

impl CaptureSink {
    /// Create a sink and the handle that reads what it receives
    #[allow(clippy::new_ret_no_self)]
    pub fn new() -> (LogSinkConfiguration, TestCapture) {
        let records = Arc::new(Mutex::new(Vec::new()));
        let sink_records = records.clone();
        let sink = LogSinkConfiguration::builder()
            .enabled(|_, _| true)
            .log(move |module, level, file, line, message| {
                let record = CapturedRecord {
                    module: ModuleTag::new(module),
                    level,
                    file: file.map(str::to_string),
                    line,
                    message: message.to_string(),
                };
                sink_records
                    .lock()
                    .map(|mut records| records.push(record))
                    .ok();
            })
            .build();
        (sink, TestCapture { records })
    }
}

/// Handle for accessing captured records in tests
#[derive(Clone)]
pub struct TestCapture {
    records: Arc<Mutex<Vec<CapturedRecord>>>,
}

impl TestCapture {
    /// Get all captured records
    pub fn records(&self) -> Vec<CapturedRecord> {
        self.records.lock().map(|r| r.clone()).unwrap_or_default()
    }

    /// Captured records rendered as console lines
    pub fn lines(&self) -> Vec<String> {
        self.records().iter().map(CapturedRecord::console_line).collect()
    }

    /// Assert that a record rendering to exactly `line` was captured
    ///
    /// # Panics
    ///
    /// Panics if no such record is found
    pub fn assert_line_exists(&self, line: &str) {
        let lines = self.lines();
        assert!(
            lines.iter().any(|l| l == line),
            "Expected line {:?} not found in {} captured records",
            line,
            lines.len()
        );
    }

    /// Clear all captured records
    pub fn clear(&self) {
        self.records.lock().map(|mut r| r.clear()).ok();
    }

    /// Count records matching a predicate
    pub fn count_records<F>(&self, predicate: F) -> usize
    where
        F: Fn(&CapturedRecord) -> bool,
    {
        self.records().iter().filter(|r| predicate(r)).count()
    }
}

static GLOBAL_CAPTURE: OnceLock<TestCapture> = OnceLock::new();

/// Bootstrap logging with a capture sink and return the shared handle
///
/// Must be the first bootstrap call in the test binary.
///
/// # Panics
///
/// Panics if registration fails, or if another bootstrap call already
/// registered a different sink, since the capture would never see a record.
///
/// # Example
///
/// ```
/// use logboot::sink::init_test_capture;
///
/// let capture = init_test_capture();
/// log::info!("captured");
/// assert_eq!(capture.count_records(|r| r.message == "captured"), 1);
/// ```
pub fn init_test_capture() -> TestCapture {
    GLOBAL_CAPTURE
        .get_or_init(|| {
            let (sink, capture) = CaptureSink::new();
            let (outcome, registered) =
                try_register_with(BootstrapConfig::default().with_sink(sink));
            if let Err(err) = outcome {
                panic!("logging bootstrap failed: {}", err);
            }
            assert!(
                registered,
                "init_test_capture must be the first logging bootstrap in this test binary"
            );
            capture
        })
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::LogSink;

    #[test]
    fn test_capture_records_every_part() {
        let (sink, capture) = CaptureSink::new();

        sink.log("app::db", LogLevel::Warn, Some("src/db.rs"), 12, "slow query");

        let records = capture.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].module.as_str(), "app::db");
        assert_eq!(records[0].level, LogLevel::Warn);
        assert_eq!(records[0].file.as_deref(), Some("src/db.rs"));
        assert_eq!(records[0].line, 12);
        capture.assert_line_exists("(3) [src/db.rs:12] slow query");
    }

    #[test]
    fn test_capture_clear_and_count() {
        let (sink, capture) = CaptureSink::new();

        sink.log("a", LogLevel::Info, None, 1, "one");
        sink.log("b", LogLevel::Info, None, 2, "two");
        assert_eq!(capture.count_records(|r| r.module.as_str() == "a"), 1);

        capture.clear();
        assert!(capture.records().is_empty());
    }

    #[test]
    fn test_clones_share_records() {
        let (sink, capture) = CaptureSink::new();
        let other = capture.clone();

        sink.log("a", LogLevel::Trace, None, 0, "shared");

        assert_eq!(other.lines(), vec!["(0) [<unknown>:0] shared".to_string()]);
    }
}
