//! Log sinks for the native logging facility
//!
//! A sink is the destination a facility hands every record to. It is
//! described by three callbacks:
//! - `enabled(module_tag, level)` decides whether a record is wanted
//! - `log(module_tag, level, file, line, message)` consumes one record
//! - `flush()` pushes out anything buffered
//!
//! # Usage
//!
//! ```rust
//! use logboot::sink::{console, LogSink};
//! use logboot::LogLevel;
//!
//! let sink = console::console_sink();
//! assert!(sink.enabled("app::db", LogLevel::Trace));
//! ```

pub mod capture;
pub mod configuration;
pub mod console;

pub use capture::{init_test_capture, CaptureSink, CapturedRecord, TestCapture};
pub use configuration::{LogSinkBuilder, LogSinkConfiguration};

use logboot_types::LogLevel;

/// Destination for log records
///
/// Implementations must be callable from any thread for the lifetime of
/// the process. None of the callbacks can fail.
pub trait LogSink: Send + Sync {
    /// Whether a record for `module_tag` at `level` should be delivered
    fn enabled(&self, module_tag: &str, level: LogLevel) -> bool;

    /// Consume one preformatted record
    fn log(&self, module_tag: &str, level: LogLevel, file: Option<&str>, line: u32, message: &str);

    /// Push out anything the sink buffers
    fn flush(&self);
}
