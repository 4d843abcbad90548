//! Console sink writing one line per record to stderr
//!
//! Line format: `(<level>) [<file>:<line>] <message>`, where `<level>` is
//! the unsigned value of [`LogLevel`]. Harnesses scrape this format, so it
//! must not change.

use super::LogSinkConfiguration;
use logboot_types::schema::UNKNOWN_FILE;
use logboot_types::LogLevel;
use std::io::Write;
use std::sync::{Mutex, PoisonError};

/// Render a record as a console line, without the trailing newline
pub fn format_line(level: LogLevel, file: Option<&str>, line: u32, message: &str) -> String {
    format!(
        "({}) [{}:{}] {}",
        level.as_u32(),
        file.unwrap_or(UNKNOWN_FILE),
        line,
        message
    )
}

/// Sink that writes every record to stderr
pub fn console_sink() -> LogSinkConfiguration {
    console_sink_to(std::io::stderr())
}

/// Sink that writes every record to `writer`
///
/// Nothing is filtered and flushing is a no-op. Write errors are dropped.
pub fn console_sink_to<W>(writer: W) -> LogSinkConfiguration
where
    W: Write + Send + 'static,
{
    let writer = Mutex::new(writer);
    LogSinkConfiguration::builder()
        .enabled(|_, _| true)
        .log(move |_module, level, file, line, message| {
            let mut writer = writer.lock().unwrap_or_else(PoisonError::into_inner);
            let _ = writeln!(writer, "{}", format_line(level, file, line, message));
        })
        .flush(|| {})
        .build()
}
