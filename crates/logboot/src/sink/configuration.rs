//! Three-callback sink value handed to the native facility

use super::LogSink;
use logboot_types::LogLevel;
use std::fmt;
use std::sync::Arc;

type EnabledFn = dyn Fn(&str, LogLevel) -> bool + Send + Sync;
type LogFn = dyn Fn(&str, LogLevel, Option<&str>, u32, &str) + Send + Sync;
type FlushFn = dyn Fn() + Send + Sync;

/// Immutable description of a sink as three callbacks
///
/// Built once and moved into the logging facility on registration. Clones
/// share the same callbacks.
#[derive(Clone)]
pub struct LogSinkConfiguration {
    enabled: Arc<EnabledFn>,
    log: Arc<LogFn>,
    flush: Arc<FlushFn>,
}

impl LogSinkConfiguration {
    /// Start from the pass-through defaults: always enabled, discard, no-op flush
    pub fn builder() -> LogSinkBuilder {
        LogSinkBuilder::new()
    }
}

impl LogSink for LogSinkConfiguration {
    fn enabled(&self, module_tag: &str, level: LogLevel) -> bool {
        (self.enabled)(module_tag, level)
    }

    fn log(&self, module_tag: &str, level: LogLevel, file: Option<&str>, line: u32, message: &str) {
        (self.log)(module_tag, level, file, line, message)
    }

    fn flush(&self) {
        (self.flush)()
    }
}

impl fmt::Debug for LogSinkConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogSinkConfiguration").finish_non_exhaustive()
    }
}

/// Builder for [`LogSinkConfiguration`]
pub struct LogSinkBuilder {
    enabled: Arc<EnabledFn>,
    log: Arc<LogFn>,
    flush: Arc<FlushFn>,
}

impl LogSinkBuilder {
    fn new() -> Self {
        Self {
            enabled: Arc::new(|_: &str, _: LogLevel| true),
            log: Arc::new(|_: &str, _: LogLevel, _: Option<&str>, _: u32, _: &str| {}),
            flush: Arc::new(|| {}),
        }
    }

    /// Set the filter predicate
    pub fn enabled<F>(mut self, enabled: F) -> Self
    where
        F: Fn(&str, LogLevel) -> bool + Send + Sync + 'static,
    {
        self.enabled = Arc::new(enabled);
        self
    }

    /// Set the record consumer
    pub fn log<F>(mut self, log: F) -> Self
    where
        F: Fn(&str, LogLevel, Option<&str>, u32, &str) + Send + Sync + 'static,
    {
        self.log = Arc::new(log);
        self
    }

    /// Set the flush callback
    pub fn flush<F>(mut self, flush: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.flush = Arc::new(flush);
        self
    }

    pub fn build(self) -> LogSinkConfiguration {
        LogSinkConfiguration {
            enabled: self.enabled,
            log: self.log,
            flush: self.flush,
        }
    }
}
