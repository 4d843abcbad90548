//! logboot - one-time logging bootstrap for test suites
//!
//! This crate guarantees that a log sink is registered with the process-wide
//! logging facility exactly once, before any test body runs:
//! - Single idempotent entry point via `ensure_initialized()`
//! - Two backends: a shared `tracing` subscriber when compiled in
//!   (feature `tracing-backend`), otherwise the `log` facade feeding a
//!   console sink that prints `(<level>) [<file>:<line>] <message>`
//! - Class-level setup hook for test suites via `test_class!`
//! - Capture sink for deterministic assertions on emitted records

pub mod backend;
pub mod bootstrap;
pub mod config;
pub mod errors;
pub mod facility;
pub mod sink;
pub mod test_case;

// Re-export commonly used types
pub use backend::Backend;
pub use bootstrap::{
    assert_initialized_before_tests, ensure_initialized, ensure_initialized_with,
    try_ensure_initialized, BootstrapState,
};
pub use config::{BackendChoice, BootstrapConfig, OutputFormat};
pub use errors::{BootstrapError, BootstrapErrorKind, Result};
pub use logboot_types::{LogLevel, ModuleTag};
pub use sink::{LogSink, LogSinkConfiguration};
pub use test_case::{LoggingTestCase, TestCaseBase};
