//! Canonical schema constants for bootstrap diagnostics and configuration
//!
//! These constants keep event names and environment keys consistent
//! between the bootstrap, its sinks and the tests.

// Component name used by the bootstrap's own diagnostics
pub const COMPONENT_BOOTSTRAP: &str = "logboot";

// Canonical event names
pub const EVENT_REGISTERED: &str = "sink_registered";
pub const EVENT_BACKEND_FALLBACK: &str = "backend_fallback";

// Placeholder printed when a record carries no source file
pub const UNKNOWN_FILE: &str = "<unknown>";

// Environment keys read by the bootstrap configuration
pub const ENV_BACKEND: &str = "LOGBOOT_BACKEND";
pub const ENV_FORMAT: &str = "LOGBOOT_FORMAT";
