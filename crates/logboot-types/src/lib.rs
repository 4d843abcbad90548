//! Core types shared across the logboot crates
//!
//! This crate provides the vocabulary used by the bootstrap and its sinks:
//!
//! - **Levels**: LogLevel, the ordered verbosity printed on console lines
//! - **Module tags**: ModuleTag, the grouping key handed to sink filters
//! - **Schema constants**: component and event names, env vars

pub mod level;
pub mod module_tag;
pub mod schema;

pub use level::LogLevel;
pub use module_tag::ModuleTag;
