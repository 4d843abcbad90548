//! Process-wide logging facilities a sink can be registered with
//!
//! - `native`: the `log` facade, fed through a [`LogSinkConfiguration`]
//! - `shared`: a global `tracing` subscriber (feature `tracing-backend`)
//!
//! Both facilities accept exactly one registration per process.
//!
//! [`LogSinkConfiguration`]: crate::sink::LogSinkConfiguration

pub mod native;
#[cfg(feature = "tracing-backend")]
pub mod shared;
