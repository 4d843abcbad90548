//! Shared registration with a global `tracing` subscriber
//!
//! The subscriber owns formatting and dispatch. Records emitted through
//! the `log` facade are bridged into it, so callers of either API end up
//! in the same stderr stream.

use crate::backend::Backend;
use crate::config::OutputFormat;
use crate::errors::{BootstrapError, RegistrationError, Result};
use tracing_subscriber::EnvFilter;

/// Install the process-wide fmt subscriber
///
/// `RUST_LOG` is honoured when set; otherwise every level passes.
///
/// # Errors
///
/// Returns `SubscriberInit` if a global subscriber or `log` bridge was
/// already installed.
pub fn install(format: OutputFormat) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace"));

    let installed = match format {
        OutputFormat::Human => tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(filter)
            .try_init(),
        OutputFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_writer(std::io::stderr)
            .with_env_filter(filter)
            .try_init(),
    };

    installed.map_err(|err| {
        BootstrapError::from(RegistrationError::SubscriberInit {
            reason: err.to_string(),
        })
        .with_op("install_shared")
        .with_backend(Backend::Shared)
    })
}
