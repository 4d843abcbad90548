//! Backend selection
//!
//! Whether the shared tracing backend exists is decided when the crate is
//! compiled (feature `tracing-backend`). The choice between the two
//! backends is made once, by the bootstrap, from that capability and the
//! configuration.

use crate::config::{BackendChoice, BootstrapConfig};
use crate::errors::Result;
use crate::facility::native;
use crate::sink::console::console_sink;
use serde::Serialize;
use std::fmt;

/// The facility a process ends up logging through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Global tracing subscriber; `log` records are bridged into it
    Shared,
    /// `log` facade feeding a [`LogSinkConfiguration`](crate::sink::LogSinkConfiguration)
    Native,
}

impl Backend {
    /// Whether the shared tracing backend was compiled in
    pub const fn is_shared_available() -> bool {
        cfg!(feature = "tracing-backend")
    }

    /// Pick the backend for `config`
    ///
    /// A custom sink only exists on the native facility, so it always wins.
    pub fn detect(config: &BootstrapConfig) -> Backend {
        match config.backend {
            BackendChoice::Native => Backend::Native,
            BackendChoice::Auto | BackendChoice::Shared
                if config.sink.is_none() && Self::is_shared_available() =>
            {
                Backend::Shared
            }
            BackendChoice::Auto | BackendChoice::Shared => Backend::Native,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Backend::Shared => "shared",
            Backend::Native => "native",
        }
    }

    /// Register this backend with its process-wide facility
    pub(crate) fn register(self, config: &BootstrapConfig) -> Result<()> {
        match self {
            Backend::Native => {
                let sink = config.sink.clone().unwrap_or_else(console_sink);
                native::register(config.min_level, sink)
            }
            Backend::Shared => register_shared(config),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "tracing-backend")]
fn register_shared(config: &BootstrapConfig) -> Result<()> {
    crate::facility::shared::install(config.format)
}

#[cfg(not(feature = "tracing-backend"))]
fn register_shared(_config: &BootstrapConfig) -> Result<()> {
    use crate::errors::{BootstrapError, BootstrapErrorKind};

    Err(BootstrapError::new(BootstrapErrorKind::SubscriberInit)
        .with_op("install_shared")
        .with_backend(Backend::Shared)
        .with_message("compiled without the tracing-backend feature"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::LogSinkConfiguration;

    #[test]
    fn test_native_choice_is_always_native() {
        let config = BootstrapConfig::default().with_backend(BackendChoice::Native);
        assert_eq!(Backend::detect(&config), Backend::Native);
    }

    #[test]
    fn test_auto_follows_capability() {
        let config = BootstrapConfig::default();
        let expected = if Backend::is_shared_available() {
            Backend::Shared
        } else {
            Backend::Native
        };
        assert_eq!(Backend::detect(&config), expected);
    }

    #[test]
    fn test_shared_falls_back_without_capability() {
        let config = BootstrapConfig::default().with_backend(BackendChoice::Shared);
        if !Backend::is_shared_available() {
            assert_eq!(Backend::detect(&config), Backend::Native);
        } else {
            assert_eq!(Backend::detect(&config), Backend::Shared);
        }
    }

    #[test]
    fn test_custom_sink_selects_native() {
        let mut config = BootstrapConfig::default();
        config.sink = Some(LogSinkConfiguration::builder().build());
        assert_eq!(Backend::detect(&config), Backend::Native);
    }

    #[test]
    fn test_backend_display() {
        assert_eq!(Backend::Shared.to_string(), "shared");
        assert_eq!(serde_json::to_string(&Backend::Native).unwrap(), "\"native\"");
    }
}
