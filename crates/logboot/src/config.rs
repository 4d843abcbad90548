//! Bootstrap configuration
//!
//! Defaults describe the common case: pick the richest backend compiled in,
//! human-readable output, nothing filtered. Environment variables can
//! override the backend and output format for a single test run.

use crate::errors::{RegistrationError, Result};
use crate::sink::LogSinkConfiguration;
use logboot_types::schema::{ENV_BACKEND, ENV_FORMAT};
use logboot_types::LogLevel;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which backend the bootstrap should register
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendChoice {
    /// Shared tracing subscriber when compiled in, native sink otherwise
    #[default]
    Auto,
    /// Always the native `log` facility with a console sink
    Native,
    /// Prefer the shared tracing subscriber
    Shared,
}

impl FromStr for BackendChoice {
    type Err = RegistrationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(BackendChoice::Auto),
            "native" => Ok(BackendChoice::Native),
            "shared" | "tracing" => Ok(BackendChoice::Shared),
            _ => Err(invalid(ENV_BACKEND, s, "auto, native, shared")),
        }
    }
}

/// Output format of the shared backend
///
/// The native console sink has a fixed line format and ignores this.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable lines for local runs
    #[default]
    Human,
    /// JSON structured lines for CI log scraping
    Json,
}

impl FromStr for OutputFormat {
    type Err = RegistrationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            _ => Err(invalid(ENV_FORMAT, s, "human, json")),
        }
    }
}

fn invalid(key: &str, value: &str, expected: &str) -> RegistrationError {
    RegistrationError::InvalidConfig {
        key: key.to_string(),
        value: value.to_string(),
        expected: expected.to_string(),
    }
}

/// Everything the one-time bootstrap needs to know
#[derive(Debug, Clone)]
pub struct BootstrapConfig {
    pub backend: BackendChoice,
    pub format: OutputFormat,
    /// Handed to the native facility's registration call
    pub min_level: LogLevel,
    /// Replaces the console sink on the native backend
    pub sink: Option<LogSinkConfiguration>,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            backend: BackendChoice::Auto,
            format: OutputFormat::Human,
            min_level: LogLevel::Trace,
            sink: None,
        }
    }
}

impl BootstrapConfig {
    /// Build a configuration from the process environment
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if `LOGBOOT_BACKEND` or `LOGBOOT_FORMAT` is
    /// set to an unrecognised value.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if a present value does not parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(value) = lookup(ENV_BACKEND) {
            config.backend = value.parse()?;
        }
        if let Some(value) = lookup(ENV_FORMAT) {
            config.format = value.parse()?;
        }
        Ok(config)
    }

    /// Select the backend explicitly
    pub fn with_backend(mut self, backend: BackendChoice) -> Self {
        self.backend = backend;
        self
    }

    /// Select the shared backend's output format
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Register a custom sink instead of the console sink
    ///
    /// Custom sinks only exist on the native facility, so this also forces
    /// the native backend.
    pub fn with_sink(mut self, sink: LogSinkConfiguration) -> Self {
        self.sink = Some(sink);
        self.backend = BackendChoice::Native;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::BootstrapErrorKind;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_environment_is_empty() {
        let config = BootstrapConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.backend, BackendChoice::Auto);
        assert_eq!(config.format, OutputFormat::Human);
        assert_eq!(config.min_level, LogLevel::Trace);
        assert!(config.sink.is_none());
    }

    #[test]
    fn test_environment_overrides() {
        let config = BootstrapConfig::from_lookup(lookup_from(&[
            (ENV_BACKEND, "Native"),
            (ENV_FORMAT, "json"),
        ]))
        .unwrap();
        assert_eq!(config.backend, BackendChoice::Native);
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_tracing_is_an_alias_for_shared() {
        assert_eq!("tracing".parse::<BackendChoice>().unwrap(), BackendChoice::Shared);
    }

    #[test]
    fn test_invalid_backend_is_rejected() {
        let err = BootstrapConfig::from_lookup(lookup_from(&[(ENV_BACKEND, "syslog")]))
            .unwrap_err();
        assert_eq!(err.kind(), BootstrapErrorKind::InvalidConfig);
        assert!(err.message().contains(ENV_BACKEND));
    }

    #[test]
    fn test_with_sink_forces_native() {
        let config = BootstrapConfig::default()
            .with_backend(BackendChoice::Shared)
            .with_sink(LogSinkConfiguration::builder().build());
        assert_eq!(config.backend, BackendChoice::Native);
        assert!(config.sink.is_some());
    }

    #[test]
    fn test_choices_deserialize_lowercase() {
        let choice: BackendChoice = serde_json::from_str("\"shared\"").unwrap();
        assert_eq!(choice, BackendChoice::Shared);
        let format: OutputFormat = serde_json::from_str("\"json\"").unwrap();
        assert_eq!(format, OutputFormat::Json);
    }
}
