use crate::backend::Backend;
use thiserror::Error;

/// Result type alias using BootstrapError
pub type Result<T> = std::result::Result<T, BootstrapError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that tests and callers can match
/// on without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapErrorKind {
    /// The `log` facade already has a logger installed
    LoggerAlreadySet,
    /// A global tracing subscriber could not be installed
    SubscriberInit,
    /// An environment value did not parse
    InvalidConfig,
    /// A test ran before the bootstrap completed
    NotInitialized,
}

impl BootstrapErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            BootstrapErrorKind::LoggerAlreadySet => "ERR_LOGGER_ALREADY_SET",
            BootstrapErrorKind::SubscriberInit => "ERR_SUBSCRIBER_INIT",
            BootstrapErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
            BootstrapErrorKind::NotInitialized => "ERR_NOT_INITIALIZED",
        }
    }
}

/// Canonical structured error type
///
/// Cloneable so the outcome of the one-time bootstrap can be cached and
/// handed to every later caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapError {
    kind: BootstrapErrorKind,
    op: Option<String>,
    backend: Option<Backend>,
    message: String,
}

impl BootstrapError {
    /// Create a new error with the specified kind
    pub fn new(kind: BootstrapErrorKind) -> Self {
        Self {
            kind,
            op: None,
            backend: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add the backend that was being registered
    pub fn with_backend(mut self, backend: Backend) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> BootstrapErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the backend context, if any
    pub fn backend(&self) -> Option<Backend> {
        self.backend
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for BootstrapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(backend) = self.backend {
            write!(f, " (backend: {})", backend)?;
        }
        Ok(())
    }
}

impl std::error::Error for BootstrapError {}

/// Raw failures reported by the logging facilities and config parsing
#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("a logger is already installed: {0}")]
    LoggerAlreadySet(#[from] log::SetLoggerError),

    #[error("failed to install tracing subscriber: {reason}")]
    SubscriberInit { reason: String },

    #[error("invalid value '{value}' for {key}: expected one of {expected}")]
    InvalidConfig {
        key: String,
        value: String,
        expected: String,
    },
}

impl From<RegistrationError> for BootstrapError {
    fn from(err: RegistrationError) -> Self {
        let kind = match &err {
            RegistrationError::LoggerAlreadySet(_) => BootstrapErrorKind::LoggerAlreadySet,
            RegistrationError::SubscriberInit { .. } => BootstrapErrorKind::SubscriberInit,
            RegistrationError::InvalidConfig { .. } => BootstrapErrorKind::InvalidConfig,
        };
        BootstrapError::new(kind).with_message(err.to_string())
    }
}
