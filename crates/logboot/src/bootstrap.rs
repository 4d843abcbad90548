//! One-time logging bootstrap
//!
//! Registers exactly one log sink with the process-wide logging facility,
//! no matter how many test classes or threads ask for it. The outcome is
//! computed once, lazily, on first access and cached until the process
//! exits. Racing first callers block until the winner has finished
//! registering and then observe the same outcome.
//!
//! # Usage
//!
//! ```rust
//! use logboot::bootstrap::{ensure_initialized, state, BootstrapState};
//!
//! assert!(ensure_initialized());
//! assert_eq!(state(), BootstrapState::Initialized);
//! ```

use crate::backend::Backend;
use crate::config::{BackendChoice, BootstrapConfig};
use crate::errors::{BootstrapError, BootstrapErrorKind, Result};
use logboot_types::schema::{COMPONENT_BOOTSTRAP, EVENT_BACKEND_FALLBACK, EVENT_REGISTERED};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Lifecycle of the process-wide bootstrap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapState {
    Uninitialized,
    Initialized,
}

static OUTCOME: OnceLock<Result<Backend>> = OnceLock::new();
static REGISTRATIONS: AtomicUsize = AtomicUsize::new(0);

fn outcome<F>(config: F) -> &'static Result<Backend>
where
    F: FnOnce() -> Result<BootstrapConfig>,
{
    OUTCOME.get_or_init(|| config().and_then(|config| initialize(&config)))
}

fn initialize(config: &BootstrapConfig) -> Result<Backend> {
    let backend = Backend::detect(config);
    backend.register(config)?;
    REGISTRATIONS.fetch_add(1, Ordering::SeqCst);

    tracing::debug!(
        component = COMPONENT_BOOTSTRAP,
        event = EVENT_REGISTERED,
        backend = backend.as_str(),
        "log sink registered"
    );
    if let Some(reason) = fallback_reason(config, backend) {
        tracing::warn!(
            component = COMPONENT_BOOTSTRAP,
            event = EVENT_BACKEND_FALLBACK,
            backend = backend.as_str(),
            "{}, using native sink",
            reason
        );
    }
    Ok(backend)
}

/// Why a requested shared backend ended up native, if it did
fn fallback_reason(config: &BootstrapConfig, backend: Backend) -> Option<&'static str> {
    if config.backend != BackendChoice::Shared || backend != Backend::Native {
        return None;
    }
    if !Backend::is_shared_available() {
        Some("shared backend not compiled in")
    } else {
        Some("custom sink requires the native facility")
    }
}

/// Initialize logging from the environment, at most once per process
///
/// Returns the backend that was registered.
///
/// # Errors
///
/// Returns the cached registration failure, if the first attempt failed.
/// A failed attempt is never retried.
pub fn try_ensure_initialized() -> Result<Backend> {
    outcome(BootstrapConfig::from_env).clone()
}

/// Like [`try_ensure_initialized`] with an explicit configuration
///
/// Only the configuration of the call that performs the one-time
/// registration takes effect; later configurations are ignored.
///
/// # Errors
///
/// Returns the cached registration failure, if the first attempt failed.
pub fn try_ensure_initialized_with(config: BootstrapConfig) -> Result<Backend> {
    outcome(|| Ok(config)).clone()
}

/// Run the bootstrap with `config`, reporting whether `config` was the one used
pub(crate) fn try_register_with(config: BootstrapConfig) -> (Result<Backend>, bool) {
    let mut used = false;
    let outcome = outcome(|| {
        used = true;
        Ok(config)
    })
    .clone();
    (outcome, used)
}

/// Initialize logging from the environment, at most once per process
///
/// Always returns `true` once a sink is registered.
///
/// # Panics
///
/// Panics if registration failed. Logging is a precondition of every
/// test, so there is nothing sensible to continue with.
pub fn ensure_initialized() -> bool {
    ready_or_abort(try_ensure_initialized())
}

/// Like [`ensure_initialized`] with an explicit configuration
///
/// # Panics
///
/// Panics if registration failed.
pub fn ensure_initialized_with(config: BootstrapConfig) -> bool {
    ready_or_abort(try_ensure_initialized_with(config))
}

fn ready_or_abort(outcome: Result<Backend>) -> bool {
    match outcome {
        Ok(_) => true,
        Err(err) => panic!("logging bootstrap failed: {}", err),
    }
}

/// Class-level precondition: logging is ready before any test body runs
///
/// # Panics
///
/// Panics if the bootstrap cannot complete.
pub fn assert_initialized_before_tests() {
    assert!(
        ensure_initialized(),
        "logging must be initialized before tests run"
    );
}

/// Check, without initializing, that the bootstrap has completed
///
/// # Errors
///
/// Returns `NotInitialized` if no bootstrap has run yet, or the cached
/// failure if it ran and failed.
pub fn require_initialized() -> Result<Backend> {
    match OUTCOME.get() {
        Some(outcome) => outcome.clone(),
        None => Err(BootstrapError::new(BootstrapErrorKind::NotInitialized)
            .with_op("require_initialized")
            .with_message("a test ran before the class-level setup hook")),
    }
}

/// Current lifecycle state; never goes back to `Uninitialized`
pub fn state() -> BootstrapState {
    match OUTCOME.get() {
        Some(Ok(_)) => BootstrapState::Initialized,
        _ => BootstrapState::Uninitialized,
    }
}

/// The registered backend, if the bootstrap has completed
pub fn active_backend() -> Option<Backend> {
    OUTCOME.get().and_then(|outcome| outcome.as_ref().ok().copied())
}

/// Number of sink registrations performed by this process (0 or 1)
pub fn registration_count() -> usize {
    REGISTRATIONS.load(Ordering::SeqCst)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_initialized_idempotent() {
        // Multiple calls should not panic or register again
        assert!(ensure_initialized());
        assert!(ensure_initialized());
        assert!(ensure_initialized());

        assert_eq!(registration_count(), 1);
        assert_eq!(state(), BootstrapState::Initialized);
        assert!(active_backend().is_some());
    }

    #[test]
    fn test_require_after_assert() {
        assert_initialized_before_tests();
        assert_eq!(require_initialized().ok(), active_backend());
    }

    #[test]
    fn test_fallback_reason_names_the_cause() {
        let shared = BootstrapConfig::default().with_backend(BackendChoice::Shared);
        assert_eq!(fallback_reason(&shared, Backend::Shared), None);
        assert_eq!(
            fallback_reason(&BootstrapConfig::default(), Backend::Native),
            None
        );

        let reason = fallback_reason(&shared, Backend::Native).unwrap();
        if Backend::is_shared_available() {
            assert!(reason.contains("custom sink"));
        } else {
            assert!(reason.contains("not compiled in"));
        }
    }

    #[test]
    fn test_ready_or_abort_passes_success_through() {
        assert!(ready_or_abort(Ok(Backend::Native)));
    }

    #[test]
    #[should_panic(expected = "ERR_LOGGER_ALREADY_SET")]
    fn test_ready_or_abort_panics_on_failure() {
        ready_or_abort(Err(BootstrapError::new(
            BootstrapErrorKind::LoggerAlreadySet,
        )));
    }
}
