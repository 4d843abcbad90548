//! Native registration with the `log` facade

use crate::backend::Backend;
use crate::errors::{BootstrapError, RegistrationError, Result};
use crate::sink::{LogSink, LogSinkConfiguration};
use logboot_types::LogLevel;

/// Adapter presenting a sink configuration as a `log::Log`
struct NativeLogger {
    sink: LogSinkConfiguration,
}

impl log::Log for NativeLogger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        self.sink.enabled(metadata.target(), metadata.level().into())
    }

    fn log(&self, record: &log::Record<'_>) {
        if !log::Log::enabled(self, record.metadata()) {
            return;
        }
        let message = match record.args().as_str() {
            Some(literal) => literal.to_string(),
            None => record.args().to_string(),
        };
        self.sink.log(
            record.target(),
            record.level().into(),
            record.file(),
            record.line().unwrap_or(0),
            &message,
        );
    }

    fn flush(&self) {
        self.sink.flush();
    }
}

/// Register `sink` as the process-wide logger
///
/// Ownership of the sink moves into the facility, which keeps it for the
/// rest of the process. Records below `minimum_level` are dropped by the
/// facade before they reach the sink.
///
/// # Errors
///
/// Returns `LoggerAlreadySet` if any logger was installed before, by this
/// crate or anyone else.
pub fn register(minimum_level: LogLevel, sink: LogSinkConfiguration) -> Result<()> {
    log::set_boxed_logger(Box::new(NativeLogger { sink })).map_err(|err| {
        BootstrapError::from(RegistrationError::from(err))
            .with_op("register_native")
            .with_backend(Backend::Native)
    })?;
    log::set_max_level(minimum_level.into());
    Ok(())
}
