//! Shared, lazily created logger instance.

use std::io::{self, Write};
use std::sync::OnceLock;

use crate::logging::{record_to, settle, LogError, LogLevel};

static INSTANCE: OnceLock<SingletonLogger> = OnceLock::new();

/// Process-wide logger.
///
/// Created on first call to [`SingletonLogger::instance`] and kept for the
/// rest of the process. `OnceLock` guards first access, so concurrent
/// callers still observe exactly one instance.
#[derive(Debug)]
pub struct SingletonLogger {
    _private: (),
}

impl SingletonLogger {
    fn new() -> Self {
        Self { _private: () }
    }

    /// Get the shared instance, creating it on first use.
    pub fn instance() -> &'static SingletonLogger {
        INSTANCE.get_or_init(|| {
            tracing::debug!("shared logger created");
            SingletonLogger::new()
        })
    }

    /// Write an entry to standard output and terminate the process with
    /// status 1 if `level` is `Error`.
    pub fn log(&self, level: LogLevel, message: &str) {
        settle(self.record(level, message));
    }

    /// Write an entry to standard output without ever exiting.
    ///
    /// Returns `LogError::Fatal` for `Error` entries.
    pub fn record(&self, level: LogLevel, message: &str) -> Result<(), LogError> {
        // Hold the lock so the styled line is not interleaved with other writers.
        let mut out = io::stdout().lock();
        self.write_to(&mut out, level, message)
    }

    /// Write an entry to an arbitrary sink.
    pub fn write_to<W: Write + ?Sized>(
        &self,
        out: &mut W,
        level: LogLevel,
        message: &str,
    ) -> Result<(), LogError> {
        record_to(out, level, message)
    }
}
