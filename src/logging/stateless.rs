//! Stateless logging routines.
//!
//! No instance to obtain or pass around: call [`log`] directly.

use std::io::{self, Write};

use crate::logging::{record_to, settle, LogError, LogLevel};

/// Write an entry to standard output and terminate the process with status 1
/// if `level` is `Error`.
pub fn log(level: LogLevel, message: &str) {
    settle(record(level, message));
}

/// Write an entry to standard output without ever exiting.
pub fn record(level: LogLevel, message: &str) -> Result<(), LogError> {
    let mut out = io::stdout().lock();
    write_to(&mut out, level, message)
}

/// Write an entry to an arbitrary sink.
pub fn write_to<W: Write + ?Sized>(
    out: &mut W,
    level: LogLevel,
    message: &str,
) -> Result<(), LogError> {
    record_to(out, level, message)
}
