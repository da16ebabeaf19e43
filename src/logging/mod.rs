//! Leveled console logging.
//!
//! # Data Flow
//! ```text
//! caller
//!     → SingletonLogger::instance().log(level, msg)   (shared instance)
//!     → stateless::log(level, msg)                     (no instance)
//!         → record_to(stdout lock, level, msg)
//!             → render.rs (label + severity styling)
//!             → Err(LogError::Fatal) for LogLevel::Error
//!         → log() terminates the process with status 1 on Fatal
//! ```
//!
//! # Design Decisions
//! - Both exposure shapes share one rendering path, so their output is byte-identical
//! - Recording never exits; only `log` turns a fatal entry into process termination
//! - Styling is presentation only; the line text is the stable contract
//! - Console styling honors the global `colored` override set at startup

pub mod level;
pub mod render;
pub mod singleton;
pub mod stateless;

pub use level::LogLevel;
pub use render::{record_to, render};
pub use singleton::SingletonLogger;

use thiserror::Error;

/// Exit status used when a fatal entry terminates the process.
pub const FATAL_EXIT_CODE: i32 = 1;

/// Errors produced while recording a log entry.
#[derive(Debug, Error)]
pub enum LogError {
    /// An `Error` level entry was written; the caller must stop.
    #[error("fatal log entry: {message}")]
    Fatal { message: String },

    /// The console rejected the write.
    #[error("console write failed: {0}")]
    Io(#[from] std::io::Error),

    /// A level name that is not one of Comment, Warning or Error.
    #[error("unknown log level: {0:?}")]
    UnknownLevel(String),
}

impl LogError {
    /// Whether this error demands process termination.
    pub fn is_fatal(&self) -> bool {
        matches!(self, LogError::Fatal { .. })
    }
}

/// Apply the outcome of a recorded entry to the running process.
///
/// Fatal entries exit with [`FATAL_EXIT_CODE`]. Write failures are reported
/// through diagnostics and otherwise dropped.
pub(crate) fn settle(outcome: Result<(), LogError>) {
    match outcome {
        Ok(()) => {}
        Err(LogError::Fatal { message }) => {
            tracing::debug!(%message, "fatal entry recorded, terminating");
            std::process::exit(FATAL_EXIT_CODE);
        }
        Err(e) => tracing::warn!(error = %e, "log entry dropped"),
    }
}
