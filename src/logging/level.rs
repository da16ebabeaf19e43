//! Severity levels.

use std::fmt;
use std::str::FromStr;

use crate::logging::LogError;

/// Severity of a log entry.
///
/// Used purely as a discriminator; the variants carry no ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogLevel {
    Comment,
    Warning,
    Error,
}

impl LogLevel {
    pub const ALL: [LogLevel; 3] = [LogLevel::Comment, LogLevel::Warning, LogLevel::Error];

    /// Prefix written in front of every message of this level.
    pub fn label(self) -> &'static str {
        match self {
            LogLevel::Comment => "Comment",
            LogLevel::Warning => "Warning",
            LogLevel::Error => "Error",
        }
    }

    /// Whether recording this level ends the process.
    pub fn is_fatal(self) -> bool {
        self == LogLevel::Error
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for LogLevel {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LogLevel::ALL
            .into_iter()
            .find(|level| level.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| LogError::UnknownLevel(s.to_string()))
    }
}
