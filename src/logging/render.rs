//! Line rendering and recording.
//!
//! Every logger shape funnels through [`record_to`], which is what keeps the
//! shared instance and the stateless routine byte-identical.

use std::io::Write;

use colored::Colorize;

use crate::logging::{LogError, LogLevel};

/// ANSI sequence restoring default console attributes.
pub const RESET: &str = "\x1b[0m";

/// Render `message` as a single `"{Label}: {message}"` line.
///
/// Comment resets any styling left on the console, Warning is yellow and
/// Error is red. Styled lines carry their own reset sequence. With
/// colorization disabled the result is the plain line.
pub fn render(level: LogLevel, message: &str) -> String {
    let line = format!("{}: {}", level.label(), message);
    match level {
        LogLevel::Comment if colored::control::SHOULD_COLORIZE.should_colorize() => {
            format!("{}{}", RESET, line)
        }
        LogLevel::Comment => line,
        LogLevel::Warning => line.as_str().yellow().to_string(),
        LogLevel::Error => line.as_str().red().to_string(),
    }
}

/// Write one rendered entry to `out`.
///
/// The line is written and flushed before a fatal entry is reported, so the
/// caller can terminate without losing it. A fatal entry is reported even
/// when the console rejected the write.
pub fn record_to<W: Write + ?Sized>(
    out: &mut W,
    level: LogLevel,
    message: &str,
) -> Result<(), LogError> {
    let written = writeln!(out, "{}", render(level, message)).and_then(|()| out.flush());

    if level.is_fatal() {
        if let Err(e) = written {
            tracing::warn!(error = %e, "fatal entry could not be written");
        }
        return Err(LogError::Fatal {
            message: message.to_string(),
        });
    }
    Ok(written?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_render_plain_lines() {
        plain();
        assert_eq!(render(LogLevel::Comment, "hello"), "Comment: hello");
        assert_eq!(render(LogLevel::Warning, "careful"), "Warning: careful");
        assert_eq!(render(LogLevel::Error, "boom"), "Error: boom");
    }

    #[test]
    fn test_record_non_fatal_writes_one_line() {
        plain();
        for level in [LogLevel::Comment, LogLevel::Warning] {
            let mut out = Vec::new();
            record_to(&mut out, level, "This is a message.").unwrap();
            assert_eq!(
                String::from_utf8(out).unwrap(),
                format!("{}: This is a message.\n", level)
            );
        }
    }

    #[test]
    fn test_record_error_writes_then_reports_fatal() {
        plain();
        let mut out = Vec::new();
        let err = record_to(&mut out, LogLevel::Error, "disk on fire").unwrap_err();

        assert!(err.is_fatal());
        assert!(matches!(err, LogError::Fatal { ref message } if message == "disk on fire"));
        assert_eq!(String::from_utf8(out).unwrap(), "Error: disk on fire\n");
    }

    #[test]
    fn test_message_is_kept_verbatim() {
        plain();
        let mut out = Vec::new();
        record_to(&mut out, LogLevel::Comment, "").unwrap();
        record_to(&mut out, LogLevel::Warning, "50% {braces} ünïcode").unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Comment: \nWarning: 50% {braces} ünïcode\n"
        );
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_is_io_error() {
        plain();
        let err = record_to(&mut Broken, LogLevel::Warning, "lost").unwrap_err();
        assert!(matches!(err, LogError::Io(_)));
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_write_failure_still_fatal_for_error() {
        plain();
        let err = record_to(&mut Broken, LogLevel::Error, "lost").unwrap_err();
        assert!(err.is_fatal());
    }
}
