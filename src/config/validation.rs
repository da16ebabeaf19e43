//! Configuration validation.
//!
//! Returns all validation errors, not just the first.

use std::fmt;

use tracing_subscriber::EnvFilter;

use crate::config::schema::PatternsConfig;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field.
    pub field: &'static str,
    pub reason: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

/// Check a parsed configuration.
pub fn validate_config(config: &PatternsConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let filter = config.diagnostics.filter.trim();
    if filter.is_empty() {
        errors.push(ValidationError {
            field: "diagnostics.filter",
            reason: "must not be blank".to_string(),
        });
    } else if let Err(e) = EnvFilter::try_new(filter) {
        errors.push(ValidationError {
            field: "diagnostics.filter",
            reason: e.to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&PatternsConfig::default()).is_ok());
    }

    #[test]
    fn test_blank_filter_rejected() {
        let mut config = PatternsConfig::default();
        config.diagnostics.filter = "   ".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "diagnostics.filter");
    }

    #[test]
    fn test_malformed_filter_rejected() {
        let mut config = PatternsConfig::default();
        config.diagnostics.filter = "patterns=loud".to_string();

        assert!(validate_config(&config).is_err());
    }
}
