//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct PatternsConfig {
    /// Console styling.
    pub console: ConsoleConfig,

    /// Diagnostic output on stderr.
    pub diagnostics: DiagnosticsConfig,
}

/// Console configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ConsoleConfig {
    /// When to emit severity colors.
    pub color: ColorMode,
}

/// Colorization policy for log lines.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color when stdout is a terminal (honors NO_COLOR / CLICOLOR).
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Install this policy as the process-wide console styling override.
    pub fn apply(self) {
        match self {
            ColorMode::Auto => colored::control::unset_override(),
            ColorMode::Always => colored::control::set_override(true),
            ColorMode::Never => colored::control::set_override(false),
        }
    }
}

/// Diagnostics configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct DiagnosticsConfig {
    /// `tracing` filter directives (e.g. "patterns=debug").
    pub filter: String,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            filter: "patterns=warn".to_string(),
        }
    }
}
