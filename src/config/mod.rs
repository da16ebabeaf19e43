//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → PatternsConfig (validated, immutable)
//!     → CLI flags override individual fields in main
//! ```
//!
//! # Design Decisions
//! - All fields have defaults; running without a file is the normal case
//! - Validation separates syntactic (serde) from semantic checks
//! - Console styling is the only behavior config can change; output text never varies

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{ColorMode, ConsoleConfig, DiagnosticsConfig, PatternsConfig};
