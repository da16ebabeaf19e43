//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! logger / factory / main
//!     → tracing events (debug: instance creation, animal dispatch)
//!     → logging.rs subscriber → stderr
//! ```
//!
//! # Design Decisions
//! - Diagnostics never touch stdout; stdout carries only log lines and utterances
//! - Filter comes from RUST_LOG, falling back to configuration

pub mod logging;

pub use logging::init_tracing;
