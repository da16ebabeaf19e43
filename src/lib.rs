//! Design pattern walkthrough: a shared-instance logger, a stateless logger
//! and a simple factory producing polymorphic animals.

pub mod config;
pub mod factory;
pub mod logging;
pub mod observability;
pub mod scenario;

pub use config::PatternsConfig;
pub use factory::{Animal, AnimalFactory, FactoryError};
pub use logging::{LogError, LogLevel, SingletonLogger};
