//! Walkthroughs run by the binary.
//!
//! Each walkthrough writes to a caller-supplied sink so the exact output can
//! be checked without a child process.

use std::io::Write;

use thiserror::Error;

use crate::factory::{AnimalFactory, FactoryError};
use crate::logging::{stateless, LogError, LogLevel, SingletonLogger};

/// Errors that stop a walkthrough.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error(transparent)]
    Log(#[from] LogError),

    #[error(transparent)]
    Factory(#[from] FactoryError),

    #[error("console write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Shared-instance comment and warning, then a dog and a cat speak.
pub fn end_to_end<W: Write>(out: &mut W) -> Result<(), ScenarioError> {
    shared_logger(out)?;
    animals(out)
}

/// Shared logger, stateless logger, then the factory.
pub fn tour<W: Write>(out: &mut W) -> Result<(), ScenarioError> {
    shared_logger(out)?;

    stateless::write_to(out, LogLevel::Comment, "Static comment.")?;
    stateless::write_to(out, LogLevel::Warning, "Static warning.")?;

    animals(out)
}

fn shared_logger<W: Write>(out: &mut W) -> Result<(), ScenarioError> {
    let logger = SingletonLogger::instance();
    logger.write_to(out, LogLevel::Comment, "This is a comment.")?;
    logger.write_to(out, LogLevel::Warning, "This is a warning.")?;
    Ok(())
}

fn animals<W: Write>(out: &mut W) -> Result<(), ScenarioError> {
    for name in ["dog", "cat"] {
        let animal = AnimalFactory::create_animal(name)?;
        animal.speak_to(out)?;
    }
    Ok(())
}
