//! Simple animal factory.
//!
//! # Data Flow
//! ```text
//! type name ("dog", "Cat", ...)
//!     → AnimalKind::from_str (case-insensitive)
//!     → AnimalFactory::create_animal
//!     → Box<dyn Animal> → speak() → "woof" / "meow" on stdout
//! ```
//!
//! # Design Decisions
//! - Dispatch goes through a closed `AnimalKind` enum, not string branches
//! - Unknown names surface as `FactoryError::InvalidArgument` to the caller
//! - The factory never logs or retries on a miss

pub mod animal;
pub mod kind;

pub use animal::{Animal, Cat, Dog};
pub use kind::AnimalKind;

use thiserror::Error;

/// Errors returned by the factory.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FactoryError {
    /// The requested type name is not a known animal.
    #[error("invalid animal type: {requested:?}")]
    InvalidArgument { requested: String },
}

/// Maps a type name to a freshly constructed animal.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnimalFactory;

impl AnimalFactory {
    /// Create the animal named by `type_name`, matched case-insensitively.
    pub fn create_animal(type_name: &str) -> Result<Box<dyn Animal>, FactoryError> {
        let kind: AnimalKind = type_name.parse()?;
        tracing::debug!(requested = type_name, kind = ?kind, "animal created");
        Ok(kind.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spoken(animal: &dyn Animal) -> String {
        let mut out = Vec::new();
        animal.speak_to(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_create_dog_any_case() {
        for name in ["dog", "Dog", "DOG", "dOg"] {
            let animal = AnimalFactory::create_animal(name).unwrap();
            assert_eq!(spoken(animal.as_ref()), "woof\n");
        }
    }

    #[test]
    fn test_create_cat_any_case() {
        for name in ["cat", "Cat", "CAT"] {
            let animal = AnimalFactory::create_animal(name).unwrap();
            assert_eq!(spoken(animal.as_ref()), "meow\n");
        }
    }

    #[test]
    fn test_unknown_type_is_invalid_argument() {
        let err = AnimalFactory::create_animal("fish").err().unwrap();
        assert_eq!(
            err,
            FactoryError::InvalidArgument {
                requested: "fish".to_string()
            }
        );
        assert_eq!(err.to_string(), "invalid animal type: \"fish\"");
    }

    #[test]
    fn test_no_trimming_or_partial_match() {
        for name in ["", " dog", "dogs", "ca"] {
            assert!(AnimalFactory::create_animal(name).is_err(), "{name:?}");
        }
    }
}
