//! Recognized animal types.

use std::fmt;
use std::str::FromStr;

use crate::factory::{Animal, Cat, Dog, FactoryError};

/// The closed set of animals the factory can build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimalKind {
    Dog,
    Cat,
}

impl AnimalKind {
    pub const ALL: [AnimalKind; 2] = [AnimalKind::Dog, AnimalKind::Cat];

    /// Lowercase type name accepted by the factory.
    pub fn name(self) -> &'static str {
        match self {
            AnimalKind::Dog => "dog",
            AnimalKind::Cat => "cat",
        }
    }

    /// Construct a fresh animal of this kind.
    pub fn build(self) -> Box<dyn Animal> {
        match self {
            AnimalKind::Dog => Box::new(Dog),
            AnimalKind::Cat => Box::new(Cat),
        }
    }
}

impl fmt::Display for AnimalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AnimalKind {
    type Err = FactoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AnimalKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| FactoryError::InvalidArgument {
                requested: s.to_string(),
            })
    }
}
