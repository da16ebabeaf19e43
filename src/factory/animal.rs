//! Animals produced by the factory.

use std::io::{self, Write};

/// Something that can speak.
pub trait Animal: std::fmt::Debug {
    /// The fixed line this animal utters.
    fn sound(&self) -> &'static str;

    /// Write the utterance as one line to `out`.
    fn speak_to(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", self.sound())
    }

    /// Write the utterance to standard output.
    fn speak(&self) {
        let mut out = io::stdout().lock();
        if let Err(e) = self.speak_to(&mut out) {
            tracing::warn!(error = %e, sound = self.sound(), "could not speak");
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Dog;

impl Animal for Dog {
    fn sound(&self) -> &'static str {
        "woof"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Cat;

impl Animal for Cat {
    fn sound(&self) -> &'static str {
        "meow"
    }
}
