pub mod location;
pub mod tag;

pub use location::{CartNumber, Location, ShelfLocation};
pub use tag::Rfid;

use thiserror::Error;

/// A field or parameter failed its format check.
///
/// The only error kind the domain raises. Every check runs before any
/// mutation, so a failed call leaves state exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ValidationError(String);

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    pub fn message(&self) -> &str {
        &self.0
    }
}

pub type ValidationResult<T> = Result<T, ValidationError>;
