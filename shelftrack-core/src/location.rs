use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{ValidationError, ValidationResult};

/// `prefix` followed by exactly `digits` decimal digits, any letter case.
fn matches_token(raw: &str, prefix: u8, digits: usize) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() == digits + 1
        && bytes[0].eq_ignore_ascii_case(&prefix)
        && bytes[1..].iter().all(|b| b.is_ascii_digit())
}

/// Home shelf position: `s` plus five digits, canonicalized to lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ShelfLocation(String);

impl ShelfLocation {
    pub fn parse(raw: &str) -> ValidationResult<Self> {
        if !matches_token(raw, b's', 5) {
            return Err(ValidationError::new(
                "Original location must start with a s and include 5 digits after it.",
            ));
        }
        Ok(Self(raw.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShelfLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl TryFrom<String> for ShelfLocation {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ShelfLocation> for String {
    fn from(shelf: ShelfLocation) -> Self {
        shelf.0
    }
}

/// Shopping cart number: `c` plus three digits, canonicalized to lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CartNumber(String);

impl CartNumber {
    pub fn parse(raw: &str) -> ValidationResult<Self> {
        if !matches_token(raw, b'c', 3) {
            return Err(ValidationError::new("Location must be a cart number."));
        }
        Ok(Self(raw.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The bare number, without the `c` prefix.
    pub fn digits(&self) -> &str {
        &self.0[1..]
    }
}

impl fmt::Display for CartNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl TryFrom<String> for CartNumber {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CartNumber> for String {
    fn from(cart: CartNumber) -> Self {
        cart.0
    }
}

/// Where an item currently sits: a shelf, a shopping cart, or sold.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Location {
    Shelf(ShelfLocation),
    Cart(CartNumber),
    Out,
}

impl Location {
    /// Parse a current or destination location: shelf, cart, or the
    /// literal `out` (case-insensitive).
    pub fn parse(raw: &str) -> ValidationResult<Self> {
        Self::classify(raw).ok_or_else(|| {
            ValidationError::new("Current location must be a shelf position, a cart number, or out.")
        })
    }

    /// Parse a movement source. `out` is not a place items move from, so
    /// only shelf and cart tokens are accepted.
    pub fn parse_source(raw: &str) -> ValidationResult<Self> {
        match Self::classify(raw) {
            Some(location) if !location.is_out() => Ok(location),
            _ => Err(ValidationError::new(
                "Current location must be a shelf position, or a cart number.",
            )),
        }
    }

    fn classify(raw: &str) -> Option<Self> {
        if raw.eq_ignore_ascii_case("out") {
            return Some(Self::Out);
        }
        if let Ok(shelf) = ShelfLocation::parse(raw) {
            return Some(Self::Shelf(shelf));
        }
        CartNumber::parse(raw).ok().map(Self::Cart)
    }

    pub fn is_shelf(&self) -> bool {
        matches!(self, Self::Shelf(_))
    }

    pub fn is_cart(&self) -> bool {
        matches!(self, Self::Cart(_))
    }

    pub fn is_out(&self) -> bool {
        matches!(self, Self::Out)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Shelf(shelf) => shelf.as_str(),
            Self::Cart(cart) => cart.as_str(),
            Self::Out => "out",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl From<ShelfLocation> for Location {
    fn from(shelf: ShelfLocation) -> Self {
        Self::Shelf(shelf)
    }
}

impl From<CartNumber> for Location {
    fn from(cart: CartNumber) -> Self {
        Self::Cart(cart)
    }
}

impl TryFrom<String> for Location {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Location> for String {
    fn from(location: Location) -> Self {
        location.as_str().to_owned()
    }
}
