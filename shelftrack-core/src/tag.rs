use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{ValidationError, ValidationResult};

/// 9-character hexadecimal RFID tag, canonicalized to uppercase.
///
/// Tags order lexicographically. The same tag may appear on more than one
/// physical item; each record is tracked independently.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rfid(String);

impl Rfid {
    pub fn parse(raw: &str) -> ValidationResult<Self> {
        if raw.len() != 9 || !raw.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ValidationError::new(
                "RFID must be a 9-character hexadecimal string including 0 - 9 or A - F.",
            ));
        }
        Ok(Self(raw.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Rfid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl FromStr for Rfid {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Rfid {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Rfid> for String {
    fn from(tag: Rfid) -> Self {
        tag.0
    }
}
