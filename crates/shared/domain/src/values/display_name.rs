//! Display name value object.

use serde::{Deserialize, Serialize};

use crate::constants::MIN_NAME_LENGTH;
use crate::error::{DomainError, DomainResult};

/// A person's display name: letters and spaces only, at least two characters.
///
/// Surrounding whitespace is trimmed before validation and is not retained.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DisplayName(String);

impl DisplayName {
    /// Validate and build a display name.
    pub fn new(value: &str) -> DomainResult<Self> {
        let trimmed = value.trim();

        if trimmed.is_empty() {
            return Err(DomainError::invalid_name("Name cannot be empty."));
        }

        if trimmed.chars().count() < MIN_NAME_LENGTH {
            return Err(DomainError::invalid_name(format!(
                "Name must be at least {} characters long.",
                MIN_NAME_LENGTH
            )));
        }

        if !trimmed.chars().all(|c| c.is_alphabetic() || c.is_whitespace()) {
            return Err(DomainError::invalid_name(
                "Name can only contain letters and spaces.",
            ));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DisplayName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for DisplayName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<DisplayName> for String {
    fn from(name: DisplayName) -> Self {
        name.0
    }
}
