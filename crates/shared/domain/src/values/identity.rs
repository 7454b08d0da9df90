//! Account identity value object (UUID v4).

use argon2::password_hash::rand_core::{OsRng, RngCore};
use serde::{Deserialize, Serialize};
use uuid::{Uuid, Variant};

use crate::error::{DomainError, DomainResult};

/// Length of the canonical hyphenated UUID text form
const CANONICAL_LEN: usize = 36;

/// Opaque 128-bit account identifier rendered as a canonical UUID v4.
///
/// Generated once at account creation from the OS random source.
/// Uniqueness is probabilistic, not sequence-checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Identity(Uuid);

impl Identity {
    /// Generate a fresh random identity.
    pub fn generate() -> Self {
        let mut bytes = [0u8; 16];
        OsRng.fill_bytes(&mut bytes);

        // Version nibble 0100, variant bits 10xx
        bytes[6] = (bytes[6] & 0x0f) | 0x40;
        bytes[8] = (bytes[8] & 0x3f) | 0x80;

        Self(Uuid::from_bytes(bytes))
    }

    /// Parse an identity from its canonical text form.
    ///
    /// Accepts only the hyphenated 8-4-4-4-12 layout with version 4 and the
    /// RFC 4122 variant. Hex digits may be upper or lower case.
    pub fn parse(value: &str) -> DomainResult<Self> {
        if value.is_empty() {
            return Err(DomainError::invalid_identity("Account ID cannot be empty."));
        }

        let invalid =
            || DomainError::invalid_identity("Invalid account ID format. Expected a valid UUID v4.");

        if value.len() != CANONICAL_LEN {
            return Err(invalid());
        }

        let uuid = Uuid::parse_str(value).map_err(|_| invalid())?;
        if uuid.get_version_num() != 4 || uuid.get_variant() != Variant::RFC4122 {
            return Err(invalid());
        }

        Ok(Self(uuid))
    }

    /// Underlying UUID, for storage mapping.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }

    /// Build from a stored UUID, re-checking version and variant.
    pub fn from_uuid(uuid: Uuid) -> DomainResult<Self> {
        Self::parse(&uuid.hyphenated().to_string())
    }
}

impl std::fmt::Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl TryFrom<String> for Identity {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for Identity {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Identity> for String {
    fn from(id: Identity) -> Self {
        id.to_string()
    }
}
