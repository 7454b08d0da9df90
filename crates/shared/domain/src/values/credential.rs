//! Credential value object - strength validation and one-way hashing.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::constants::MIN_CREDENTIAL_LENGTH;
use crate::error::{DomainError, DomainResult};

/// A salted Argon2 hash of an account's password.
///
/// The plaintext is validated for strength and then discarded; only the
/// hash is kept. Comparison is only offered through [`Credential::verify`].
#[derive(Clone)]
pub struct Credential {
    hash: String,
}

// Don't expose hash in debug output
impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl Credential {
    /// Validate the plaintext's strength and hash it.
    ///
    /// # Errors
    /// Returns [`DomainError::WeakCredential`] naming the first unmet rule:
    /// minimum length, an uppercase letter, a digit, a non-alphanumeric symbol.
    pub fn new(plain_text: &str) -> DomainResult<Self> {
        Self::check_strength(plain_text)?;
        let hash = Self::hash(plain_text)?;
        Ok(Self { hash })
    }

    /// Rehydrate a credential from a stored hash.
    pub fn from_hash(hash: String) -> DomainResult<Self> {
        PasswordHash::new(&hash)
            .map_err(|e| DomainError::internal(format!("Invalid hash format: {}", e)))?;
        Ok(Self { hash })
    }

    /// Stored hash, for persistence only.
    pub fn hash_str(&self) -> &str {
        &self.hash
    }

    /// Check a plaintext against this credential.
    ///
    /// Never fails; an unparseable hash or mismatch both yield `false`.
    pub fn verify(&self, plain_text: &str) -> bool {
        match PasswordHash::new(&self.hash) {
            Ok(parsed) => Self::argon2()
                .verify_password(plain_text.as_bytes(), &parsed)
                .is_ok(),
            Err(_) => false,
        }
    }

    fn check_strength(plain_text: &str) -> DomainResult<()> {
        if plain_text.chars().count() < MIN_CREDENTIAL_LENGTH {
            return Err(DomainError::weak_credential(format!(
                "Password must be at least {} characters long.",
                MIN_CREDENTIAL_LENGTH
            )));
        }
        if !plain_text.chars().any(char::is_uppercase) {
            return Err(DomainError::weak_credential(
                "Password must contain at least one uppercase letter.",
            ));
        }
        if !plain_text.chars().any(|c| c.is_ascii_digit()) {
            return Err(DomainError::weak_credential(
                "Password must contain at least one number.",
            ));
        }
        if plain_text.chars().all(char::is_alphanumeric) {
            return Err(DomainError::weak_credential(
                "Password must contain at least one special character.",
            ));
        }
        Ok(())
    }

    fn hash(plain_text: &str) -> DomainResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Self::argon2()
            .hash_password(plain_text.as_bytes(), &salt)
            .map_err(|e| DomainError::internal(format!("Password hash failed: {}", e)))?;
        Ok(hash.to_string())
    }

    #[inline]
    fn argon2() -> Argon2<'static> {
        Argon2::default()
    }
}
