//! Account aggregate root.

use chrono::{DateTime, Utc};

use crate::error::DomainResult;
use crate::values::{Credential, DisplayName, EmailAddress, Identity};

/// Registered account.
///
/// Built only through [`Account::create`] (new registrations) or
/// [`Account::restore`] (rehydration from storage), both of which require
/// already-validated value objects. Fields are private and never mutated.
#[derive(Debug, Clone)]
pub struct Account {
    id: Identity,
    name: DisplayName,
    email: EmailAddress,
    credential: Credential,
    created_at: DateTime<Utc>,
}

impl Account {
    /// Create a new account from raw input.
    ///
    /// Validates email, then name, then credential, and fails with the first
    /// error encountered. On success a fresh identity is generated and the
    /// creation time is stamped.
    pub fn create(name: &str, email: &str, plain_credential: &str) -> DomainResult<Self> {
        let email = EmailAddress::new(email)?;
        let name = DisplayName::new(name)?;
        let credential = Credential::new(plain_credential)?;

        Ok(Self {
            id: Identity::generate(),
            name,
            email,
            credential,
            created_at: Utc::now(),
        })
    }

    /// Reassemble an account from stored parts.
    pub fn restore(
        id: Identity,
        name: DisplayName,
        email: EmailAddress,
        credential: Credential,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            email,
            credential,
            created_at,
        }
    }

    pub fn id(&self) -> &Identity {
        &self.id
    }

    pub fn name(&self) -> &DisplayName {
        &self.name
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
