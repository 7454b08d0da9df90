//! Domain-level errors.
//!
//! These errors represent business rule violations and domain logic failures.
//! They are independent of infrastructure concerns (storage, transport).

use thiserror::Error;

/// Domain-specific errors raised while constructing value objects and aggregates.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Email address failed format validation
    #[error("{0}")]
    InvalidEmail(String),

    /// Display name failed validation
    #[error("{0}")]
    InvalidName(String),

    /// Plaintext credential does not meet strength requirements
    #[error("{0}")]
    WeakCredential(String),

    /// Identity string is not a canonical UUID v4
    #[error("{0}")]
    InvalidIdentity(String),

    /// Internal domain error (e.g. the hashing primitive failed)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    /// Create an invalid email error
    pub fn invalid_email(msg: impl Into<String>) -> Self {
        DomainError::InvalidEmail(msg.into())
    }

    /// Create an invalid name error
    pub fn invalid_name(msg: impl Into<String>) -> Self {
        DomainError::InvalidName(msg.into())
    }

    /// Create a weak credential error
    pub fn weak_credential(msg: impl Into<String>) -> Self {
        DomainError::WeakCredential(msg.into())
    }

    /// Create an invalid identity error
    pub fn invalid_identity(msg: impl Into<String>) -> Self {
        DomainError::InvalidIdentity(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        DomainError::Internal(msg.into())
    }

    /// Taxonomy name of this error, as reported to callers.
    pub fn kind(&self) -> &'static str {
        match self {
            DomainError::InvalidEmail(_) => "InvalidEmail",
            DomainError::InvalidName(_) => "InvalidName",
            DomainError::WeakCredential(_) => "WeakCredential",
            DomainError::InvalidIdentity(_) => "InvalidIdentity",
            DomainError::Internal(_) => "InternalError",
        }
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
