//! Unified error taxonomy surfaced to callers.
//!
//! Validation failures come from the domain, duplicate detection from the
//! registration flow, and everything else from the account store.

use domain::DomainError;
use thiserror::Error;

/// Errors raised by account store implementations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The store rejected a write that would break a uniqueness constraint
    #[error("Conflict: {0}")]
    Conflict(String),

    #[cfg(feature = "database")]
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// A stored record no longer passes domain validation
    #[error("Corrupt record: {0}")]
    Corrupt(String),
}

impl StoreError {
    pub fn conflict(detail: impl Into<String>) -> Self {
        StoreError::Conflict(detail.into())
    }

    pub fn corrupt(detail: impl Into<String>) -> Self {
        StoreError::Corrupt(detail.into())
    }
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Application error types returned by registration.
#[derive(Error, Debug)]
pub enum AppError {
    /// Input failed value-object validation
    #[error(transparent)]
    Validation(#[from] DomainError),

    /// An account with this email already exists
    #[error("An account with email {0} already exists")]
    DuplicateAccount(String),

    /// Opaque pass-through from the account store
    #[error("Persistence failure: {0}")]
    Persistence(#[from] StoreError),
}

impl AppError {
    /// Taxonomy name reported to callers
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(e) => e.kind(),
            AppError::DuplicateAccount(_) => "DuplicateAccount",
            AppError::Persistence(_) => "PersistenceFailure",
        }
    }

    /// True when the store itself reported a uniqueness conflict.
    ///
    /// Such failures stay `PersistenceFailure`; this lets callers tell them
    /// apart without inspecting the store error.
    pub fn is_conflict(&self) -> bool {
        matches!(self, AppError::Persistence(StoreError::Conflict(_)))
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(DomainError::Internal(msg)) => {
                tracing::error!("Internal domain error: {}", msg);
                "An internal error occurred".to_string()
            }
            AppError::Validation(e) => e.to_string(),
            AppError::DuplicateAccount(_) => "User with this email already exists".to_string(),
            AppError::Persistence(StoreError::Conflict(detail)) => {
                tracing::warn!("Store conflict: {}", detail);
                "User with this email already exists".to_string()
            }
            AppError::Persistence(e) => {
                tracing::error!("Persistence error: {:?}", e);
                "A database error occurred".to_string()
            }
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn duplicate(email: impl Into<String>) -> Self {
        AppError::DuplicateAccount(email.into())
    }
}
