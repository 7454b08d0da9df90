//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Validation
// =============================================================================

/// Minimum credential length requirement (in characters)
pub const MIN_CREDENTIAL_LENGTH: usize = 8;

/// Minimum display name length requirement (in characters, after trimming)
pub const MIN_NAME_LENGTH: usize = 2;

// =============================================================================
// Formatting
// =============================================================================

/// Timestamp format used by account views and notifications (UTC, second precision)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// =============================================================================
// Events
// =============================================================================

/// Event kind name for a completed registration
pub const EVENT_ACCOUNT_REGISTERED: &str = "AccountRegistered";
