//! Self-validating value objects.
//!
//! Each constructor either returns a fully valid, immutable instance or a
//! [`DomainError`](crate::DomainError) carrying a human-readable reason.

mod credential;
mod display_name;
mod email;
mod identity;

pub use credential::Credential;
pub use display_name::DisplayName;
pub use email::EmailAddress;
pub use identity::Identity;
