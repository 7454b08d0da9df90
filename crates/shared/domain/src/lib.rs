//! Domain layer - Core business entities, value objects and events.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! Every value object validates itself on construction, so an [`Account`]
//! can only ever be assembled from valid parts.

pub mod account;
pub mod constants;
pub mod error;
pub mod events;
pub mod values;

pub use account::Account;
pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use events::{AccountRegistered, DomainEvent, EventKind};
pub use values::{Credential, DisplayName, EmailAddress, Identity};
