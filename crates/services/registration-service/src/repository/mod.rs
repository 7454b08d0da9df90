//! Repository layer for account persistence.

pub mod entities;
mod account_store;

pub use account_store::{AccountStore, SeaOrmAccountStore};

#[cfg(any(test, feature = "test-utils"))]
pub use account_store::MockAccountStore;
