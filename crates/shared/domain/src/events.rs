//! Domain events broadcast after state changes.

use chrono::{DateTime, Utc};

use crate::account::Account;
use crate::constants::EVENT_ACCOUNT_REGISTERED;

/// Kinds of domain events, used as subscription keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    AccountRegistered,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::AccountRegistered => EVENT_ACCOUNT_REGISTERED,
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EventKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            EVENT_ACCOUNT_REGISTERED => Ok(EventKind::AccountRegistered),
            other => Err(format!("Unknown event kind: {}", other)),
        }
    }
}

/// A new account was registered and persisted.
///
/// The occurrence time is captured when the event is built and is
/// independent of the account's creation time.
#[derive(Debug, Clone)]
pub struct AccountRegistered {
    account: Account,
    occurred_at: DateTime<Utc>,
}

impl AccountRegistered {
    pub fn new(account: Account) -> Self {
        Self {
            account,
            occurred_at: Utc::now(),
        }
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}

/// Envelope for every domain event the bus can carry.
#[derive(Debug, Clone)]
pub enum DomainEvent {
    AccountRegistered(AccountRegistered),
}

impl DomainEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            DomainEvent::AccountRegistered(_) => EventKind::AccountRegistered,
        }
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            DomainEvent::AccountRegistered(e) => e.occurred_at(),
        }
    }
}

impl From<AccountRegistered> for DomainEvent {
    fn from(event: AccountRegistered) -> Self {
        DomainEvent::AccountRegistered(event)
    }
}
