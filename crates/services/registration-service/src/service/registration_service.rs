//! Registration service - orchestrates account registration.
//!
//! Uniqueness check, aggregate creation, persistence, then event
//! publication. The check and the save are not atomic; the store's own
//! uniqueness constraint is the authority under concurrent registrations.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppError, AppResult, EventBus};
use domain::{Account, AccountRegistered, DomainEvent, EmailAddress};

use crate::repository::AccountStore;
use crate::service::AccountView;

/// Registration service trait for dependency injection.
#[async_trait]
pub trait RegistrationService: Send + Sync {
    /// Register a new account.
    ///
    /// # Errors
    /// - `Validation` for an invalid email, name or weak credential
    /// - `DuplicateAccount` when the email is already registered
    /// - `Persistence` for any store failure, passed through unchanged
    async fn register(&self, name: &str, email: &str, plain_credential: &str)
        -> AppResult<AccountView>;
}

/// Concrete implementation of RegistrationService.
pub struct Registrar {
    store: Arc<dyn AccountStore>,
    events: Arc<EventBus>,
}

impl Registrar {
    /// Create new registration service with its collaborators
    pub fn new(store: Arc<dyn AccountStore>, events: Arc<EventBus>) -> Self {
        Self { store, events }
    }
}

#[async_trait]
impl RegistrationService for Registrar {
    async fn register(
        &self,
        name: &str,
        email: &str,
        plain_credential: &str,
    ) -> AppResult<AccountView> {
        tracing::debug!(email = %email, "Registering account");

        let address = EmailAddress::new(email)?;

        if self.store.find_by_email(&address).await?.is_some() {
            tracing::info!(email = %address, "Registration rejected, email already registered");
            return Err(AppError::duplicate(address.as_str()));
        }

        let account = Account::create(name, email, plain_credential)?;

        // No retry or compensation; store failures surface as-is
        self.store.save(&account).await?;

        let view = AccountView::from(&account);
        tracing::info!(account_id = %account.id(), email = %account.email(), "Account registered");

        // Best-effort notification, the account is already persisted
        let outcome = self
            .events
            .publish(&DomainEvent::from(AccountRegistered::new(account)));
        if outcome.failed > 0 {
            tracing::warn!(
                account_id = %view.id,
                failed = outcome.failed,
                "Some AccountRegistered handlers failed"
            );
        }

        Ok(view)
    }
}
