//! Account store capability and its SeaORM implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, SqlErr,
};

use super::entities::account::{self, ActiveModel, Entity as AccountEntity};
use common::{StoreError, StoreResult};
use domain::{Account, EmailAddress, Identity};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Account persistence capability consumed by registration.
///
/// Implementations own their concurrency control and must reject a
/// duplicate email on `save` even when a concurrent registration slipped
/// past the service-level check.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Find account by identity
    async fn find_by_id(&self, id: &Identity) -> StoreResult<Option<Account>>;

    /// Find account by email address (case-insensitive)
    async fn find_by_email(&self, email: &EmailAddress) -> StoreResult<Option<Account>>;

    /// Persist a new account
    async fn save(&self, account: &Account) -> StoreResult<()>;

    /// Delete account by identity; absent accounts are ignored
    async fn delete(&self, id: &Identity) -> StoreResult<()>;
}

/// SeaORM-backed account store
pub struct SeaOrmAccountStore {
    db: DatabaseConnection,
}

impl SeaOrmAccountStore {
    /// Create new store instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Surface unique-constraint violations as the store's conflict signal
fn map_write_err(err: DbErr) -> StoreError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => StoreError::conflict(detail),
        _ => StoreError::Database(err),
    }
}

#[async_trait]
impl AccountStore for SeaOrmAccountStore {
    async fn find_by_id(&self, id: &Identity) -> StoreResult<Option<Account>> {
        AccountEntity::find_by_id(id.as_uuid())
            .one(&self.db)
            .await?
            .map(Account::try_from)
            .transpose()
    }

    async fn find_by_email(&self, email: &EmailAddress) -> StoreResult<Option<Account>> {
        AccountEntity::find()
            .filter(account::Column::EmailNormalized.eq(email.normalized()))
            .one(&self.db)
            .await?
            .map(Account::try_from)
            .transpose()
    }

    async fn save(&self, account: &Account) -> StoreResult<()> {
        ActiveModel::from(account)
            .insert(&self.db)
            .await
            .map_err(map_write_err)?;

        tracing::debug!(account_id = %account.id(), "Account saved");
        Ok(())
    }

    async fn delete(&self, id: &Identity) -> StoreResult<()> {
        let result = AccountEntity::delete_by_id(id.as_uuid())
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            tracing::debug!(account_id = %id, "Delete skipped, account not found");
        }

        Ok(())
    }
}
