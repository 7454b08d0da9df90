//! Account database entity for SeaORM.

use sea_orm::entity::prelude::*;

use common::StoreError;
use domain::{Account, Credential, DisplayName, EmailAddress, Identity};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "accounts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    /// Email as entered by the user
    pub email: String,
    /// Lowercased email; carries the uniqueness constraint
    #[sea_orm(unique)]
    pub email_normalized: String,
    pub credential_hash: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain aggregate, re-validating every field
impl TryFrom<Model> for Account {
    type Error = StoreError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let corrupt = |field: &str, e: domain::DomainError| {
            StoreError::corrupt(format!("account {} has invalid {}: {}", model.id, field, e))
        };

        let id = Identity::from_uuid(model.id).map_err(|e| corrupt("id", e))?;
        let name = DisplayName::new(&model.name).map_err(|e| corrupt("name", e))?;
        let email = EmailAddress::new(&model.email).map_err(|e| corrupt("email", e))?;
        let credential = Credential::from_hash(model.credential_hash.clone())
            .map_err(|e| corrupt("credential", e))?;

        Ok(Account::restore(id, name, email, credential, model.created_at))
    }
}

impl From<&Account> for ActiveModel {
    fn from(account: &Account) -> Self {
        use sea_orm::Set;

        ActiveModel {
            id: Set(account.id().as_uuid()),
            name: Set(account.name().to_string()),
            email: Set(account.email().to_string()),
            email_normalized: Set(account.email().normalized()),
            credential_hash: Set(account.credential().hash_str().to_string()),
            created_at: Set(account.created_at()),
        }
    }
}
