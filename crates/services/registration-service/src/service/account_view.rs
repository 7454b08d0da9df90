//! Read-only projection of a registered account.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

use domain::{Account, TIMESTAMP_FORMAT};

/// Account data safe to hand back to callers. Never carries the credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountView {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(serialize_with = "serialize_timestamp")]
    pub created_at: DateTime<Utc>,
}

impl AccountView {
    /// Flat map of `id`, `name`, `email`, `createdAt` (`YYYY-MM-DD HH:MM:SS`, UTC).
    pub fn as_map(&self) -> BTreeMap<&'static str, String> {
        BTreeMap::from([
            ("id", self.id.clone()),
            ("name", self.name.clone()),
            ("email", self.email.clone()),
            ("createdAt", self.created_at_formatted()),
        ])
    }

    pub fn created_at_formatted(&self) -> String {
        self.created_at.format(TIMESTAMP_FORMAT).to_string()
    }
}

fn serialize_timestamp<S: Serializer>(ts: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(&ts.format(TIMESTAMP_FORMAT))
}

impl From<&Account> for AccountView {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id().to_string(),
            name: account.name().to_string(),
            email: account.email().to_string(),
            created_at: account.created_at(),
        }
    }
}
