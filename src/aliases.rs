//! Display aliases for users.

use std::collections::HashMap;

use async_trait::async_trait;
use sea_orm::DatabaseTransaction;

use crate::error::Result;
use crate::repositories::AliasRepository;

/// Source of the aliases a user sees for other users.
#[async_trait]
pub trait AliasProvider: Send + Sync {
    /// Map of user name to the alias `user` has chosen for them.
    async fn get_aliases(&self, txn: &DatabaseTransaction, user: &str) -> Result<HashMap<String, String>>;
}

/// Aliases stored in the `user_aliases` table.
#[derive(Clone, Copy, Debug, Default)]
pub struct StoredAliases;

#[async_trait]
impl AliasProvider for StoredAliases {
    async fn get_aliases(&self, txn: &DatabaseTransaction, user: &str) -> Result<HashMap<String, String>> {
        Ok(AliasRepository::find_by_owner(txn, user)
            .await?
            .into_iter()
            .map(|a| (a.username, a.alias))
            .collect())
    }
}
