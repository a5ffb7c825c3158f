//! Transaction repository for database operations.

use anyhow::Result;
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::entities::{transaction, ContentType};
use crate::repositories::ItemLabelRepository;

/// Repository for transaction-related database operations.
pub struct TransactionRepository;

impl TransactionRepository {
    /// Get transactions referencing any of the given labels.
    pub async fn find_by_label_ids<C>(conn: &C, label_ids: &[i32]) -> Result<Vec<transaction::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(transaction::Entity::find()
            .filter(
                transaction::Column::Id
                    .in_subquery(ItemLabelRepository::items_with_any_label(ContentType::Transaction, label_ids)),
            )
            .order_by_asc(transaction::Column::Id)
            .all(conn)
            .await?)
    }

    /// Insert a new transaction.
    pub async fn insert<C>(conn: &C, transaction: transaction::ActiveModel) -> Result<transaction::Model>
    where
        C: ConnectionTrait,
    {
        Ok(transaction.insert(conn).await?)
    }
}
