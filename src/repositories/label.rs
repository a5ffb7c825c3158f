//! Label repository for database operations.

use anyhow::Result;
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, ModelTrait, QueryFilter, QueryOrder};

use crate::entities::label;
use crate::repositories::ID_CHUNK_SIZE;

/// Repository for label-related database operations.
pub struct LabelRepository;

impl LabelRepository {
    /// Get a single label by id.
    pub async fn find_by_id<C>(conn: &C, id: i32) -> Result<Option<label::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(label::Entity::find_by_id(id).one(conn).await?)
    }

    /// Get all labels belonging to `owner`, in id order.
    pub async fn find_by_owner<C>(conn: &C, owner: &str) -> Result<Vec<label::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(label::Entity::find()
            .filter(label::Column::Owner.eq(owner))
            .order_by_asc(label::Column::Id)
            .all(conn)
            .await?)
    }

    /// Get the labels of `owner` named exactly `name`.
    pub async fn find_by_name_and_owner<C>(conn: &C, name: &str, owner: &str) -> Result<Vec<label::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(label::Entity::find()
            .filter(label::Column::Name.eq(name))
            .filter(label::Column::Owner.eq(owner))
            .all(conn)
            .await?)
    }

    /// Batch-fetch labels by id.
    ///
    /// The result follows the order of `ids` (first occurrence wins), not the
    /// storage order. Ids without a stored label are skipped.
    pub async fn find_all_by_id<C>(conn: &C, ids: &[i32]) -> Result<Vec<label::Model>>
    where
        C: ConnectionTrait,
    {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut labels = Vec::with_capacity(ids.len());
        for chunk in ids.chunks(ID_CHUNK_SIZE) {
            labels.extend(
                label::Entity::find()
                    .filter(label::Column::Id.is_in(chunk.iter().copied()))
                    .all(conn)
                    .await?,
            );
        }
        labels.sort_by_key(|l| ids.iter().position(|id| *id == l.id).unwrap_or(usize::MAX));
        Ok(labels)
    }

    /// Insert a new label.
    pub async fn insert<C>(conn: &C, label: label::ActiveModel) -> Result<label::Model>
    where
        C: ConnectionTrait,
    {
        Ok(label.insert(conn).await?)
    }

    /// Update a label in the database.
    pub async fn update<C>(conn: &C, label: label::ActiveModel) -> Result<label::Model>
    where
        C: ConnectionTrait,
    {
        Ok(label.update(conn).await?)
    }

    /// Delete a label from the database.
    pub async fn delete<C>(conn: &C, label: label::Model) -> Result<()>
    where
        C: ConnectionTrait,
    {
        label.delete(conn).await?;
        Ok(())
    }
}
