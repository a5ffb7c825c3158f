//! Note repository for database operations.

use anyhow::Result;
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::entities::{note, ContentType};
use crate::repositories::ItemLabelRepository;

/// Repository for note-related database operations.
pub struct NoteRepository;

impl NoteRepository {
    /// Get notes referencing any of the given labels.
    pub async fn find_by_label_ids<C>(conn: &C, label_ids: &[i32]) -> Result<Vec<note::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(note::Entity::find()
            .filter(note::Column::Id.in_subquery(ItemLabelRepository::items_with_any_label(ContentType::Note, label_ids)))
            .order_by_asc(note::Column::Id)
            .all(conn)
            .await?)
    }

    /// Insert a new note.
    pub async fn insert<C>(conn: &C, note: note::ActiveModel) -> Result<note::Model>
    where
        C: ConnectionTrait,
    {
        Ok(note.insert(conn).await?)
    }
}
