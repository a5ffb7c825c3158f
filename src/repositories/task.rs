//! Task repository for database operations.

use anyhow::Result;
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::entities::{task, ContentType};
use crate::repositories::ItemLabelRepository;

/// Repository for task-related database operations.
pub struct TaskRepository;

impl TaskRepository {
    /// Get a single task by id.
    pub async fn find_by_id<C>(conn: &C, id: i32) -> Result<Option<task::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(task::Entity::find_by_id(id).one(conn).await?)
    }

    /// Get tasks referencing any of the given labels.
    pub async fn find_by_label_ids<C>(conn: &C, label_ids: &[i32]) -> Result<Vec<task::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(task::Entity::find()
            .filter(task::Column::Id.in_subquery(ItemLabelRepository::items_with_any_label(ContentType::Task, label_ids)))
            .order_by_asc(task::Column::Id)
            .all(conn)
            .await?)
    }

    /// Insert a new task.
    pub async fn insert<C>(conn: &C, task: task::ActiveModel) -> Result<task::Model>
    where
        C: ConnectionTrait,
    {
        Ok(task.insert(conn).await?)
    }
}
