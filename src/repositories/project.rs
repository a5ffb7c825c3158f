//! Project repository for database operations.

use anyhow::Result;
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait};

use crate::entities::project;
use crate::repositories::GroupRepository;

/// Repository for project-related database operations.
pub struct ProjectRepository;

impl ProjectRepository {
    /// Get a single project by id.
    pub async fn find_by_id<C>(conn: &C, id: i32) -> Result<Option<project::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(project::Entity::find_by_id(id).one(conn).await?)
    }

    /// Names of the users that accepted membership of the project's group.
    ///
    /// An unknown project has no accepted users.
    pub async fn accepted_users<C>(conn: &C, project_id: i32) -> Result<Vec<String>>
    where
        C: ConnectionTrait,
    {
        match Self::find_by_id(conn, project_id).await? {
            Some(project) => GroupRepository::accepted_users(conn, project.group_id).await,
            None => Ok(Vec::new()),
        }
    }

    /// Insert a new project.
    pub async fn insert<C>(conn: &C, project: project::ActiveModel) -> Result<project::Model>
    where
        C: ConnectionTrait,
    {
        Ok(project.insert(conn).await?)
    }
}
