//! Group repository for database operations.

use anyhow::Result;
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::entities::{group, user_group};

/// Repository for groups and their memberships.
pub struct GroupRepository;

impl GroupRepository {
    /// Insert a new group.
    pub async fn insert<C>(conn: &C, group: group::ActiveModel) -> Result<group::Model>
    where
        C: ConnectionTrait,
    {
        Ok(group.insert(conn).await?)
    }

    /// Add `username` to a group, accepted or still pending.
    pub async fn add_member<C>(conn: &C, group_id: i32, username: &str, accepted: bool) -> Result<user_group::Model>
    where
        C: ConnectionTrait,
    {
        let member = user_group::ActiveModel {
            id: ActiveValue::NotSet,
            group_id: ActiveValue::Set(group_id),
            username: ActiveValue::Set(username.to_string()),
            accepted: ActiveValue::Set(accepted),
        };
        Ok(member.insert(conn).await?)
    }

    /// Names of the members that accepted the group invitation.
    pub async fn accepted_users<C>(conn: &C, group_id: i32) -> Result<Vec<String>>
    where
        C: ConnectionTrait,
    {
        Ok(user_group::Entity::find()
            .filter(user_group::Column::GroupId.eq(group_id))
            .filter(user_group::Column::Accepted.eq(true))
            .order_by_asc(user_group::Column::Id)
            .all(conn)
            .await?
            .into_iter()
            .map(|m| m.username)
            .collect())
    }
}
