//! User alias repository for database operations.

use anyhow::Result;
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter};

use crate::entities::user_alias;

/// Repository for the display aliases a user assigns to other users.
pub struct AliasRepository;

impl AliasRepository {
    /// All aliases defined by `owner`.
    pub async fn find_by_owner<C>(conn: &C, owner: &str) -> Result<Vec<user_alias::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(user_alias::Entity::find()
            .filter(user_alias::Column::Owner.eq(owner))
            .all(conn)
            .await?)
    }

    /// Set the alias `owner` uses for `username`, replacing any previous one.
    pub async fn set_alias<C>(conn: &C, owner: &str, username: &str, alias: &str) -> Result<user_alias::Model>
    where
        C: ConnectionTrait,
    {
        let existing = user_alias::Entity::find()
            .filter(user_alias::Column::Owner.eq(owner))
            .filter(user_alias::Column::Username.eq(username))
            .one(conn)
            .await?;

        let model = match existing {
            Some(existing) => {
                let mut active: user_alias::ActiveModel = existing.into();
                active.alias = ActiveValue::Set(alias.to_string());
                active.update(conn).await?
            }
            None => {
                user_alias::ActiveModel {
                    id: ActiveValue::NotSet,
                    owner: ActiveValue::Set(owner.to_string()),
                    username: ActiveValue::Set(username.to_string()),
                    alias: ActiveValue::Set(alias.to_string()),
                }
                .insert(conn)
                .await?
            }
        };
        Ok(model)
    }
}
