//! Ordered label references held by tasks, transactions and notes.
//!
//! The item is the owning side of the edge. There is no foreign key to
//! `labels`; deleting a label rewrites the referencing items.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::ContentType;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "item_labels")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub content_type: ContentType,
    pub item_id: i32,
    pub label_id: i32,
    /// Zero-based position of the label within the item's label list
    pub position: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
