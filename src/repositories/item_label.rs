//! Item-label edge repository.

use std::collections::HashMap;

use anyhow::Result;
use sea_orm::sea_query::SelectStatement;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, QueryTrait};

use crate::entities::{item_label, ContentType};
use crate::repositories::ID_CHUNK_SIZE;

/// Repository for the ordered label lists held by tasks, transactions and notes.
pub struct ItemLabelRepository;

impl ItemLabelRepository {
    /// Sub-select of the ids of `content_type` items referencing any of `label_ids`.
    ///
    /// Meant to be fed to `Column::Id.in_subquery(..)` of the item entity.
    pub fn items_with_any_label(content_type: ContentType, label_ids: &[i32]) -> SelectStatement {
        item_label::Entity::find()
            .filter(item_label::Column::ContentType.eq(content_type))
            .filter(item_label::Column::LabelId.is_in(label_ids.iter().copied()))
            .select_only()
            .column(item_label::Column::ItemId)
            .into_query()
    }

    /// Label ids of each item, keyed by item id, in list order.
    ///
    /// Items without labels are absent from the map.
    pub async fn label_ids_for_items<C>(
        conn: &C,
        content_type: ContentType,
        item_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<i32>>>
    where
        C: ConnectionTrait,
    {
        let mut result: HashMap<i32, Vec<i32>> = HashMap::new();
        if item_ids.is_empty() {
            return Ok(result);
        }

        for chunk in item_ids.chunks(ID_CHUNK_SIZE) {
            let rows = item_label::Entity::find()
                .filter(item_label::Column::ContentType.eq(content_type))
                .filter(item_label::Column::ItemId.is_in(chunk.iter().copied()))
                .order_by_asc(item_label::Column::ItemId)
                .order_by_asc(item_label::Column::Position)
                .all(conn)
                .await?;

            for row in rows {
                result.entry(row.item_id).or_default().push(row.label_id);
            }
        }
        Ok(result)
    }

    /// Replace the label list of one item.
    pub async fn set_labels<C>(conn: &C, content_type: ContentType, item_id: i32, label_ids: &[i32]) -> Result<()>
    where
        C: ConnectionTrait,
    {
        item_label::Entity::delete_many()
            .filter(item_label::Column::ContentType.eq(content_type))
            .filter(item_label::Column::ItemId.eq(item_id))
            .exec(conn)
            .await?;

        if label_ids.is_empty() {
            return Ok(());
        }

        let rows = label_ids.iter().enumerate().map(|(position, label_id)| item_label::ActiveModel {
            id: ActiveValue::NotSet,
            content_type: ActiveValue::Set(content_type),
            item_id: ActiveValue::Set(item_id),
            label_id: ActiveValue::Set(*label_id),
            position: ActiveValue::Set(position as i32),
        });
        item_label::Entity::insert_many(rows).exec(conn).await?;
        Ok(())
    }

    /// Remove `label_id` from the label list of every `content_type` item.
    ///
    /// The remaining references keep their positions, so each item's order is
    /// unchanged. Returns the number of items the label was removed from.
    pub async fn remove_label<C>(conn: &C, content_type: ContentType, label_id: i32) -> Result<u64>
    where
        C: ConnectionTrait,
    {
        let result = item_label::Entity::delete_many()
            .filter(item_label::Column::ContentType.eq(content_type))
            .filter(item_label::Column::LabelId.eq(label_id))
            .exec(conn)
            .await?;
        Ok(result.rows_affected)
    }
}
