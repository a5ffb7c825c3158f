use std::collections::{HashMap, HashSet};

use log::warn;
use sea_orm::{ConnectionTrait, TransactionTrait};

use crate::error::Result;
use crate::models::{LabelView, ProjectItem, ProjectItems};
use crate::repositories::LabelRepository;
use crate::service::LabelService;

impl LabelService {
    /// Attach full label data to every item of every date group.
    ///
    /// Returns the same groups for chaining.
    pub async fn get_labels_for_project_items(&self, mut project_items: Vec<ProjectItems>) -> Result<Vec<ProjectItems>> {
        let txn = self.conn.begin().await?;
        Self::attach_labels(&txn, &mut project_items).await?;
        txn.commit().await?;
        Ok(project_items)
    }

    /// Attach full label data to a list of items of one type.
    ///
    /// Each item keeps the order of its own label ids. Ids whose label no
    /// longer exists are dropped from the item.
    pub async fn resolve_labels<T>(&self, mut items: Vec<T>) -> Result<Vec<T>>
    where
        T: ProjectItem,
    {
        let txn = self.conn.begin().await?;
        {
            let mut refs: Vec<&mut dyn ProjectItem> = items.iter_mut().map(|i| i as &mut dyn ProjectItem).collect();
            Self::resolve_item_labels(&txn, &mut refs).await?;
        }
        txn.commit().await?;
        Ok(items)
    }

    pub(crate) async fn attach_labels<C>(conn: &C, project_items: &mut [ProjectItems]) -> Result<()>
    where
        C: ConnectionTrait,
    {
        let mut items: Vec<&mut dyn ProjectItem> = project_items.iter_mut().flat_map(|p| p.items_mut()).collect();
        Self::resolve_item_labels(conn, &mut items).await
    }

    async fn resolve_item_labels<C>(conn: &C, items: &mut [&mut dyn ProjectItem]) -> Result<()>
    where
        C: ConnectionTrait,
    {
        // Distinct ids in first-seen order
        let mut seen = HashSet::new();
        let mut label_ids = Vec::new();
        for item in items.iter() {
            for id in item.label_ids() {
                if seen.insert(*id) {
                    label_ids.push(*id);
                }
            }
        }

        let lookup: HashMap<i32, LabelView> = LabelRepository::find_all_by_id(conn, &label_ids)
            .await?
            .into_iter()
            .map(|l| (l.id, LabelView::from(l)))
            .collect();

        for item in items.iter_mut() {
            let mut labels = Vec::with_capacity(item.label_ids().len());
            for id in item.label_ids() {
                match lookup.get(id) {
                    Some(label) => labels.push(label.clone()),
                    None => warn!(
                        "Label: {} {} references missing label {}, dropping it",
                        item.content_type(),
                        item.id(),
                        id
                    ),
                }
            }
            item.set_labels(labels);
        }
        Ok(())
    }
}
