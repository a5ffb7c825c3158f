use std::collections::HashMap;

use log::debug;
use sea_orm::{ConnectionTrait, TransactionTrait};

use crate::entities::{note, task, transaction, ContentType};
use crate::error::{Error, Result};
use crate::grouping;
use crate::models::{Note, ProjectItem, ProjectItems, Task, Transaction};
use crate::repositories::{ItemLabelRepository, NoteRepository, ProjectRepository, TaskRepository, TransactionRepository};
use crate::service::LabelService;
use crate::utils::datetime;

impl LabelService {
    /// Project items carrying any of `labels` that `requester` can see,
    /// grouped by date.
    ///
    /// Steps:
    /// 1. Fetch tasks, transactions and notes referencing the labels
    /// 2. Keep items whose project group has `requester` as accepted member
    /// 3. Group each item type by date (notes in `timezone`) and merge
    /// 4. Sort the groups by date ascending
    /// 5. Attach full label data to every item
    ///
    /// # Errors
    /// [`Error::InvalidTimezone`] if `timezone` is not an IANA timezone name.
    pub async fn get_items_by_labels(
        &self,
        timezone: &str,
        labels: &[i32],
        requester: &str,
    ) -> Result<Vec<ProjectItems>> {
        let tz = datetime::parse_timezone(timezone).ok_or_else(|| Error::InvalidTimezone(timezone.to_string()))?;
        if labels.is_empty() {
            return Ok(Vec::new());
        }

        let txn = self.conn.begin().await?;

        let tasks = Self::load_tasks(&txn, TaskRepository::find_by_label_ids(&txn, labels).await?).await?;
        let transactions =
            Self::load_transactions(&txn, TransactionRepository::find_by_label_ids(&txn, labels).await?).await?;
        let notes = Self::load_notes(&txn, NoteRepository::find_by_label_ids(&txn, labels).await?).await?;

        // Visibility per project id, shared by the three item types
        let mut visibility: HashMap<i32, bool> = HashMap::new();
        let tasks = Self::filter_visible(&txn, tasks, requester, &mut visibility).await?;
        let transactions = Self::filter_visible(&txn, transactions, requester, &mut visibility).await?;
        let notes = Self::filter_visible(&txn, notes, requester, &mut visibility).await?;
        debug!(
            "Items: {} tasks, {} transactions, {} notes visible to {} for labels {:?}",
            tasks.len(),
            transactions.len(),
            notes.len(),
            requester,
            labels
        );

        let aliases = self.aliases.get_aliases(&txn, requester).await?;

        let mut map = HashMap::new();
        map = grouping::merge_tasks_map(map, grouping::group_tasks_by_date(tasks, self.include_undated), &aliases);
        map = grouping::merge_transactions_map(map, grouping::group_transactions_by_date(transactions));
        map = grouping::merge_notes_map(map, grouping::group_notes_by_date(notes, tz));
        let mut project_items = grouping::sorted_project_items(map);

        Self::attach_labels(&txn, &mut project_items).await?;

        txn.commit().await?;
        Ok(project_items)
    }

    /// Keep the items `requester` may see.
    ///
    /// An item is visible when `requester` is an accepted member of its
    /// project's group. Decisions are memoized per project id in `visibility`.
    async fn filter_visible<C, T>(
        conn: &C,
        items: Vec<T>,
        requester: &str,
        visibility: &mut HashMap<i32, bool>,
    ) -> Result<Vec<T>>
    where
        C: ConnectionTrait,
        T: ProjectItem,
    {
        let mut visible = Vec::with_capacity(items.len());
        for item in items {
            let project_id = item.project_id();
            let allowed = match visibility.get(&project_id) {
                Some(allowed) => *allowed,
                None => {
                    let allowed = ProjectRepository::accepted_users(conn, project_id)
                        .await?
                        .iter()
                        .any(|user| user == requester);
                    visibility.insert(project_id, allowed);
                    allowed
                }
            };

            if allowed {
                visible.push(item);
            }
        }
        Ok(visible)
    }

    async fn load_tasks<C>(conn: &C, models: Vec<task::Model>) -> Result<Vec<Task>>
    where
        C: ConnectionTrait,
    {
        let ids: Vec<i32> = models.iter().map(|m| m.id).collect();
        let mut label_ids = ItemLabelRepository::label_ids_for_items(conn, ContentType::Task, &ids).await?;
        Ok(models
            .into_iter()
            .map(|m| {
                let labels = label_ids.remove(&m.id).unwrap_or_default();
                Task::new(m, labels)
            })
            .collect())
    }

    async fn load_transactions<C>(conn: &C, models: Vec<transaction::Model>) -> Result<Vec<Transaction>>
    where
        C: ConnectionTrait,
    {
        let ids: Vec<i32> = models.iter().map(|m| m.id).collect();
        let mut label_ids = ItemLabelRepository::label_ids_for_items(conn, ContentType::Transaction, &ids).await?;
        Ok(models
            .into_iter()
            .map(|m| {
                let labels = label_ids.remove(&m.id).unwrap_or_default();
                Transaction::new(m, labels)
            })
            .collect())
    }

    async fn load_notes<C>(conn: &C, models: Vec<note::Model>) -> Result<Vec<Note>>
    where
        C: ConnectionTrait,
    {
        let ids: Vec<i32> = models.iter().map(|m| m.id).collect();
        let mut label_ids = ItemLabelRepository::label_ids_for_items(conn, ContentType::Note, &ids).await?;
        Ok(models
            .into_iter()
            .map(|m| {
                let labels = label_ids.remove(&m.id).unwrap_or_default();
                Note::new(m, labels)
            })
            .collect())
    }
}
