//! Label service module.
//!
//! [`LabelService`] owns label CRUD and the label-scoped project item query:
//! - `mod.rs`: create, partial update, lookup and cascading delete
//! - `items`: items carrying a set of labels, filtered and grouped by date
//! - `resolve`: attaching full label data to project items
//!
//! Every public operation runs inside one database transaction. Any error
//! returned through `?` drops the transaction before `commit`, which rolls
//! back everything the operation wrote.

pub mod items;
pub mod resolve;

use std::sync::Arc;

use chrono::Utc;
use log::{debug, info};
use sea_orm::{ActiveValue, DatabaseConnection, TransactionTrait};

use crate::aliases::{AliasProvider, StoredAliases};
use crate::authz::{Authorizer, Operation, OwnerAuthorizer};
use crate::entities::{label, ContentType};
use crate::error::{Error, Result};
use crate::models::UpdateLabelParams;
use crate::repositories::{ItemLabelRepository, LabelRepository};

/// Data-access service for labels and the project items that carry them.
///
/// # Example
/// ```rust,no_run
/// use bujo_labels::storage::LocalStorage;
/// use bujo_labels::LabelService;
///
/// # async fn example() -> anyhow::Result<()> {
/// let storage = LocalStorage::in_memory().await?;
/// let service = LabelService::new(storage.conn.clone());
///
/// let label = service.create("errands", "alice", Some("cart".to_string())).await?;
/// let labels = service.get_labels("alice").await?;
/// assert_eq!(labels[0].id, label.id);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct LabelService {
    conn: DatabaseConnection,
    authorizer: Arc<dyn Authorizer>,
    aliases: Arc<dyn AliasProvider>,
    include_undated: bool,
}

impl LabelService {
    /// Service with owner-only authorization and aliases read from storage.
    pub fn new(conn: DatabaseConnection) -> Self {
        Self::with_adapters(conn, Arc::new(OwnerAuthorizer), Arc::new(StoredAliases))
    }

    pub fn with_adapters(
        conn: DatabaseConnection,
        authorizer: Arc<dyn Authorizer>,
        aliases: Arc<dyn AliasProvider>,
    ) -> Self {
        Self {
            conn,
            authorizer,
            aliases,
            include_undated: true,
        }
    }

    /// Whether label queries return tasks without a due date, bucketed by
    /// their creation date. Enabled by default.
    pub fn include_undated_tasks(mut self, include: bool) -> Self {
        self.include_undated = include;
        self
    }

    /// Create a label for `owner`.
    ///
    /// # Errors
    /// [`Error::ResourceAlreadyExists`] if `owner` already has a label named `name`.
    pub async fn create(&self, name: &str, owner: &str, icon: Option<String>) -> Result<label::Model> {
        let txn = self.conn.begin().await?;

        if !LabelRepository::find_by_name_and_owner(&txn, name, owner).await?.is_empty() {
            return Err(Error::label_exists(name));
        }

        let now = Utc::now();
        let label = LabelRepository::insert(
            &txn,
            label::ActiveModel {
                id: ActiveValue::NotSet,
                name: ActiveValue::Set(name.to_string()),
                owner: ActiveValue::Set(owner.to_string()),
                icon: ActiveValue::Set(icon),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
            },
        )
        .await?;

        txn.commit().await?;
        info!("Label: created '{}' ({}) for {}", label.name, label.id, owner);
        Ok(label)
    }

    /// Update the name and/or icon of a label.
    ///
    /// Renaming to the current name returns the label untouched. The name
    /// uniqueness check runs against the labels of `requester`.
    ///
    /// # Errors
    /// - [`Error::ResourceNotFound`] if the label does not exist
    /// - [`Error::Unauthorized`] if the authorizer refuses the update
    /// - [`Error::ResourceAlreadyExists`] if the requester already has a label with the new name
    pub async fn partial_update(
        &self,
        requester: &str,
        label_id: i32,
        params: UpdateLabelParams,
    ) -> Result<label::Model> {
        let txn = self.conn.begin().await?;

        let label = LabelRepository::find_by_id(&txn, label_id)
            .await?
            .ok_or_else(|| Error::label_not_found(label_id))?;

        self.authorizer
            .check_authorized_to_operate_on_content(
                &txn,
                &label.owner,
                requester,
                ContentType::Label,
                Operation::Update,
                label_id,
            )
            .await?;

        if params.value.as_deref() == Some(label.name.as_str()) {
            txn.commit().await?;
            return Ok(label);
        }

        if let Some(name) = params.value.as_deref() {
            if !LabelRepository::find_by_name_and_owner(&txn, name, requester).await?.is_empty() {
                return Err(Error::label_exists(name));
            }
        }

        let mut active: label::ActiveModel = label.into();
        if let Some(name) = params.value {
            active.name = ActiveValue::Set(name);
        }
        if let Some(icon) = params.icon {
            active.icon = ActiveValue::Set(Some(icon));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = LabelRepository::update(&txn, active).await?;
        txn.commit().await?;
        info!("Label: updated {} by {}", label_id, requester);
        Ok(updated)
    }

    /// Get a single label.
    pub async fn get_label(&self, id: i32) -> Result<label::Model> {
        let txn = self.conn.begin().await?;
        let label = LabelRepository::find_by_id(&txn, id)
            .await?
            .ok_or_else(|| Error::label_not_found(id))?;
        txn.commit().await?;
        Ok(label)
    }

    /// All labels of `owner`, most recently updated first.
    pub async fn get_labels(&self, owner: &str) -> Result<Vec<label::Model>> {
        let txn = self.conn.begin().await?;
        let mut labels = LabelRepository::find_by_owner(&txn, owner).await?;
        txn.commit().await?;

        labels.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        debug!("Label: {} labels for {}", labels.len(), owner);
        Ok(labels)
    }

    /// Delete a label and remove it from every task, transaction and note
    /// that references it.
    ///
    /// # Errors
    /// - [`Error::ResourceNotFound`] if the label does not exist
    /// - [`Error::Unauthorized`] if the authorizer refuses the deletion
    pub async fn delete(&self, requester: &str, label_id: i32) -> Result<()> {
        let txn = self.conn.begin().await?;

        let label = LabelRepository::find_by_id(&txn, label_id)
            .await?
            .ok_or_else(|| Error::label_not_found(label_id))?;

        self.authorizer
            .check_authorized_to_operate_on_content(
                &txn,
                &label.owner,
                requester,
                ContentType::Label,
                Operation::Delete,
                label_id,
            )
            .await?;

        LabelRepository::delete(&txn, label).await?;

        let tasks = ItemLabelRepository::remove_label(&txn, ContentType::Task, label_id).await?;
        let transactions = ItemLabelRepository::remove_label(&txn, ContentType::Transaction, label_id).await?;
        let notes = ItemLabelRepository::remove_label(&txn, ContentType::Note, label_id).await?;

        txn.commit().await?;
        info!(
            "Label: deleted {} by {} (detached from {} tasks, {} transactions, {} notes)",
            label_id, requester, tasks, transactions, notes
        );
        Ok(())
    }
}
