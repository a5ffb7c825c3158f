//! Presentation models returned by the label service.
//!
//! Tasks, transactions and notes share the [`ProjectItem`] capability: they
//! belong to a project and hold an ordered list of label references that the
//! service resolves into full [`LabelView`]s before returning them.

use chrono::{DateTime, Datelike, NaiveDate, Utc, Weekday};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::entities::{label, note, task, transaction, ContentType};

/// Label as shown to clients.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LabelView {
    pub id: i32,
    pub name: String,
    pub icon: Option<String>,
    pub owner: String,
}

impl From<label::Model> for LabelView {
    fn from(label: label::Model) -> Self {
        Self {
            id: label.id,
            name: label.name,
            icon: label.icon,
            owner: label.owner,
        }
    }
}

/// Optional fields of a label update. `None` leaves the field untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateLabelParams {
    /// New name
    pub value: Option<String>,
    pub icon: Option<String>,
}

/// Shared view over tasks, transactions and notes.
pub trait ProjectItem: Send + Sync {
    fn id(&self) -> i32;

    fn project_id(&self) -> i32;

    fn content_type(&self) -> ContentType;

    /// Referenced label ids, in the item's own order
    fn label_ids(&self) -> &[i32];

    /// Resolved labels; empty until the service attaches them
    fn labels(&self) -> &[LabelView];

    /// Replace the resolved labels. The id list follows the new labels.
    fn set_labels(&mut self, labels: Vec<LabelView>);
}

/// Task assignee with the display alias chosen by the requester.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Assignee {
    pub name: String,
    pub alias: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: i32,
    pub project_id: i32,
    pub owner: String,
    pub name: String,
    pub due_date: Option<NaiveDate>,
    pub due_time: Option<String>,
    pub assignees: Vec<Assignee>,
    pub created_at: DateTime<Utc>,
    pub label_ids: Vec<i32>,
    pub labels: Vec<LabelView>,
}

impl Task {
    pub fn new(model: task::Model, label_ids: Vec<i32>) -> Self {
        // Stored as a JSON array of user names
        let names: Vec<String> = match serde_json::from_str(&model.assignees) {
            Ok(names) => names,
            Err(e) => {
                warn!("Task: {} has unreadable assignees {:?}, ignoring them: {}", model.id, model.assignees, e);
                Vec::new()
            }
        };
        let assignees = names
            .into_iter()
            .map(|name| Assignee {
                alias: name.clone(),
                name,
            })
            .collect();

        Self {
            id: model.id,
            project_id: model.project_id,
            owner: model.owner,
            name: model.name,
            due_date: model.due_date,
            due_time: model.due_time,
            assignees,
            created_at: model.created_at,
            label_ids,
            labels: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i32,
    pub project_id: i32,
    pub owner: String,
    pub name: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub label_ids: Vec<i32>,
    pub labels: Vec<LabelView>,
}

impl Transaction {
    pub fn new(model: transaction::Model, label_ids: Vec<i32>) -> Self {
        Self {
            id: model.id,
            project_id: model.project_id,
            owner: model.owner,
            name: model.name,
            amount: model.amount,
            date: model.date,
            label_ids,
            labels: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: i32,
    pub project_id: i32,
    pub owner: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub label_ids: Vec<i32>,
    pub labels: Vec<LabelView>,
}

impl Note {
    pub fn new(model: note::Model, label_ids: Vec<i32>) -> Self {
        Self {
            id: model.id,
            project_id: model.project_id,
            owner: model.owner,
            name: model.name,
            created_at: model.created_at,
            updated_at: model.updated_at,
            label_ids,
            labels: Vec::new(),
        }
    }
}

impl ProjectItem for Task {
    fn id(&self) -> i32 {
        self.id
    }

    fn project_id(&self) -> i32 {
        self.project_id
    }

    fn content_type(&self) -> ContentType {
        ContentType::Task
    }

    fn label_ids(&self) -> &[i32] {
        &self.label_ids
    }

    fn labels(&self) -> &[LabelView] {
        &self.labels
    }

    fn set_labels(&mut self, labels: Vec<LabelView>) {
        self.label_ids = labels.iter().map(|l| l.id).collect();
        self.labels = labels;
    }
}

impl ProjectItem for Transaction {
    fn id(&self) -> i32 {
        self.id
    }

    fn project_id(&self) -> i32 {
        self.project_id
    }

    fn content_type(&self) -> ContentType {
        ContentType::Transaction
    }

    fn label_ids(&self) -> &[i32] {
        &self.label_ids
    }

    fn labels(&self) -> &[LabelView] {
        &self.labels
    }

    fn set_labels(&mut self, labels: Vec<LabelView>) {
        self.label_ids = labels.iter().map(|l| l.id).collect();
        self.labels = labels;
    }
}

impl ProjectItem for Note {
    fn id(&self) -> i32 {
        self.id
    }

    fn project_id(&self) -> i32 {
        self.project_id
    }

    fn content_type(&self) -> ContentType {
        ContentType::Note
    }

    fn label_ids(&self) -> &[i32] {
        &self.label_ids
    }

    fn labels(&self) -> &[LabelView] {
        &self.labels
    }

    fn set_labels(&mut self, labels: Vec<LabelView>) {
        self.label_ids = labels.iter().map(|l| l.id).collect();
        self.labels = labels;
    }
}

/// Tasks, transactions and notes falling on one calendar date.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectItems {
    pub date: NaiveDate,
    pub day_of_week: Weekday,
    pub tasks: Vec<Task>,
    pub transactions: Vec<Transaction>,
    pub notes: Vec<Note>,
}

impl ProjectItems {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            day_of_week: date.weekday(),
            tasks: Vec::new(),
            transactions: Vec::new(),
            notes: Vec::new(),
        }
    }

    /// Every item of the envelope: tasks, then transactions, then notes.
    pub fn items_mut(&mut self) -> impl Iterator<Item = &mut dyn ProjectItem> + '_ {
        let tasks = self.tasks.iter_mut().map(|t| t as &mut dyn ProjectItem);
        let transactions = self.transactions.iter_mut().map(|t| t as &mut dyn ProjectItem);
        let notes = self.notes.iter_mut().map(|n| n as &mut dyn ProjectItem);
        tasks.chain(transactions).chain(notes)
    }
}
