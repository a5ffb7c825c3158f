#![allow(dead_code)]

use bujo_labels::entities::{group, item_label, note, project, task, transaction, ContentType};
use bujo_labels::repositories::{
    GroupRepository, ItemLabelRepository, NoteRepository, ProjectRepository, TaskRepository, TransactionRepository,
};
use bujo_labels::storage::LocalStorage;
use bujo_labels::LabelService;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

/// More items than SQLite accepts bound parameters in one statement.
pub const MORE_THAN_SQL_VARIABLES: usize = 33_000;

pub struct Fixture {
    pub storage: LocalStorage,
    pub service: LabelService,
}

impl Fixture {
    pub async fn new() -> Self {
        let storage = LocalStorage::in_memory().await.unwrap();
        let service = LabelService::new(storage.conn.clone());
        Self { storage, service }
    }

    pub fn conn(&self) -> &DatabaseConnection {
        &self.storage.conn
    }

    /// Group owned by `owner` with the given (member, accepted) pairs, and one project in it.
    pub async fn project(&self, owner: &str, members: &[(&str, bool)]) -> i32 {
        let group = GroupRepository::insert(
            self.conn(),
            group::ActiveModel {
                id: ActiveValue::NotSet,
                name: ActiveValue::Set(format!("{}'s group", owner)),
                owner: ActiveValue::Set(owner.to_string()),
            },
        )
        .await
        .unwrap();

        for (member, accepted) in members {
            GroupRepository::add_member(self.conn(), group.id, member, *accepted)
                .await
                .unwrap();
        }

        ProjectRepository::insert(
            self.conn(),
            project::ActiveModel {
                id: ActiveValue::NotSet,
                name: ActiveValue::Set("journal".to_string()),
                owner: ActiveValue::Set(owner.to_string()),
                group_id: ActiveValue::Set(group.id),
            },
        )
        .await
        .unwrap()
        .id
    }

    pub async fn task(&self, project_id: i32, name: &str, due: Option<NaiveDate>, assignees: &[&str], labels: &[i32]) -> i32 {
        let assignees: Vec<String> = assignees.iter().map(|a| a.to_string()).collect();
        let task = TaskRepository::insert(
            self.conn(),
            task::ActiveModel {
                id: ActiveValue::NotSet,
                project_id: ActiveValue::Set(project_id),
                owner: ActiveValue::Set("alice".to_string()),
                name: ActiveValue::Set(name.to_string()),
                due_date: ActiveValue::Set(due),
                due_time: ActiveValue::Set(None),
                assignees: ActiveValue::Set(serde_json::to_string(&assignees).unwrap()),
                created_at: ActiveValue::Set(utc(2024, 1, 1, 8)),
            },
        )
        .await
        .unwrap();
        ItemLabelRepository::set_labels(self.conn(), ContentType::Task, task.id, labels)
            .await
            .unwrap();
        task.id
    }

    pub async fn transaction(&self, project_id: i32, name: &str, date: NaiveDate, labels: &[i32]) -> i32 {
        let transaction = TransactionRepository::insert(
            self.conn(),
            transaction::ActiveModel {
                id: ActiveValue::NotSet,
                project_id: ActiveValue::Set(project_id),
                owner: ActiveValue::Set("alice".to_string()),
                name: ActiveValue::Set(name.to_string()),
                amount: ActiveValue::Set(12.5),
                date: ActiveValue::Set(date),
            },
        )
        .await
        .unwrap();
        ItemLabelRepository::set_labels(self.conn(), ContentType::Transaction, transaction.id, labels)
            .await
            .unwrap();
        transaction.id
    }

    pub async fn note(&self, project_id: i32, name: &str, updated_at: DateTime<Utc>, labels: &[i32]) -> i32 {
        let note = NoteRepository::insert(
            self.conn(),
            note::ActiveModel {
                id: ActiveValue::NotSet,
                project_id: ActiveValue::Set(project_id),
                owner: ActiveValue::Set("alice".to_string()),
                name: ActiveValue::Set(name.to_string()),
                created_at: ActiveValue::Set(updated_at),
                updated_at: ActiveValue::Set(updated_at),
            },
        )
        .await
        .unwrap();
        ItemLabelRepository::set_labels(self.conn(), ContentType::Note, note.id, labels)
            .await
            .unwrap();
        note.id
    }

    /// Bulk-insert `count` tasks due on 2024-01-01, each carrying only `label_id`.
    pub async fn many_tasks(&self, project_id: i32, count: usize, label_id: i32) {
        let tasks: Vec<task::ActiveModel> = (0..count)
            .map(|i| task::ActiveModel {
                id: ActiveValue::NotSet,
                project_id: ActiveValue::Set(project_id),
                owner: ActiveValue::Set("alice".to_string()),
                name: ActiveValue::Set(format!("bulk {}", i)),
                due_date: ActiveValue::Set(Some(date(2024, 1, 1))),
                due_time: ActiveValue::Set(None),
                assignees: ActiveValue::Set("[]".to_string()),
                created_at: ActiveValue::Set(utc(2024, 1, 1, 8)),
            })
            .collect();
        for chunk in tasks.chunks(1000) {
            task::Entity::insert_many(chunk.to_vec()).exec(self.conn()).await.unwrap();
        }

        let edges: Vec<item_label::ActiveModel> = task::Entity::find()
            .filter(task::Column::ProjectId.eq(project_id))
            .filter(task::Column::Name.starts_with("bulk "))
            .all(self.conn())
            .await
            .unwrap()
            .into_iter()
            .map(|t| item_label::ActiveModel {
                id: ActiveValue::NotSet,
                content_type: ActiveValue::Set(ContentType::Task),
                item_id: ActiveValue::Set(t.id),
                label_id: ActiveValue::Set(label_id),
                position: ActiveValue::Set(0),
            })
            .collect();
        for chunk in edges.chunks(1000) {
            item_label::Entity::insert_many(chunk.to_vec()).exec(self.conn()).await.unwrap();
        }
    }

    pub async fn label_ids_of(&self, content_type: ContentType, item_id: i32) -> Vec<i32> {
        ItemLabelRepository::label_ids_for_items(self.conn(), content_type, &[item_id])
            .await
            .unwrap()
            .remove(&item_id)
            .unwrap_or_default()
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn utc(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
}
