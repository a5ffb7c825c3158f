//! Grouping of project items by calendar date.
//!
//! Each item type is first bucketed into its own date map, then merged into a
//! single map of [`ProjectItems`] envelopes which is finally flattened into a
//! date-ascending list.

use std::collections::HashMap;

use chrono::NaiveDate;
use chrono_tz::Tz;

use crate::models::{Note, ProjectItems, Task, Transaction};
use crate::utils::datetime;

pub type DateMap<T> = HashMap<NaiveDate, Vec<T>>;

/// Bucket tasks by due date.
///
/// Undated tasks are bucketed by their creation date (UTC) when
/// `include_undated` is set and dropped otherwise.
pub fn group_tasks_by_date(tasks: Vec<Task>, include_undated: bool) -> DateMap<Task> {
    let mut map: DateMap<Task> = HashMap::new();
    for task in tasks {
        let key = match task.due_date {
            Some(due) => due,
            None if include_undated => task.created_at.date_naive(),
            None => continue,
        };
        map.entry(key).or_default().push(task);
    }
    map
}

/// Bucket transactions by their own date.
pub fn group_transactions_by_date(transactions: Vec<Transaction>) -> DateMap<Transaction> {
    let mut map: DateMap<Transaction> = HashMap::new();
    for transaction in transactions {
        map.entry(transaction.date).or_default().push(transaction);
    }
    map
}

/// Bucket notes by the date of their last update in `timezone`.
pub fn group_notes_by_date(notes: Vec<Note>, timezone: Tz) -> DateMap<Note> {
    let mut map: DateMap<Note> = HashMap::new();
    for note in notes {
        let key = datetime::date_in_timezone(note.updated_at, timezone);
        map.entry(key).or_default().push(note);
    }
    map
}

/// Merge task buckets, replacing assignee display names with the aliases
/// the requester defined.
pub fn merge_tasks_map(
    mut map: HashMap<NaiveDate, ProjectItems>,
    tasks: DateMap<Task>,
    aliases: &HashMap<String, String>,
) -> HashMap<NaiveDate, ProjectItems> {
    for (date, mut bucket) in tasks {
        for task in &mut bucket {
            for assignee in &mut task.assignees {
                if let Some(alias) = aliases.get(&assignee.name) {
                    assignee.alias = alias.clone();
                }
            }
        }
        map.entry(date)
            .or_insert_with(|| ProjectItems::new(date))
            .tasks
            .extend(bucket);
    }
    map
}

pub fn merge_transactions_map(
    mut map: HashMap<NaiveDate, ProjectItems>,
    transactions: DateMap<Transaction>,
) -> HashMap<NaiveDate, ProjectItems> {
    for (date, bucket) in transactions {
        map.entry(date)
            .or_insert_with(|| ProjectItems::new(date))
            .transactions
            .extend(bucket);
    }
    map
}

pub fn merge_notes_map(
    mut map: HashMap<NaiveDate, ProjectItems>,
    notes: DateMap<Note>,
) -> HashMap<NaiveDate, ProjectItems> {
    for (date, bucket) in notes {
        map.entry(date)
            .or_insert_with(|| ProjectItems::new(date))
            .notes
            .extend(bucket);
    }
    map
}

/// Flatten the merged map into envelopes ordered by date ascending.
pub fn sorted_project_items(map: HashMap<NaiveDate, ProjectItems>) -> Vec<ProjectItems> {
    let mut items: Vec<ProjectItems> = map.into_values().collect();
    items.sort_by_key(|i| i.date);
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn task(id: i32, due: Option<NaiveDate>, assignees: &[&str]) -> Task {
        Task {
            id,
            project_id: 1,
            owner: "alice".to_string(),
            name: format!("task {}", id),
            due_date: due,
            due_time: None,
            assignees: assignees
                .iter()
                .map(|n| crate::models::Assignee {
                    name: n.to_string(),
                    alias: n.to_string(),
                })
                .collect(),
            created_at: Utc.with_ymd_and_hms(2024, 2, 1, 12, 0, 0).unwrap(),
            label_ids: Vec::new(),
            labels: Vec::new(),
        }
    }

    fn note(id: i32, updated_at: chrono::DateTime<Utc>) -> Note {
        Note {
            id,
            project_id: 1,
            owner: "alice".to_string(),
            name: format!("note {}", id),
            created_at: updated_at,
            updated_at,
            label_ids: Vec::new(),
            labels: Vec::new(),
        }
    }

    #[test]
    fn test_undated_tasks_follow_flag() {
        let tasks = vec![task(1, Some(date(2024, 1, 5)), &[]), task(2, None, &[])];

        let with_undated = group_tasks_by_date(tasks.clone(), true);
        assert_eq!(with_undated.len(), 2);
        assert_eq!(with_undated[&date(2024, 2, 1)][0].id, 2);

        let without_undated = group_tasks_by_date(tasks, false);
        assert_eq!(without_undated.len(), 1);
        assert!(without_undated.contains_key(&date(2024, 1, 5)));
    }

    #[test]
    fn test_notes_bucketed_in_timezone() {
        // 2024-01-02 03:00 UTC is still Jan 1st in Los Angeles
        let instant = Utc.with_ymd_and_hms(2024, 1, 2, 3, 0, 0).unwrap();
        let tz = datetime::parse_timezone("America/Los_Angeles").unwrap();

        let map = group_notes_by_date(vec![note(1, instant)], tz);
        assert!(map.contains_key(&date(2024, 1, 1)));

        let map = group_notes_by_date(vec![note(1, instant)], chrono_tz::UTC);
        assert!(map.contains_key(&date(2024, 1, 2)));
    }

    #[test]
    fn test_merge_applies_aliases_and_sorts() {
        let mut aliases = HashMap::new();
        aliases.insert("bob".to_string(), "Bobby".to_string());

        let tasks = group_tasks_by_date(
            vec![
                task(1, Some(date(2024, 1, 3)), &["bob", "carol"]),
                task(2, Some(date(2024, 1, 1)), &[]),
            ],
            true,
        );
        let map = merge_tasks_map(HashMap::new(), tasks, &aliases);

        let transactions = group_transactions_by_date(vec![Transaction {
            id: 7,
            project_id: 1,
            owner: "alice".to_string(),
            name: "coffee".to_string(),
            amount: 3.5,
            date: date(2024, 1, 2),
            label_ids: Vec::new(),
            labels: Vec::new(),
        }]);
        let map = merge_transactions_map(map, transactions);

        let sorted = sorted_project_items(map);
        let dates: Vec<NaiveDate> = sorted.iter().map(|p| p.date).collect();
        assert_eq!(dates, vec![date(2024, 1, 1), date(2024, 1, 2), date(2024, 1, 3)]);

        let assignees = &sorted[2].tasks[0].assignees;
        assert_eq!(assignees[0].alias, "Bobby");
        assert_eq!(assignees[1].alias, "carol");
        assert_eq!(sorted[1].transactions[0].id, 7);
    }
}
