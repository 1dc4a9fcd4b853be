//! Frontend Models
//!
//! Data structures matching the REST API payloads.

use std::fmt::Display;

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use serde::{Deserialize, Deserializer, Serialize};

/// Task identifier (server-assigned)
pub type TaskId = i64;

/// Current user as returned by `GET /auth/users/me`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: Option<i64>,
    pub email: String,
}

/// Task data structure (matches backend `TaskOut`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub is_done: bool,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub created_at: NaiveDateTime,
}

impl Task {
    /// Creation time in the browser's local zone, formatted for the task table
    pub fn created_label(&self) -> String {
        self.created_label_in(&Local)
    }

    /// `created_at` is UTC; render it in `zone`.
    pub fn created_label_in<Tz>(&self, zone: &Tz) -> String
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        zone.from_utc_datetime(&self.created_at).format("%d.%m.%Y %H:%M").to_string()
    }
}

/// Editable task fields sent on create and update
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub is_done: bool,
}

impl From<&Task> for TaskDraft {
    fn from(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            is_done: task.is_done,
        }
    }
}

/// One page of results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total: u64,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub size: u32,
}

impl<T> Default for Paginated<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            page: 0,
            size: 0,
        }
    }
}

/// Column the task list is ordered by
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    Title,
    Description,
    IsDone,
    #[default]
    CreatedAt,
}

impl SortBy {
    pub const ALL: [SortBy; 4] = [SortBy::CreatedAt, SortBy::Title, SortBy::Description, SortBy::IsDone];

    /// Wire value, also used as the `<option>` value
    pub fn as_str(self) -> &'static str {
        match self {
            SortBy::Title => "title",
            SortBy::Description => "description",
            SortBy::IsDone => "is_done",
            SortBy::CreatedAt => "created_at",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortBy::Title => "Title",
            SortBy::Description => "Description",
            SortBy::IsDone => "Status",
            SortBy::CreatedAt => "Created",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    /// Anything other than "asc" means descending
    pub fn parse(value: &str) -> Self {
        if value == "asc" {
            SortOrder::Asc
        } else {
            SortOrder::Desc
        }
    }
}

/// Accepts RFC 3339 (with offset) or naive ISO 8601 timestamps.
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {}", raw)))
}

fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Some(with_offset.naive_utc());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn test_task_from_camel_case_json() {
        let json = r#"{"id":7,"title":"Buy milk","description":"2 liters","isDone":true,"createdAt":"2024-03-01T09:30:00.123456"}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id, 7);
        assert!(task.is_done);
        assert_eq!(task.created_label_in(&Utc), "01.03.2024 09:30");
    }

    #[test]
    fn test_task_timestamp_with_offset() {
        let json = r#"{"id":1,"title":"t","description":"d","isDone":false,"createdAt":"2024-03-01T12:00:00+03:00"}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.created_label_in(&Utc), "01.03.2024 09:00");
    }

    #[test]
    fn test_created_label_uses_viewer_zone() {
        let json = r#"{"id":1,"title":"t","description":"d","isDone":false,"createdAt":"2024-03-01T23:30:00Z"}"#;
        let task: Task = serde_json::from_str(json).unwrap();

        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        assert_eq!(task.created_label_in(&tokyo), "02.03.2024 08:30");

        let local = Local.from_utc_datetime(&task.created_at).format("%d.%m.%Y %H:%M").to_string();
        assert_eq!(task.created_label(), local);
    }

    #[test]
    fn test_task_bad_timestamp_rejected() {
        let json = r#"{"id":1,"title":"t","description":"d","isDone":false,"createdAt":"yesterday"}"#;
        assert!(serde_json::from_str::<Task>(json).is_err());
    }

    #[test]
    fn test_draft_serializes_camel_case() {
        let draft = TaskDraft { title: "a".into(), description: "b".into(), is_done: true };
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value, serde_json::json!({"title": "a", "description": "b", "isDone": true}));
    }

    #[test]
    fn test_user_without_id() {
        let user: User = serde_json::from_str(r#"{"email":"a@b.io"}"#).unwrap();
        assert_eq!(user, User { id: None, email: "a@b.io".into() });
    }

    #[test]
    fn test_paginated_page() {
        let json = r#"{"items":[],"total":25,"page":1,"size":10}"#;
        let page: Paginated<Task> = serde_json::from_str(json).unwrap();
        assert_eq!(page.total, 25);
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_sort_wire_values() {
        assert_eq!(SortBy::parse("is_done"), Some(SortBy::IsDone));
        assert_eq!(SortBy::parse("priority"), None);
        assert_eq!(SortOrder::parse("asc"), SortOrder::Asc);
        assert_eq!(SortOrder::parse("desc"), SortOrder::Desc);
        assert_eq!(serde_json::to_value(SortBy::CreatedAt).unwrap(), "created_at");
    }
}
