//! The task entity and its closed label sets.

use chrono::{DateTime, Local};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single to-do item.
///
/// Field names and enum values serialize in the schema of the persisted
/// task list (`isCompleted`, `"Medium"`, `"Personal"`, ...), so saved
/// data round-trips across versions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Immutable, unique across the store.
    pub id: Uuid,
    pub title: String,
    pub is_completed: bool,
    pub creation_date: DateTime<Local>,
    #[serde(default)]
    pub due_date: Option<DateTime<Local>>,
    pub priority: Priority,
    pub category: Category,
    #[serde(default)]
    pub notes: Option<String>,
    /// When true, `reminder_date` is present.
    pub has_reminder: bool,
    #[serde(default)]
    pub reminder_date: Option<DateTime<Local>>,
}

/// Field values for a task about to be created.
#[derive(Debug, Clone, Default)]
pub struct TaskDraft {
    pub title: String,
    pub due_date: Option<DateTime<Local>>,
    pub priority: Priority,
    pub category: Category,
    pub notes: Option<String>,
    pub has_reminder: bool,
    pub reminder_date: Option<DateTime<Local>>,
}

impl Task {
    /// Creates a task from draft fields with a fresh id, the current
    /// instant as creation date, and completion unset.
    pub fn new(draft: TaskDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: draft.title,
            is_completed: false,
            creation_date: Local::now(),
            due_date: draft.due_date,
            priority: draft.priority,
            category: draft.category,
            notes: draft.notes,
            has_reminder: draft.has_reminder,
            reminder_date: draft.reminder_date,
        }
    }
}

/// Task urgency. Presentation metadata only; no predicate depends on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    /// Lookup key into the localized string tables.
    pub fn label_key(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    pub fn color(self) -> Color {
        match self {
            Self::Low => Color::Green,
            Self::Medium => Color::Yellow,
            Self::High => Color::Red,
        }
    }
}

/// Life domain a task belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    #[default]
    Personal,
    Work,
    Shopping,
    Health,
    Education,
    Other,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Personal,
        Category::Work,
        Category::Shopping,
        Category::Health,
        Category::Education,
        Category::Other,
    ];

    /// Lookup key into the localized string tables.
    pub fn label_key(self) -> &'static str {
        match self {
            Self::Personal => "personal",
            Self::Work => "work",
            Self::Shopping => "shopping",
            Self::Health => "health",
            Self::Education => "education",
            Self::Other => "other",
        }
    }

    /// One-cell marker shown next to the task title.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Personal => "●",
            Self::Work => "■",
            Self::Shopping => "▲",
            Self::Health => "♥",
            Self::Education => "▣",
            Self::Other => "○",
        }
    }

    pub fn color(self) -> Color {
        match self {
            Self::Personal => Color::Magenta,
            Self::Work => Color::Blue,
            Self::Shopping => Color::Green,
            Self::Health => Color::LightMagenta,
            Self::Education => Color::Yellow,
            Self::Other => Color::Gray,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_task_defaults() {
        let task = Task::new(TaskDraft {
            title: "Buy milk".to_owned(),
            ..Default::default()
        });
        assert_eq!(task.title, "Buy milk");
        assert!(!task.is_completed);
        assert_eq!(task.priority, Priority::Medium);
        assert_eq!(task.category, Category::Personal);
        assert!(task.due_date.is_none());
        assert!(task.notes.is_none());
        assert!(!task.has_reminder);
        assert!(task.reminder_date.is_none());
    }

    #[test]
    fn fresh_tasks_get_distinct_ids() {
        let a = Task::new(TaskDraft::default());
        let b = Task::new(TaskDraft::default());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn serde_round_trip_with_optionals_absent() {
        let task = Task::new(TaskDraft {
            title: "Report".to_owned(),
            ..Default::default()
        });
        let json = serde_json::to_string(&task).unwrap();
        let restored: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, task);
    }

    #[test]
    fn serde_round_trip_with_optionals_present() {
        let task = Task::new(TaskDraft {
            title: "Dentist".to_owned(),
            due_date: Some(Local::now()),
            priority: Priority::High,
            category: Category::Health,
            notes: Some("ask about the crown".to_owned()),
            has_reminder: true,
            reminder_date: Some(Local::now()),
        });
        let json = serde_json::to_string(&task).unwrap();
        let restored: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, task);
    }

    #[test]
    fn serialized_schema_uses_camel_case_and_pascal_enums() {
        let task = Task::new(TaskDraft {
            title: "x".to_owned(),
            ..Default::default()
        });
        let json = serde_json::to_string(&task).unwrap();
        assert!(json.contains("\"isCompleted\""));
        assert!(json.contains("\"creationDate\""));
        assert!(json.contains("\"hasReminder\""));
        assert!(json.contains("\"Medium\""));
        assert!(json.contains("\"Personal\""));
    }

    #[test]
    fn category_metadata_is_total() {
        for category in Category::ALL {
            assert!(!category.icon().is_empty());
            assert!(!category.label_key().is_empty());
        }
        for priority in Priority::ALL {
            assert!(!priority.label_key().is_empty());
        }
    }
}
