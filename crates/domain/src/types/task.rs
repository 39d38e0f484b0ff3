//! Task board types

use serde::{Deserialize, Serialize};

use super::{id_format, null_as_default, Priority};
use crate::impl_wire_str_conversions;

/// Task card on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(deserialize_with = "id_format::deserialize")]
    pub id: String,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default)]
    pub task_type: TaskType,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub due_date: Option<String>,
}

/// Kind of work a task represents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskType {
    #[default]
    Email,
    Calendar,
    Excel,
    Research,
    Expense,
    Document,
}

impl TaskType {
    pub const ALL: [Self; 6] =
        [Self::Email, Self::Calendar, Self::Excel, Self::Research, Self::Expense, Self::Document];
}

impl_wire_str_conversions!(TaskType {
    Email => "email",
    Calendar => "calendar",
    Excel => "excel",
    Research => "research",
    Expense => "expense",
    Document => "document",
});

/// Board column. Transitions are free-form; the client enforces no workflow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Todo,
    InValidation,
    Done,
}

impl TaskStatus {
    /// Columns in board order.
    pub const ALL: [Self; 3] = [Self::Todo, Self::InValidation, Self::Done];
}

impl_wire_str_conversions!(TaskStatus {
    Todo => "todo",
    InValidation => "in_validation",
    Done => "done",
});

/// Body of `POST /tasks`
///
/// The client never sends a status: the backend files every new task under
/// [`NewTask::SERVER_DEFAULT_STATUS`]. Empty optional fields are omitted
/// from the body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTask {
    pub title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub task_type: TaskType,
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub due_date: String,
}

impl NewTask {
    /// Status the backend assigns to freshly created tasks.
    pub const SERVER_DEFAULT_STATUS: TaskStatus = TaskStatus::Todo;
}

impl Default for NewTask {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            task_type: TaskType::Email,
            priority: Priority::Medium,
            due_date: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn new_task_body_omits_empty_fields() {
        let task = NewTask {
            title: "Pay rent".into(),
            task_type: TaskType::Expense,
            priority: Priority::High,
            due_date: "2024-05-01T09:00".into(),
            ..NewTask::default()
        };

        assert_eq!(
            serde_json::to_value(&task).unwrap(),
            json!({
                "title": "Pay rent",
                "task_type": "expense",
                "priority": "high",
                "due_date": "2024-05-01T09:00"
            })
        );
    }

    #[test]
    fn status_wire_strings() {
        assert_eq!(TaskStatus::InValidation.as_str(), "in_validation");
        assert_eq!("done".parse::<TaskStatus>().unwrap(), TaskStatus::Done);
        let status: TaskStatus = serde_json::from_value(json!("in_validation")).unwrap();
        assert_eq!(status, TaskStatus::InValidation);
    }

    #[test]
    fn task_defaults_when_fields_missing() {
        let task: Task = serde_json::from_value(json!({"id": "t1", "title": "Call bank"})).unwrap();
        assert_eq!(task.status, TaskStatus::Todo);
        assert_eq!(task.priority, Priority::Medium);
        assert_eq!(task.due_date, None);
    }
}
