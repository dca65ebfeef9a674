use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A single dashboard entry. The persisted form uses camelCase keys
/// (`createdAt`).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub text: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// New pending task with a fresh random id and the current time. Ids
    /// stay distinct even for tasks created in the same instant.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: text.into(),
            completed: false,
            created_at: Utc::now(),
        }
    }
}

/// Summary counts shown in the dashboard header. Always recomputed from the
/// live list, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_task_is_pending() {
        let task = Task::new("Buy milk");
        assert_eq!(task.text, "Buy milk");
        assert!(!task.completed);
        assert!(!task.id.is_empty());
    }

    #[test]
    fn test_new_tasks_get_distinct_ids() {
        // Created back to back, well inside any clock granularity.
        let a = Task::new("a");
        let b = Task::new("b");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_persisted_form_uses_camel_case() {
        let task = Task::new("Walk dog");
        let value = serde_json::to_value(&task).unwrap();
        assert!(value.get("createdAt").is_some(), "expected createdAt key, got {}", value);
        assert!(value.get("created_at").is_none());
        assert_eq!(value.get("text").unwrap(), "Walk dog");
    }

    #[test]
    fn test_serde_round_trip_is_lossless() {
        let task = Task::new("Water plants");
        let json = serde_json::to_string(&task).unwrap();
        let back: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(back, task);
    }
}
