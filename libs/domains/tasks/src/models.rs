use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Task entity - a single to-do record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Task {
    /// Unique identifier, assigned by the store and never reused
    pub id: u64,
    /// Task title
    pub title: String,
    /// Optional free-form description
    pub description: Option<String>,
    /// Whether the task is completed
    pub completed: bool,
}

/// DTO for creating a new task
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateTask {
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

/// DTO for updating an existing task
///
/// Same field set as [`CreateTask`]: an update replaces the record wholesale,
/// there is no partial-field patch. A field omitted by the caller falls back
/// to the same serde default as on create, not to the stored value.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateTask {
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Replace every mutable field from the update DTO; `id` is never altered.
    pub fn apply_update(&mut self, update: UpdateTask) {
        self.title = update.title;
        self.description = update.description;
        self.completed = update.completed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_update_replaces_all_fields() {
        let mut task = Task {
            id: 1,
            title: "before".to_string(),
            description: Some("old".to_string()),
            completed: false,
        };

        task.apply_update(UpdateTask {
            title: "after".to_string(),
            description: None,
            completed: true,
        });

        assert_eq!(task.id, 1);
        assert_eq!(task.title, "after");
        assert_eq!(task.description, None);
        assert!(task.completed);
    }

    #[test]
    fn test_create_task_defaults() {
        let input: CreateTask = serde_json::from_str(r#"{"title": "A"}"#).unwrap();
        assert_eq!(input.title, "A");
        assert_eq!(input.description, None);
        assert!(!input.completed);
    }

    #[test]
    fn test_task_serializes_null_description() {
        let task = Task {
            id: 1,
            title: "A".to_string(),
            description: None,
            completed: false,
        };
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 1, "title": "A", "description": null, "completed": false})
        );
    }
}
