/// Todo model
///
/// Todos exist only inside their owning user's list; they are created through
/// the store, mutated in place by the update/mark-done operations, and
/// removed by explicit deletion.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Todo record
///
/// `done` only ever transitions false → true; `id` and `created_at` are
/// immutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Todo {
    /// Unique todo ID (UUID v4), generated at creation
    pub id: Uuid,

    /// Title, mutable via update
    pub title: String,

    /// Deadline, mutable via update
    pub deadline: DateTime<Utc>,

    /// Completion flag, settable once via mark-done
    pub done: bool,

    /// Creation timestamp, immutable
    pub created_at: DateTime<Utc>,
}

/// Input for creating a new todo
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    /// Title
    pub title: String,

    /// Deadline (RFC 3339 on the wire)
    pub deadline: DateTime<Utc>,
}

/// Input for updating an existing todo
///
/// Both fields are overwritten unconditionally; there is no partial update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTodo {
    /// New title
    pub title: String,

    /// New deadline
    pub deadline: DateTime<Utc>,
}

impl Todo {
    /// Creates a new todo with a fresh ID, `done = false` and
    /// `created_at = now`
    pub fn new(data: CreateTodo) -> Self {
        Todo {
            id: Uuid::new_v4(),
            title: data.title,
            deadline: data.deadline,
            done: false,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_todo_defaults() {
        let todo = Todo::new(CreateTodo {
            title: "Write report".to_string(),
            deadline: Utc::now(),
        });

        assert_eq!(todo.title, "Write report");
        assert!(!todo.done);
    }

    #[test]
    fn test_todo_serialization_field_names() {
        let todo = Todo::new(CreateTodo {
            title: "Ship it".to_string(),
            deadline: Utc::now(),
        });

        let json = serde_json::to_string(&todo).unwrap();
        assert!(json.contains("\"title\":\"Ship it\""));
        assert!(json.contains("\"done\":false"));
        assert!(json.contains("\"created_at\""));
        assert!(json.contains("\"deadline\""));
    }
}
