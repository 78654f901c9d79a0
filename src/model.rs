//! Todo record and request payload types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::ValidationError;

/// A stored todo item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Todo {
    /// Store-assigned identifier, immutable after creation.
    pub id: u64,
    /// Short summary of the task.
    pub title: String,
    /// Optional longer description.
    pub description: Option<String>,
    /// Whether the task is done.
    pub completed: bool,
}

/// Request payload for creating or fully replacing a todo.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewTodo {
    /// Short summary of the task. Must not be empty.
    pub title: String,
    /// Optional longer description.
    #[serde(default)]
    pub description: Option<String>,
    /// Whether the task is done. Defaults to false.
    #[serde(default)]
    pub completed: bool,
}

impl NewTodo {
    /// Validate the payload beyond what deserialization enforces.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.is_empty() {
            return Err(ValidationError {
                field: "title",
                message: "title must not be empty",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_title_is_rejected() {
        let payload = NewTodo {
            title: String::new(),
            description: None,
            completed: false,
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn non_empty_title_is_accepted() {
        let payload = NewTodo {
            title: "Buy milk".to_string(),
            description: Some("2 liters".to_string()),
            completed: false,
        };
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn optional_fields_default() {
        let payload: NewTodo = serde_json::from_str(r#"{"title": "X"}"#).unwrap();
        assert_eq!(payload.title, "X");
        assert_eq!(payload.description, None);
        assert!(!payload.completed);
    }
}
