use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The primary todo entity, owned by the entity store.
///
/// `id` is store-assigned and stable for the entity's lifetime.
/// `created_at` is set once at creation and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub is_complete: bool,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a todo. New entities always start incomplete;
/// the store assigns id and creation timestamp.
#[derive(Debug, Clone)]
pub struct NewTodo {
    pub title: String,
    pub description: Option<String>,
}

/// Partial update. `None` means "leave the field unchanged" — a field
/// absent from the request never shows up as a change downstream.
#[derive(Debug, Clone, Default)]
pub struct TodoPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub is_complete: Option<bool>,
}

impl Todo {
    /// Apply only the fields the patch actually supplies.
    pub fn apply(&mut self, patch: TodoPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
        if let Some(is_complete) = patch.is_complete {
            self.is_complete = is_complete;
        }
    }
}
