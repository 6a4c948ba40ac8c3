use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::todo::Todo;

/// A single field-level difference between two states of a todo.
///
/// Values are carried as text regardless of the source field type;
/// `from`/`to` are `None` only for an unset description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldChange {
    pub field: String,
    pub from: Option<String>,
    pub to: Option<String>,
}

/// Creation-time detail captured alongside a `Created` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedDetails {
    pub description: Option<String>,
    pub is_complete: bool,
}

/// Full entity state captured at the moment of deletion. Kept in the
/// log so the entry stays meaningful after the todo itself is gone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoSnapshot {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub is_complete: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&Todo> for TodoSnapshot {
    fn from(todo: &Todo) -> Self {
        Self {
            id: todo.id,
            title: todo.title.clone(),
            description: todo.description.clone(),
            is_complete: todo.is_complete,
            created_at: todo.created_at,
        }
    }
}

/// Action kind plus its action-specific payload, as one tagged union.
///
/// Internally tagged on `action` so the serialized form is the flat
/// `{"action": "...", "details"/"changes"/"snapshot": ...}` shape the
/// HTTP surface exposes. `Completed`/`Uncompleted` carry no payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action")]
pub enum ActivityPayload {
    Created { details: CreatedDetails },
    Updated { changes: Vec<FieldChange> },
    Completed,
    Uncompleted,
    Deleted { snapshot: TodoSnapshot },
}

impl ActivityPayload {
    /// Build the payload for a freshly created todo.
    pub fn created(todo: &Todo) -> Self {
        Self::Created {
            details: CreatedDetails {
                description: todo.description.clone(),
                is_complete: todo.is_complete,
            },
        }
    }

    /// Build the payload for a deleted todo from its pre-deletion state.
    pub fn deleted(todo: &Todo) -> Self {
        Self::Deleted {
            snapshot: TodoSnapshot::from(todo),
        }
    }

    /// The action name as it appears on the wire and in the log store.
    pub fn action(&self) -> &'static str {
        match self {
            Self::Created { .. } => "Created",
            Self::Updated { .. } => "Updated",
            Self::Completed => "Completed",
            Self::Uncompleted => "Uncompleted",
            Self::Deleted { .. } => "Deleted",
        }
    }
}

/// An immutable audit entry. Entries are append-only and have their
/// own id space, independent of the todo they reference — no
/// referential integrity is enforced and entries outlive deletion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityLogEntry {
    pub id: Uuid,
    pub todo_id: i64,
    pub todo_title: String,
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub payload: ActivityPayload,
}

/// Entry data as handed to the log store; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewLogEntry {
    pub todo_id: i64,
    pub todo_title: String,
    pub timestamp: DateTime<Utc>,
    pub payload: ActivityPayload,
}
