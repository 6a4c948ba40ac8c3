use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use tasktrail_api::domain::activity::{ActivityLogEntry, ActivityPayload};
use tasktrail_api::domain::todo::TodoPatch;

/// `POST /api/todos` request body.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodoRequest {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    pub description: Option<String>,
}

/// `PUT /api/todos/{id}` request body. Absent or null fields are left
/// unchanged; a supplied title must still be non-empty.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodoRequest {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub is_complete: Option<bool>,
}

impl UpdateTodoRequest {
    pub fn into_patch(self) -> TodoPatch {
        TodoPatch {
            title: self.title,
            description: self.description,
            is_complete: self.is_complete,
        }
    }
}

/// Query parameters for `GET /api/activity-logs` and its count twin.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityLogQuery {
    pub todo_id: Option<i64>,
    pub limit: Option<i64>,
}

/// Wire shape of one activity log entry. The payload flattens into
/// `action` plus exactly one of `details`/`changes`/`snapshot`
/// (none for Completed/Uncompleted).
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityLogDto {
    pub id: Uuid,
    pub todo_id: i64,
    pub todo_title: String,
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub payload: ActivityPayload,
}

impl From<ActivityLogEntry> for ActivityLogDto {
    fn from(entry: ActivityLogEntry) -> Self {
        Self {
            id: entry.id,
            todo_id: entry.todo_id,
            todo_title: entry.todo_title,
            timestamp: entry.timestamp,
            payload: entry.payload,
        }
    }
}

/// `GET /api/activity-logs/count` response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct CountResponse {
    pub count: i64,
}
