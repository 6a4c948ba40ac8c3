//! Todo CRUD handlers. This is the only place that sequences the dual
//! write: the entity store mutation first, then the activity log
//! entry. The two stores share no transaction, so the log write is
//! treated as best-effort — a failure is logged and the primary
//! mutation's response still succeeds.

use axum::extract::{Path, State};
use axum::http::header::{self, HeaderName};
use axum::http::StatusCode;
use axum::response::AppendHeaders;
use axum::Json;
use validator::Validate;

use tasktrail_api::domain::todo::{NewTodo, Todo};

use crate::dto::{CreateTodoRequest, UpdateTodoRequest};
use crate::error::AppError;
use crate::state::AppState;

/// `GET /api/todos` — all todos, newest first.
pub async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<Todo>>, AppError> {
    Ok(Json(state.todos.list_all().await?))
}

/// `GET /api/todos/{id}`
pub async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Todo>, AppError> {
    let todo = state
        .todos
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("todo {id}")))?;
    Ok(Json(todo))
}

/// `POST /api/todos` — create, then mirror a Created entry into the log.
pub async fn create_todo(
    State(state): State<AppState>,
    Json(req): Json<CreateTodoRequest>,
) -> Result<
    (
        StatusCode,
        AppendHeaders<[(HeaderName, String); 1]>,
        Json<Todo>,
    ),
    AppError,
> {
    req.validate()
        .map_err(|err| AppError::validation(err.to_string()))?;

    let todo = state
        .todos
        .create(NewTodo {
            title: req.title,
            description: req.description,
        })
        .await?;

    if let Err(err) = state.activity_log.record_created(&todo).await {
        tracing::warn!(todo_id = todo.id, error = %err, "activity log write failed");
    }

    Ok((
        StatusCode::CREATED,
        AppendHeaders([(header::LOCATION, format!("/api/todos/{}", todo.id))]),
        Json(todo),
    ))
}

/// `PUT /api/todos/{id}` — apply only the supplied fields, persist,
/// then record the classified change against the captured before
/// state.
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateTodoRequest>,
) -> Result<Json<Todo>, AppError> {
    req.validate()
        .map_err(|err| AppError::validation(err.to_string()))?;

    let before = state
        .todos
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("todo {id}")))?;

    let mut after = before.clone();
    after.apply(req.into_patch());
    state.todos.update(&after).await?;

    if let Err(err) = state.activity_log.record_updated(&before, &after).await {
        tracing::warn!(todo_id = id, error = %err, "activity log write failed");
    }

    Ok(Json(after))
}

/// `DELETE /api/todos/{id}` — the Deleted entry is recorded from the
/// entity state before removal; once the row is gone there is nothing
/// left to snapshot.
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let todo = state
        .todos
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("todo {id}")))?;

    if let Err(err) = state.activity_log.record_deleted(&todo).await {
        tracing::warn!(todo_id = id, error = %err, "activity log write failed");
    }

    state.todos.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
