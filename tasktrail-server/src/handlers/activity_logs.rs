//! Read-only activity log endpoints. These never touch the entity
//! store.

use axum::extract::{Query, State};
use axum::Json;

use crate::dto::{ActivityLogDto, ActivityLogQuery, CountResponse};
use crate::error::AppError;
use crate::state::AppState;

const DEFAULT_LIMIT: i64 = 50;

/// `GET /api/activity-logs?todoId=&limit=` — newest first, default
/// limit 50, caller-supplied limit used as-is.
pub async fn list_activity_logs(
    State(state): State<AppState>,
    Query(query): Query<ActivityLogQuery>,
) -> Result<Json<Vec<ActivityLogDto>>, AppError> {
    let entries = state
        .activity_log
        .list(query.todo_id, query.limit.unwrap_or(DEFAULT_LIMIT))
        .await?;
    Ok(Json(entries.into_iter().map(ActivityLogDto::from).collect()))
}

/// `GET /api/activity-logs/count?todoId=`
pub async fn count_activity_logs(
    State(state): State<AppState>,
    Query(query): Query<ActivityLogQuery>,
) -> Result<Json<CountResponse>, AppError> {
    let count = state.activity_log.count(query.todo_id).await?;
    Ok(Json(CountResponse { count }))
}
