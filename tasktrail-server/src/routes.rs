use axum::routing::get;
use axum::Router;

use crate::handlers::{activity_logs, todos};
use crate::state::AppState;

/// Build the API router. Kept separate from serving so tests can
/// compose against it directly.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/todos",
            get(todos::list_todos).post(todos::create_todo),
        )
        .route(
            "/api/todos/:id",
            get(todos::get_todo)
                .put(todos::update_todo)
                .delete(todos::delete_todo),
        )
        .route("/api/activity-logs", get(activity_logs::list_activity_logs))
        .route(
            "/api/activity-logs/count",
            get(activity_logs::count_activity_logs),
        )
        .with_state(state)
}
