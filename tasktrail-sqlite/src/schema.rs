//! Connection and schema bootstrap for the two SQLite stores.
//!
//! The todo store and the activity log store are separate databases
//! with separate pools — there is deliberately no shared transaction
//! between them. Tables are created on startup if missing; this app
//! has no migration history to manage.

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

const CREATE_TODOS: &str = r#"
CREATE TABLE IF NOT EXISTS todos (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    title       TEXT NOT NULL,
    description TEXT,
    is_complete INTEGER NOT NULL DEFAULT 0,
    created_at  TEXT NOT NULL
)
"#;

const CREATE_ACTIVITY_LOGS: &str = r#"
CREATE TABLE IF NOT EXISTS activity_logs (
    seq        INTEGER PRIMARY KEY AUTOINCREMENT,
    id         TEXT NOT NULL UNIQUE,
    action     TEXT NOT NULL,
    todo_id    INTEGER NOT NULL,
    todo_title TEXT NOT NULL,
    timestamp  TEXT NOT NULL,
    payload    TEXT NOT NULL
)
"#;

const CREATE_ACTIVITY_LOGS_INDEX: &str = r#"
CREATE INDEX IF NOT EXISTS idx_activity_logs_todo_time
    ON activity_logs (todo_id, timestamp)
"#;

/// Open a pooled connection to a SQLite database, creating the file
/// if it does not exist yet.
pub async fn connect(url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(30))
        .connect_with(options)
        .await?;
    tracing::debug!(url, "opened sqlite pool");
    Ok(pool)
}

/// Create the todo table if missing.
pub async fn ensure_todo_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_TODOS).execute(pool).await?;
    Ok(())
}

/// Create the activity log table and its `(todo_id, timestamp)` index
/// if missing. The index backs the filtered descending reads.
pub async fn ensure_activity_log_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_ACTIVITY_LOGS).execute(pool).await?;
    sqlx::query(CREATE_ACTIVITY_LOGS_INDEX).execute(pool).await?;
    Ok(())
}
