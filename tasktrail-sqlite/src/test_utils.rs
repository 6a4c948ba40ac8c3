//! In-memory store constructors for tests.
//!
//! Each call opens a private in-memory SQLite database on a
//! single-connection pool, so tests stay fully isolated from each
//! other and from any on-disk state.

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use crate::activity_log_store::SqliteActivityLogStore;
use crate::schema::{ensure_activity_log_schema, ensure_todo_schema};
use crate::todo_store::SqliteTodoStore;

pub async fn memory_pool() -> SqlitePool {
    SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite pool")
}

pub async fn memory_todo_store() -> SqliteTodoStore {
    let pool = memory_pool().await;
    ensure_todo_schema(&pool).await.expect("todo schema");
    SqliteTodoStore::new(pool)
}

pub async fn memory_activity_log_store() -> SqliteActivityLogStore {
    let pool = memory_pool().await;
    ensure_activity_log_schema(&pool)
        .await
        .expect("activity log schema");
    SqliteActivityLogStore::new(pool)
}
