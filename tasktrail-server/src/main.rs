use std::sync::Arc;

use tasktrail_api::service::activity_log::ActivityLog;
use tasktrail_server::config::Config;
use tasktrail_server::routes;
use tasktrail_server::state::AppState;
use tasktrail_sqlite::schema;
use tasktrail_sqlite::{SqliteActivityLogStore, SqliteTodoStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = Config::from_env();

    let todo_pool = schema::connect(&config.todo_database_url).await?;
    schema::ensure_todo_schema(&todo_pool).await?;

    let log_pool = schema::connect(&config.activity_log_database_url).await?;
    schema::ensure_activity_log_schema(&log_pool).await?;

    let state = AppState::new(
        Arc::new(SqliteTodoStore::new(todo_pool)),
        ActivityLog::new(Arc::new(SqliteActivityLogStore::new(log_pool))),
    );

    let app = routes::router(state);
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "tasktrail listening");
    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}
