use std::env;

/// Server configuration, read from the environment with local-dev
/// defaults. The two database URLs point at independent stores.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub todo_database_url: String,
    pub activity_log_database_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            bind_addr: env::var("TASKTRAIL_BIND_ADDR")
                .unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
            todo_database_url: env::var("TODO_DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:todos.db?mode=rwc".to_string()),
            activity_log_database_url: env::var("ACTIVITY_LOG_DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:activity_logs.db?mode=rwc".to_string()),
        }
    }
}
