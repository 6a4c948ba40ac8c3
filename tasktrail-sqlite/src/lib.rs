pub mod activity_log_store;
pub mod schema;
pub mod todo_store;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use activity_log_store::SqliteActivityLogStore;
pub use todo_store::SqliteTodoStore;
