pub mod activity_logs;
pub mod todos;
