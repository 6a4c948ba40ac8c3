pub mod activity_log;
pub mod change_detector;
pub mod store;

// Re-exports
pub use activity_log::*;
pub use change_detector::*;
pub use store::*;
