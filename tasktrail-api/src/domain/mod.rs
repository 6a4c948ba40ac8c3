pub mod activity;
pub mod todo;

// Re-exports
pub use activity::*;
pub use todo::*;
