use std::sync::Arc;

use tasktrail_api::service::activity_log::ActivityLog;
use tasktrail_api::service::store::TodoStore;

/// Shared handler state: the entity store handle and the activity log
/// service, injected explicitly rather than reached through globals.
#[derive(Clone)]
pub struct AppState {
    pub todos: Arc<dyn TodoStore>,
    pub activity_log: ActivityLog,
}

impl AppState {
    pub fn new(todos: Arc<dyn TodoStore>, activity_log: ActivityLog) -> Self {
        Self {
            todos,
            activity_log,
        }
    }
}
