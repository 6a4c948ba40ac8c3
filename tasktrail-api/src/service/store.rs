use async_trait::async_trait;

use crate::domain::activity::{ActivityLogEntry, NewLogEntry};
use crate::domain::todo::{NewTodo, Todo};

pub type StoreResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Durable keyed storage for the todo entity.
///
/// Implementations are injected into request handlers explicitly —
/// there is no ambient global store handle. The entity store and the
/// activity log store are two independently-available resources with
/// no cross-store transaction.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Persist a new todo, assigning its id and creation timestamp.
    ///
    /// # Returns
    /// * `Ok(Todo)` - The created entity with generated fields populated
    /// * `Err` - An error if the entity could not be persisted
    async fn create(&self, new_todo: NewTodo) -> StoreResult<Todo>;

    /// Point lookup by id. `Ok(None)` when the id is absent.
    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Todo>>;

    /// Update an existing todo in place. The creation timestamp is
    /// immutable and never written back.
    async fn update(&self, todo: &Todo) -> StoreResult<()>;

    /// Delete by id. Returns whether a row was actually removed.
    async fn delete(&self, id: i64) -> StoreResult<bool>;

    /// All todos, ordered by creation time descending.
    async fn list_all(&self) -> StoreResult<Vec<Todo>>;
}

/// Append-only storage for activity log entries.
///
/// Entries are immutable once written; this system never updates or
/// deletes them.
#[async_trait]
pub trait ActivityLogStore: Send + Sync {
    /// Append an entry, assigning a fresh id from the log's own id space.
    async fn append(&self, entry: NewLogEntry) -> StoreResult<ActivityLogEntry>;

    /// Entries ordered by timestamp descending, optionally filtered to
    /// one todo id (exact match), truncated to `limit` entries. The
    /// caller-supplied limit is used as-is; there is no upper bound.
    async fn list(&self, todo_id: Option<i64>, limit: i64) -> StoreResult<Vec<ActivityLogEntry>>;

    /// Total matching entry count, unaffected by any limit.
    async fn count(&self, todo_id: Option<i64>) -> StoreResult<i64>;
}
