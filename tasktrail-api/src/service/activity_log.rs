use std::sync::Arc;

use chrono::Utc;

use crate::domain::activity::{ActivityLogEntry, ActivityPayload, NewLogEntry};
use crate::domain::todo::Todo;
use crate::service::change_detector::classify;
use crate::service::store::{ActivityLogStore, StoreResult};

/// Writer/reader facade over the activity log store.
///
/// One record operation per originating mutation. Every write stamps
/// the entry with the current time; the store assigns the id. The log
/// and the entity store share no transaction, so completeness of the
/// log is best-effort by design.
#[derive(Clone)]
pub struct ActivityLog {
    store: Arc<dyn ActivityLogStore>,
}

impl ActivityLog {
    pub fn new(store: Arc<dyn ActivityLogStore>) -> Self {
        Self { store }
    }

    /// Record a `Created` entry with creation-time details.
    pub async fn record_created(&self, todo: &Todo) -> StoreResult<ActivityLogEntry> {
        self.append(todo, ActivityPayload::created(todo)).await
    }

    /// Classify the before/after pair and record the result.
    ///
    /// Returns `Ok(None)` without writing when the classification is
    /// `Updated` with no changes — an update that touched nothing
    /// visible leaves no trace in the log.
    pub async fn record_updated(
        &self,
        before: &Todo,
        after: &Todo,
    ) -> StoreResult<Option<ActivityLogEntry>> {
        let payload = classify(before, after);
        if let ActivityPayload::Updated { changes } = &payload {
            if changes.is_empty() {
                return Ok(None);
            }
        }
        Ok(Some(self.append(after, payload).await?))
    }

    /// Record a `Deleted` entry with a full pre-deletion snapshot.
    pub async fn record_deleted(&self, todo: &Todo) -> StoreResult<ActivityLogEntry> {
        self.append(todo, ActivityPayload::deleted(todo)).await
    }

    /// Entries newest-first, optionally filtered to one todo.
    pub async fn list(
        &self,
        todo_id: Option<i64>,
        limit: i64,
    ) -> StoreResult<Vec<ActivityLogEntry>> {
        self.store.list(todo_id, limit).await
    }

    /// Total matching entries, independent of any list limit.
    pub async fn count(&self, todo_id: Option<i64>) -> StoreResult<i64> {
        self.store.count(todo_id).await
    }

    async fn append(&self, todo: &Todo, payload: ActivityPayload) -> StoreResult<ActivityLogEntry> {
        self.store
            .append(NewLogEntry {
                todo_id: todo.id,
                todo_title: todo.title.clone(),
                timestamp: Utc::now(),
                payload,
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::activity::FieldChange;
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::Mutex;
    use uuid::Uuid;

    /// Minimal in-process log store for exercising the writer.
    #[derive(Default)]
    struct VecLogStore {
        entries: Mutex<Vec<ActivityLogEntry>>,
    }

    #[async_trait]
    impl ActivityLogStore for VecLogStore {
        async fn append(&self, entry: NewLogEntry) -> StoreResult<ActivityLogEntry> {
            let entry = ActivityLogEntry {
                id: Uuid::new_v4(),
                todo_id: entry.todo_id,
                todo_title: entry.todo_title,
                timestamp: entry.timestamp,
                payload: entry.payload,
            };
            self.entries.lock().unwrap().push(entry.clone());
            Ok(entry)
        }

        async fn list(
            &self,
            todo_id: Option<i64>,
            limit: i64,
        ) -> StoreResult<Vec<ActivityLogEntry>> {
            let mut entries: Vec<_> = self
                .entries
                .lock()
                .unwrap()
                .iter()
                .filter(|e| todo_id.map_or(true, |id| e.todo_id == id))
                .cloned()
                .collect();
            entries.reverse();
            entries.truncate(limit.max(0) as usize);
            Ok(entries)
        }

        async fn count(&self, todo_id: Option<i64>) -> StoreResult<i64> {
            Ok(self
                .entries
                .lock()
                .unwrap()
                .iter()
                .filter(|e| todo_id.map_or(true, |id| e.todo_id == id))
                .count() as i64)
        }
    }

    fn todo() -> Todo {
        Todo {
            id: 42,
            title: "Test todo".to_string(),
            description: Some("A description".to_string()),
            is_complete: false,
            created_at: Utc::now(),
        }
    }

    fn service() -> (ActivityLog, Arc<VecLogStore>) {
        let store = Arc::new(VecLogStore::default());
        (ActivityLog::new(store.clone()), store)
    }

    #[tokio::test]
    async fn record_created_writes_one_created_entry() {
        let (log, store) = service();
        let t = todo();
        let entry = log.record_created(&t).await.unwrap();
        assert_eq!(entry.todo_id, 42);
        assert_eq!(entry.todo_title, "Test todo");
        assert!(matches!(entry.payload, ActivityPayload::Created { .. }));
        assert_eq!(store.entries.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn record_updated_writes_classification_result() {
        let (log, _) = service();
        let before = todo();
        let mut after = before.clone();
        after.is_complete = true;
        let entry = log.record_updated(&before, &after).await.unwrap().unwrap();
        assert_eq!(entry.payload, ActivityPayload::Completed);

        after.title = "New".to_string();
        let entry = log.record_updated(&before, &after).await.unwrap().unwrap();
        let ActivityPayload::Updated { changes } = entry.payload else {
            panic!("expected Updated");
        };
        assert_eq!(
            changes[0],
            FieldChange {
                field: "title".to_string(),
                from: Some("Test todo".to_string()),
                to: Some("New".to_string()),
            }
        );
    }

    #[tokio::test]
    async fn record_updated_suppresses_no_op_writes() {
        let (log, store) = service();
        let t = todo();
        let outcome = log.record_updated(&t, &t.clone()).await.unwrap();
        assert!(outcome.is_none());
        assert!(store.entries.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn record_deleted_snapshots_pre_deletion_state() {
        let (log, _) = service();
        let t = todo();
        let entry = log.record_deleted(&t).await.unwrap();
        let ActivityPayload::Deleted { snapshot } = entry.payload else {
            panic!("expected Deleted");
        };
        assert_eq!(snapshot.id, t.id);
        assert_eq!(snapshot.title, t.title);
        assert_eq!(snapshot.description, t.description);
    }

    #[tokio::test]
    async fn list_and_count_respect_filter_and_limit() {
        let (log, _) = service();
        let a = todo();
        let mut b = todo();
        b.id = 43;
        log.record_created(&a).await.unwrap();
        log.record_created(&b).await.unwrap();
        log.record_deleted(&a).await.unwrap();

        assert_eq!(log.list(None, 2).await.unwrap().len(), 2);
        assert_eq!(log.list(Some(42), 50).await.unwrap().len(), 2);
        assert_eq!(log.count(None).await.unwrap(), 3);
        assert_eq!(log.count(Some(43)).await.unwrap(), 1);
    }
}
