use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

use tasktrail_api::domain::activity::{ActivityLogEntry, ActivityPayload, NewLogEntry};
use tasktrail_api::service::store::{ActivityLogStore, StoreResult};

/// Append-only log store backed by its own SQLite database.
///
/// The action-specific payload is kept as one JSON document per row;
/// the `action` column is denormalized from it for inspection. An
/// autoincrement `seq` breaks equal-timestamp ties so newest-first
/// reads are deterministic.
pub struct SqliteActivityLogStore {
    pool: SqlitePool,
}

impl SqliteActivityLogStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn entry_from_row(row: &SqliteRow) -> StoreResult<ActivityLogEntry> {
    let id: String = row.try_get("id")?;
    let payload: String = row.try_get("payload")?;
    Ok(ActivityLogEntry {
        id: Uuid::parse_str(&id)?,
        todo_id: row.try_get("todo_id")?,
        todo_title: row.try_get("todo_title")?,
        timestamp: row.try_get("timestamp")?,
        payload: serde_json::from_str::<ActivityPayload>(&payload)?,
    })
}

#[async_trait]
impl ActivityLogStore for SqliteActivityLogStore {
    async fn append(&self, entry: NewLogEntry) -> StoreResult<ActivityLogEntry> {
        let id = Uuid::new_v4();
        let payload_json = serde_json::to_string(&entry.payload)?;
        sqlx::query(
            "INSERT INTO activity_logs (id, action, todo_id, todo_title, timestamp, payload) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )
        .bind(id.to_string())
        .bind(entry.payload.action())
        .bind(entry.todo_id)
        .bind(&entry.todo_title)
        .bind(entry.timestamp)
        .bind(payload_json)
        .execute(&self.pool)
        .await?;

        Ok(ActivityLogEntry {
            id,
            todo_id: entry.todo_id,
            todo_title: entry.todo_title,
            timestamp: entry.timestamp,
            payload: entry.payload,
        })
    }

    async fn list(&self, todo_id: Option<i64>, limit: i64) -> StoreResult<Vec<ActivityLogEntry>> {
        let rows = sqlx::query(
            "SELECT id, todo_id, todo_title, timestamp, payload FROM activity_logs \
             WHERE ?1 IS NULL OR todo_id = ?1 \
             ORDER BY timestamp DESC, seq DESC \
             LIMIT ?2",
        )
        .bind(todo_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(entry_from_row).collect()
    }

    async fn count(&self, todo_id: Option<i64>) -> StoreResult<i64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM activity_logs WHERE ?1 IS NULL OR todo_id = ?1",
        )
        .bind(todo_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::memory_activity_log_store;
    use chrono::Utc;
    use tasktrail_api::domain::activity::{CreatedDetails, FieldChange};

    fn created_entry(todo_id: i64, title: &str) -> NewLogEntry {
        NewLogEntry {
            todo_id,
            todo_title: title.to_string(),
            timestamp: Utc::now(),
            payload: ActivityPayload::Created {
                details: CreatedDetails {
                    description: None,
                    is_complete: false,
                },
            },
        }
    }

    #[tokio::test]
    async fn append_assigns_fresh_ids() -> StoreResult<()> {
        let store = memory_activity_log_store().await;
        let a = store.append(created_entry(1, "one")).await?;
        let b = store.append(created_entry(1, "one")).await?;
        assert_ne!(a.id, b.id);
        Ok(())
    }

    #[tokio::test]
    async fn list_returns_entries_newest_first() -> StoreResult<()> {
        let store = memory_activity_log_store().await;
        store.append(created_entry(1, "first")).await?;
        store
            .append(NewLogEntry {
                todo_id: 1,
                todo_title: "first".to_string(),
                timestamp: Utc::now(),
                payload: ActivityPayload::Completed,
            })
            .await?;

        let entries = store.list(None, 50).await?;
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].payload, ActivityPayload::Completed);
        assert!(matches!(
            entries[1].payload,
            ActivityPayload::Created { .. }
        ));
        Ok(())
    }

    #[tokio::test]
    async fn list_filters_by_todo_id_and_caps_at_limit() -> StoreResult<()> {
        let store = memory_activity_log_store().await;
        for i in 0..3 {
            store.append(created_entry(1, &format!("a{i}"))).await?;
        }
        store.append(created_entry(2, "other")).await?;

        let filtered = store.list(Some(1), 50).await?;
        assert_eq!(filtered.len(), 3);
        assert!(filtered.iter().all(|e| e.todo_id == 1));

        let capped = store.list(Some(1), 2).await?;
        assert_eq!(capped.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn count_is_independent_of_limit() -> StoreResult<()> {
        let store = memory_activity_log_store().await;
        for i in 0..5 {
            store.append(created_entry(1, &format!("t{i}"))).await?;
        }

        assert_eq!(store.list(None, 2).await?.len(), 2);
        assert_eq!(store.count(None).await?, 5);
        assert_eq!(store.count(Some(1)).await?, 5);
        assert_eq!(store.count(Some(2)).await?, 0);
        Ok(())
    }

    #[tokio::test]
    async fn payloads_survive_storage_per_action_kind() -> StoreResult<()> {
        let store = memory_activity_log_store().await;
        let updated = ActivityPayload::Updated {
            changes: vec![FieldChange {
                field: "title".to_string(),
                from: Some("old".to_string()),
                to: Some("new".to_string()),
            }],
        };
        store
            .append(NewLogEntry {
                todo_id: 9,
                todo_title: "new".to_string(),
                timestamp: Utc::now(),
                payload: updated.clone(),
            })
            .await?;

        let entries = store.list(Some(9), 1).await?;
        assert_eq!(entries[0].payload, updated);
        assert_eq!(entries[0].todo_title, "new");
        Ok(())
    }
}
