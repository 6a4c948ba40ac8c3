use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

use tasktrail_api::domain::todo::{NewTodo, Todo};
use tasktrail_api::service::store::{StoreResult, TodoStore};

/// Entity store backed by a SQLite database.
pub struct SqliteTodoStore {
    pool: SqlitePool,
}

impl SqliteTodoStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TodoStore for SqliteTodoStore {
    async fn create(&self, new_todo: NewTodo) -> StoreResult<Todo> {
        let created_at = Utc::now();
        let result = sqlx::query(
            "INSERT INTO todos (title, description, is_complete, created_at) VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(&new_todo.title)
        .bind(&new_todo.description)
        .bind(false)
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        Ok(Todo {
            id: result.last_insert_rowid(),
            title: new_todo.title,
            description: new_todo.description,
            is_complete: false,
            created_at,
        })
    }

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Todo>> {
        let todo = sqlx::query_as::<_, Todo>(
            "SELECT id, title, description, is_complete, created_at FROM todos WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(todo)
    }

    async fn update(&self, todo: &Todo) -> StoreResult<()> {
        // created_at is immutable and never written back.
        sqlx::query("UPDATE todos SET title = ?1, description = ?2, is_complete = ?3 WHERE id = ?4")
            .bind(&todo.title)
            .bind(&todo.description)
            .bind(todo.is_complete)
            .bind(todo.id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM todos WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn list_all(&self) -> StoreResult<Vec<Todo>> {
        let todos = sqlx::query_as::<_, Todo>(
            "SELECT id, title, description, is_complete, created_at FROM todos \
             ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(todos)
    }
}
