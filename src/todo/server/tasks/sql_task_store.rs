//! SQLite-backed task store
//!
//! This module provides the persistent task store used in production,
//! implemented with sqlx over a SQLite connection pool.

use crate::todo::error::TodoError;
use crate::todo::models::Task;
use crate::todo::server::tasks::task_store::TaskStore;
use async_trait::async_trait;
use sqlx::{sqlite::SqliteConnectOptions, SqlitePool};
use std::str::FromStr;
use tracing::info;

/// Task store backed by a SQLite database
///
/// Statements run against a connection pool: each operation checks a
/// connection out and returns it on every exit path, including errors.
pub struct SqliteTaskStore {
    pool: SqlitePool,
    table_name: String,
}

impl SqliteTaskStore {
    /// Creates a store over the given connection pool, writing to the
    /// default `todos` table
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            table_name: "todos".to_string(),
        }
    }

    /// Creates a store writing to a custom table
    pub fn with_table_name(pool: SqlitePool, table_name: String) -> Self {
        Self { pool, table_name }
    }

    /// Opens a SQLite database and prepares the store for use
    ///
    /// The database file is created if it does not exist. A connection or
    /// initialization failure is returned to the caller, which aborts
    /// startup rather than serving traffic against a broken store.
    pub async fn connect(url: &str) -> Result<Self, TodoError> {
        let options = SqliteConnectOptions::from_str(url)
            .map_err(|e| TodoError::database(&format!("Invalid database URL: {}", e)))?
            .create_if_missing(true);

        let pool = SqlitePool::connect_with(options)
            .await
            .map_err(|e| TodoError::database(&format!("Failed to connect to database: {}", e)))?;

        let store = Self::new(pool);
        store.initialize().await?;
        info!("Task store ready at {}", url);
        Ok(store)
    }

    /// Creates the backing table if it does not exist
    ///
    /// Idempotent: safe to invoke on every startup, does nothing if the
    /// table already exists.
    pub async fn initialize(&self) -> Result<(), TodoError> {
        let query = format!(
            "CREATE TABLE IF NOT EXISTS {} (
                id INTEGER PRIMARY KEY,
                task TEXT
            )",
            self.table_name
        );

        sqlx::query(&query)
            .execute(&self.pool)
            .await
            .map_err(|e| TodoError::database(&format!("Failed to initialize database: {}", e)))?;

        Ok(())
    }
}

#[async_trait]
impl TaskStore for SqliteTaskStore {
    async fn list(&self) -> Result<Vec<Task>, TodoError> {
        let query = format!("SELECT id, task FROM {} ORDER BY id ASC", self.table_name);

        let rows = sqlx::query_as::<_, (i64, String)>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| TodoError::database(&format!("Failed to list tasks: {}", e)))?;

        Ok(rows
            .into_iter()
            .map(|(id, task)| Task::new(id, task))
            .collect())
    }

    async fn add(&self, text: &str) -> Result<Task, TodoError> {
        let query = format!("INSERT INTO {} (task) VALUES (?)", self.table_name);

        let result = sqlx::query(&query)
            .bind(text)
            .execute(&self.pool)
            .await
            .map_err(|e| TodoError::database(&format!("Failed to add task: {}", e)))?;

        Ok(Task::new(result.last_insert_rowid(), text.to_string()))
    }

    async fn delete(&self, id: i64) -> Result<u64, TodoError> {
        let query = format!("DELETE FROM {} WHERE id = ?", self.table_name);

        let result = sqlx::query(&query)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| TodoError::database(&format!("Failed to delete task: {}", e)))?;

        Ok(result.rows_affected())
    }
}
