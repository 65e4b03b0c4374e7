//! Task store interface and in-memory implementation
//!
//! This module defines the interface for persisting and retrieving
//! to-do tasks, plus an in-memory implementation used by tests and
//! ephemeral runs.

use crate::todo::error::TodoError;
use crate::todo::models::Task;
use async_trait::async_trait;

/// Task Store interface
///
/// Each call is one self-contained storage operation: implementations
/// acquire whatever connection or lock they need, perform the operation,
/// and release it on every exit path.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Returns all tasks ordered by ascending id
    async fn list(&self) -> Result<Vec<Task>, TodoError>;

    /// Inserts a new task with the given text; the store assigns the id
    async fn add(&self, text: &str) -> Result<Task, TodoError>;

    /// Deletes the task with the given id, if any
    ///
    /// Returns the number of rows removed (0 or 1). Deleting an id that
    /// does not exist is not an error.
    async fn delete(&self, id: i64) -> Result<u64, TodoError>;
}

/// In-memory implementation of TaskStore
pub struct InMemoryTaskStore {
    state: std::sync::Arc<tokio::sync::RwLock<InMemoryState>>,
}

struct InMemoryState {
    next_id: i64,
    tasks: Vec<Task>,
}

impl InMemoryTaskStore {
    pub fn new() -> Self {
        Self {
            state: std::sync::Arc::new(tokio::sync::RwLock::new(InMemoryState {
                next_id: 1,
                tasks: Vec::new(),
            })),
        }
    }
}

impl Default for InMemoryTaskStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn list(&self) -> Result<Vec<Task>, TodoError> {
        let state = self.state.read().await;
        // Tasks are appended with ascending ids, so insertion order is id order.
        Ok(state.tasks.clone())
    }

    async fn add(&self, text: &str) -> Result<Task, TodoError> {
        let mut state = self.state.write().await;
        let task = Task::new(state.next_id, text.to_string());
        state.next_id += 1;
        state.tasks.push(task.clone());
        Ok(task)
    }

    async fn delete(&self, id: i64) -> Result<u64, TodoError> {
        let mut state = self.state.write().await;
        let before = state.tasks.len();
        state.tasks.retain(|t| t.id != id);
        Ok((before - state.tasks.len()) as u64)
    }
}
