//! Core data model
//!
//! The application manages a single entity: a to-do task with a
//! storage-assigned id and a free-text description.

/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Unique id assigned by the storage engine
    pub id: i64,
    /// Free-text description supplied by the user
    pub task: String,
}

impl Task {
    /// Creates a task with the given id and text
    pub fn new(id: i64, task: String) -> Self {
        Self { id, task }
    }
}
