//! todo-rust library
//!
//! A minimal single-user to-do list web application: tasks are persisted in
//! a local SQLite database and rendered through server-side HTML templates.
//! The `todo` module contains the whole application; the most commonly used
//! types are re-exported here for convenience.

pub mod todo;

// Re-export main types for convenience
pub use todo::error::TodoError;
pub use todo::models::Task;
