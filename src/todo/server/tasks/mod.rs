//! Task storage module
//!
//! This module provides task persistence: the storage interface the
//! handlers depend on, an in-memory implementation for tests and
//! ephemeral runs, and the SQLite-backed implementation used in
//! production.

pub mod task_store;
pub mod sql_task_store;

pub use task_store::*;
pub use sql_task_store::*;
