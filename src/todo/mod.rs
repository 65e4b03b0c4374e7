//! To-do application module
//!
//! This module groups the application's components: the task data model,
//! the error type shared across layers, and the HTTP server with its
//! storage backends.

pub mod error;
pub mod models;
pub mod server;
