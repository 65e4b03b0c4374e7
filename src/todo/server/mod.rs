//! HTTP server module
//!
//! This module provides the web-facing half of the application: server
//! configuration and assembly, the route handlers, and the task storage
//! backends the handlers talk to.

pub mod app;
pub mod handlers;
pub mod tasks;

// Re-export main types for convenience
pub use app::*;
