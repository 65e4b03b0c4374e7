//! HTTP server assembly
//!
//! This module provides the server configuration, the builder used to
//! assemble a server instance, and the router wiring the route table to
//! the handlers.

use axum::routing::{get, post};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::todo::error::TodoError;
use crate::todo::server::handlers::{self, AppState};
use crate::todo::server::tasks::TaskStore;

/// Configuration for the to-do server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Database URL for the task store
    pub database_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            database_url: "sqlite:todo.db".to_string(),
        }
    }
}

impl ServerConfig {
    /// Builds a configuration from the environment, falling back to
    /// defaults for anything unset
    ///
    /// Recognized variables are `TODO_BIND_ADDR` and `TODO_DATABASE_URL`.
    pub fn from_env() -> Result<Self, TodoError> {
        let mut config = Self::default();

        if let Ok(addr) = std::env::var("TODO_BIND_ADDR") {
            config.bind_addr = addr.parse().map_err(|e| {
                TodoError::internal(&format!("Invalid TODO_BIND_ADDR '{}': {}", addr, e))
            })?;
        }

        if let Ok(url) = std::env::var("TODO_DATABASE_URL") {
            config.database_url = url;
        }

        Ok(config)
    }
}

/// Builder for creating to-do servers
pub struct TodoServerBuilder {
    task_store: Option<Arc<dyn TaskStore>>,
    config: ServerConfig,
}

impl TodoServerBuilder {
    /// Creates a new server builder
    pub fn new() -> Self {
        Self {
            task_store: None,
            config: ServerConfig::default(),
        }
    }

    /// Sets the task store backing the server
    pub fn with_task_store(mut self, task_store: Arc<dyn TaskStore>) -> Self {
        self.task_store = Some(task_store);
        self
    }

    /// Sets the server configuration
    pub fn with_config(mut self, config: ServerConfig) -> Self {
        self.config = config;
        self
    }

    /// Builds the server
    pub fn build(self) -> Result<TodoServer, TodoError> {
        let store = self
            .task_store
            .ok_or_else(|| TodoError::internal("Task store is required to build a server"))?;

        Ok(TodoServer {
            state: AppState::new(store),
            config: self.config,
        })
    }
}

impl Default for TodoServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The assembled to-do web server
pub struct TodoServer {
    state: AppState,
    config: ServerConfig,
}

impl TodoServer {
    /// Builds the axum router for this server
    ///
    /// Exposed separately from [`serve`](Self::serve) so tests can drive
    /// the routes in-process without binding a socket.
    pub fn build_router(&self) -> Router {
        Router::new()
            .route("/", get(handlers::index))
            .route("/add", post(handlers::add))
            .route("/delete/:id", get(handlers::delete))
            .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
            .with_state(self.state.clone())
    }

    /// Binds the configured address and serves requests until shutdown
    pub async fn serve(self) -> Result<(), TodoError> {
        let router = self.build_router();

        let listener = tokio::net::TcpListener::bind(self.config.bind_addr)
            .await
            .map_err(|e| {
                TodoError::internal(&format!("Failed to bind {}: {}", self.config.bind_addr, e))
            })?;

        info!("To-do server listening on {}", self.config.bind_addr);

        axum::serve(listener, router)
            .await
            .map_err(|e| TodoError::internal(&format!("Server error: {}", e)))
    }
}
