//! Binary entry point for the to-do web server
//!
//! Loads configuration from the environment, connects the SQLite task
//! store, and serves the web application.

use std::sync::Arc;

use todo_rust::todo::server::tasks::SqliteTaskStore;
use todo_rust::todo::server::{ServerConfig, TodoServerBuilder};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env()?;

    let store = SqliteTaskStore::connect(&config.database_url).await?;

    let server = TodoServerBuilder::new()
        .with_task_store(Arc::new(store))
        .with_config(config)
        .build()?;

    server.serve().await?;

    Ok(())
}
