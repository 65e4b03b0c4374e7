//! HTTP route handlers
//!
//! This module provides the handlers behind the application's three
//! routes, the shared state they receive, and the page template the list
//! view renders.

use askama::Template;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse};
use axum::Form;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, info};

use crate::todo::error::TodoError;
use crate::todo::models::Task;
use crate::todo::server::tasks::TaskStore;

/// Shared application state handed to every handler
#[derive(Clone)]
pub struct AppState {
    /// Task storage backend, injected at server build time
    pub store: Arc<dyn TaskStore>,
}

impl AppState {
    /// Creates application state around the given store
    pub fn new(store: Arc<dyn TaskStore>) -> Self {
        Self { store }
    }
}

/// List page template
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub todos: Vec<Task>,
}

/// Add form payload
///
/// The `task` field is optional at the type level so its absence can be
/// reported as a client error instead of an extractor rejection.
#[derive(Debug, Deserialize)]
pub struct AddForm {
    pub task: Option<String>,
}

/// Handles `GET /` by rendering the task list
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, TodoError> {
    let todos = state.store.list().await?;

    let page = IndexTemplate { todos }
        .render()
        .map_err(|e| TodoError::template(&format!("Failed to render index page: {}", e)))?;

    Ok(Html(page))
}

/// Handles `POST /add` by inserting a task and redirecting to the list
///
/// The text is stored exactly as submitted, without validation. A request
/// without a `task` field is answered with 400.
pub async fn add(
    State(state): State<AppState>,
    Form(form): Form<AddForm>,
) -> Result<impl IntoResponse, TodoError> {
    let text = form.task.ok_or_else(|| TodoError::missing_field("task"))?;

    let task = state.store.add(&text).await?;
    info!("Added task {}", task.id);

    Ok(redirect_to_index())
}

/// Handles `GET /delete/{id}` by removing a task, if present, and
/// redirecting to the list
///
/// A path segment that does not parse as an integer is answered with 404
/// before any storage work happens. Deleting an unknown id succeeds
/// silently.
pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, TodoError> {
    let Path(todo_id) = path.map_err(|_| TodoError::NotFound)?;

    let removed = state.store.delete(todo_id).await?;
    if removed == 0 {
        debug!("Delete for unknown task {}", todo_id);
    } else {
        info!("Deleted task {}", todo_id);
    }

    Ok(redirect_to_index())
}

// The original contract promises 302 on both mutating routes, so the
// redirect is built explicitly rather than with Redirect::to (303).
fn redirect_to_index() -> impl IntoResponse {
    (StatusCode::FOUND, [(header::LOCATION, "/")])
}
