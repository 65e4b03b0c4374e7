//! Error types for the to-do application
//!
//! This module defines the error type shared by the storage and server
//! layers, together with its mapping onto HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

/// Application error type
#[derive(Error, Debug)]
pub enum TodoError {
    /// A storage statement or connection failed
    #[error("Database error: {0}")]
    Database(String),

    /// Rendering an HTML template failed
    #[error("Template error: {0}")]
    Template(String),

    /// A required form field was absent from the request
    #[error("Missing required form field: {0}")]
    MissingField(String),

    /// The requested resource does not exist
    #[error("Not found")]
    NotFound,

    /// Any other internal failure
    #[error("Internal error: {0}")]
    Internal(String),
}

impl TodoError {
    /// Creates a database error with the given message
    pub fn database(message: &str) -> Self {
        TodoError::Database(message.to_string())
    }

    /// Creates a template rendering error with the given message
    pub fn template(message: &str) -> Self {
        TodoError::Template(message.to_string())
    }

    /// Creates a missing-form-field error for the named field
    pub fn missing_field(field: &str) -> Self {
        TodoError::MissingField(field.to_string())
    }

    /// Creates an internal error with the given message
    pub fn internal(message: &str) -> Self {
        TodoError::Internal(message.to_string())
    }

    /// Returns the HTTP status code this error maps to
    pub fn status_code(&self) -> StatusCode {
        match self {
            TodoError::MissingField(_) => StatusCode::BAD_REQUEST,
            TodoError::NotFound => StatusCode::NOT_FOUND,
            TodoError::Database(_) | TodoError::Template(_) | TodoError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for TodoError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!("Request failed: {}", self);
        }
        (status, self.to_string()).into_response()
    }
}
