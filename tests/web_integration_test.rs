//! Web Integration Tests
//!
//! This module drives the full router in-process and verifies the
//! behavior of the three routes end to end against a SQLite-backed
//! store, following the same pattern as existing tests in the project.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    response::Response,
    Router,
};
use std::sync::Arc;
use tempfile::TempDir;
use todo_rust::todo::server::tasks::SqliteTaskStore;
use todo_rust::todo::server::{ServerConfig, TodoServerBuilder};
use tower::util::ServiceExt;

/// Helper to build a router backed by a fresh on-disk database
///
/// The TempDir is returned alongside the router and must stay alive for
/// the duration of the test.
async fn build_test_router() -> (TempDir, Router) {
    let dir = TempDir::new().unwrap();
    let url = format!("sqlite:{}", dir.path().join("todo.db").display());

    let store = SqliteTaskStore::connect(&url).await.unwrap();

    let config = ServerConfig {
        bind_addr: "127.0.0.1:0".parse().unwrap(),
        database_url: url,
    };

    let server = TodoServerBuilder::new()
        .with_task_store(Arc::new(store))
        .with_config(config)
        .build()
        .unwrap();

    (dir, server.build_router())
}

async fn get(router: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    router.oneshot(request).await.unwrap()
}

async fn post_form(router: Router, uri: &str, body: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();

    router.oneshot(request).await.unwrap()
}

async fn body_string(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_index_shows_heading_on_empty_database() {
    let (_dir, router) = build_test_router().await;

    let response = get(router, "/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response.headers()[header::CONTENT_TYPE].clone();
    assert!(content_type.to_str().unwrap().starts_with("text/html"));

    let body = body_string(response).await;
    assert!(body.contains("To-Do List"));
    assert!(!body.contains("<li"));
}

#[tokio::test]
async fn test_add_task_round_trip() {
    let (_dir, router) = build_test_router().await;

    // 1. Submit a new task
    let response = post_form(router.clone(), "/add", "task=Test+Task").await;
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(response.headers()[header::LOCATION], "/");

    // 2. The list page now shows it
    let response = get(router, "/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("Test Task"));
}

#[tokio::test]
async fn test_delete_task_round_trip() {
    let (_dir, router) = build_test_router().await;

    // 1. Add a task; ids on a fresh database start at 1
    post_form(router.clone(), "/add", "task=Test+Task").await;

    // 2. Delete it through the web route
    let response = get(router.clone(), "/delete/1").await;
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(response.headers()[header::LOCATION], "/");

    // 3. The list page no longer shows it
    let body = body_string(get(router, "/").await).await;
    assert!(!body.contains("Test Task"));
}

#[tokio::test]
async fn test_add_without_task_field_is_rejected() {
    let (_dir, router) = build_test_router().await;

    let response = post_form(router.clone(), "/add", "").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Nothing was stored
    let body = body_string(get(router, "/").await).await;
    assert!(!body.contains("<li"));
}

#[tokio::test]
async fn test_delete_with_non_numeric_id_is_not_found() {
    let (_dir, router) = build_test_router().await;

    let response = get(router, "/delete/abc").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_unknown_id_still_redirects() {
    let (_dir, router) = build_test_router().await;

    let response = get(router, "/delete/999").await;
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(response.headers()[header::LOCATION], "/");
}

#[tokio::test]
async fn test_tasks_render_in_insertion_order() {
    let (_dir, router) = build_test_router().await;

    post_form(router.clone(), "/add", "task=First").await;
    post_form(router.clone(), "/add", "task=Second").await;
    post_form(router.clone(), "/add", "task=Third").await;

    let body = body_string(get(router, "/").await).await;

    let first = body.find("First").unwrap();
    let second = body.find("Second").unwrap();
    let third = body.find("Third").unwrap();
    assert!(first < second);
    assert!(second < third);
}

#[tokio::test]
async fn test_task_text_is_escaped_in_page() {
    let (_dir, router) = build_test_router().await;

    let response = post_form(
        router.clone(),
        "/add",
        "task=%3Cscript%3Ealert%281%29%3C%2Fscript%3E",
    )
    .await;
    assert_eq!(response.status(), StatusCode::FOUND);

    let body = body_string(get(router, "/").await).await;
    assert!(!body.contains("<script>"));
    assert!(body.contains("&lt;script&gt;"));
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let (_dir, router) = build_test_router().await;

    let response = get(router, "/missing").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
