//! Shared helpers for the HTTP contract tests.

use axum::http::StatusCode;
use axum_test::{TestResponse, TestServer};
use serde_json::{Value, json};
use taskboard::seed::seed_demo_data;
use taskboard::web::{AppState, create_router};

/// Starts a test server over a fresh in-memory store.
pub fn test_server() -> TestServer {
    TestServer::new(create_router(AppState::in_memory())).expect("test server should start")
}

/// Starts a test server with the demo dataset loaded.
pub async fn seeded_server() -> TestServer {
    let state = AppState::in_memory();
    seed_demo_data(&state)
        .await
        .expect("demo dataset should seed");
    TestServer::new(create_router(state)).expect("test server should start")
}

/// Creates a project over the API and returns its identifier.
pub async fn create_project(server: &TestServer, code: &str, name: &str) -> i64 {
    let response = server
        .post("/projects")
        .json(&json!({ "code": code, "name": name }))
        .await;
    response.assert_status(StatusCode::CREATED);
    id_of(&response.json())
}

/// Creates a task in the given project and returns its identifier.
pub async fn create_task(server: &TestServer, project_id: i64, name: &str) -> i64 {
    let response = server
        .post("/tasks")
        .json(&json!({ "name": name, "projectId": project_id }))
        .await;
    response.assert_status(StatusCode::CREATED);
    id_of(&response.json())
}

/// Creates a worker over the API and returns its identifier.
pub async fn create_worker(server: &TestServer, email: &str) -> i64 {
    let response = server
        .post("/workers")
        .json(&json!({ "email": email }))
        .await;
    response.assert_status(StatusCode::CREATED);
    id_of(&response.json())
}

/// Extracts the numeric identifier from a response body.
pub fn id_of(body: &Value) -> i64 {
    body["id"].as_i64().expect("body should carry an id")
}

/// Asserts a problem-details response and returns its body.
pub fn assert_problem(response: &TestResponse, status: StatusCode, title: &str) -> Value {
    response.assert_status(status);
    assert_eq!(
        response.header("content-type"),
        "application/problem+json",
        "failures render with the problem media type"
    );
    let body: Value = response.json();
    assert_eq!(body["status"], status.as_u16());
    assert_eq!(body["title"], title);
    body
}

/// True when the problem body lists the given field error.
pub fn has_field_error(body: &Value, field: &str, message: &str) -> bool {
    body["errors"].as_array().is_some_and(|errors| {
        errors
            .iter()
            .any(|error| error["field"] == field && error["message"] == message)
    })
}
