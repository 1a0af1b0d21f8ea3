//! Contract tests for the task endpoints.

use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::contract::helpers::{
    assert_problem, create_project, create_task, create_worker, has_field_error, test_server,
};

#[tokio::test(flavor = "multi_thread")]
async fn created_tasks_start_unassigned_in_the_initial_status() {
    let server = test_server();
    let project_id = create_project(&server, "P1", "Backend rework").await;

    let response = server
        .post("/tasks")
        .json(&json!({
            "name": "Write docs",
            "description": "Document the API",
            "dueDate": "2099-01-15",
            "projectId": project_id,
            "estimatedHours": 8,
            "status": "DONE",
            "assignee": { "id": 999 },
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["name"], "Write docs");
    assert_eq!(body["status"], "TO_DO");
    assert!(body["assignee"].is_null());
    assert_eq!(body["projectId"], project_id);
    assert_eq!(body["dueDate"], "2099-01-15");
    assert_eq!(body["estimatedHours"], 8);
    assert!(body["uuid"].as_str().is_some_and(|uuid| !uuid.is_empty()));
}

#[tokio::test(flavor = "multi_thread")]
async fn creation_validates_required_fields() {
    let server = test_server();

    let response = server.post("/tasks").json(&json!({})).await;

    let body = assert_problem(&response, StatusCode::BAD_REQUEST, "Validation Failed");
    assert!(has_field_error(&body, "name", "name can't be blank"));
    assert!(has_field_error(&body, "projectId", "projectId can't be null"));
}

#[tokio::test(flavor = "multi_thread")]
async fn creation_rejects_past_due_dates() {
    let server = test_server();
    let project_id = create_project(&server, "P1", "Backend rework").await;

    let response = server
        .post("/tasks")
        .json(&json!({
            "name": "Write docs",
            "dueDate": "2020-01-01",
            "projectId": project_id,
        }))
        .await;

    let body = assert_problem(&response, StatusCode::BAD_REQUEST, "Validation Failed");
    assert!(has_field_error(&body, "dueDate", "dueDate must be in the future"));
}

#[tokio::test(flavor = "multi_thread")]
async fn creation_bounds_the_estimate() {
    let server = test_server();
    let project_id = create_project(&server, "P1", "Backend rework").await;

    let response = server
        .post("/tasks")
        .json(&json!({
            "name": "Write docs",
            "projectId": project_id,
            "estimatedHours": 41,
        }))
        .await;

    let body = assert_problem(&response, StatusCode::BAD_REQUEST, "Validation Failed");
    assert!(has_field_error(
        &body,
        "estimatedHours",
        "estimatedHours can't exceed 40"
    ));
}

#[tokio::test(flavor = "multi_thread")]
async fn creation_rejects_an_unknown_project() {
    let server = test_server();

    let response = server
        .post("/tasks")
        .json(&json!({ "name": "Write docs", "projectId": 999 }))
        .await;

    let body = assert_problem(&response, StatusCode::BAD_REQUEST, "Bad Request");
    assert_eq!(body["detail"], "project does not exist: 999");
}

#[tokio::test(flavor = "multi_thread")]
async fn creation_honors_a_caller_uuid() {
    let server = test_server();
    let project_id = create_project(&server, "P1", "Backend rework").await;
    let uuid = "3f0e8a42-9d81-4c6f-b5a7-1c2d3e4f5a6b";

    let first = server
        .post("/tasks")
        .json(&json!({ "name": "Write docs", "projectId": project_id, "uuid": uuid }))
        .await;
    first.assert_status(StatusCode::CREATED);
    assert_eq!(first.json::<Value>()["uuid"], uuid);

    let second = server
        .post("/tasks")
        .json(&json!({ "name": "Another task", "projectId": project_id, "uuid": uuid }))
        .await;
    let body = assert_problem(&second, StatusCode::BAD_REQUEST, "Bad Request");
    assert_eq!(body["detail"], format!("task uuid already in use: {uuid}"));
}

#[tokio::test(flavor = "multi_thread")]
async fn missing_tasks_are_not_found() {
    let server = test_server();

    let response = server.get("/tasks/999").await;

    let body = assert_problem(&response, StatusCode::NOT_FOUND, "Not Found");
    assert_eq!(body["detail"], "task not found: 999");
}

#[tokio::test(flavor = "multi_thread")]
async fn search_filters_by_name_fragment() {
    let server = test_server();
    let project_id = create_project(&server, "P1", "Backend rework").await;
    create_task(&server, project_id, "Write docs").await;
    create_task(&server, project_id, "Write tests").await;
    create_task(&server, project_id, "Deploy").await;

    let unfiltered = server.get("/tasks").await;
    unfiltered.assert_status_ok();
    assert_eq!(unfiltered.json::<Vec<Value>>().len(), 3);

    let filtered = server.get("/tasks").add_query_param("name", "Write").await;
    filtered.assert_status_ok();
    let matches: Vec<Value> = filtered.json();
    assert_eq!(matches.len(), 2);
    assert!(
        matches
            .iter()
            .all(|task| task["name"].as_str().is_some_and(|name| name.contains("Write")))
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn search_filters_by_assignee() {
    let server = test_server();
    let project_id = create_project(&server, "P1", "Backend rework").await;
    let task_id = create_task(&server, project_id, "Write docs").await;
    create_task(&server, project_id, "Write tests").await;
    let worker_id = create_worker(&server, "john@test.com").await;

    let assigned = server
        .put(&format!("/tasks/{task_id}/assignee"))
        .json(&json!({ "assignee": { "id": worker_id } }))
        .await;
    assigned.assert_status_ok();

    let response = server
        .get("/tasks")
        .add_query_param("assigneeId", worker_id)
        .await;

    response.assert_status_ok();
    let matches: Vec<Value> = response.json();
    assert_eq!(matches.len(), 1);
    assert!(matches.first().is_some_and(|task| task["id"] == task_id));
}

#[tokio::test(flavor = "multi_thread")]
async fn update_replaces_every_field_except_the_uuid() {
    let server = test_server();
    let project_id = create_project(&server, "P1", "Backend rework").await;
    let task_id = create_task(&server, project_id, "Write docs").await;
    let worker_id = create_worker(&server, "john@test.com").await;
    let fetched: Value = server.get(&format!("/tasks/{task_id}")).await.json();
    let original_uuid = fetched["uuid"].clone();

    let response = server
        .put(&format!("/tasks/{task_id}"))
        .json(&json!({
            "name": "Write better docs",
            "description": "Document the API",
            "dueDate": "2020-01-01",
            "status": "IN_PROGRESS",
            "projectId": project_id,
            "assignee": { "id": worker_id },
            "estimatedHours": 12,
            "uuid": "3f0e8a42-9d81-4c6f-b5a7-1c2d3e4f5a6b",
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["name"], "Write better docs");
    assert_eq!(body["description"], "Document the API");
    assert_eq!(body["dueDate"], "2020-01-01");
    assert_eq!(body["status"], "IN_PROGRESS");
    assert_eq!(body["estimatedHours"], 12);
    assert_eq!(body["assignee"]["id"], worker_id);
    assert_eq!(body["assignee"]["email"], "john@test.com");
    assert_eq!(body["uuid"], original_uuid);
}

#[tokio::test(flavor = "multi_thread")]
async fn update_requires_a_status() {
    let server = test_server();
    let project_id = create_project(&server, "P1", "Backend rework").await;
    let task_id = create_task(&server, project_id, "Write docs").await;

    let response = server
        .put(&format!("/tasks/{task_id}"))
        .json(&json!({ "name": "Write docs", "projectId": project_id }))
        .await;

    let body = assert_problem(&response, StatusCode::BAD_REQUEST, "Validation Failed");
    assert!(has_field_error(&body, "status", "status can't be null"));
}

#[tokio::test(flavor = "multi_thread")]
async fn update_rejects_an_unknown_assignee() {
    let server = test_server();
    let project_id = create_project(&server, "P1", "Backend rework").await;
    let task_id = create_task(&server, project_id, "Write docs").await;

    let response = server
        .put(&format!("/tasks/{task_id}"))
        .json(&json!({
            "name": "Write docs",
            "status": "TO_DO",
            "projectId": project_id,
            "assignee": { "id": 999 },
        }))
        .await;

    let body = assert_problem(&response, StatusCode::BAD_REQUEST, "Bad Request");
    assert_eq!(body["detail"], "assignee does not exist: 999");
}

#[tokio::test(flavor = "multi_thread")]
async fn status_endpoint_changes_only_the_status() {
    let server = test_server();
    let project_id = create_project(&server, "P1", "Backend rework").await;
    let task_id = create_task(&server, project_id, "Write docs").await;

    let response = server
        .put(&format!("/tasks/{task_id}/status"))
        .json(&json!({ "status": "IN_PROGRESS" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "IN_PROGRESS");
    assert_eq!(body["name"], "Write docs");
}

#[tokio::test(flavor = "multi_thread")]
async fn status_endpoint_requires_a_status() {
    let server = test_server();
    let project_id = create_project(&server, "P1", "Backend rework").await;
    let task_id = create_task(&server, project_id, "Write docs").await;

    let response = server
        .put(&format!("/tasks/{task_id}/status"))
        .json(&json!({}))
        .await;

    let body = assert_problem(&response, StatusCode::BAD_REQUEST, "Validation Failed");
    assert!(has_field_error(&body, "status", "status can't be null"));
}

#[tokio::test(flavor = "multi_thread")]
async fn status_change_for_a_missing_task_is_not_found() {
    let server = test_server();

    let response = server
        .put("/tasks/999/status")
        .json(&json!({ "status": "DONE" }))
        .await;

    let body = assert_problem(&response, StatusCode::NOT_FOUND, "Not Found");
    assert_eq!(body["detail"], "task not found: 999");
}

#[tokio::test(flavor = "multi_thread")]
async fn assignee_endpoint_assigns_and_clears() {
    let server = test_server();
    let project_id = create_project(&server, "P1", "Backend rework").await;
    let task_id = create_task(&server, project_id, "Write docs").await;
    let worker_id = create_worker(&server, "john@test.com").await;

    let assigned = server
        .put(&format!("/tasks/{task_id}/assignee"))
        .json(&json!({ "assignee": { "id": worker_id } }))
        .await;
    assigned.assert_status_ok();
    assert_eq!(assigned.json::<Value>()["assignee"]["email"], "john@test.com");

    let cleared = server
        .put(&format!("/tasks/{task_id}/assignee"))
        .json(&json!({}))
        .await;
    cleared.assert_status_ok();
    assert!(cleared.json::<Value>()["assignee"].is_null());
}

#[tokio::test(flavor = "multi_thread")]
async fn assignee_endpoint_rejects_unknown_workers() {
    let server = test_server();
    let project_id = create_project(&server, "P1", "Backend rework").await;
    let task_id = create_task(&server, project_id, "Write docs").await;

    let response = server
        .put(&format!("/tasks/{task_id}/assignee"))
        .json(&json!({ "assignee": { "id": 999 } }))
        .await;

    let body = assert_problem(&response, StatusCode::BAD_REQUEST, "Bad Request");
    assert_eq!(body["detail"], "assignee does not exist: 999");
}

#[tokio::test(flavor = "multi_thread")]
async fn deletion_is_never_allowed() {
    let server = test_server();
    let project_id = create_project(&server, "P1", "Backend rework").await;
    let task_id = create_task(&server, project_id, "Write docs").await;

    let response = server.delete(&format!("/tasks/{task_id}")).await;

    let body = assert_problem(&response, StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed");
    assert_eq!(body["detail"], "task deletion is not supported");
}
