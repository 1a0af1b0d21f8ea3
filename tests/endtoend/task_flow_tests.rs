//! Task journeys driven through the client DSL.

use axum::http::{Method, StatusCode};
use serde_json::json;

use crate::endtoend::client::ApiClient;
use crate::endtoend::spec::{ProjectSpec, TaskSpec, WorkerSpec, assert_matches};

async fn create_project(client: &ApiClient, code: &str) -> i64 {
    let created = client
        .create(
            "/projects",
            &json!({"code": code, "name": format!("Project {code}")}),
        )
        .await;
    created["id"].as_i64().expect("created project should carry an id")
}

async fn create_worker(client: &ApiClient, email: &str) -> i64 {
    let created = client
        .create("/workers", &json!({"email": email, "firstName": "Ada"}))
        .await;
    created["id"].as_i64().expect("created worker should carry an id")
}

async fn create_task(client: &ApiClient, name: &str, project: i64) -> i64 {
    let created = client
        .create("/tasks", &json!({"name": name, "projectId": project}))
        .await;
    created["id"].as_i64().expect("created task should carry an id")
}

#[tokio::test(flavor = "multi_thread")]
async fn a_task_travels_the_full_lifecycle() {
    let client = ApiClient::new();
    let project = create_project(&client, "P1").await;
    let worker = create_worker(&client, "ada@test.com").await;
    let task = create_task(&client, "Write docs", project).await;

    let assigned = client
        .put(
            &format!("/tasks/{task}/assignee"),
            &json!({"assignee": {"id": worker}}),
        )
        .await;
    assert_matches(
        &TaskSpec {
            name: "Write docs",
            status: "TO_DO",
            assignee: Some("ada@test.com"),
        },
        &assigned,
    );
    assert_matches(
        &WorkerSpec {
            email: "ada@test.com",
            first_name: Some("Ada"),
            last_name: None,
        },
        &assigned["assignee"],
    );

    client
        .put(&format!("/tasks/{task}/status"), &json!({"status": "IN_PROGRESS"}))
        .await;
    let done = client
        .put(&format!("/tasks/{task}/status"), &json!({"status": "DONE"}))
        .await;
    assert_matches(
        &TaskSpec {
            name: "Write docs",
            status: "DONE",
            assignee: Some("ada@test.com"),
        },
        &done,
    );

    let unassigned = client
        .put(&format!("/tasks/{task}/assignee"), &json!({}))
        .await;
    assert_matches(
        &TaskSpec {
            name: "Write docs",
            status: "DONE",
            assignee: None,
        },
        &unassigned,
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn search_narrows_by_name_and_assignee() {
    let client = ApiClient::new();
    let project = create_project(&client, "P1").await;
    let worker = create_worker(&client, "ada@test.com").await;
    let flagged = create_task(&client, "Write docs", project).await;
    create_task(&client, "Write tests", project).await;
    create_task(&client, "Review docs", project).await;
    client
        .put(
            &format!("/tasks/{flagged}/assignee"),
            &json!({"assignee": {"id": worker}}),
        )
        .await;

    let by_name = client.get_list("/tasks?name=Write").await;
    assert_eq!(by_name.len(), 2);

    let narrowed = client
        .get_list(&format!("/tasks?name=Write&assigneeId={worker}"))
        .await;
    assert_eq!(narrowed.len(), 1);
    assert_matches(
        &TaskSpec {
            name: "Write docs",
            status: "TO_DO",
            assignee: Some("ada@test.com"),
        },
        &narrowed[0],
    );

    let unmatched = client.get_list("/tasks?name=Deploy").await;
    assert!(unmatched.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn an_update_moves_a_task_between_projects() {
    let client = ApiClient::new();
    let first = create_project(&client, "P1").await;
    let second = create_project(&client, "P2").await;
    let worker = create_worker(&client, "ada@test.com").await;
    let task = create_task(&client, "Write docs", first).await;

    let moved = client
        .put(
            &format!("/tasks/{task}"),
            &json!({
                "name": "Write the migration guide",
                "status": "IN_PROGRESS",
                "projectId": second,
                "assignee": {"id": worker},
                "estimatedHours": 16,
            }),
        )
        .await;
    assert_matches(
        &TaskSpec {
            name: "Write the migration guide",
            status: "IN_PROGRESS",
            assignee: Some("ada@test.com"),
        },
        &moved,
    );
    assert_eq!(moved["projectId"], second);
    assert_eq!(moved["estimatedHours"], 16);

    let drained = client.get(&format!("/projects/{first}")).await;
    assert_matches(
        &ProjectSpec {
            code: "P1",
            name: "Project P1",
            task_count: 0,
        },
        &drained,
    );
    let gained = client.get(&format!("/projects/{second}")).await;
    assert_matches(
        &ProjectSpec {
            code: "P2",
            name: "Project P2",
            task_count: 1,
        },
        &gained,
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn failures_surface_as_problem_documents() {
    let client = ApiClient::new();
    let project = create_project(&client, "P1").await;
    let task = create_task(&client, "Write docs", project).await;

    let invalid = client
        .request_with_status(
            &Method::POST,
            "/tasks",
            Some(&json!({"name": "Write docs"})),
            StatusCode::BAD_REQUEST,
        )
        .await;
    assert_eq!(invalid["title"], "Validation Failed");
    assert_eq!(invalid["errors"][0]["field"], "projectId");

    let missing = client
        .request_with_status(&Method::GET, "/projects/999", None, StatusCode::NOT_FOUND)
        .await;
    assert_eq!(missing["title"], "Not Found");
    assert_eq!(missing["detail"], "project not found: 999");

    let rejected = client
        .request_with_status(
            &Method::DELETE,
            &format!("/tasks/{task}"),
            None,
            StatusCode::METHOD_NOT_ALLOWED,
        )
        .await;
    assert_eq!(rejected["detail"], "task deletion is not supported");
}
