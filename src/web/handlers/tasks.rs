//! Task handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde::Deserialize;

use crate::domain::{TaskId, WorkerId};
use crate::web::error::{ApiError, ApiResult};
use crate::web::payload::TaskPayload;
use crate::web::state::AppState;
use crate::web::validation;

/// Filters accepted by the task listing endpoint.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskSearchQuery {
    /// Substring the task name must contain; absent matches every name.
    pub name: Option<String>,
    /// Identifier of the worker the task must be assigned to.
    pub assignee_id: Option<i64>,
}

/// GET /tasks - lists tasks, optionally filtered by name and assignee.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<TaskSearchQuery>,
) -> ApiResult<Json<Vec<TaskPayload>>> {
    let fragment = query.name.unwrap_or_default();
    let assignee = query.assignee_id.map(WorkerId::new);
    let tasks = state.tasks().search(&fragment, assignee).await?;
    let payloads = tasks.iter().map(TaskPayload::from_model).collect();
    Ok(Json(payloads))
}

/// GET /tasks/:id - fetches one task with its assignee.
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<TaskPayload>> {
    let task = state
        .tasks()
        .get(TaskId::new(id))
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("task not found: {id}")))?;
    Ok(Json(TaskPayload::from_model(&task)))
}

/// POST /tasks - creates a task in its initial status, unassigned.
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<TaskPayload>,
) -> ApiResult<(StatusCode, Json<TaskPayload>)> {
    let errors = validation::task_create(&payload, state.today());
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }
    let created = state.tasks().create(payload.into_new_task()?).await?;
    Ok((StatusCode::CREATED, Json(TaskPayload::from_model(&created))))
}

/// PUT /tasks/:id - replaces every updatable field; the UUID is kept.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<TaskPayload>,
) -> ApiResult<Json<TaskPayload>> {
    let errors = validation::task_update(&payload);
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }
    let update = payload.into_update(id)?;
    let updated = state
        .tasks()
        .update(TaskId::new(id), update)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("task not found: {id}")))?;
    Ok(Json(TaskPayload::from_model(&updated)))
}

/// PUT /tasks/:id/status - replaces only the lifecycle status.
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<TaskPayload>,
) -> ApiResult<Json<TaskPayload>> {
    let errors = validation::task_status_change(&payload);
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }
    let status = payload.into_status_change(id)?;
    let updated = state
        .tasks()
        .update_status(TaskId::new(id), status)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("task not found: {id}")))?;
    Ok(Json(TaskPayload::from_model(&updated)))
}

/// PUT /tasks/:id/assignee - replaces only the assignee; an absent one
/// unassigns the task.
pub async fn update_assignee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<TaskPayload>,
) -> ApiResult<Json<TaskPayload>> {
    let errors = validation::task_assignee_change(&payload);
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }
    let assignee = payload.into_assignee_change(id)?;
    let updated = state
        .tasks()
        .update_assignee(TaskId::new(id), assignee)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("task not found: {id}")))?;
    Ok(Json(TaskPayload::from_model(&updated)))
}

/// DELETE /tasks/:id - always rejected; tasks cannot be deleted.
#[expect(clippy::unused_async, reason = "axum handlers must be async")]
pub async fn delete() -> ApiError {
    ApiError::MethodNotAllowed("task deletion is not supported".to_owned())
}
