//! Project handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::domain::ProjectId;
use crate::web::error::{ApiError, ApiResult};
use crate::web::payload::ProjectPayload;
use crate::web::state::AppState;
use crate::web::validation;

/// GET /projects - lists every project with its tasks.
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<ProjectPayload>>> {
    let projects = state.projects().list().await?;
    let payloads = projects.iter().map(ProjectPayload::from_model).collect();
    Ok(Json(payloads))
}

/// GET /projects/:id - fetches one project.
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<ProjectPayload>> {
    let project = state
        .projects()
        .get(ProjectId::new(id))
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("project not found: {id}")))?;
    Ok(Json(ProjectPayload::from_model(&project)))
}

/// POST /projects - creates a project; tasks in the body are ignored.
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<ProjectPayload>,
) -> ApiResult<(StatusCode, Json<ProjectPayload>)> {
    let errors = validation::project_create(&payload);
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }
    let created = state.projects().create(payload.into_new_project()?).await?;
    Ok((
        StatusCode::CREATED,
        Json(ProjectPayload::from_model(&created)),
    ))
}

/// PUT /projects/:id - replaces the name and description; the code is kept.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<ProjectPayload>,
) -> ApiResult<Json<ProjectPayload>> {
    let errors = validation::project_update(&payload);
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }
    let update = payload.into_update(id)?;
    let updated = state
        .projects()
        .update(ProjectId::new(id), update)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("project not found: {id}")))?;
    Ok(Json(ProjectPayload::from_model(&updated)))
}
