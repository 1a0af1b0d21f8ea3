//! Worker handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::domain::WorkerId;
use crate::web::error::{ApiError, ApiResult};
use crate::web::payload::WorkerPayload;
use crate::web::state::AppState;
use crate::web::validation;

/// GET /workers/:id - fetches one worker.
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<WorkerPayload>> {
    let worker = state
        .workers()
        .get(WorkerId::new(id))
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("worker not found: {id}")))?;
    Ok(Json(WorkerPayload::from_model(&worker)))
}

/// POST /workers - creates a worker.
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<WorkerPayload>,
) -> ApiResult<(StatusCode, Json<WorkerPayload>)> {
    let errors = validation::worker_create(&payload);
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }
    let created = state.workers().create(payload.into_new_worker()?).await?;
    Ok((
        StatusCode::CREATED,
        Json(WorkerPayload::from_model(&created)),
    ))
}

/// PUT /workers/:id - replaces every updatable field.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<WorkerPayload>,
) -> ApiResult<Json<WorkerPayload>> {
    let errors = validation::worker_update(&payload);
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }
    let update = payload.into_update(id)?;
    let updated = state
        .workers()
        .update(WorkerId::new(id), update)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("worker not found: {id}")))?;
    Ok(Json(WorkerPayload::from_model(&updated)))
}
