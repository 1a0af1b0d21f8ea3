//! Router configuration and server setup.

use axum::Router;
use axum::routing::{delete, get, post, put};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use super::handlers::{projects, tasks, workers};
use super::state::AppState;
use crate::config::ServerConfig;

/// Creates the API router with every route configured.
#[must_use]
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Projects
        .route("/projects", get(projects::list))
        .route("/projects", post(projects::create))
        .route("/projects/:id", get(projects::get))
        .route("/projects/:id", put(projects::update))
        // Tasks
        .route("/tasks", get(tasks::list))
        .route("/tasks", post(tasks::create))
        .route("/tasks/:id", get(tasks::get))
        .route("/tasks/:id", put(tasks::update))
        .route("/tasks/:id", delete(tasks::delete))
        .route("/tasks/:id/status", put(tasks::update_status))
        .route("/tasks/:id/assignee", put(tasks::update_assignee))
        // Workers
        .route("/workers", post(workers::create))
        .route("/workers/:id", get(workers::get))
        .route("/workers/:id", put(workers::update))
        .layer(cors)
        .with_state(state)
}

/// Starts the API server and blocks until it exits.
///
/// # Errors
///
/// Returns [`std::io::Error`] when binding the listener fails or the
/// server terminates abnormally.
pub async fn serve(config: &ServerConfig, state: AppState) -> Result<(), std::io::Error> {
    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("taskboard listening on {}", addr);
    axum::serve(listener, create_router(state)).await
}
