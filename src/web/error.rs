//! Boundary error type translating every layer's failures to HTTP.

use axum::Json;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use super::payload::PayloadError;
use super::problem::ProblemDetails;
use super::validation::FieldError;
use crate::ports::RepositoryError;
use crate::services::ServiceError;

/// Result alias for handler operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Error responses produced at the HTTP boundary.
///
/// Failures from the payload, validation, service, and repository layers
/// are each translated into exactly one of these variants; all of them
/// render as an `application/problem+json` body.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The requested resource does not exist.
    #[error("{0}")]
    NotFound(String),
    /// One or more payload fields failed their operation's rules.
    #[error("validation failed")]
    Validation(Vec<FieldError>),
    /// The body identifier differs from the path identifier.
    #[error("body id {body} does not match path id {path}")]
    IdMismatch {
        /// Identifier taken from the request path.
        path: i64,
        /// Identifier carried in the request body.
        body: i64,
    },
    /// The request conflicts with stored state, such as a duplicate unique
    /// key or a reference to a missing row.
    #[error("{0}")]
    IntegrityViolation(String),
    /// The operation is deliberately unsupported on this resource.
    #[error("{0}")]
    MethodNotAllowed(String),
    /// An infrastructure failure; the response body carries no internals.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Returns the HTTP status this error renders with.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) | Self::IdMismatch { .. } | Self::IntegrityViolation(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn into_problem(self) -> ProblemDetails {
        let status = self.status_code();
        let message = self.to_string();
        match self {
            Self::NotFound(_) => ProblemDetails::new(status, "Not Found").with_detail(message),
            Self::Validation(errors) => {
                ProblemDetails::new(status, "Validation Failed").with_errors(errors)
            }
            Self::IdMismatch { .. } | Self::IntegrityViolation(_) => {
                ProblemDetails::new(status, "Bad Request").with_detail(message)
            }
            Self::MethodNotAllowed(_) => {
                ProblemDetails::new(status, "Method Not Allowed").with_detail(message)
            }
            Self::Internal(_) => ProblemDetails::new(status, "Internal Server Error"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::Internal(detail) => tracing::error!("internal error: {}", detail),
            Self::IntegrityViolation(detail) => tracing::warn!("integrity violation: {}", detail),
            _ => {}
        }
        let status = self.status_code();
        let body = self.into_problem();
        (
            status,
            [(header::CONTENT_TYPE, "application/problem+json")],
            Json(body),
        )
            .into_response()
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::DuplicateProjectCode(code) => {
                Self::IntegrityViolation(format!("project code already in use: {code}"))
            }
            RepositoryError::DuplicateWorkerEmail(email) => {
                Self::IntegrityViolation(format!("worker email already in use: {email}"))
            }
            RepositoryError::DuplicateTaskUuid(uuid) => {
                Self::IntegrityViolation(format!("task uuid already in use: {uuid}"))
            }
            RepositoryError::UnknownProject(id) => {
                Self::IntegrityViolation(format!("project does not exist: {id}"))
            }
            RepositoryError::UnknownWorker(id) => {
                Self::IntegrityViolation(format!("worker does not exist: {id}"))
            }
            RepositoryError::ProjectNotFound(id) => {
                Self::NotFound(format!("project not found: {id}"))
            }
            RepositoryError::TaskNotFound(id) => Self::NotFound(format!("task not found: {id}")),
            RepositoryError::WorkerNotFound(id) => Self::NotFound(format!("worker not found: {id}")),
            RepositoryError::Persistence(source) => Self::Internal(source.to_string()),
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::UnknownAssignee(id) => {
                Self::IntegrityViolation(format!("assignee does not exist: {id}"))
            }
            ServiceError::Repository(source) => source.into(),
        }
    }
}

impl From<PayloadError> for ApiError {
    fn from(err: PayloadError) -> Self {
        match err {
            PayloadError::IdMismatch { path, body } => Self::IdMismatch { path, body },
            PayloadError::MissingField(field) => {
                Self::Validation(vec![FieldError::new(field, format!("{field} can't be null"))])
            }
        }
    }
}
