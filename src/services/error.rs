//! Shared service-layer error type.

use crate::domain::WorkerId;
use crate::ports::RepositoryError;
use thiserror::Error;

/// Errors returned by the application services.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// An assignee change referenced a worker that does not exist.
    #[error("unknown assignee: {0}")]
    UnknownAssignee(WorkerId),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Result type for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;
