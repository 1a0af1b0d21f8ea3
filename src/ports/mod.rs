//! Port contracts for project, task, and worker persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by the services.

pub mod repository;

pub use repository::{
    ProjectRepository, RepositoryError, RepositoryResult, TaskRepository, WorkerRepository,
};
