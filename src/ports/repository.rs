//! Repository ports for project, task, and worker persistence.

use crate::domain::{
    NewProject, NewTask, NewWorker, Project, ProjectId, Task, TaskId, TaskUuid, Worker, WorkerId,
};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Project persistence contract.
///
/// Returned projects are fully materialized: the task collection is
/// loaded, and each task carries its assignee when assigned.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Stores a new project and returns the persisted aggregate.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::DuplicateProjectCode`] when the code is
    /// already in use.
    async fn insert(&self, new_project: NewProject) -> RepositoryResult<Project>;

    /// Persists changes to an existing project and returns the stored
    /// aggregate.
    ///
    /// Only the name and description are written. The code is immutable,
    /// and the task collection is persisted through [`TaskRepository`],
    /// never through a project save.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::ProjectNotFound`] when the project does
    /// not exist.
    async fn save(&self, project: &Project) -> RepositoryResult<Project>;

    /// Finds a project by identifier.
    ///
    /// Returns `None` when the project does not exist.
    async fn find_by_id(&self, id: ProjectId) -> RepositoryResult<Option<Project>>;

    /// Returns all projects ordered by identifier.
    async fn list(&self) -> RepositoryResult<Vec<Project>>;
}

/// Task persistence contract.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task and returns the persisted aggregate.
    ///
    /// The task enters the store in its initial status with no assignee;
    /// a caller-supplied UUID is honored, otherwise one is generated.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::UnknownProject`] when the owning project
    /// does not exist, or [`RepositoryError::DuplicateTaskUuid`] when the
    /// supplied UUID is already in use.
    async fn insert(&self, new_task: NewTask) -> RepositoryResult<Task>;

    /// Persists changes to an existing task and returns the stored
    /// aggregate. The UUID is never altered by a save.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::TaskNotFound`] when the task does not
    /// exist, [`RepositoryError::UnknownProject`] when the owning project
    /// reference is dangling, or [`RepositoryError::UnknownWorker`] when
    /// the assignee reference is dangling.
    async fn save(&self, task: &Task) -> RepositoryResult<Task>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> RepositoryResult<Option<Task>>;

    /// Returns tasks whose name contains the fragment, ordered by
    /// identifier.
    ///
    /// An empty fragment matches every task. When an assignee is supplied,
    /// only tasks assigned to that worker are returned.
    async fn search(
        &self,
        name_fragment: &str,
        assignee: Option<WorkerId>,
    ) -> RepositoryResult<Vec<Task>>;
}

/// Worker persistence contract.
#[async_trait]
pub trait WorkerRepository: Send + Sync {
    /// Stores a new worker and returns the persisted aggregate.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::DuplicateWorkerEmail`] when the email is
    /// already in use.
    async fn insert(&self, new_worker: NewWorker) -> RepositoryResult<Worker>;

    /// Persists changes to an existing worker and returns the stored
    /// aggregate.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::WorkerNotFound`] when the worker does
    /// not exist, or [`RepositoryError::DuplicateWorkerEmail`] when the
    /// email collides with another worker.
    async fn save(&self, worker: &Worker) -> RepositoryResult<Worker>;

    /// Finds a worker by identifier.
    ///
    /// Returns `None` when the worker does not exist.
    async fn find_by_id(&self, id: WorkerId) -> RepositoryResult<Option<Worker>>;
}

/// Errors returned by repository implementations.
#[derive(Debug, Clone, Error)]
pub enum RepositoryError {
    /// A project with the same code already exists.
    #[error("duplicate project code: {0}")]
    DuplicateProjectCode(String),

    /// A worker with the same email already exists.
    #[error("duplicate worker email: {0}")]
    DuplicateWorkerEmail(String),

    /// A task with the same UUID already exists.
    #[error("duplicate task uuid: {0}")]
    DuplicateTaskUuid(TaskUuid),

    /// A task referenced a project that does not exist.
    #[error("unknown project: {0}")]
    UnknownProject(ProjectId),

    /// A task referenced an assignee that does not exist.
    #[error("unknown worker: {0}")]
    UnknownWorker(WorkerId),

    /// The project targeted by a save was not found.
    #[error("project not found: {0}")]
    ProjectNotFound(ProjectId),

    /// The task targeted by a save was not found.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// The worker targeted by a save was not found.
    #[error("worker not found: {0}")]
    WorkerNotFound(WorkerId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl RepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
