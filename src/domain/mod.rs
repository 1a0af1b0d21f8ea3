//! Domain model for project, task, and worker management.
//!
//! The domain layer models projects that own collections of tasks, workers
//! that tasks may be assigned to, and the task status lifecycle, while
//! keeping all infrastructure concerns outside of the domain boundary.

mod error;
mod ids;
mod project;
mod status;
mod task;
mod worker;

pub use error::ParseTaskStatusError;
pub use ids::{ProjectId, TaskId, TaskUuid, WorkerId};
pub use project::{NewProject, PersistedProjectData, Project};
pub use status::TaskStatus;
pub use task::{NewTask, PersistedTaskData, Task, TaskChanges};
pub use worker::{NewWorker, PersistedWorkerData, Worker};
