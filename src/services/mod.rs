//! Application services orchestrating project, task, and worker operations.

mod error;
mod project;
mod task;
mod worker;

pub use error::{ServiceError, ServiceResult};
pub use project::{ProjectService, ProjectUpdate};
pub use task::{TaskService, TaskUpdate};
pub use worker::{WorkerService, WorkerUpdate};
