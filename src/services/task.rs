//! Task application service.

use std::sync::Arc;

use chrono::NaiveDate;

use super::{ServiceError, ServiceResult};
use crate::domain::{NewTask, ProjectId, Task, TaskChanges, TaskId, TaskStatus, Worker, WorkerId};
use crate::ports::{TaskRepository, WorkerRepository};

/// Parameter object carrying every updatable task field.
///
/// Updates are wholesale: each field replaces the stored value, so an
/// absent optional clears it and an absent assignee unassigns the task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskUpdate {
    name: String,
    description: Option<String>,
    due_date: Option<NaiveDate>,
    status: TaskStatus,
    project_id: ProjectId,
    assignee_id: Option<WorkerId>,
    estimated_hours: Option<i32>,
}

impl TaskUpdate {
    /// Creates an update with the required fields.
    #[must_use]
    pub fn new(name: impl Into<String>, status: TaskStatus, project_id: ProjectId) -> Self {
        Self {
            name: name.into(),
            description: None,
            due_date: None,
            status,
            project_id,
            assignee_id: None,
            estimated_hours: None,
        }
    }

    /// Sets the replacement description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the replacement due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the replacement assignee.
    #[must_use]
    pub const fn with_assignee(mut self, assignee_id: WorkerId) -> Self {
        self.assignee_id = Some(assignee_id);
        self
    }

    /// Sets the replacement effort estimate.
    #[must_use]
    pub const fn with_estimated_hours(mut self, estimated_hours: i32) -> Self {
        self.estimated_hours = Some(estimated_hours);
        self
    }
}

/// Task orchestration service.
///
/// Holds the worker repository alongside the task repository so that
/// assignee references can be resolved to full worker aggregates before a
/// task is persisted.
#[derive(Clone)]
pub struct TaskService {
    tasks: Arc<dyn TaskRepository>,
    workers: Arc<dyn WorkerRepository>,
}

impl TaskService {
    /// Creates a new task service.
    #[must_use]
    pub const fn new(tasks: Arc<dyn TaskRepository>, workers: Arc<dyn WorkerRepository>) -> Self {
        Self { tasks, workers }
    }

    /// Creates a task from the supplied command.
    ///
    /// The task enters the store in its initial status with no assignee.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Repository`] when the owning project does
    /// not exist, the supplied UUID is already in use, or persistence
    /// fails.
    pub async fn create(&self, new_task: NewTask) -> ServiceResult<Task> {
        Ok(self.tasks.insert(new_task).await?)
    }

    /// Retrieves a task by identifier.
    ///
    /// Returns `Ok(None)` when the task does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Repository`] when persistence lookup fails.
    pub async fn get(&self, id: TaskId) -> ServiceResult<Option<Task>> {
        Ok(self.tasks.find_by_id(id).await?)
    }

    /// Returns tasks whose name contains the fragment, optionally narrowed
    /// to one assignee.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Repository`] when persistence lookup fails.
    pub async fn search(
        &self,
        name_fragment: &str,
        assignee: Option<WorkerId>,
    ) -> ServiceResult<Vec<Task>> {
        Ok(self.tasks.search(name_fragment, assignee).await?)
    }

    /// Applies a wholesale update to an existing task.
    ///
    /// Returns `Ok(None)` when the task does not exist. The identifier and
    /// UUID are never altered by an update.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::UnknownAssignee`] when the update references
    /// a worker that does not exist, or [`ServiceError::Repository`] when
    /// persistence fails.
    pub async fn update(&self, id: TaskId, update: TaskUpdate) -> ServiceResult<Option<Task>> {
        let Some(mut task) = self.tasks.find_by_id(id).await? else {
            return Ok(None);
        };
        let assignee = self.resolve_assignee(update.assignee_id).await?;
        task.apply_changes(TaskChanges {
            name: update.name,
            description: update.description,
            due_date: update.due_date,
            status: update.status,
            project_id: update.project_id,
            assignee,
            estimated_hours: update.estimated_hours,
        });
        let saved = self.tasks.save(&task).await?;
        Ok(Some(saved))
    }

    /// Replaces only the lifecycle status of an existing task.
    ///
    /// Returns `Ok(None)` when the task does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Repository`] when persistence fails.
    pub async fn update_status(
        &self,
        id: TaskId,
        status: TaskStatus,
    ) -> ServiceResult<Option<Task>> {
        let Some(mut task) = self.tasks.find_by_id(id).await? else {
            return Ok(None);
        };
        task.set_status(status);
        let saved = self.tasks.save(&task).await?;
        Ok(Some(saved))
    }

    /// Replaces only the assignee of an existing task; `None` unassigns.
    ///
    /// Returns `Ok(None)` when the task does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::UnknownAssignee`] when the referenced worker
    /// does not exist, or [`ServiceError::Repository`] when persistence
    /// fails.
    pub async fn update_assignee(
        &self,
        id: TaskId,
        assignee_id: Option<WorkerId>,
    ) -> ServiceResult<Option<Task>> {
        let Some(mut task) = self.tasks.find_by_id(id).await? else {
            return Ok(None);
        };
        let assignee = self.resolve_assignee(assignee_id).await?;
        task.set_assignee(assignee);
        let saved = self.tasks.save(&task).await?;
        Ok(Some(saved))
    }

    async fn resolve_assignee(
        &self,
        assignee_id: Option<WorkerId>,
    ) -> ServiceResult<Option<Worker>> {
        let Some(worker_id) = assignee_id else {
            return Ok(None);
        };
        let worker = self
            .workers
            .find_by_id(worker_id)
            .await?
            .ok_or(ServiceError::UnknownAssignee(worker_id))?;
        Ok(Some(worker))
    }
}
