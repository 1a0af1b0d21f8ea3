//! Task wire payload and its mappers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::{PayloadError, PayloadResult, check_id_matches};
use super::worker::WorkerPayload;
use crate::domain::{NewTask, ProjectId, Task, TaskStatus, TaskUuid, WorkerId};
use crate::services::TaskUpdate;

/// Wire representation of a task.
///
/// Every field is optional so that absent fields reach the validation layer
/// instead of failing deserialization. The assignee is carried as a nested
/// [`WorkerPayload`]; only its identifier is consulted when mapping to a
/// command.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPayload {
    /// Store-assigned identifier; ignored on create.
    pub id: Option<i64>,
    /// Immutable public identifier; honored on create, never updated.
    pub uuid: Option<Uuid>,
    /// Task name.
    pub name: Option<String>,
    /// Optional description.
    pub description: Option<String>,
    /// Optional due date.
    pub due_date: Option<NaiveDate>,
    /// Lifecycle status; ignored on create.
    pub status: Option<TaskStatus>,
    /// Identifier of the owning project.
    pub project_id: Option<i64>,
    /// Assigned worker; ignored on create.
    pub assignee: Option<WorkerPayload>,
    /// Optional effort estimate in hours.
    pub estimated_hours: Option<i32>,
}

impl TaskPayload {
    /// Builds the wire representation of a task, including its assignee.
    #[must_use]
    pub fn from_model(task: &Task) -> Self {
        Self {
            id: Some(task.id().into_inner()),
            uuid: Some(task.uuid().into_inner()),
            name: Some(task.name().to_owned()),
            description: task.description().map(ToOwned::to_owned),
            due_date: task.due_date(),
            status: Some(task.status()),
            project_id: Some(task.project_id().into_inner()),
            assignee: task.assignee().map(WorkerPayload::from_model),
            estimated_hours: task.estimated_hours(),
        }
    }

    /// Maps the payload to a task creation command.
    ///
    /// Any client-supplied identifier, status, or assignee is dropped: the
    /// command structurally cannot carry them. A client-supplied UUID is
    /// kept.
    ///
    /// # Errors
    ///
    /// Returns [`PayloadError::MissingField`] when the name or the owning
    /// project identifier is absent.
    pub fn into_new_task(self) -> PayloadResult<NewTask> {
        let name = self.name.ok_or(PayloadError::MissingField("name"))?;
        let project_id = self
            .project_id
            .ok_or(PayloadError::MissingField("projectId"))?;
        Ok(NewTask {
            uuid: self.uuid.map(TaskUuid::from_uuid),
            name,
            description: self.description,
            due_date: self.due_date,
            project_id: ProjectId::new(project_id),
            estimated_hours: self.estimated_hours,
        })
    }

    /// Maps the payload to a wholesale update for the task at `path_id`.
    ///
    /// # Errors
    ///
    /// Returns [`PayloadError::IdMismatch`] when the body identifier differs
    /// from the path, or [`PayloadError::MissingField`] when the name, the
    /// status, the owning project identifier, or the identifier of a nested
    /// assignee is absent.
    pub fn into_update(self, path_id: i64) -> PayloadResult<TaskUpdate> {
        check_id_matches(path_id, self.id)?;
        let name = self.name.ok_or(PayloadError::MissingField("name"))?;
        let status = self.status.ok_or(PayloadError::MissingField("status"))?;
        let project_id = self
            .project_id
            .ok_or(PayloadError::MissingField("projectId"))?;
        let mut update = TaskUpdate::new(name, status, ProjectId::new(project_id));
        if let Some(description) = self.description {
            update = update.with_description(description);
        }
        if let Some(due_date) = self.due_date {
            update = update.with_due_date(due_date);
        }
        if let Some(worker_id) = assignee_worker_id(self.assignee)? {
            update = update.with_assignee(worker_id);
        }
        if let Some(estimated_hours) = self.estimated_hours {
            update = update.with_estimated_hours(estimated_hours);
        }
        Ok(update)
    }

    /// Extracts the replacement status for the task at `path_id`.
    ///
    /// # Errors
    ///
    /// Returns [`PayloadError::IdMismatch`] when the body identifier differs
    /// from the path, or [`PayloadError::MissingField`] when the status is
    /// absent.
    pub fn into_status_change(self, path_id: i64) -> PayloadResult<TaskStatus> {
        check_id_matches(path_id, self.id)?;
        self.status.ok_or(PayloadError::MissingField("status"))
    }

    /// Extracts the replacement assignee for the task at `path_id`.
    ///
    /// An absent assignee maps to `None` and unassigns the task.
    ///
    /// # Errors
    ///
    /// Returns [`PayloadError::IdMismatch`] when the body identifier differs
    /// from the path, or [`PayloadError::MissingField`] when a nested
    /// assignee carries no identifier.
    pub fn into_assignee_change(self, path_id: i64) -> PayloadResult<Option<WorkerId>> {
        check_id_matches(path_id, self.id)?;
        assignee_worker_id(self.assignee)
    }
}

fn assignee_worker_id(assignee: Option<WorkerPayload>) -> PayloadResult<Option<WorkerId>> {
    let Some(worker) = assignee else {
        return Ok(None);
    };
    let id = worker.id.ok_or(PayloadError::MissingField("assignee.id"))?;
    Ok(Some(WorkerId::new(id)))
}
