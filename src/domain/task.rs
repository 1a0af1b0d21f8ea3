//! Task aggregate, its creation command, and the update parameter object.

use super::{ProjectId, TaskId, TaskStatus, TaskUuid, Worker};
use chrono::NaiveDate;
use std::hash::{Hash, Hasher};

/// Task belonging to a project, optionally assigned to a worker.
///
/// Equality and hashing are keyed on the immutable [`TaskUuid`]: two task
/// values with the same UUID describe the same task regardless of any
/// other field.
#[derive(Debug, Clone)]
pub struct Task {
    id: TaskId,
    uuid: TaskUuid,
    name: String,
    description: Option<String>,
    due_date: Option<NaiveDate>,
    status: TaskStatus,
    project_id: ProjectId,
    assignee: Option<Worker>,
    estimated_hours: Option<i32>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted immutable task UUID.
    pub uuid: TaskUuid,
    /// Persisted task name.
    pub name: String,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted due date, if any.
    pub due_date: Option<NaiveDate>,
    /// Persisted lifecycle status.
    pub status: TaskStatus,
    /// Identifier of the owning project.
    pub project_id: ProjectId,
    /// Materialized assignee, if the task is assigned.
    pub assignee: Option<Worker>,
    /// Persisted effort estimate in hours, if any.
    pub estimated_hours: Option<i32>,
}

/// Parameter object carrying every updatable task field.
///
/// Updates are wholesale: each field replaces the stored value, so an
/// absent optional clears it. The task identifier and UUID are not part
/// of the changes and can never be altered through an update.
#[derive(Debug, Clone)]
pub struct TaskChanges {
    /// Replacement task name.
    pub name: String,
    /// Replacement description; `None` clears it.
    pub description: Option<String>,
    /// Replacement due date; `None` clears it.
    pub due_date: Option<NaiveDate>,
    /// Replacement lifecycle status.
    pub status: TaskStatus,
    /// Replacement owning project.
    pub project_id: ProjectId,
    /// Replacement assignee; `None` unassigns.
    pub assignee: Option<Worker>,
    /// Replacement effort estimate; `None` clears it.
    pub estimated_hours: Option<i32>,
}

impl Task {
    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            uuid: data.uuid,
            name: data.name,
            description: data.description,
            due_date: data.due_date,
            status: data.status,
            project_id: data.project_id,
            assignee: data.assignee,
            estimated_hours: data.estimated_hours,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the immutable task UUID.
    #[must_use]
    pub const fn uuid(&self) -> TaskUuid {
        self.uuid
    }

    /// Returns the task name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the task description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the identifier of the owning project.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the assignee, if the task is assigned.
    #[must_use]
    pub const fn assignee(&self) -> Option<&Worker> {
        self.assignee.as_ref()
    }

    /// Returns the effort estimate in hours, if any.
    #[must_use]
    pub const fn estimated_hours(&self) -> Option<i32> {
        self.estimated_hours
    }

    /// Replaces every updatable field with the supplied changes.
    ///
    /// The identifier and UUID remain untouched.
    pub fn apply_changes(&mut self, changes: TaskChanges) {
        self.name = changes.name;
        self.description = changes.description;
        self.due_date = changes.due_date;
        self.status = changes.status;
        self.project_id = changes.project_id;
        self.assignee = changes.assignee;
        self.estimated_hours = changes.estimated_hours;
    }

    /// Replaces only the lifecycle status.
    pub const fn set_status(&mut self, status: TaskStatus) {
        self.status = status;
    }

    /// Replaces only the assignee; `None` unassigns the task.
    pub fn set_assignee(&mut self, assignee: Option<Worker>) {
        self.assignee = assignee;
    }
}

impl PartialEq for Task {
    fn eq(&self, other: &Self) -> bool {
        self.uuid == other.uuid
    }
}

impl Eq for Task {}

impl Hash for Task {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.uuid.hash(state);
    }
}

/// Command describing a task to be created.
///
/// The command cannot carry an identifier, a status, or an assignee:
/// created tasks always enter the store in [`TaskStatus::initial`] with no
/// assignee, and the store assigns the identifier. A caller-supplied UUID
/// is honored when present; otherwise one is generated at insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    /// Caller-supplied UUID, if any.
    pub uuid: Option<TaskUuid>,
    /// Task name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Optional due date.
    pub due_date: Option<NaiveDate>,
    /// Identifier of the owning project.
    pub project_id: ProjectId,
    /// Optional effort estimate in hours.
    pub estimated_hours: Option<i32>,
}
