//! Shared state behind the in-memory repositories.

use crate::domain::{
    PersistedProjectData, PersistedTaskData, PersistedWorkerData, Project, ProjectId, Task, TaskId,
    TaskStatus, TaskUuid, Worker, WorkerId,
};
use crate::ports::{RepositoryError, RepositoryResult};
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Thread-safe store shared by the in-memory repositories.
///
/// Cloning the store yields another handle to the same state, so a set of
/// repositories built over clones of one store observe each other's writes.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Arc<RwLock<MemoryState>>,
}

#[derive(Debug, Default)]
pub(super) struct MemoryState {
    pub(super) projects: HashMap<ProjectId, ProjectRecord>,
    pub(super) tasks: HashMap<TaskId, TaskRecord>,
    pub(super) workers: HashMap<WorkerId, WorkerRecord>,
    pub(super) code_index: HashMap<String, ProjectId>,
    pub(super) email_index: HashMap<String, WorkerId>,
    pub(super) uuid_index: HashMap<TaskUuid, TaskId>,
    next_project_id: i64,
    next_task_id: i64,
    next_worker_id: i64,
}

/// Normalized project row; tasks are joined in at materialization.
#[derive(Debug, Clone)]
pub(super) struct ProjectRecord {
    pub(super) id: ProjectId,
    pub(super) code: String,
    pub(super) name: String,
    pub(super) description: Option<String>,
}

/// Normalized task row referencing its project and optional assignee.
#[derive(Debug, Clone)]
pub(super) struct TaskRecord {
    pub(super) id: TaskId,
    pub(super) uuid: TaskUuid,
    pub(super) name: String,
    pub(super) description: Option<String>,
    pub(super) due_date: Option<NaiveDate>,
    pub(super) status: TaskStatus,
    pub(super) project_id: ProjectId,
    pub(super) assignee_id: Option<WorkerId>,
    pub(super) estimated_hours: Option<i32>,
}

/// Normalized worker row.
#[derive(Debug, Clone)]
pub(super) struct WorkerRecord {
    pub(super) id: WorkerId,
    pub(super) email: String,
    pub(super) first_name: Option<String>,
    pub(super) last_name: Option<String>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(super) fn read(&self) -> RepositoryResult<RwLockReadGuard<'_, MemoryState>> {
        self.state
            .read()
            .map_err(|err| RepositoryError::persistence(std::io::Error::other(err.to_string())))
    }

    pub(super) fn write(&self) -> RepositoryResult<RwLockWriteGuard<'_, MemoryState>> {
        self.state
            .write()
            .map_err(|err| RepositoryError::persistence(std::io::Error::other(err.to_string())))
    }
}

impl MemoryState {
    pub(super) fn allocate_project_id(&mut self) -> ProjectId {
        self.next_project_id += 1;
        ProjectId::new(self.next_project_id)
    }

    pub(super) fn allocate_task_id(&mut self) -> TaskId {
        self.next_task_id += 1;
        TaskId::new(self.next_task_id)
    }

    pub(super) fn allocate_worker_id(&mut self) -> WorkerId {
        self.next_worker_id += 1;
        WorkerId::new(self.next_worker_id)
    }

    /// Rebuilds a task aggregate from its record, joining in the assignee.
    pub(super) fn materialize_task(&self, record: &TaskRecord) -> Task {
        let assignee = record
            .assignee_id
            .and_then(|worker_id| self.workers.get(&worker_id))
            .map(materialize_worker);
        Task::from_persisted(PersistedTaskData {
            id: record.id,
            uuid: record.uuid,
            name: record.name.clone(),
            description: record.description.clone(),
            due_date: record.due_date,
            status: record.status,
            project_id: record.project_id,
            assignee,
            estimated_hours: record.estimated_hours,
        })
    }

    /// Rebuilds a project aggregate from its record, joining in its tasks.
    pub(super) fn materialize_project(&self, record: &ProjectRecord) -> Project {
        let mut tasks: Vec<Task> = self
            .tasks
            .values()
            .filter(|task| task.project_id == record.id)
            .map(|task| self.materialize_task(task))
            .collect();
        tasks.sort_by_key(Task::id);
        Project::from_persisted(PersistedProjectData {
            id: record.id,
            code: record.code.clone(),
            name: record.name.clone(),
            description: record.description.clone(),
            tasks,
        })
    }
}

pub(super) fn materialize_worker(record: &WorkerRecord) -> Worker {
    Worker::from_persisted(PersistedWorkerData {
        id: record.id,
        email: record.email.clone(),
        first_name: record.first_name.clone(),
        last_name: record.last_name.clone(),
    })
}
