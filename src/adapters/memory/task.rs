//! In-memory task repository.

use async_trait::async_trait;

use super::store::{MemoryStore, TaskRecord};
use crate::domain::{NewTask, Task, TaskId, TaskStatus, TaskUuid, Worker, WorkerId};
use crate::ports::{RepositoryError, RepositoryResult, TaskRepository};

/// Thread-safe in-memory task repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    store: MemoryStore,
}

impl InMemoryTaskRepository {
    /// Creates a repository over the given store.
    #[must_use]
    pub const fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn insert(&self, new_task: NewTask) -> RepositoryResult<Task> {
        let mut state = self.store.write()?;
        if !state.projects.contains_key(&new_task.project_id) {
            return Err(RepositoryError::UnknownProject(new_task.project_id));
        }

        let uuid = new_task.uuid.unwrap_or_else(TaskUuid::new);
        if state.uuid_index.contains_key(&uuid) {
            return Err(RepositoryError::DuplicateTaskUuid(uuid));
        }

        let id = state.allocate_task_id();
        let record = TaskRecord {
            id,
            uuid,
            name: new_task.name,
            description: new_task.description,
            due_date: new_task.due_date,
            status: TaskStatus::initial(),
            project_id: new_task.project_id,
            assignee_id: None,
            estimated_hours: new_task.estimated_hours,
        };
        state.uuid_index.insert(uuid, id);
        let task = state.materialize_task(&record);
        state.tasks.insert(id, record);
        Ok(task)
    }

    async fn save(&self, task: &Task) -> RepositoryResult<Task> {
        let mut state = self.store.write()?;
        // The stored UUID wins: a save never rewrites it.
        let Some(stored_uuid) = state.tasks.get(&task.id()).map(|record| record.uuid) else {
            return Err(RepositoryError::TaskNotFound(task.id()));
        };
        if !state.projects.contains_key(&task.project_id()) {
            return Err(RepositoryError::UnknownProject(task.project_id()));
        }
        if let Some(assignee) = task.assignee() {
            if !state.workers.contains_key(&assignee.id()) {
                return Err(RepositoryError::UnknownWorker(assignee.id()));
            }
        }

        let record = TaskRecord {
            id: task.id(),
            uuid: stored_uuid,
            name: task.name().to_owned(),
            description: task.description().map(str::to_owned),
            due_date: task.due_date(),
            status: task.status(),
            project_id: task.project_id(),
            assignee_id: task.assignee().map(Worker::id),
            estimated_hours: task.estimated_hours(),
        };
        let updated = state.materialize_task(&record);
        state.tasks.insert(task.id(), record);
        Ok(updated)
    }

    async fn find_by_id(&self, id: TaskId) -> RepositoryResult<Option<Task>> {
        let state = self.store.read()?;
        Ok(state
            .tasks
            .get(&id)
            .map(|record| state.materialize_task(record)))
    }

    async fn search(
        &self,
        name_fragment: &str,
        assignee: Option<WorkerId>,
    ) -> RepositoryResult<Vec<Task>> {
        let state = self.store.read()?;
        let mut tasks: Vec<Task> = state
            .tasks
            .values()
            .filter(|record| record.name.contains(name_fragment))
            .filter(|record| {
                assignee.is_none_or(|worker_id| record.assignee_id == Some(worker_id))
            })
            .map(|record| state.materialize_task(record))
            .collect();
        tasks.sort_by_key(Task::id);
        Ok(tasks)
    }
}
