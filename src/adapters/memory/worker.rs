//! In-memory worker repository.

use async_trait::async_trait;

use super::store::{MemoryStore, WorkerRecord, materialize_worker};
use crate::domain::{NewWorker, Worker, WorkerId};
use crate::ports::{RepositoryError, RepositoryResult, WorkerRepository};

/// Thread-safe in-memory worker repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryWorkerRepository {
    store: MemoryStore,
}

impl InMemoryWorkerRepository {
    /// Creates a repository over the given store.
    #[must_use]
    pub const fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl WorkerRepository for InMemoryWorkerRepository {
    async fn insert(&self, new_worker: NewWorker) -> RepositoryResult<Worker> {
        let mut state = self.store.write()?;
        if state.email_index.contains_key(&new_worker.email) {
            return Err(RepositoryError::DuplicateWorkerEmail(new_worker.email));
        }

        let id = state.allocate_worker_id();
        let record = WorkerRecord {
            id,
            email: new_worker.email,
            first_name: new_worker.first_name,
            last_name: new_worker.last_name,
        };
        state.email_index.insert(record.email.clone(), id);
        let worker = materialize_worker(&record);
        state.workers.insert(id, record);
        Ok(worker)
    }

    async fn save(&self, worker: &Worker) -> RepositoryResult<Worker> {
        let mut state = self.store.write()?;
        let previous_email = state
            .workers
            .get(&worker.id())
            .ok_or(RepositoryError::WorkerNotFound(worker.id()))?
            .email
            .clone();

        // Changing the email moves the index entry; the new address must
        // not belong to another worker.
        if previous_email != worker.email() {
            if state.email_index.contains_key(worker.email()) {
                return Err(RepositoryError::DuplicateWorkerEmail(
                    worker.email().to_owned(),
                ));
            }
            state.email_index.remove(&previous_email);
            state
                .email_index
                .insert(worker.email().to_owned(), worker.id());
        }

        let record = WorkerRecord {
            id: worker.id(),
            email: worker.email().to_owned(),
            first_name: worker.first_name().map(str::to_owned),
            last_name: worker.last_name().map(str::to_owned),
        };
        let updated = materialize_worker(&record);
        state.workers.insert(worker.id(), record);
        Ok(updated)
    }

    async fn find_by_id(&self, id: WorkerId) -> RepositoryResult<Option<Worker>> {
        let state = self.store.read()?;
        Ok(state.workers.get(&id).map(materialize_worker))
    }
}
