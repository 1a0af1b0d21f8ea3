//! Worker application service.

use std::sync::Arc;

use super::ServiceResult;
use crate::domain::{NewWorker, Worker, WorkerId};
use crate::ports::WorkerRepository;

/// Parameter object carrying the updatable worker fields.
///
/// Updates are wholesale: an absent first or last name clears the stored
/// value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerUpdate {
    email: String,
    first_name: Option<String>,
    last_name: Option<String>,
}

impl WorkerUpdate {
    /// Creates an update with the required replacement email.
    #[must_use]
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            first_name: None,
            last_name: None,
        }
    }

    /// Sets the replacement first name.
    #[must_use]
    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    /// Sets the replacement last name.
    #[must_use]
    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }
}

/// Worker orchestration service.
#[derive(Clone)]
pub struct WorkerService {
    repository: Arc<dyn WorkerRepository>,
}

impl WorkerService {
    /// Creates a new worker service.
    #[must_use]
    pub const fn new(repository: Arc<dyn WorkerRepository>) -> Self {
        Self { repository }
    }

    /// Creates a worker from the supplied command.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Repository`] when the email is already in
    /// use or persistence fails.
    ///
    /// [`ServiceError::Repository`]: super::ServiceError::Repository
    pub async fn create(&self, new_worker: NewWorker) -> ServiceResult<Worker> {
        Ok(self.repository.insert(new_worker).await?)
    }

    /// Retrieves a worker by identifier.
    ///
    /// Returns `Ok(None)` when the worker does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Repository`] when persistence lookup fails.
    ///
    /// [`ServiceError::Repository`]: super::ServiceError::Repository
    pub async fn get(&self, id: WorkerId) -> ServiceResult<Option<Worker>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Applies a wholesale update to an existing worker.
    ///
    /// Returns `Ok(None)` when the worker does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Repository`] when the new email collides
    /// with another worker or persistence fails.
    ///
    /// [`ServiceError::Repository`]: super::ServiceError::Repository
    pub async fn update(
        &self,
        id: WorkerId,
        update: WorkerUpdate,
    ) -> ServiceResult<Option<Worker>> {
        let Some(mut worker) = self.repository.find_by_id(id).await? else {
            return Ok(None);
        };
        worker.apply_update(update.email, update.first_name, update.last_name);
        let saved = self.repository.save(&worker).await?;
        Ok(Some(saved))
    }
}
