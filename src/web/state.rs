//! Shared application state for the HTTP layer.

use std::sync::Arc;

use chrono::NaiveDate;
use mockable::{Clock, DefaultClock};

use crate::adapters::memory::{
    InMemoryProjectRepository, InMemoryTaskRepository, InMemoryWorkerRepository, MemoryStore,
};
use crate::adapters::postgres::{
    PgPool, PostgresProjectRepository, PostgresTaskRepository, PostgresWorkerRepository,
};
use crate::ports::{ProjectRepository, TaskRepository, WorkerRepository};
use crate::services::{ProjectService, TaskService, WorkerService};

/// Application state shared by every handler.
///
/// Holds one service per resource and the clock the due-date rule derives
/// "today" from. The persistence backend is chosen at construction time;
/// handlers only ever see the services.
#[derive(Clone)]
pub struct AppState {
    projects: ProjectService,
    tasks: TaskService,
    workers: WorkerService,
    clock: Arc<dyn Clock + Send + Sync>,
}

impl AppState {
    /// Creates state backed by the shared in-memory store.
    #[must_use]
    pub fn in_memory() -> Self {
        let store = MemoryStore::new();
        let projects: Arc<dyn ProjectRepository> =
            Arc::new(InMemoryProjectRepository::new(store.clone()));
        let tasks: Arc<dyn TaskRepository> = Arc::new(InMemoryTaskRepository::new(store.clone()));
        let workers: Arc<dyn WorkerRepository> = Arc::new(InMemoryWorkerRepository::new(store));
        Self::assemble(projects, tasks, workers)
    }

    /// Creates state backed by `PostgreSQL` repositories over `pool`.
    #[must_use]
    pub fn postgres(pool: PgPool) -> Self {
        let projects: Arc<dyn ProjectRepository> =
            Arc::new(PostgresProjectRepository::new(pool.clone()));
        let tasks: Arc<dyn TaskRepository> = Arc::new(PostgresTaskRepository::new(pool.clone()));
        let workers: Arc<dyn WorkerRepository> = Arc::new(PostgresWorkerRepository::new(pool));
        Self::assemble(projects, tasks, workers)
    }

    /// Replaces the clock used for date validation.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock + Send + Sync>) -> Self {
        self.clock = clock;
        self
    }

    fn assemble(
        projects: Arc<dyn ProjectRepository>,
        tasks: Arc<dyn TaskRepository>,
        workers: Arc<dyn WorkerRepository>,
    ) -> Self {
        Self {
            projects: ProjectService::new(projects),
            tasks: TaskService::new(tasks, workers.clone()),
            workers: WorkerService::new(workers),
            clock: Arc::new(DefaultClock),
        }
    }

    /// Returns the project service.
    #[must_use]
    pub const fn projects(&self) -> &ProjectService {
        &self.projects
    }

    /// Returns the task service.
    #[must_use]
    pub const fn tasks(&self) -> &TaskService {
        &self.tasks
    }

    /// Returns the worker service.
    #[must_use]
    pub const fn workers(&self) -> &WorkerService {
        &self.workers
    }

    /// Returns the current date according to the injected clock.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.clock.utc().date_naive()
    }
}
