//! In-memory project repository.

use async_trait::async_trait;

use super::store::{MemoryStore, ProjectRecord};
use crate::domain::{NewProject, Project, ProjectId};
use crate::ports::{ProjectRepository, RepositoryError, RepositoryResult};

/// Thread-safe in-memory project repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProjectRepository {
    store: MemoryStore,
}

impl InMemoryProjectRepository {
    /// Creates a repository over the given store.
    #[must_use]
    pub const fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn insert(&self, new_project: NewProject) -> RepositoryResult<Project> {
        let mut state = self.store.write()?;
        if state.code_index.contains_key(&new_project.code) {
            return Err(RepositoryError::DuplicateProjectCode(new_project.code));
        }

        let id = state.allocate_project_id();
        let record = ProjectRecord {
            id,
            code: new_project.code,
            name: new_project.name,
            description: new_project.description,
        };
        state.code_index.insert(record.code.clone(), id);
        let project = state.materialize_project(&record);
        state.projects.insert(id, record);
        Ok(project)
    }

    async fn save(&self, project: &Project) -> RepositoryResult<Project> {
        let mut state = self.store.write()?;
        let record = state
            .projects
            .get_mut(&project.id())
            .ok_or(RepositoryError::ProjectNotFound(project.id()))?;

        // The code is immutable, so only the mutable fields are written.
        record.name = project.name().to_owned();
        record.description = project.description().map(str::to_owned);
        let updated = record.clone();
        Ok(state.materialize_project(&updated))
    }

    async fn find_by_id(&self, id: ProjectId) -> RepositoryResult<Option<Project>> {
        let state = self.store.read()?;
        Ok(state
            .projects
            .get(&id)
            .map(|record| state.materialize_project(record)))
    }

    async fn list(&self) -> RepositoryResult<Vec<Project>> {
        let state = self.store.read()?;
        let mut projects: Vec<Project> = state
            .projects
            .values()
            .map(|record| state.materialize_project(record))
            .collect();
        projects.sort_by_key(Project::id);
        Ok(projects)
    }
}
