//! Project application service.

use std::sync::Arc;

use super::ServiceResult;
use crate::domain::{NewProject, Project, ProjectId};
use crate::ports::ProjectRepository;

/// Parameter object carrying the updatable project fields.
///
/// Updates are wholesale: an absent description clears the stored one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectUpdate {
    name: String,
    description: Option<String>,
}

impl ProjectUpdate {
    /// Creates an update with the required replacement name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    /// Sets the replacement description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Project orchestration service.
#[derive(Clone)]
pub struct ProjectService {
    repository: Arc<dyn ProjectRepository>,
}

impl ProjectService {
    /// Creates a new project service.
    #[must_use]
    pub const fn new(repository: Arc<dyn ProjectRepository>) -> Self {
        Self { repository }
    }

    /// Creates a project from the supplied command.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Repository`] when the code is already in use
    /// or persistence fails.
    ///
    /// [`ServiceError::Repository`]: super::ServiceError::Repository
    pub async fn create(&self, new_project: NewProject) -> ServiceResult<Project> {
        Ok(self.repository.insert(new_project).await?)
    }

    /// Retrieves a project by identifier.
    ///
    /// Returns `Ok(None)` when the project does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Repository`] when persistence lookup fails.
    ///
    /// [`ServiceError::Repository`]: super::ServiceError::Repository
    pub async fn get(&self, id: ProjectId) -> ServiceResult<Option<Project>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Lists all projects ordered by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Repository`] when persistence lookup fails.
    ///
    /// [`ServiceError::Repository`]: super::ServiceError::Repository
    pub async fn list(&self) -> ServiceResult<Vec<Project>> {
        Ok(self.repository.list().await?)
    }

    /// Applies a wholesale update to an existing project.
    ///
    /// Returns `Ok(None)` when the project does not exist. The code and the
    /// task collection are never altered by an update.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Repository`] when persistence fails.
    ///
    /// [`ServiceError::Repository`]: super::ServiceError::Repository
    pub async fn update(
        &self,
        id: ProjectId,
        update: ProjectUpdate,
    ) -> ServiceResult<Option<Project>> {
        let Some(mut project) = self.repository.find_by_id(id).await? else {
            return Ok(None);
        };
        project.apply_update(update.name, update.description);
        let saved = self.repository.save(&project).await?;
        Ok(Some(saved))
    }
}
