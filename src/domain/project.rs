//! Project aggregate and creation command.

use super::{ProjectId, Task};

/// Project owning a collection of tasks.
///
/// The project code is unique across projects and immutable after
/// creation; updates replace only the name and description.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    id: ProjectId,
    code: String,
    name: String,
    description: Option<String>,
    tasks: Vec<Task>,
}

/// Parameter object for reconstructing a persisted project.
#[derive(Debug, Clone)]
pub struct PersistedProjectData {
    /// Persisted project identifier.
    pub id: ProjectId,
    /// Persisted unique project code.
    pub code: String,
    /// Persisted project name.
    pub name: String,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Materialized tasks owned by the project.
    pub tasks: Vec<Task>,
}

impl Project {
    /// Reconstructs a project from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedProjectData) -> Self {
        Self {
            id: data.id,
            code: data.code,
            name: data.name,
            description: data.description,
            tasks: data.tasks,
        }
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the unique project code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the project name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the project description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the tasks owned by the project.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Replaces the name and description with the supplied values.
    ///
    /// An absent description clears the stored one. The code and the task
    /// collection are never altered through an update.
    pub fn apply_update(&mut self, name: String, description: Option<String>) {
        self.name = name;
        self.description = description;
    }
}

/// Command describing a project to be created.
///
/// The command cannot carry an identifier or tasks: the store assigns the
/// identifier and created projects always start with an empty task
/// collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    /// Unique project code.
    pub code: String,
    /// Project name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
}
