//! Project wire payload and its mappers.

use serde::{Deserialize, Serialize};

use super::error::{PayloadError, PayloadResult, check_id_matches};
use super::task::TaskPayload;
use crate::domain::{NewProject, Project};
use crate::services::ProjectUpdate;

/// Wire representation of a project, including its owned tasks.
///
/// Every field is optional so that absent fields reach the validation layer
/// instead of failing deserialization. Tasks carried in a request body are
/// always ignored; they exist for the response direction only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPayload {
    /// Store-assigned identifier; ignored on create.
    pub id: Option<i64>,
    /// Unique project code; immutable after creation.
    pub code: Option<String>,
    /// Project name.
    pub name: Option<String>,
    /// Optional description.
    pub description: Option<String>,
    /// Tasks owned by the project; response direction only.
    pub tasks: Option<Vec<TaskPayload>>,
}

impl ProjectPayload {
    /// Builds the wire representation of a project, recursing into its
    /// tasks and their assignees.
    #[must_use]
    pub fn from_model(project: &Project) -> Self {
        Self {
            id: Some(project.id().into_inner()),
            code: Some(project.code().to_owned()),
            name: Some(project.name().to_owned()),
            description: project.description().map(ToOwned::to_owned),
            tasks: Some(project.tasks().iter().map(TaskPayload::from_model).collect()),
        }
    }

    /// Maps the payload to a project creation command, dropping any
    /// client-supplied identifier and tasks.
    ///
    /// # Errors
    ///
    /// Returns [`PayloadError::MissingField`] when the code or the name is
    /// absent.
    pub fn into_new_project(self) -> PayloadResult<NewProject> {
        let code = self.code.ok_or(PayloadError::MissingField("code"))?;
        let name = self.name.ok_or(PayloadError::MissingField("name"))?;
        Ok(NewProject {
            code,
            name,
            description: self.description,
        })
    }

    /// Maps the payload to a project update for the project at `path_id`.
    ///
    /// The code and tasks are dropped: neither can be changed through an
    /// update.
    ///
    /// # Errors
    ///
    /// Returns [`PayloadError::IdMismatch`] when the body identifier differs
    /// from the path, or [`PayloadError::MissingField`] when the name is
    /// absent.
    pub fn into_update(self, path_id: i64) -> PayloadResult<ProjectUpdate> {
        check_id_matches(path_id, self.id)?;
        let name = self.name.ok_or(PayloadError::MissingField("name"))?;
        let mut update = ProjectUpdate::new(name);
        if let Some(description) = self.description {
            update = update.with_description(description);
        }
        Ok(update)
    }
}
