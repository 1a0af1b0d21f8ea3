//! Worker wire payload and its mappers.

use serde::{Deserialize, Serialize};

use super::error::{PayloadError, PayloadResult, check_id_matches};
use crate::domain::{NewWorker, Worker};
use crate::services::WorkerUpdate;

/// Wire representation of a worker.
///
/// Every field is optional so that absent fields reach the validation layer
/// instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerPayload {
    /// Store-assigned identifier; ignored on create.
    pub id: Option<i64>,
    /// Email address, unique across workers.
    pub email: Option<String>,
    /// Optional first name.
    pub first_name: Option<String>,
    /// Optional last name.
    pub last_name: Option<String>,
}

impl WorkerPayload {
    /// Builds the wire representation of a worker.
    #[must_use]
    pub fn from_model(worker: &Worker) -> Self {
        Self {
            id: Some(worker.id().into_inner()),
            email: Some(worker.email().to_owned()),
            first_name: worker.first_name().map(ToOwned::to_owned),
            last_name: worker.last_name().map(ToOwned::to_owned),
        }
    }

    /// Maps the payload to a worker creation command, dropping any
    /// client-supplied identifier.
    ///
    /// # Errors
    ///
    /// Returns [`PayloadError::MissingField`] when the email is absent.
    pub fn into_new_worker(self) -> PayloadResult<NewWorker> {
        let email = self.email.ok_or(PayloadError::MissingField("email"))?;
        Ok(NewWorker {
            email,
            first_name: self.first_name,
            last_name: self.last_name,
        })
    }

    /// Maps the payload to a worker update for the worker at `path_id`.
    ///
    /// # Errors
    ///
    /// Returns [`PayloadError::IdMismatch`] when the body identifier differs
    /// from the path, or [`PayloadError::MissingField`] when the email is
    /// absent.
    pub fn into_update(self, path_id: i64) -> PayloadResult<WorkerUpdate> {
        check_id_matches(path_id, self.id)?;
        let email = self.email.ok_or(PayloadError::MissingField("email"))?;
        let mut update = WorkerUpdate::new(email);
        if let Some(first_name) = self.first_name {
            update = update.with_first_name(first_name);
        }
        if let Some(last_name) = self.last_name {
            update = update.with_last_name(last_name);
        }
        Ok(update)
    }
}
