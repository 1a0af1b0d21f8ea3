//! Worker aggregate and creation command.

use super::WorkerId;

/// Worker that tasks may be assigned to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Worker {
    id: WorkerId,
    email: String,
    first_name: Option<String>,
    last_name: Option<String>,
}

/// Parameter object for reconstructing a persisted worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedWorkerData {
    /// Persisted worker identifier.
    pub id: WorkerId,
    /// Persisted email address, unique across workers.
    pub email: String,
    /// Persisted first name, if any.
    pub first_name: Option<String>,
    /// Persisted last name, if any.
    pub last_name: Option<String>,
}

impl Worker {
    /// Reconstructs a worker from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedWorkerData) -> Self {
        Self {
            id: data.id,
            email: data.email,
            first_name: data.first_name,
            last_name: data.last_name,
        }
    }

    /// Returns the worker identifier.
    #[must_use]
    pub const fn id(&self) -> WorkerId {
        self.id
    }

    /// Returns the worker email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the worker first name, if any.
    #[must_use]
    pub fn first_name(&self) -> Option<&str> {
        self.first_name.as_deref()
    }

    /// Returns the worker last name, if any.
    #[must_use]
    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }

    /// Replaces every updatable field with the supplied values.
    ///
    /// An absent first or last name clears the stored value; updates are
    /// wholesale, not field-by-field patches.
    pub fn apply_update(
        &mut self,
        email: String,
        first_name: Option<String>,
        last_name: Option<String>,
    ) {
        self.email = email;
        self.first_name = first_name;
        self.last_name = last_name;
    }
}

/// Command describing a worker to be created.
///
/// The store assigns the identifier; the command cannot carry one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWorker {
    /// Email address, unique across workers.
    pub email: String,
    /// Optional first name.
    pub first_name: Option<String>,
    /// Optional last name.
    pub last_name: Option<String>,
}
