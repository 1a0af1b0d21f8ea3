//! Problem-details response body.

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

use super::validation::FieldError;

/// Problem-details body attached to every error response.
///
/// Serialized as `application/problem+json`. The detail and the field
/// errors are omitted when empty rather than serialized as null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemDetails {
    /// HTTP status code, repeated in the body.
    pub status: u16,
    /// Short human-readable summary of the error class.
    pub title: String,
    /// Specific description of this occurrence, when safe to expose.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Field-level failures for validation errors.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldError>,
}

impl ProblemDetails {
    /// Creates a problem body with the given status and title.
    #[must_use]
    pub fn new(status: StatusCode, title: impl Into<String>) -> Self {
        Self {
            status: status.as_u16(),
            title: title.into(),
            detail: None,
            errors: Vec::new(),
        }
    }

    /// Attaches an occurrence-specific detail message.
    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Attaches field-level failures.
    #[must_use]
    pub fn with_errors(mut self, errors: Vec<FieldError>) -> Self {
        self.errors = errors;
        self
    }
}
