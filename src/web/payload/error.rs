//! Errors raised while mapping wire payloads to service commands.

use thiserror::Error;

/// Error raised when a payload cannot be mapped to a service command.
///
/// Mapping runs after field validation, so a missing-field error here means
/// the caller skipped validation or the operation's rule set does not cover
/// the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PayloadError {
    /// The body carried an identifier that differs from the path.
    #[error("body id {body} does not match path id {path}")]
    IdMismatch {
        /// Identifier taken from the request path.
        path: i64,
        /// Identifier carried in the request body.
        body: i64,
    },
    /// A field required by the target command is absent.
    #[error("{0} can't be null")]
    MissingField(&'static str),
}

/// Result alias for payload mapping operations.
pub type PayloadResult<T> = Result<T, PayloadError>;

/// Fails with [`PayloadError::IdMismatch`] when the body identifier is
/// present and differs from the path identifier.
pub(super) fn check_id_matches(path_id: i64, body_id: Option<i64>) -> PayloadResult<()> {
    if let Some(body) = body_id {
        if body != path_id {
            return Err(PayloadError::IdMismatch {
                path: path_id,
                body,
            });
        }
    }
    Ok(())
}
