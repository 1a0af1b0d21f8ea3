//! Wire payload types and their mappers.
//!
//! Each resource has exactly one payload struct used in both directions:
//! deserialized from request bodies and serialized into responses. All
//! fields are optional on the way in, which pushes required-field checks
//! into the validation layer where they produce field-level errors instead
//! of opaque deserialization failures. On the way out every field is
//! serialized, null included.
//!
//! Mapping to service commands is per operation: create mappers drop
//! store-assigned and service-forced fields, update mappers verify the body
//! identifier against the path before anything else.

mod error;
mod project;
mod task;
mod worker;

pub use error::{PayloadError, PayloadResult};
pub use project::ProjectPayload;
pub use task::TaskPayload;
pub use worker::WorkerPayload;
