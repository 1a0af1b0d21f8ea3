//! HTTP delivery layer.
//!
//! Exposes the REST surface over the application services: payload structs
//! and mappers, per-operation validation, the problem-details error
//! boundary, and the axum router. The layer owns no business rules; it
//! translates between the wire and the service layer and renders every
//! failure as an `application/problem+json` body.
//!
//! # Request pipeline
//!
//! 1. deserialize into an all-optional payload struct,
//! 2. validate against the operation's rule set ([`validation`]),
//! 3. map to a service command ([`payload`]), checking path/body identifier
//!    agreement for updates,
//! 4. invoke the service and render the aggregate back through the payload
//!    mapper, or translate the failure into an [`ApiError`].

mod error;
mod handlers;
mod problem;
mod router;
mod state;

pub mod payload;
pub mod validation;

pub use error::{ApiError, ApiResult};
pub use problem::ProblemDetails;
pub use router::{create_router, serve};
pub use state::AppState;

#[cfg(test)]
mod tests;
