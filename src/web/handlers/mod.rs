//! HTTP request handlers, one module per resource.
//!
//! Handlers follow a fixed shape: validate the payload against the
//! operation's rule set, map it to a service command, call the service, and
//! render the resulting aggregate back through the payload mapper. All
//! failure paths funnel into [`ApiError`](super::ApiError).

pub mod projects;
pub mod tasks;
pub mod workers;
