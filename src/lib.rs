//! Taskboard: project and task management REST service.
//!
//! This crate provides a small REST API over three resources: projects,
//! the tasks they own, and the workers tasks are assigned to. Records can
//! be held in a shared in-memory store or in `PostgreSQL`; the HTTP surface
//! is identical over both.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure aggregates and value types with no infrastructure
//!   dependencies
//! - **Ports**: Abstract repository traits the services depend on
//! - **Adapters**: Concrete implementations of the ports (in-memory,
//!   `PostgreSQL`)
//!
//! # Modules
//!
//! - [`domain`]: Aggregates, identifier newtypes, and the status lifecycle
//! - [`ports`]: Repository traits and the shared repository error
//! - [`adapters`]: Persistence backends
//! - [`services`]: Per-resource orchestration over the ports
//! - [`web`]: Payloads, validation, handlers, and the axum router
//! - [`config`]: Command-line and environment configuration
//! - [`seed`]: Demo dataset for local exploration

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod seed;
pub mod services;
pub mod web;
