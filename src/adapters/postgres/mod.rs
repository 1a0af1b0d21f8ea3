//! `PostgreSQL` adapters for project, task, and worker persistence.
//!
//! Uses Diesel ORM with connection pooling via r2d2. All database
//! operations are offloaded to a blocking thread pool via
//! [`tokio::task::spawn_blocking`] to avoid stalling the async runtime.
//! Uniqueness and referential integrity are enforced by database
//! constraints and mapped back to semantic repository errors by
//! constraint name.

mod blocking;
mod conversions;
mod migrations;
mod models;
mod project;
mod schema;
mod task;
mod worker;

pub use blocking::{PgPool, build_pool};
pub use migrations::run_migrations;
pub use project::PostgresProjectRepository;
pub use task::PostgresTaskRepository;
pub use worker::PostgresWorkerRepository;
