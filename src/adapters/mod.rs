//! Persistence adapters backing the repository ports.
//!
//! Concrete implementations of the [`ProjectRepository`], [`TaskRepository`],
//! and [`WorkerRepository`] ports. Adapters handle all infrastructure
//! concerns while the domain remains pure.
//!
//! # Available Adapters
//!
//! - [`memory`]: Thread-safe in-memory storage, used for tests and for
//!   running the server without a database
//! - [`postgres`]: `PostgreSQL` persistence using Diesel ORM
//!
//! [`ProjectRepository`]: crate::ports::ProjectRepository
//! [`TaskRepository`]: crate::ports::TaskRepository
//! [`WorkerRepository`]: crate::ports::WorkerRepository

pub mod memory;
pub mod postgres;
