//! In-memory adapter implementations.
//!
//! A single [`MemoryStore`] holds every record behind one lock so that
//! cross-aggregate references (task to project, task to assignee) can be
//! checked atomically. The three repositories are thin views over a shared
//! store and may be cloned freely.

mod project;
mod store;
mod task;
mod worker;

pub use project::InMemoryProjectRepository;
pub use store::MemoryStore;
pub use task::InMemoryTaskRepository;
pub use worker::InMemoryWorkerRepository;
