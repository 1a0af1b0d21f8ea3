//! Per-operation payload validation.
//!
//! One pure function per logical operation, each returning the full list of
//! field-level failures for that operation's rule set. A field that an
//! operation's rules do not mention is accepted as-is for that call, which
//! is how the same payload struct serves creation, wholesale updates, and
//! the narrow status and assignee changes with different requirements.
//!
//! The due-date rule takes "today" as an argument so the functions stay
//! deterministic; the handler supplies it from the injected clock.

mod rules;

pub use rules::{
    FieldError, project_create, project_update, task_assignee_change, task_create,
    task_status_change, task_update, worker_create, worker_update,
};
