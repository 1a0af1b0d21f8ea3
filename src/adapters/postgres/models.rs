//! Diesel row models for project, task, and worker persistence.

use super::schema::{projects, tasks, workers};
use chrono::NaiveDate;
use diesel::prelude::*;

/// Query result row for project records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = projects)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProjectRow {
    /// Internal project identifier.
    pub id: i64,
    /// Unique project code.
    pub code: String,
    /// Project name.
    pub name: String,
    /// Optional project description.
    pub description: Option<String>,
}

/// Insert model for project records; the identifier is database-assigned.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = projects)]
pub struct NewProjectRow {
    /// Unique project code.
    pub code: String,
    /// Project name.
    pub name: String,
    /// Optional project description.
    pub description: Option<String>,
}

/// Query result row for worker records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = workers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct WorkerRow {
    /// Internal worker identifier.
    pub id: i64,
    /// Unique email address.
    pub email: String,
    /// Optional first name.
    pub first_name: Option<String>,
    /// Optional last name.
    pub last_name: Option<String>,
}

/// Insert model for worker records; the identifier is database-assigned.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = workers)]
pub struct NewWorkerRow {
    /// Unique email address.
    pub email: String,
    /// Optional first name.
    pub first_name: Option<String>,
    /// Optional last name.
    pub last_name: Option<String>,
}

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Internal task identifier.
    pub id: i64,
    /// Immutable public task UUID.
    pub uuid: uuid::Uuid,
    /// Task name.
    pub name: String,
    /// Optional task description.
    pub description: Option<String>,
    /// Optional due date.
    pub due_date: Option<NaiveDate>,
    /// Lifecycle status.
    pub status: String,
    /// Owning project identifier.
    pub project_id: i64,
    /// Optional assignee identifier.
    pub assignee_id: Option<i64>,
    /// Optional effort estimate in hours.
    pub estimated_hours: Option<i32>,
}

/// Insert model for task records; the identifier is database-assigned.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Immutable public task UUID.
    pub uuid: uuid::Uuid,
    /// Task name.
    pub name: String,
    /// Optional task description.
    pub description: Option<String>,
    /// Optional due date.
    pub due_date: Option<NaiveDate>,
    /// Lifecycle status.
    pub status: String,
    /// Owning project identifier.
    pub project_id: i64,
    /// Optional assignee identifier.
    pub assignee_id: Option<i64>,
    /// Optional effort estimate in hours.
    pub estimated_hours: Option<i32>,
}
