//! Field validation rules, grouped per operation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::web::payload::{ProjectPayload, TaskPayload, WorkerPayload};

const MIN_DESCRIPTION_CHARS: usize = 10;
const MAX_DESCRIPTION_CHARS: usize = 50;
const MIN_ESTIMATED_HOURS: i32 = 1;
const MAX_ESTIMATED_HOURS: i32 = 40;

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Wire name of the offending field.
    pub field: String,
    /// Human-readable description of the failure.
    pub message: String,
}

impl FieldError {
    /// Creates a field error.
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Validates a project creation payload.
///
/// The code and name are required; a description, when present, must stay
/// within the permitted length range.
#[must_use]
pub fn project_create(payload: &ProjectPayload) -> Vec<FieldError> {
    let mut errors = Vec::new();
    check_non_blank(payload.code.as_deref(), "code", "code can't be null", &mut errors);
    check_non_blank(payload.name.as_deref(), "name", "name can't be blank", &mut errors);
    check_description(payload.description.as_deref(), &mut errors);
    errors
}

/// Validates a project update payload.
///
/// The code is not validated: it is immutable and the mapper drops it.
#[must_use]
pub fn project_update(payload: &ProjectPayload) -> Vec<FieldError> {
    let mut errors = Vec::new();
    check_non_blank(payload.name.as_deref(), "name", "name can't be blank", &mut errors);
    check_description(payload.description.as_deref(), &mut errors);
    errors
}

/// Validates a task creation payload against `today`.
///
/// The status is not validated because the service forces the initial one,
/// and a nested assignee is unconstrained because creation ignores it. The
/// due date, when present, must lie strictly in the future; this rule
/// applies to creation only.
#[must_use]
pub fn task_create(payload: &TaskPayload, today: NaiveDate) -> Vec<FieldError> {
    let mut errors = Vec::new();
    check_non_blank(payload.name.as_deref(), "name", "name can't be blank", &mut errors);
    check_description(payload.description.as_deref(), &mut errors);
    check_future_due_date(payload.due_date, today, &mut errors);
    check_project_id(payload.project_id, &mut errors);
    check_estimated_hours(payload.estimated_hours, &mut errors);
    errors
}

/// Validates a wholesale task update payload.
///
/// Unlike creation, the status is required and the due date is accepted as
/// given, past dates included. A nested assignee must carry a positive
/// identifier.
#[must_use]
pub fn task_update(payload: &TaskPayload) -> Vec<FieldError> {
    let mut errors = Vec::new();
    check_non_blank(payload.name.as_deref(), "name", "name can't be blank", &mut errors);
    check_description(payload.description.as_deref(), &mut errors);
    if payload.status.is_none() {
        errors.push(FieldError::new("status", "status can't be null"));
    }
    check_project_id(payload.project_id, &mut errors);
    check_assignee_id(payload.assignee.as_ref(), &mut errors);
    check_estimated_hours(payload.estimated_hours, &mut errors);
    errors
}

/// Validates a status change payload: only the status is required.
#[must_use]
pub fn task_status_change(payload: &TaskPayload) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if payload.status.is_none() {
        errors.push(FieldError::new("status", "status can't be null"));
    }
    errors
}

/// Validates an assignee change payload.
///
/// An absent assignee is valid and unassigns the task; a present one must
/// carry a positive identifier.
#[must_use]
pub fn task_assignee_change(payload: &TaskPayload) -> Vec<FieldError> {
    let mut errors = Vec::new();
    check_assignee_id(payload.assignee.as_ref(), &mut errors);
    errors
}

/// Validates a worker creation payload: only the email is constrained.
#[must_use]
pub fn worker_create(payload: &WorkerPayload) -> Vec<FieldError> {
    let mut errors = Vec::new();
    check_email(payload.email.as_deref(), &mut errors);
    errors
}

/// Validates a worker update payload; the rules match creation.
#[must_use]
pub fn worker_update(payload: &WorkerPayload) -> Vec<FieldError> {
    worker_create(payload)
}

fn check_non_blank(value: Option<&str>, field: &str, message: &str, errors: &mut Vec<FieldError>) {
    if value.is_none_or(|text| text.trim().is_empty()) {
        errors.push(FieldError::new(field, message));
    }
}

fn check_description(value: Option<&str>, errors: &mut Vec<FieldError>) {
    let Some(text) = value else {
        return;
    };
    let length = text.chars().count();
    if !(MIN_DESCRIPTION_CHARS..=MAX_DESCRIPTION_CHARS).contains(&length) {
        errors.push(FieldError::new(
            "description",
            "description must be between 10 and 50 characters long",
        ));
    }
}

fn check_future_due_date(value: Option<NaiveDate>, today: NaiveDate, errors: &mut Vec<FieldError>) {
    let Some(due_date) = value else {
        return;
    };
    if due_date <= today {
        errors.push(FieldError::new("dueDate", "dueDate must be in the future"));
    }
}

fn check_project_id(value: Option<i64>, errors: &mut Vec<FieldError>) {
    if value.is_none() {
        errors.push(FieldError::new("projectId", "projectId can't be null"));
    }
}

fn check_estimated_hours(value: Option<i32>, errors: &mut Vec<FieldError>) {
    let Some(hours) = value else {
        return;
    };
    if hours < MIN_ESTIMATED_HOURS {
        errors.push(FieldError::new(
            "estimatedHours",
            "estimatedHours can't be less than 1",
        ));
    } else if hours > MAX_ESTIMATED_HOURS {
        errors.push(FieldError::new(
            "estimatedHours",
            "estimatedHours can't exceed 40",
        ));
    }
}

fn check_assignee_id(assignee: Option<&WorkerPayload>, errors: &mut Vec<FieldError>) {
    let Some(worker) = assignee else {
        return;
    };
    match worker.id {
        None => errors.push(FieldError::new("assignee.id", "id can't be null")),
        Some(id) if id <= 0 => {
            errors.push(FieldError::new("assignee.id", "id must be a positive number"));
        }
        Some(_) => {}
    }
}

fn check_email(value: Option<&str>, errors: &mut Vec<FieldError>) {
    let Some(email) = value else {
        errors.push(FieldError::new("email", "email can't be blank"));
        return;
    };
    if email.trim().is_empty() {
        errors.push(FieldError::new("email", "email can't be blank"));
    } else if !is_well_formed_email(email) {
        errors.push(FieldError::new(
            "email",
            "email must be a valid email address",
        ));
    }
}

fn is_well_formed_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty() && !domain.is_empty() && !domain.contains('@')
}
