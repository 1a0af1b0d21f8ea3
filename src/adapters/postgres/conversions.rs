//! Row-to-domain conversions shared by the `PostgreSQL` repositories.

use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::result::DatabaseErrorInformation;

use super::models::{ProjectRow, TaskRow, WorkerRow};
use super::schema::{tasks, workers};
use crate::domain::{
    PersistedProjectData, PersistedTaskData, PersistedWorkerData, Project, ProjectId, Task, TaskId,
    TaskStatus, TaskUuid, Worker, WorkerId,
};
use crate::ports::{RepositoryError, RepositoryResult};

pub(super) fn row_to_worker(row: WorkerRow) -> Worker {
    Worker::from_persisted(PersistedWorkerData {
        id: WorkerId::new(row.id),
        email: row.email,
        first_name: row.first_name,
        last_name: row.last_name,
    })
}

pub(super) fn row_to_task(row: TaskRow, assignee: Option<WorkerRow>) -> RepositoryResult<Task> {
    let status = TaskStatus::try_from(row.status.as_str()).map_err(RepositoryError::persistence)?;
    Ok(Task::from_persisted(PersistedTaskData {
        id: TaskId::new(row.id),
        uuid: TaskUuid::from_uuid(row.uuid),
        name: row.name,
        description: row.description,
        due_date: row.due_date,
        status,
        project_id: ProjectId::new(row.project_id),
        assignee: assignee.map(row_to_worker),
        estimated_hours: row.estimated_hours,
    }))
}

pub(super) fn row_to_project(row: ProjectRow, project_tasks: Vec<Task>) -> Project {
    Project::from_persisted(PersistedProjectData {
        id: ProjectId::new(row.id),
        code: row.code,
        name: row.name,
        description: row.description,
        tasks: project_tasks,
    })
}

/// Loads the materialized tasks owned by a project, ordered by identifier.
pub(super) fn load_project_tasks(
    connection: &mut PgConnection,
    project_id: i64,
) -> RepositoryResult<Vec<Task>> {
    let rows = tasks::table
        .left_join(workers::table)
        .filter(tasks::project_id.eq(project_id))
        .order(tasks::id.asc())
        .select((TaskRow::as_select(), Option::<WorkerRow>::as_select()))
        .load::<(TaskRow, Option<WorkerRow>)>(connection)
        .map_err(RepositoryError::persistence)?;
    rows.into_iter()
        .map(|(task_row, worker_row)| row_to_task(task_row, worker_row))
        .collect()
}

/// Loads one materialized task by identifier, joining in the assignee.
pub(super) fn load_task(
    connection: &mut PgConnection,
    task_id: i64,
) -> RepositoryResult<Option<Task>> {
    let row = tasks::table
        .left_join(workers::table)
        .filter(tasks::id.eq(task_id))
        .select((TaskRow::as_select(), Option::<WorkerRow>::as_select()))
        .first::<(TaskRow, Option<WorkerRow>)>(connection)
        .optional()
        .map_err(RepositoryError::persistence)?;
    row.map(|(task_row, worker_row)| row_to_task(task_row, worker_row))
        .transpose()
}

pub(super) fn is_constraint(info: &dyn DatabaseErrorInformation, name: &str) -> bool {
    info.constraint_name().is_some_and(|constraint| constraint == name)
}
