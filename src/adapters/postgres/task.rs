//! `PostgreSQL` task repository.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

use super::blocking::{PgPool, get_conn, run_blocking};
use super::conversions::{load_task, row_to_task};
use super::models::{NewTaskRow, TaskRow, WorkerRow};
use super::schema::{tasks, workers};
use crate::domain::{NewTask, ProjectId, Task, TaskId, TaskStatus, TaskUuid, Worker, WorkerId};
use crate::ports::{RepositoryError, RepositoryResult, TaskRepository};

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: PgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// References carried by a task write, used to name the offending value
/// when a database constraint rejects the statement.
#[derive(Debug, Clone, Copy)]
struct TaskRefs {
    uuid: TaskUuid,
    project_id: ProjectId,
    assignee_id: Option<WorkerId>,
}

fn map_task_write_error(err: DieselError, refs: TaskRefs) -> RepositoryError {
    semantic_task_error(&err, refs).unwrap_or_else(|| RepositoryError::persistence(err))
}

fn semantic_task_error(err: &DieselError, refs: TaskRefs) -> Option<RepositoryError> {
    let DieselError::DatabaseError(kind, info) = err else {
        return None;
    };
    let constraint = info.constraint_name()?;
    match (kind, constraint) {
        (DatabaseErrorKind::UniqueViolation, "tasks_uuid_key") => {
            Some(RepositoryError::DuplicateTaskUuid(refs.uuid))
        }
        (DatabaseErrorKind::ForeignKeyViolation, "tasks_project_id_fkey") => {
            Some(RepositoryError::UnknownProject(refs.project_id))
        }
        (DatabaseErrorKind::ForeignKeyViolation, "tasks_assignee_id_fkey") => {
            refs.assignee_id.map(RepositoryError::UnknownWorker)
        }
        _ => None,
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn insert(&self, new_task: NewTask) -> RepositoryResult<Task> {
        let pool = self.pool.clone();
        let uuid = new_task.uuid.unwrap_or_else(TaskUuid::new);

        run_blocking(move || {
            let mut conn = get_conn(&pool)?;
            let new_row = NewTaskRow {
                uuid: uuid.into_inner(),
                name: new_task.name,
                description: new_task.description,
                due_date: new_task.due_date,
                status: TaskStatus::initial().as_str().to_owned(),
                project_id: new_task.project_id.into_inner(),
                assignee_id: None,
                estimated_hours: new_task.estimated_hours,
            };
            let refs = TaskRefs {
                uuid,
                project_id: new_task.project_id,
                assignee_id: None,
            };
            let row = diesel::insert_into(tasks::table)
                .values(&new_row)
                .returning(TaskRow::as_returning())
                .get_result::<TaskRow>(&mut conn)
                .map_err(|err| map_task_write_error(err, refs))?;
            row_to_task(row, None)
        })
        .await
    }

    async fn save(&self, task: &Task) -> RepositoryResult<Task> {
        let pool = self.pool.clone();
        let task_id = task.id();
        let refs = TaskRefs {
            uuid: task.uuid(),
            project_id: task.project_id(),
            assignee_id: task.assignee().map(Worker::id),
        };
        let name = task.name().to_owned();
        let description = task.description().map(str::to_owned);
        let due_date = task.due_date();
        let status = task.status().as_str().to_owned();
        let estimated_hours = task.estimated_hours();

        run_blocking(move || {
            let mut conn = get_conn(&pool)?;
            let updated_count =
                diesel::update(tasks::table.filter(tasks::id.eq(task_id.into_inner())))
                    .set((
                        tasks::name.eq(&name),
                        tasks::description.eq(&description),
                        tasks::due_date.eq(due_date),
                        tasks::status.eq(&status),
                        tasks::project_id.eq(refs.project_id.into_inner()),
                        tasks::assignee_id.eq(refs.assignee_id.map(WorkerId::into_inner)),
                        tasks::estimated_hours.eq(estimated_hours),
                    ))
                    .execute(&mut conn)
                    .map_err(|err| map_task_write_error(err, refs))?;

            if updated_count == 0 {
                return Err(RepositoryError::TaskNotFound(task_id));
            }

            load_task(&mut conn, task_id.into_inner())?
                .ok_or(RepositoryError::TaskNotFound(task_id))
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> RepositoryResult<Option<Task>> {
        let pool = self.pool.clone();

        run_blocking(move || {
            let mut conn = get_conn(&pool)?;
            load_task(&mut conn, id.into_inner())
        })
        .await
    }

    async fn search(
        &self,
        name_fragment: &str,
        assignee: Option<WorkerId>,
    ) -> RepositoryResult<Vec<Task>> {
        let pool = self.pool.clone();
        let pattern = format!("%{name_fragment}%");

        run_blocking(move || {
            let mut conn = get_conn(&pool)?;
            let mut query = tasks::table
                .left_join(workers::table)
                .select((TaskRow::as_select(), Option::<WorkerRow>::as_select()))
                .into_boxed();
            query = query.filter(tasks::name.like(pattern));
            if let Some(worker_id) = assignee {
                query = query.filter(tasks::assignee_id.eq(worker_id.into_inner()));
            }
            let rows = query
                .order(tasks::id.asc())
                .load::<(TaskRow, Option<WorkerRow>)>(&mut conn)
                .map_err(RepositoryError::persistence)?;
            rows.into_iter()
                .map(|(task_row, worker_row)| row_to_task(task_row, worker_row))
                .collect()
        })
        .await
    }
}
