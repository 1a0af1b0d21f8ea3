//! `PostgreSQL` worker repository.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

use super::blocking::{PgPool, get_conn, run_blocking};
use super::conversions::{is_constraint, row_to_worker};
use super::models::{NewWorkerRow, WorkerRow};
use super::schema::workers;
use crate::domain::{NewWorker, Worker, WorkerId};
use crate::ports::{RepositoryError, RepositoryResult, WorkerRepository};

/// `PostgreSQL`-backed worker repository.
#[derive(Debug, Clone)]
pub struct PostgresWorkerRepository {
    pool: PgPool,
}

impl PostgresWorkerRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_email_violation(err: DieselError, email: &str) -> RepositoryError {
    match err {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, ref info)
            if is_constraint(info.as_ref(), "workers_email_key") =>
        {
            RepositoryError::DuplicateWorkerEmail(email.to_owned())
        }
        _ => RepositoryError::persistence(err),
    }
}

#[async_trait]
impl WorkerRepository for PostgresWorkerRepository {
    async fn insert(&self, new_worker: NewWorker) -> RepositoryResult<Worker> {
        let pool = self.pool.clone();

        run_blocking(move || {
            let mut conn = get_conn(&pool)?;
            let new_row = NewWorkerRow {
                email: new_worker.email,
                first_name: new_worker.first_name,
                last_name: new_worker.last_name,
            };
            let row = diesel::insert_into(workers::table)
                .values(&new_row)
                .returning(WorkerRow::as_returning())
                .get_result::<WorkerRow>(&mut conn)
                .map_err(|err| map_email_violation(err, &new_row.email))?;
            Ok(row_to_worker(row))
        })
        .await
    }

    async fn save(&self, worker: &Worker) -> RepositoryResult<Worker> {
        let pool = self.pool.clone();
        let worker_id = worker.id();
        let email = worker.email().to_owned();
        let first_name = worker.first_name().map(str::to_owned);
        let last_name = worker.last_name().map(str::to_owned);

        run_blocking(move || {
            let mut conn = get_conn(&pool)?;
            let row =
                diesel::update(workers::table.filter(workers::id.eq(worker_id.into_inner())))
                    .set((
                        workers::email.eq(&email),
                        workers::first_name.eq(&first_name),
                        workers::last_name.eq(&last_name),
                    ))
                    .returning(WorkerRow::as_returning())
                    .get_result::<WorkerRow>(&mut conn)
                    .optional()
                    .map_err(|err| map_email_violation(err, &email))?
                    .ok_or(RepositoryError::WorkerNotFound(worker_id))?;
            Ok(row_to_worker(row))
        })
        .await
    }

    async fn find_by_id(&self, id: WorkerId) -> RepositoryResult<Option<Worker>> {
        let pool = self.pool.clone();

        run_blocking(move || {
            let mut conn = get_conn(&pool)?;
            let row = workers::table
                .filter(workers::id.eq(id.into_inner()))
                .select(WorkerRow::as_select())
                .first::<WorkerRow>(&mut conn)
                .optional()
                .map_err(RepositoryError::persistence)?;
            Ok(row.map(row_to_worker))
        })
        .await
    }
}
