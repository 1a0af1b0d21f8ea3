//! `PostgreSQL` project repository.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

use super::blocking::{PgPool, get_conn, run_blocking};
use super::conversions::{is_constraint, load_project_tasks, row_to_project};
use super::models::{NewProjectRow, ProjectRow};
use super::schema::projects;
use crate::domain::{NewProject, Project, ProjectId};
use crate::ports::{ProjectRepository, RepositoryError, RepositoryResult};

/// `PostgreSQL`-backed project repository.
#[derive(Debug, Clone)]
pub struct PostgresProjectRepository {
    pool: PgPool,
}

impl PostgresProjectRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProjectRepository for PostgresProjectRepository {
    async fn insert(&self, new_project: NewProject) -> RepositoryResult<Project> {
        let pool = self.pool.clone();
        let code = new_project.code.clone();

        run_blocking(move || {
            let mut conn = get_conn(&pool)?;
            let new_row = NewProjectRow {
                code: new_project.code,
                name: new_project.name,
                description: new_project.description,
            };
            let row = diesel::insert_into(projects::table)
                .values(&new_row)
                .returning(ProjectRow::as_returning())
                .get_result::<ProjectRow>(&mut conn)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, ref info)
                        if is_constraint(info.as_ref(), "projects_code_key") =>
                    {
                        RepositoryError::DuplicateProjectCode(code.clone())
                    }
                    _ => RepositoryError::persistence(err),
                })?;
            Ok(row_to_project(row, Vec::new()))
        })
        .await
    }

    async fn save(&self, project: &Project) -> RepositoryResult<Project> {
        let pool = self.pool.clone();
        let project_id = project.id();
        let name = project.name().to_owned();
        let description = project.description().map(str::to_owned);

        run_blocking(move || {
            let mut conn = get_conn(&pool)?;
            let row = diesel::update(
                projects::table.filter(projects::id.eq(project_id.into_inner())),
            )
            .set((
                projects::name.eq(&name),
                projects::description.eq(&description),
            ))
            .returning(ProjectRow::as_returning())
            .get_result::<ProjectRow>(&mut conn)
            .optional()
            .map_err(RepositoryError::persistence)?
            .ok_or(RepositoryError::ProjectNotFound(project_id))?;

            let project_tasks = load_project_tasks(&mut conn, row.id)?;
            Ok(row_to_project(row, project_tasks))
        })
        .await
    }

    async fn find_by_id(&self, id: ProjectId) -> RepositoryResult<Option<Project>> {
        let pool = self.pool.clone();

        run_blocking(move || {
            let mut conn = get_conn(&pool)?;
            let row = projects::table
                .filter(projects::id.eq(id.into_inner()))
                .select(ProjectRow::as_select())
                .first::<ProjectRow>(&mut conn)
                .optional()
                .map_err(RepositoryError::persistence)?;
            row.map(|project_row| {
                let project_tasks = load_project_tasks(&mut conn, project_row.id)?;
                Ok(row_to_project(project_row, project_tasks))
            })
            .transpose()
        })
        .await
    }

    async fn list(&self) -> RepositoryResult<Vec<Project>> {
        let pool = self.pool.clone();

        run_blocking(move || {
            let mut conn = get_conn(&pool)?;
            let rows = projects::table
                .order(projects::id.asc())
                .select(ProjectRow::as_select())
                .load::<ProjectRow>(&mut conn)
                .map_err(RepositoryError::persistence)?;
            rows.into_iter()
                .map(|row| {
                    let project_tasks = load_project_tasks(&mut conn, row.id)?;
                    Ok(row_to_project(row, project_tasks))
                })
                .collect()
        })
        .await
    }
}
