//! Shared helpers for `PostgreSQL` integration tests.

pub use super::cluster::{BoxError, CleanupGuard, PostgresCluster, postgres_cluster};
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use rstest::fixture;
use taskboard::adapters::postgres::{
    PostgresProjectRepository, PostgresTaskRepository, PostgresWorkerRepository, build_pool,
};
use taskboard::domain::{NewProject, NewTask, NewWorker, ProjectId};
use tokio::runtime::Runtime;
use uuid::Uuid;

/// SQL creating the projects, workers, and tasks tables.
pub const BASE_TABLES_SQL: &str =
    include_str!("../../migrations/2026-08-01-000000_create_base_tables/up.sql");

/// Template database name for the pre-migrated schema.
pub const TEMPLATE_DB: &str = "taskboard_test_template";

/// Creates a current-thread tokio runtime for driving async repository
/// calls from synchronous tests.
///
/// # Errors
///
/// Returns an error when the runtime cannot be built.
pub fn test_runtime() -> std::io::Result<Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
}

/// Ensures the template database exists with the schema applied.
///
/// # Errors
///
/// Returns an error if template creation or migration fails.
pub fn ensure_template(cluster: PostgresCluster) -> Result<(), BoxError> {
    cluster.ensure_template_exists(TEMPLATE_DB, |db_name| {
        apply_migrations(&cluster.database_url(db_name))
    })
}

fn apply_migrations(url: &str) -> Result<(), BoxError> {
    let mut conn = PgConnection::establish(url).map_err(|err| Box::new(err) as BoxError)?;
    conn.batch_execute(BASE_TABLES_SQL)
        .map_err(|err| Box::new(err) as BoxError)?;
    Ok(())
}

/// Prepared per-test database context.
///
/// Bundles the three repositories over one pool bound to a private
/// database cloned from the template, plus a runtime to drive them.
pub struct RepoContext {
    guard: CleanupGuard<'static>,
    /// Project repository bound to the test database.
    pub projects: PostgresProjectRepository,
    /// Task repository bound to the test database.
    pub tasks: PostgresTaskRepository,
    /// Worker repository bound to the test database.
    pub workers: PostgresWorkerRepository,
    /// Runtime for blocking on repository futures.
    pub rt: Runtime,
}

impl RepoContext {
    /// Releases the repositories and drops the test database.
    pub fn finish(self) {
        drop(self.projects);
        drop(self.tasks);
        drop(self.workers);
        self.guard.cleanup().expect("test database should drop");
    }
}

/// Creates a private migrated database with repositories over it, or
/// `None` when the shared cluster is unavailable.
#[fixture]
pub fn repo_context(postgres_cluster: Option<PostgresCluster>) -> Option<RepoContext> {
    let cluster = postgres_cluster?;
    ensure_template(cluster).expect("template database should build");

    let db_name = format!("taskboard_test_{}", Uuid::new_v4().simple());
    cluster
        .create_database_from_template(&db_name, TEMPLATE_DB)
        .expect("test database should clone from template");
    let guard = CleanupGuard::new(cluster, db_name.clone());

    let pool =
        build_pool(&cluster.database_url(&db_name), 2).expect("connection pool should build");
    let rt = test_runtime().expect("tokio runtime should build");

    Some(RepoContext {
        guard,
        projects: PostgresProjectRepository::new(pool.clone()),
        tasks: PostgresTaskRepository::new(pool.clone()),
        workers: PostgresWorkerRepository::new(pool),
        rt,
    })
}

/// Builds a project creation command with the given code.
#[must_use]
pub fn new_project(code: &str) -> NewProject {
    NewProject {
        code: code.to_owned(),
        name: format!("Project {code}"),
        description: None,
    }
}

/// Builds a task creation command for the given project.
#[must_use]
pub const fn new_task(name: String, project_id: ProjectId) -> NewTask {
    NewTask {
        uuid: None,
        name,
        description: None,
        due_date: None,
        project_id,
        estimated_hours: None,
    }
}

/// Builds a worker creation command with the given email.
#[must_use]
pub fn new_worker(email: &str) -> NewWorker {
    NewWorker {
        email: email.to_owned(),
        first_name: Some("Test".to_owned()),
        last_name: Some("Worker".to_owned()),
    }
}
