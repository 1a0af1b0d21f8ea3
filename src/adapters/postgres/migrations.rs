//! Schema migrations applied at startup.
//!
//! The migration SQL is written to be idempotent so the server can run it
//! unconditionally on every start.

use diesel::connection::SimpleConnection;

use super::blocking::{PgPool, get_conn, run_blocking};
use crate::ports::{RepositoryError, RepositoryResult};

/// SQL creating the projects, workers, and tasks tables.
pub const BASE_TABLES_SQL: &str =
    include_str!("../../../migrations/2026-08-01-000000_create_base_tables/up.sql");

/// Applies the schema migrations over a pooled connection.
///
/// # Errors
///
/// Returns a persistence error when a connection cannot be obtained or a
/// statement fails.
pub async fn run_migrations(pool: &PgPool) -> RepositoryResult<()> {
    let owned_pool = pool.clone();
    run_blocking(move || {
        let mut conn = get_conn(&owned_pool)?;
        conn.batch_execute(BASE_TABLES_SQL)
            .map_err(RepositoryError::persistence)
    })
    .await
}
