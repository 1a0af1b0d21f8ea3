//! Taskboard server binary.

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use taskboard::adapters::postgres::{build_pool, run_migrations};
use taskboard::config::ServerConfig;
use taskboard::seed::seed_demo_data;
use taskboard::web::{AppState, serve};

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::parse();
    let state = build_state(&config).await?;

    if config.seed {
        seed_demo_data(&state).await?;
    }

    serve(&config, state).await?;
    Ok(())
}

async fn build_state(config: &ServerConfig) -> Result<AppState, BoxError> {
    let Some(database_url) = config.database_url.as_deref() else {
        info!("using in-memory store");
        return Ok(AppState::in_memory());
    };
    let pool = build_pool(database_url, config.pool_size)?;
    run_migrations(&pool).await?;
    info!("using PostgreSQL store");
    Ok(AppState::postgres(pool))
}
