//! Command-line and environment configuration.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::Parser;

/// Taskboard server configuration.
///
/// Every flag can also be supplied through a `TASKBOARD_*` environment
/// variable; flags take precedence over the environment.
#[derive(Debug, Clone, Parser)]
#[command(name = "taskboard", about = "Project and task management REST API")]
pub struct ServerConfig {
    /// Address to bind the HTTP listener on.
    #[arg(long, env = "TASKBOARD_HOST", default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub host: IpAddr,

    /// Port to bind the HTTP listener on.
    #[arg(long, env = "TASKBOARD_PORT", default_value_t = 8080)]
    pub port: u16,

    /// `PostgreSQL` connection URL; when absent the in-memory store is used.
    #[arg(long, env = "TASKBOARD_DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum number of pooled database connections.
    #[arg(long, env = "TASKBOARD_POOL_SIZE", default_value_t = 8)]
    pub pool_size: u32,

    /// Populate the store with the demo dataset at startup.
    #[arg(long, env = "TASKBOARD_SEED")]
    pub seed: bool,
}

impl ServerConfig {
    /// Returns the socket address to bind the listener on.
    #[must_use]
    pub const fn bind_address(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
