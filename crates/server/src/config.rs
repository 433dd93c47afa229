// crates/server/src/config.rs
//! Command-line and environment configuration.
//!
//! ```bash
//! jobly --port 8080 --database ./jobly.db
//! JOBLY_JWT_SECRET=... jobly token --username admin --admin
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Used when no secret is configured. Never use this outside development.
pub const DEV_JWT_SECRET: &str = "secret-dev";

/// Token issuer for every token this server signs or accepts.
pub const JWT_ISSUER: &str = "jobly";

/// Jobly server configuration.
#[derive(Debug, Clone, Parser)]
#[command(name = "jobly", version, about = "Jobly job postings API server")]
pub struct Config {
    /// Host/IP to bind
    #[arg(long, default_value = "127.0.0.1", env = "JOBLY_HOST")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 3001, env = "JOBLY_PORT")]
    pub port: u16,

    /// SQLite database file (defaults to the platform data dir)
    #[arg(long, env = "JOBLY_DATABASE")]
    pub database: Option<PathBuf>,

    /// HS256 signing secret
    #[arg(long = "jwt-secret", default_value = DEV_JWT_SECRET, env = "JOBLY_JWT_SECRET", hide_env_values = true)]
    pub jwt_secret: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print a signed token and exit
    Token {
        #[arg(long)]
        username: String,

        /// Grant admin privileges
        #[arg(long)]
        admin: bool,
    },
}

impl Config {
    /// Socket address to bind.
    pub fn addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse()
            .map_err(|e| anyhow::anyhow!("invalid listen address {addr}: {e}"))
    }

    pub fn uses_dev_secret(&self) -> bool {
        self.jwt_secret == DEV_JWT_SECRET
    }
}
