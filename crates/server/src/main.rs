// crates/server/src/main.rs
//! Jobly server binary.
//!
//! Opens the database, builds the app and serves until Ctrl-C. The `token`
//! subcommand prints a signed token instead of serving.

use anyhow::Result;
use clap::Parser;
use jobly_db::Database;
use jobly_server::config::Command;
use jobly_server::{create_app, AppState, Config, JwtService};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "info,sqlx=warn";

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).compact().init();
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();
    init_tracing();

    if config.uses_dev_secret() {
        tracing::warn!("Using the development JWT secret; set JOBLY_JWT_SECRET in production");
    }
    let jwt = JwtService::new(&config.jwt_secret, jobly_server::config::JWT_ISSUER);

    if let Some(Command::Token { username, admin }) = &config.command {
        println!("{}", jwt.create_token(username, *admin)?);
        return Ok(());
    }

    // Step 1: Open database (runs migrations)
    let db = match &config.database {
        Some(path) => Database::new(path).await?,
        None => Database::open_default().await?,
    };
    tracing::info!(path = %db.db_path().display(), "Database ready");

    // Step 2: Build the app
    let state = AppState::new(db, jwt)?;
    let app = create_app(state);

    // Step 3: Bind and serve
    let addr = config.addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, version = env!("CARGO_PKG_VERSION"), "Jobly listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
