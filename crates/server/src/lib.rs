// crates/server/src/lib.rs
//! Jobly server library.
//!
//! Axum-based HTTP server exposing the job postings REST API. Mutating routes
//! require an admin bearer token; every failure is rendered by one formatter
//! as `{ "error": { "message", "status" } }`.

pub mod auth;
pub mod config;
pub mod error;
pub mod routes;
pub mod schema;
pub mod state;

pub use auth::{AdminUser, AuthUser, Claims, JwtService};
pub use config::Config;
pub use error::*;
pub use routes::api_routes;
pub use state::AppState;

use std::sync::Arc;

use axum::{middleware, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Create the Axum application with all routes and middleware.
///
/// This sets up:
/// - API routes (health, jobs) with a JSON 404 fallback
/// - Bearer-token authentication on every request
/// - CORS (allows any origin)
/// - Request tracing
pub fn create_app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(api_routes(state.clone()))
        .layer(middleware::from_fn_with_state(state, auth::authenticate))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

// ============================================================================
// Integration Tests
// ============================================================================
