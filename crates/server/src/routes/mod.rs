//! API route handlers for the jobly server.

pub mod health;
pub mod jobs;

use std::sync::Arc;

use axum::{http::Uri, Router};

use crate::error::ApiError;
use crate::state::AppState;

/// Create the combined API router.
///
/// Routes:
/// - GET    /health - Health check
/// - POST   /jobs - Create a job (admin)
/// - GET    /jobs - Search jobs
/// - GET    /jobs/{id} - Get a job with its company
/// - PATCH  /jobs/{id} - Partially update a job (admin)
/// - DELETE /jobs/{id} - Remove a job (admin)
///
/// Anything else answers 404 in the standard error shape.
pub fn api_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(health::router())
        .merge(jobs::router())
        .fallback(not_found)
        .with_state(state)
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("Not found: {}", uri.path()))
}
