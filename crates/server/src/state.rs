// crates/server/src/state.rs
//! Application state for the Axum server.

use std::sync::Arc;
use std::time::Instant;

use jobly_db::Database;

use crate::auth::JwtService;
use crate::schema::{JobSchemas, SchemaError};

/// Shared application state accessible from all route handlers.
///
/// Immutable after construction; handlers only read from it.
pub struct AppState {
    /// Server start time for uptime tracking.
    pub start_time: Instant,
    /// Database handle for job/company queries.
    pub db: Database,
    /// Compiled request schemas.
    pub schemas: JobSchemas,
    /// Token verifier used by the auth middleware.
    pub jwt: JwtService,
}

impl AppState {
    /// Create a new application state wrapped in an Arc for sharing.
    ///
    /// Fails only if a bundled schema does not compile.
    pub fn new(db: Database, jwt: JwtService) -> Result<Arc<Self>, SchemaError> {
        Ok(Arc::new(Self {
            start_time: Instant::now(),
            db,
            schemas: JobSchemas::new()?,
            jwt,
        }))
    }

    /// Get the server uptime in seconds.
    pub fn uptime_secs(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
