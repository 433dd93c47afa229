// crates/db/src/queries/mod.rs
// Company and job CRUD operations for the jobly SQLite database.

mod companies;
mod jobs;
pub(crate) mod row_types;

pub use jobs::JOB_FIELD_NAMES;
