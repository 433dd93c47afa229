// crates/core/src/lib.rs
pub mod error;
pub mod paths;
pub mod sql;
pub mod types;

pub use error::*;
pub use sql::{quote_ident, sql_for_partial_update, FieldNames, SqlFragment, SqlValue};
pub use types::*;
