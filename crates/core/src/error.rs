use thiserror::Error;

/// Errors raised while building parameterized SQL fragments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SqlError {
    /// The update payload had no fields, so there is nothing to SET.
    #[error("No data")]
    NoData,

    /// A payload value was an array or object and cannot be bound as a parameter.
    #[error("Field '{field}' must be a scalar value")]
    NonScalar { field: String },
}
