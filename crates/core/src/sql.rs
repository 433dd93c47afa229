//! Parameterized SQL fragment helpers.
//!
//! [`sql_for_partial_update`] turns a sparse update payload into the
//! `"col"=$1, "col2"=$2` list that follows `UPDATE <table> SET`, plus the
//! values to bind in placeholder order. Values never appear in the SQL text.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::SqlError;

/// Mapping from application-level field name to storage column name.
///
/// Fields not listed use their application name as the column name.
pub type FieldNames<'a> = &'a [(&'a str, &'a str)];

/// A scalar that can be bound as a positional SQL parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SqlValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl SqlValue {
    /// Convert a JSON scalar. Arrays and objects yield `None`.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Null => Some(Self::Null),
            Value::Bool(b) => Some(Self::Bool(*b)),
            Value::Number(n) => n
                .as_i64()
                .map(Self::Int)
                .or_else(|| n.as_f64().map(Self::from_f64)),
            Value::String(s) => Some(Self::Text(s.clone())),
            Value::Array(_) | Value::Object(_) => None,
        }
    }
}

impl SqlValue {
    /// Whole floats that fit in an `i64` bind as integers.
    fn from_f64(f: f64) -> Self {
        if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
            Self::Int(f as i64)
        } else {
            Self::Float(f)
        }
    }
}

impl From<&str> for SqlValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for SqlValue {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<bool> for SqlValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

/// Result of [`sql_for_partial_update`].
#[derive(Debug, Clone, PartialEq)]
pub struct SqlFragment {
    /// Comma-separated `"column"=$N` assignments.
    pub set_clause: String,
    /// Values for `$1..=$N`, in placeholder order.
    pub values: Vec<SqlValue>,
}

impl SqlFragment {
    /// Number of placeholders used; the next free one is `len() + 1`.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Double-quote an identifier, doubling any embedded quotes.
pub fn quote_ident(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 2);
    out.push('"');
    for c in name.chars() {
        if c == '"' {
            out.push('"');
        }
        out.push(c);
    }
    out.push('"');
    out
}

fn column_for<'a>(field: &'a str, field_names: FieldNames<'a>) -> &'a str {
    field_names
        .iter()
        .find(|(app, _)| *app == field)
        .map(|(_, column)| *column)
        .unwrap_or(field)
}

/// Build the SET list for a partial update.
///
/// Placeholders are numbered from `$1` in the payload's iteration order, and
/// `values[i]` belongs to `$(i + 1)`. An empty payload is rejected with
/// [`SqlError::NoData`].
pub fn sql_for_partial_update(
    payload: &Map<String, Value>,
    field_names: FieldNames<'_>,
) -> Result<SqlFragment, SqlError> {
    if payload.is_empty() {
        return Err(SqlError::NoData);
    }

    let mut assignments = Vec::with_capacity(payload.len());
    let mut values = Vec::with_capacity(payload.len());

    for (idx, (field, value)) in payload.iter().enumerate() {
        let value = SqlValue::from_json(value).ok_or_else(|| SqlError::NonScalar {
            field: field.clone(),
        })?;
        let column = column_for(field, field_names);
        assignments.push(format!("{}=${}", quote_ident(column), idx + 1));
        values.push(value);
    }

    Ok(SqlFragment {
        set_clause: assignments.join(", "),
        values,
    })
}
