//! JSON Schema validation for request payloads.
//!
//! Schemas live in `crates/server/schemas/` and are compiled once when the
//! application state is built.

use jsonschema::JSONSchema;
use serde_json::Value;
use thiserror::Error;

use crate::error::{ApiError, ApiResult};

const JOB_NEW: &str = include_str!("../schemas/job_new.json");
const JOB_UPDATE: &str = include_str!("../schemas/job_update.json");
const JOB_SEARCH: &str = include_str!("../schemas/job_search.json");

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("schema {name} is not valid JSON: {source}")]
    Parse {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("schema {name} failed to compile: {message}")]
    Compile { name: &'static str, message: String },
}

/// Compiled request schemas for the jobs routes.
pub struct JobSchemas {
    pub new_job: JSONSchema,
    pub update_job: JSONSchema,
    pub search: JSONSchema,
}

impl JobSchemas {
    pub fn new() -> Result<Self, SchemaError> {
        Ok(Self {
            new_job: compile("job_new", JOB_NEW)?,
            update_job: compile("job_update", JOB_UPDATE)?,
            search: compile("job_search", JOB_SEARCH)?,
        })
    }
}

impl std::fmt::Debug for JobSchemas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JobSchemas").finish_non_exhaustive()
    }
}

fn compile(name: &'static str, source: &str) -> Result<JSONSchema, SchemaError> {
    let schema: Value =
        serde_json::from_str(source).map_err(|source| SchemaError::Parse { name, source })?;
    JSONSchema::compile(&schema).map_err(|e| SchemaError::Compile {
        name,
        message: e.to_string(),
    })
}

/// Validate `instance`, collecting every violation in the order reported.
pub fn validate(schema: &JSONSchema, instance: &Value) -> ApiResult<()> {
    match schema.validate(instance) {
        Ok(()) => Ok(()),
        Err(errors) => {
            let messages = errors
                .map(|e| {
                    let path = e.instance_path.to_string();
                    if path.is_empty() {
                        e.to_string()
                    } else {
                        format!("{path}: {e}")
                    }
                })
                .collect();
            Err(ApiError::SchemaViolation(messages))
        }
    }
}
