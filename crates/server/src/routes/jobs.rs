// crates/server/src/routes/jobs.rs
//! Job posting routes.
//!
//! - POST   /jobs       (admin) create a job
//! - GET    /jobs       search with `title`, `minSalary`, `hasEquity`
//! - GET    /jobs/{id}  one job with its company
//! - PATCH  /jobs/{id}  (admin) partial update
//! - DELETE /jobs/{id}  (admin) remove

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};
use jobly_core::{Job, JobDetail, JobFilter, JobListing, NewJob};
use serde::Serialize;
use serde_json::{Map, Number, Value};

use crate::auth::AdminUser;
use crate::error::{ApiError, ApiResult};
use crate::schema::validate;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct JobResponse<T> {
    pub job: T,
}

#[derive(Debug, Serialize)]
pub struct JobsResponse {
    pub jobs: Vec<JobListing>,
}

#[derive(Debug, Serialize)]
pub struct RemovedResponse {
    pub removed: i64,
}

/// Non-numeric ids can never match a row, so they are reported as missing.
fn parse_job_id(raw: &str) -> ApiResult<i64> {
    raw.parse()
        .map_err(|_| ApiError::NotFound(format!("No job: {raw}")))
}

/// Turn raw query pairs into a JSON object the search schema can check.
///
/// `minSalary` becomes a number when it parses as one (otherwise it stays a
/// string and fails validation). `hasEquity` is true only for the literal
/// `"true"` and is always present.
fn coerce_search_query(pairs: Vec<(String, String)>) -> Map<String, Value> {
    let mut query = Map::new();
    for (key, raw) in pairs {
        let value = match key.as_str() {
            "minSalary" => coerce_number(raw),
            "hasEquity" => Value::Bool(raw == "true"),
            _ => Value::String(raw),
        };
        query.insert(key, value);
    }
    query.entry("hasEquity").or_insert(Value::Bool(false));
    query
}

/// Query-string number coercion: blank is 0, anything else that parses is a
/// number, and unparseable input stays a string for the schema to reject.
fn coerce_number(raw: String) -> Value {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Value::Number(0.into());
    }
    if let Ok(n) = trimmed.parse::<i64>() {
        return Value::Number(n.into());
    }
    match trimmed.parse::<f64>().ok().and_then(Number::from_f64) {
        Some(n) => Value::Number(whole_to_int(n)),
        None => Value::String(raw),
    }
}

/// `150.0` and `1e2` become the integers 150 and 100; other numbers are kept.
fn whole_to_int(n: Number) -> Number {
    if n.is_f64() {
        if let Some(f) = n.as_f64() {
            if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
                return Number::from(f as i64);
            }
        }
    }
    n
}

/// Apply [`whole_to_int`] to every number in a request body.
fn normalize_numbers(value: &mut Value) {
    match value {
        Value::Number(n) => *n = whole_to_int(n.clone()),
        Value::Array(items) => items.iter_mut().for_each(normalize_numbers),
        Value::Object(map) => map.values_mut().for_each(normalize_numbers),
        _ => {}
    }
}

fn into_object(value: Value) -> ApiResult<Map<String, Value>> {
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(ApiError::BadRequest("Expected a JSON object".to_string())),
    }
}

/// POST /jobs
async fn create_job(
    State(state): State<Arc<AppState>>,
    AdminUser(admin): AdminUser,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<JobResponse<Job>>)> {
    let Json(mut payload) = payload?;
    normalize_numbers(&mut payload);
    validate(&state.schemas.new_job, &payload)?;

    let new_job: NewJob =
        serde_json::from_value(payload).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let job = state.db.create_job(&new_job).await?;

    tracing::info!(id = job.id, admin = %admin.username, "Job created");
    Ok((StatusCode::CREATED, Json(JobResponse { job })))
}

/// GET /jobs
async fn list_jobs(
    State(state): State<Arc<AppState>>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> ApiResult<Json<JobsResponse>> {
    let Query(pairs) = query?;
    let query = Value::Object(coerce_search_query(pairs));
    validate(&state.schemas.search, &query)?;

    let filter: JobFilter =
        serde_json::from_value(query).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let jobs = state.db.find_all_jobs(&filter).await?;
    Ok(Json(JobsResponse { jobs }))
}

/// GET /jobs/{id}
async fn get_job(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<JobResponse<JobDetail>>> {
    let id = parse_job_id(&id)?;
    let job = state.db.get_job(id).await?;
    Ok(Json(JobResponse { job }))
}

/// PATCH /jobs/{id}
async fn update_job(
    State(state): State<Arc<AppState>>,
    AdminUser(admin): AdminUser,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<JobResponse<Job>>> {
    let Json(mut payload) = payload?;
    normalize_numbers(&mut payload);
    validate(&state.schemas.update_job, &payload)?;

    let id = parse_job_id(&id)?;
    let job = state.db.update_job(id, &into_object(payload)?).await?;

    tracing::info!(id, admin = %admin.username, "Job updated");
    Ok(Json(JobResponse { job }))
}

/// DELETE /jobs/{id}
async fn remove_job(
    State(state): State<Arc<AppState>>,
    AdminUser(admin): AdminUser,
    Path(id): Path<String>,
) -> ApiResult<Json<RemovedResponse>> {
    let id = parse_job_id(&id)?;
    state.db.remove_job(id).await?;

    tracing::info!(id, admin = %admin.username, "Job removed");
    Ok(Json(RemovedResponse { removed: id }))
}

/// Build the jobs router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/jobs", get(list_jobs).post(create_job))
        .route(
            "/jobs/{id}",
            get(get_job).patch(update_job).delete(remove_job),
        )
}
