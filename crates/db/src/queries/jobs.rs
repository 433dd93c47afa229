// crates/db/src/queries/jobs.rs
// Job CRUD: create, filtered search, get, partial update, remove.

use crate::{Database, DbError, DbResult};
use jobly_core::{sql_for_partial_update, FieldNames, Job, JobDetail, JobFilter, JobListing, NewJob, SqlValue};
use serde_json::{Map, Value};
use sqlx::Sqlite;

use super::row_types::{JobDetailRow, JobListingRow, JobRow};

/// Request field names whose storage column differs.
pub const JOB_FIELD_NAMES: FieldNames<'static> = &[("companyHandle", "company_handle")];

const JOB_COLUMNS: &str = "id, title, salary, equity, company_handle";

/// Escape LIKE wildcards so a title filter matches literally.
fn escape_like(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

fn job_not_found(id: i64) -> DbError {
    DbError::NotFound(format!("No job: {id}"))
}

/// A CHECK constraint rejected the row; nothing was written.
fn reject_invalid(e: sqlx::Error) -> DbError {
    if let sqlx::Error::Database(db) = &e {
        if matches!(db.kind(), sqlx::error::ErrorKind::CheckViolation) {
            return DbError::BadRequest(format!("Invalid job data: {}", db.message()));
        }
    }
    DbError::Sqlx(e)
}

impl Database {
    /// Insert a job posting. The referenced company must exist.
    pub async fn create_job(&self, job: &NewJob) -> DbResult<Job> {
        if !self.company_exists(&job.company_handle).await? {
            return Err(DbError::BadRequest(format!(
                "No company: {}",
                job.company_handle
            )));
        }

        let row: JobRow = sqlx::query_as(&format!(
            "INSERT INTO jobs (title, salary, equity, company_handle) VALUES (?1, ?2, ?3, ?4) RETURNING {JOB_COLUMNS}"
        ))
        .bind(&job.title)
        .bind(job.salary)
        .bind(&job.equity)
        .bind(&job.company_handle)
        .fetch_one(self.pool())
        .await
        .map_err(reject_invalid)?;

        Ok(row.into_job())
    }

    /// Search jobs. Results are ordered by title, then id.
    ///
    /// Uses sqlx::QueryBuilder so every filter value is a bound parameter.
    pub async fn find_all_jobs(&self, filter: &JobFilter) -> DbResult<Vec<JobListing>> {
        let mut qb = sqlx::QueryBuilder::<Sqlite>::new(
            r#"
            SELECT j.id, j.title, j.salary, j.equity, j.company_handle,
                   c.name AS company_name
            FROM jobs j
            LEFT JOIN companies c ON c.handle = j.company_handle
            WHERE 1=1"#,
        );

        // SQLite LIKE is case-insensitive for ASCII
        if let Some(title) = &filter.title {
            qb.push(" AND j.title LIKE ");
            qb.push_bind(format!("%{}%", escape_like(title)));
            qb.push(" ESCAPE '\\'");
        }

        if let Some(min) = filter.min_salary {
            qb.push(" AND j.salary >= ");
            qb.push_bind(min);
        }

        if filter.has_equity {
            qb.push(" AND j.equity IS NOT NULL AND CAST(j.equity AS REAL) > 0");
        }

        qb.push(" ORDER BY j.title, j.id");

        let rows: Vec<JobListingRow> = qb.build_query_as().fetch_all(self.pool()).await?;
        Ok(rows.into_iter().map(JobListingRow::into_listing).collect())
    }

    /// Fetch one job with its company.
    pub async fn get_job(&self, id: i64) -> DbResult<JobDetail> {
        let row: Option<JobDetailRow> = sqlx::query_as(
            r#"
            SELECT j.id, j.title, j.salary, j.equity, j.company_handle,
                   c.handle AS c_handle, c.name AS c_name, c.description AS c_description,
                   c.num_employees AS c_num_employees, c.logo_url AS c_logo_url
            FROM jobs j
            JOIN companies c ON c.handle = j.company_handle
            WHERE j.id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await?;

        row.map(JobDetailRow::into_detail)
            .ok_or_else(|| job_not_found(id))
    }

    /// Apply a partial update. Only the fields present in `data` change.
    ///
    /// `data` keys are request field names; `JOB_FIELD_NAMES` maps them to
    /// columns. Placeholders `$1..$n` carry the values and `$n+1` the id.
    pub async fn update_job(&self, id: i64, data: &Map<String, Value>) -> DbResult<Job> {
        let fragment = sql_for_partial_update(data, JOB_FIELD_NAMES)?;
        let id_idx = fragment.len() + 1;
        let sql = format!(
            "UPDATE jobs SET {} WHERE id = ${} RETURNING {}",
            fragment.set_clause, id_idx, JOB_COLUMNS
        );

        let mut query = sqlx::query_as::<_, JobRow>(&sql);
        for value in &fragment.values {
            query = match value {
                SqlValue::Null => query.bind(None::<String>),
                SqlValue::Bool(b) => query.bind(*b),
                SqlValue::Int(n) => query.bind(*n),
                SqlValue::Float(f) => query.bind(*f),
                SqlValue::Text(s) => query.bind(s.as_str()),
            };
        }

        let row = query
            .bind(id)
            .fetch_optional(self.pool())
            .await
            .map_err(reject_invalid)?;
        row.map(JobRow::into_job).ok_or_else(|| job_not_found(id))
    }

    /// Delete a job. Deleting a missing id is `NotFound`.
    pub async fn remove_job(&self, id: i64) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM jobs WHERE id = ?")
            .bind(id)
            .execute(self.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(job_not_found(id));
        }
        Ok(())
    }
}
