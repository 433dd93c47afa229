// crates/db/src/queries/row_types.rs
// Internal row types mapping SQLite rows onto core records.

use jobly_core::{Company, Job, JobDetail, JobListing};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row};

#[derive(Debug)]
pub(crate) struct JobRow {
    id: i64,
    title: String,
    salary: Option<i64>,
    equity: Option<String>,
    company_handle: String,
}

impl<'r> FromRow<'r, SqliteRow> for JobRow {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            title: row.try_get("title")?,
            salary: row.try_get("salary")?,
            equity: row.try_get("equity")?,
            company_handle: row.try_get("company_handle")?,
        })
    }
}

impl JobRow {
    pub(crate) fn into_job(self) -> Job {
        Job {
            id: self.id,
            title: self.title,
            salary: self.salary,
            equity: self.equity,
            company_handle: self.company_handle,
        }
    }
}

#[derive(Debug)]
pub(crate) struct JobListingRow {
    job: JobRow,
    company_name: Option<String>,
}

impl<'r> FromRow<'r, SqliteRow> for JobListingRow {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            job: JobRow::from_row(row)?,
            company_name: row.try_get("company_name")?,
        })
    }
}

impl JobListingRow {
    pub(crate) fn into_listing(self) -> JobListing {
        JobListing {
            job: self.job.into_job(),
            company_name: self.company_name,
        }
    }
}

#[derive(Debug)]
pub(crate) struct CompanyRow {
    handle: String,
    name: String,
    description: String,
    num_employees: Option<i64>,
    logo_url: Option<String>,
}

impl<'r> FromRow<'r, SqliteRow> for CompanyRow {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            handle: row.try_get("handle")?,
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            num_employees: row.try_get("num_employees")?,
            logo_url: row.try_get("logo_url")?,
        })
    }
}

impl CompanyRow {
    pub(crate) fn into_company(self) -> Company {
        Company {
            handle: self.handle,
            name: self.name,
            description: self.description,
            num_employees: self.num_employees,
            logo_url: self.logo_url,
        }
    }
}

/// Job joined with its company; company columns are prefixed `c_`.
#[derive(Debug)]
pub(crate) struct JobDetailRow {
    job: JobRow,
    company: CompanyRow,
}

impl<'r> FromRow<'r, SqliteRow> for JobDetailRow {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            job: JobRow::from_row(row)?,
            company: CompanyRow {
                handle: row.try_get("c_handle")?,
                name: row.try_get("c_name")?,
                description: row.try_get("c_description")?,
                num_employees: row.try_get("c_num_employees")?,
                logo_url: row.try_get("c_logo_url")?,
            },
        })
    }
}

impl JobDetailRow {
    pub(crate) fn into_detail(self) -> JobDetail {
        JobDetail {
            id: self.job.id,
            title: self.job.title,
            salary: self.job.salary,
            equity: self.job.equity,
            company: self.company.into_company(),
        }
    }
}
