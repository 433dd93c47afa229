// crates/db/src/queries/companies.rs
// Company lookups and inserts. Jobs reference companies by handle.

use crate::{Database, DbError, DbResult};
use jobly_core::{Company, NewCompany};

use super::row_types::CompanyRow;

impl Database {
    /// Insert a company. A handle that already exists is a `BadRequest`.
    pub async fn create_company(&self, company: &NewCompany) -> DbResult<Company> {
        if self.company_exists(&company.handle).await? {
            return Err(DbError::BadRequest(format!(
                "Duplicate company: {}",
                company.handle
            )));
        }

        let row: CompanyRow = sqlx::query_as(
            r#"
            INSERT INTO companies (handle, name, description, num_employees, logo_url)
            VALUES (?1, ?2, ?3, ?4, ?5)
            RETURNING handle, name, description, num_employees, logo_url
            "#,
        )
        .bind(&company.handle)
        .bind(&company.name)
        .bind(&company.description)
        .bind(company.num_employees)
        .bind(&company.logo_url)
        .fetch_one(self.pool())
        .await?;

        Ok(row.into_company())
    }

    /// Fetch a company by handle.
    pub async fn get_company(&self, handle: &str) -> DbResult<Company> {
        let row: Option<CompanyRow> = sqlx::query_as(
            "SELECT handle, name, description, num_employees, logo_url FROM companies WHERE handle = ?",
        )
        .bind(handle)
        .fetch_optional(self.pool())
        .await?;

        row.map(CompanyRow::into_company)
            .ok_or_else(|| DbError::NotFound(format!("No company: {handle}")))
    }

    pub(crate) async fn company_exists(&self, handle: &str) -> DbResult<bool> {
        let row: Option<(String,)> = sqlx::query_as("SELECT handle FROM companies WHERE handle = ?")
            .bind(handle)
            .fetch_optional(self.pool())
            .await?;
        Ok(row.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acme() -> NewCompany {
        NewCompany {
            handle: "acme".to_string(),
            name: "Acme Corp".to_string(),
            description: "Anvils".to_string(),
            num_employees: Some(50),
            logo_url: None,
        }
    }

    #[tokio::test]
    async fn test_create_and_get_company() {
        let db = Database::new_in_memory().await.unwrap();
        let created = db.create_company(&acme()).await.unwrap();
        assert_eq!(created.handle, "acme");
        assert_eq!(created.num_employees, Some(50));

        let fetched = db.get_company("acme").await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_duplicate_company_rejected() {
        let db = Database::new_in_memory().await.unwrap();
        db.create_company(&acme()).await.unwrap();
        let err = db.create_company(&acme()).await.unwrap_err();
        assert!(matches!(err, DbError::BadRequest(ref m) if m == "Duplicate company: acme"));
    }

    #[tokio::test]
    async fn test_missing_company_not_found() {
        let db = Database::new_in_memory().await.unwrap();
        let err = db.get_company("nope").await.unwrap_err();
        assert!(matches!(err, DbError::NotFound(ref m) if m == "No company: nope"));
    }
}
