//! Fixtures shared by the db integration tests.

use jobly_core::{NewCompany, NewJob};
use jobly_db::Database;

pub fn make_company(handle: &str, name: &str) -> NewCompany {
    NewCompany {
        handle: handle.to_string(),
        name: name.to_string(),
        description: format!("{name} description"),
        num_employees: Some(10),
        logo_url: None,
    }
}

pub fn make_job(title: &str, salary: Option<i64>, equity: Option<&str>, company: &str) -> NewJob {
    NewJob {
        title: title.to_string(),
        salary,
        equity: equity.map(str::to_string),
        company_handle: company.to_string(),
    }
}

/// Two companies and four jobs:
///
/// | title | salary | equity | company |
/// |-------|--------|--------|---------|
/// | j1    | 100    | 0.1    | c1      |
/// | j2    | 200    | 0.2    | c1      |
/// | j3    | 300    | 0      | c1      |
/// | J4    | none   | none   | c2      |
pub async fn seeded_db() -> (Database, Vec<i64>) {
    let db = Database::new_in_memory().await.unwrap();
    db.create_company(&make_company("c1", "C1")).await.unwrap();
    db.create_company(&make_company("c2", "C2")).await.unwrap();

    let mut ids = Vec::new();
    for job in [
        make_job("j1", Some(100), Some("0.1"), "c1"),
        make_job("j2", Some(200), Some("0.2"), "c1"),
        make_job("j3", Some(300), Some("0"), "c1"),
        make_job("J4", None, None, "c2"),
    ] {
        ids.push(db.create_job(&job).await.unwrap().id);
    }
    (db, ids)
}
