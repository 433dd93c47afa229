/// Inline SQL migrations for the jobly database schema.
///
/// Each entry is applied once, in order, and recorded in `_migrations`.

pub const MIGRATIONS: &[&str] = &[
    // Migration 1: companies table
    r#"
CREATE TABLE IF NOT EXISTS companies (
    handle        TEXT PRIMARY KEY,
    name          TEXT NOT NULL UNIQUE,
    num_employees INTEGER CHECK (num_employees >= 0),
    description   TEXT NOT NULL DEFAULT '',
    logo_url      TEXT
);
"#,
    // Migration 2: jobs table
    r#"
CREATE TABLE IF NOT EXISTS jobs (
    id             INTEGER PRIMARY KEY AUTOINCREMENT,
    title          TEXT NOT NULL,
    salary         INTEGER CHECK (salary IS NULL OR (typeof(salary) = 'integer' AND salary >= 0)),
    equity         TEXT CHECK (equity IS NULL OR CAST(equity AS REAL) <= 1.0),
    company_handle TEXT NOT NULL REFERENCES companies(handle) ON DELETE CASCADE
);
"#,
    // Migration 3: jobs indexes
    r#"CREATE INDEX IF NOT EXISTS idx_jobs_company ON jobs(company_handle);"#,
    r#"CREATE INDEX IF NOT EXISTS idx_jobs_title ON jobs(title);"#,
];
