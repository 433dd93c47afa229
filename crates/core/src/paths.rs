//! Centralized path functions for app storage locations.

use std::path::PathBuf;

/// App data root: `~/.local/share/jobly/` (Linux) or `~/Library/Application Support/jobly/` (macOS).
pub fn app_data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join("jobly"))
}

/// SQLite database file: `<app_data_dir>/jobly.db`.
pub fn db_path() -> Option<PathBuf> {
    app_data_dir().map(|d| d.join("jobly.db"))
}
