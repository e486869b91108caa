//! Shared test utilities.

use camino::Utf8PathBuf;
use chrono::NaiveDate;
use gleaner::{DateRange, ReportingTimezone};
use tempfile::TempDir;

/// Creates a temporary directory for output roots.
///
/// # Panics
///
/// Panics if the temporary directory cannot be created.
pub fn create_temp_dir() -> TempDir {
    TempDir::new().unwrap_or_else(|error| panic!("failed to create temporary directory: {error}"))
}

/// Output root inside `temp_dir`; not created until the first write.
///
/// # Panics
///
/// Panics if the temporary path is not UTF-8.
pub fn output_root(temp_dir: &TempDir) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(temp_dir.path().join("pullrequests"))
        .unwrap_or_else(|path| panic!("temporary path is not UTF-8: {}", path.display()))
}

/// The whole of 2024-01-01 in Asia/Tokyo.
///
/// # Panics
///
/// Panics if the window cannot be built.
pub fn new_year_window() -> DateRange {
    let day = NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap_or_else(|| panic!("2024-01-01 is a valid date"));
    DateRange::from_dates(day, day, ReportingTimezone::default())
        .unwrap_or_else(|error| panic!("window should build: {error}"))
}
