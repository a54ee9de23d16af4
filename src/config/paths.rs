//! Path management for the expense logger
//!
//! All files live under a single base directory:
//!
//! ```text
//! <base>/
//!   config.json
//!   expenses.csv
//!   backups/expenses_backup_YYYYMMDD_HHMMSS.csv
//!   tax_expenses_YYYYMMDD.csv
//! ```
//!
//! ## Path Resolution Order
//!
//! 1. `--data-dir` command-line flag (if given)
//! 2. The platform data directory for `expense-cli`
//!    (e.g. `~/.local/share/expense-cli` on Linux)

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use directories::ProjectDirs;

use crate::error::ExpenseError;

/// Name of the primary data file
pub const EXPENSE_FILE_NAME: &str = "expenses.csv";

/// Manages all paths used by the expense logger
#[derive(Debug, Clone)]
pub struct ExpensePaths {
    /// Base directory for all expense data
    base_dir: PathBuf,
}

impl ExpensePaths {
    /// Resolve paths from an optional explicit override
    ///
    /// # Errors
    ///
    /// Returns an error if no override is given and the platform data
    /// directory cannot be determined.
    pub fn resolve(override_dir: Option<PathBuf>) -> Result<Self, ExpenseError> {
        let base_dir = match override_dir {
            Some(dir) => dir,
            None => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create ExpensePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the primary CSV data file
    pub fn expense_file(&self) -> PathBuf {
        self.base_dir.join(EXPENSE_FILE_NAME)
    }

    /// Get the backup directory
    pub fn backup_dir(&self) -> PathBuf {
        self.base_dir.join("backups")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the default tax export path for the given day
    pub fn tax_export_file(&self, day: NaiveDate) -> PathBuf {
        self.base_dir
            .join(format!("tax_expenses_{}.csv", day.format("%Y%m%d")))
    }

    /// Ensure the base and backup directories exist
    pub fn ensure_directories(&self) -> Result<(), ExpenseError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ExpenseError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.backup_dir())
            .map_err(|e| ExpenseError::Io(format!("Failed to create backup directory: {}", e)))?;

        Ok(())
    }
}

fn resolve_default_path() -> Result<PathBuf, ExpenseError> {
    ProjectDirs::from("", "", "expense-cli")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            ExpenseError::Config(
                "Could not determine a data directory; pass --data-dir explicitly".into(),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.expense_file(), temp_dir.path().join("expenses.csv"));
        assert_eq!(paths.backup_dir(), temp_dir.path().join("backups"));
    }

    #[test]
    fn test_override_wins() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::resolve(Some(temp_dir.path().to_path_buf())).unwrap();
        assert_eq!(paths.base_dir(), temp_dir.path());
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(paths.base_dir().exists());
        assert!(paths.backup_dir().exists());
    }

    #[test]
    fn test_tax_export_file_name() {
        let paths = ExpensePaths::with_base_dir(PathBuf::from("/data"));
        let day = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(
            paths.tax_export_file(day),
            PathBuf::from("/data/tax_expenses_20240309.csv")
        );
    }
}
