//! Backup restoration
//!
//! Copies a backup back over the data file after checking that it really is
//! an expense file.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::paths::ExpensePaths;
use crate::error::{ExpenseError, ExpenseResult};
use crate::storage::expenses::{has_expense_header, read_records};

/// Handles restoring from backups
pub struct RestoreManager {
    paths: ExpensePaths,
}

impl RestoreManager {
    /// Create a new RestoreManager
    pub fn new(paths: ExpensePaths) -> Self {
        Self { paths }
    }

    /// Validate a backup file without restoring it
    pub fn validate_backup(&self, backup_path: &Path) -> ExpenseResult<ValidationResult> {
        let open = || {
            File::open(backup_path)
                .map_err(|e| ExpenseError::Backup(format!("Failed to read backup file: {}", e)))
        };

        if !has_expense_header(open()?) {
            return Ok(ValidationResult {
                is_valid: false,
                record_count: 0,
                unreadable_rows: 0,
            });
        }

        let loaded = read_records(open()?)?;
        Ok(ValidationResult {
            is_valid: true,
            record_count: loaded.records.len(),
            unreadable_rows: loaded.skipped_rows,
        })
    }

    /// Replace the data file with the contents of a backup
    ///
    /// This overwrites the current data file.
    pub fn restore_from_file(&self, backup_path: &Path) -> ExpenseResult<RestoreResult> {
        let validation = self.validate_backup(backup_path)?;
        if !validation.is_valid {
            return Err(ExpenseError::Backup(format!(
                "{} is not an expense file (missing Date,Category,Description,Amount header)",
                backup_path.display()
            )));
        }

        self.paths.ensure_directories()?;
        let data_file = self.paths.expense_file();
        fs::copy(backup_path, &data_file)
            .map_err(|e| ExpenseError::Backup(format!("Failed to restore backup: {}", e)))?;

        info!(from = %backup_path.display(), records = validation.record_count, "backup restored");

        Ok(RestoreResult {
            restored_from: backup_path.to_path_buf(),
            data_file,
            records_restored: validation.record_count,
        })
    }
}

/// Result of validating a backup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// Whether the file has the expense header
    pub is_valid: bool,
    /// Number of readable records
    pub record_count: usize,
    /// Rows that would be skipped when reading
    pub unreadable_rows: usize,
}

/// Result of a restore operation
#[derive(Debug, Clone)]
pub struct RestoreResult {
    /// Backup the data came from
    pub restored_from: PathBuf,
    /// Data file that was overwritten
    pub data_file: PathBuf,
    /// Number of readable records now in the data file
    pub records_restored: usize,
}

impl RestoreResult {
    /// Get a summary of what was restored
    pub fn summary(&self) -> String {
        format!(
            "Restored {} expense(s) from {}",
            self.records_restored,
            self.restored_from.display()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backup::BackupManager;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    const ONE_ROW: &str =
        "Date,Category,Description,Amount\n2024-03-01,🍕 Food & Dining,Lunch,12.50\n";

    fn setup() -> (ExpensePaths, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();
        (paths, temp_dir)
    }

    #[test]
    fn test_restore_round_trip() {
        let (paths, _temp) = setup();
        fs::write(paths.expense_file(), ONE_ROW).unwrap();

        let stamp = NaiveDate::from_ymd_opt(2024, 3, 2)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        let backup = BackupManager::new(&paths).create_backup_at(stamp).unwrap();

        // Data changes after the backup
        fs::write(paths.expense_file(), "Date,Category,Description,Amount\n").unwrap();

        let result = RestoreManager::new(paths.clone())
            .restore_from_file(&backup)
            .unwrap();
        assert_eq!(result.records_restored, 1);
        assert!(result.summary().starts_with("Restored 1 expense(s)"));
        assert_eq!(fs::read_to_string(paths.expense_file()).unwrap(), ONE_ROW);
    }

    #[test]
    fn test_rejects_non_expense_file() {
        let (paths, _temp) = setup();
        fs::write(paths.expense_file(), ONE_ROW).unwrap();
        let bogus = paths.backup_dir().join("bogus.csv");
        fs::write(&bogus, "name,value\nx,1\n").unwrap();

        let manager = RestoreManager::new(paths.clone());
        assert!(!manager.validate_backup(&bogus).unwrap().is_valid);
        assert!(manager.restore_from_file(&bogus).is_err());
        assert_eq!(fs::read_to_string(paths.expense_file()).unwrap(), ONE_ROW);
    }

    #[test]
    fn test_validation_counts_rows() {
        let (paths, _temp) = setup();
        let file = paths.backup_dir().join("expenses_backup_20240301_000000.csv");
        fs::write(
            &file,
            "Date,Category,Description,Amount\n2024-03-01,A,x,1\n2024-03-02,B,y,oops\n",
        )
        .unwrap();

        let validation = RestoreManager::new(paths).validate_backup(&file).unwrap();
        assert!(validation.is_valid);
        assert_eq!(validation.record_count, 1);
        assert_eq!(validation.unreadable_rows, 1);
    }
}
