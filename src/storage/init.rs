//! Storage initialization
//!
//! Handles first-run setup: the backup directory and an empty data file.

use crate::config::paths::ExpensePaths;
use crate::error::{ExpenseError, ExpenseResult};

use super::expenses::ExpenseRepository;

/// What first-run setup had to create
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InitOutcome {
    /// The backup directory did not exist and was created
    pub created_backup_dir: bool,
    /// The data file did not exist and was created with a header row
    pub created_data_file: bool,
}

/// Make sure the backup directory and data file exist
pub fn initialize_storage(paths: &ExpensePaths) -> ExpenseResult<InitOutcome> {
    let backup_dir = paths.backup_dir();
    let created_backup_dir = !backup_dir.exists();

    paths.ensure_directories().map_err(|e| {
        ExpenseError::Storage(format!("Failed to prepare {}: {}", paths.base_dir().display(), e))
    })?;

    let created_data_file = ExpenseRepository::new(paths.expense_file()).ensure_file()?;

    Ok(InitOutcome {
        created_backup_dir,
        created_data_file,
    })
}
