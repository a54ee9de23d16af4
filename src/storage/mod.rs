//! Storage layer for the expense logger
//!
//! A single append-only CSV data file, plus first-run initialization.

pub mod expenses;
pub mod init;

pub use expenses::{ExpenseRepository, LoadedExpenses, HEADER};
pub use init::{initialize_storage, InitOutcome};

use crate::config::paths::ExpensePaths;

/// Main storage coordinator
pub struct Storage {
    paths: ExpensePaths,
    pub expenses: ExpenseRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: ExpensePaths) -> Self {
        Self {
            expenses: ExpenseRepository::new(paths.expense_file()),
            paths,
        }
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &ExpensePaths {
        &self.paths
    }
}
