//! Backup system for the expense logger
//!
//! Provides timestamped whole-file copies of the data file and restore
//! functionality.
//!
//! # Architecture
//!
//! - `BackupManager`: creates, lists and finds backups
//! - `RestoreManager`: validates and restores backups
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_cli::backup::{BackupManager, RestoreManager};
//! use expense_cli::config::ExpensePaths;
//!
//! let paths = ExpensePaths::resolve(None)?;
//! let backup_path = BackupManager::new(&paths).create_backup()?;
//!
//! // Later, restore from backup
//! let result = RestoreManager::new(paths).restore_from_file(&backup_path)?;
//! println!("{}", result.summary());
//! ```

mod manager;
mod restore;

pub use manager::{backup_filename, BackupInfo, BackupManager};
pub use restore::{RestoreManager, RestoreResult, ValidationResult};
