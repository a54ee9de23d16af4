//! Backup manager for the expense logger
//!
//! A backup is a whole-file copy of the data file named after the moment it
//! was taken: `expenses_backup_YYYYMMDD_HHMMSS.csv`. A second backup within
//! the same second gets a `_N` suffix (`expenses_backup_YYYYMMDD_HHMMSS_1.csv`)
//! so an existing backup is never overwritten. The copy is not atomic; a crash
//! mid-copy can leave a partial backup behind.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use tracing::{debug, info};

use crate::config::paths::ExpensePaths;
use crate::error::{ExpenseError, ExpenseResult};

const BACKUP_PREFIX: &str = "expenses_backup_";
const BACKUP_SUFFIX: &str = ".csv";
const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Metadata about a backup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupInfo {
    /// Backup filename
    pub filename: String,
    /// Full path to backup
    pub path: PathBuf,
    /// When the backup was taken (local time)
    pub created_at: NaiveDateTime,
    /// Position among backups taken within the same second (0 for the first)
    pub sequence: u32,
    /// Size in bytes
    pub size_bytes: u64,
}

/// Creates and finds backups of the data file
pub struct BackupManager {
    /// Path to backup directory
    backup_dir: PathBuf,
    /// The file being backed up
    data_file: PathBuf,
}

impl BackupManager {
    /// Create a new BackupManager
    pub fn new(paths: &ExpensePaths) -> Self {
        Self {
            backup_dir: paths.backup_dir(),
            data_file: paths.expense_file(),
        }
    }

    /// Back up the data file, stamped with the current local time
    ///
    /// Returns the path to the created backup file.
    pub fn create_backup(&self) -> ExpenseResult<PathBuf> {
        self.create_backup_at(Local::now().naive_local())
    }

    /// Back up the data file with an explicit timestamp
    pub fn create_backup_at(&self, timestamp: NaiveDateTime) -> ExpenseResult<PathBuf> {
        if !self.data_file.exists() {
            return Err(ExpenseError::NotFound {
                entity_type: "Expense file",
                identifier: self.data_file.display().to_string(),
            });
        }

        fs::create_dir_all(&self.backup_dir).map_err(|e| {
            ExpenseError::Backup(format!("Failed to create backup directory: {}", e))
        })?;

        let backup_path = self.free_backup_path(timestamp);
        let bytes = fs::copy(&self.data_file, &backup_path)
            .map_err(|e| ExpenseError::Backup(format!("Failed to write backup file: {}", e)))?;

        info!(path = %backup_path.display(), bytes, "backup created");
        Ok(backup_path)
    }

    /// List all available backups, newest first
    pub fn list_backups(&self) -> ExpenseResult<Vec<BackupInfo>> {
        if !self.backup_dir.exists() {
            return Ok(Vec::new());
        }

        let mut backups = Vec::new();

        for entry in fs::read_dir(&self.backup_dir).map_err(|e| {
            ExpenseError::Backup(format!("Failed to read backup directory: {}", e))
        })? {
            let entry = entry.map_err(|e| {
                ExpenseError::Backup(format!("Failed to read directory entry: {}", e))
            })?;

            match parse_backup_info(&entry.path()) {
                Some(info) => backups.push(info),
                None => debug!(path = %entry.path().display(), "ignoring non-backup file"),
            }
        }

        backups.sort_by(|a, b| {
            (b.created_at, b.sequence).cmp(&(a.created_at, a.sequence))
        });

        Ok(backups)
    }

    /// Get backup directory path
    pub fn backup_dir(&self) -> &Path {
        &self.backup_dir
    }

    /// First unused backup path for `timestamp`
    fn free_backup_path(&self, timestamp: NaiveDateTime) -> PathBuf {
        let base = self.backup_dir.join(backup_filename(timestamp));
        if !base.exists() {
            return base;
        }

        let stamp = timestamp.format(TIMESTAMP_FORMAT);
        (1u32..)
            .map(|n| {
                self.backup_dir
                    .join(format!("{}{}_{}{}", BACKUP_PREFIX, stamp, n, BACKUP_SUFFIX))
            })
            .find(|path| !path.exists())
            .unwrap_or(base)
    }

    /// Get the most recent backup
    pub fn get_latest_backup(&self) -> ExpenseResult<Option<BackupInfo>> {
        let backups = self.list_backups()?;
        Ok(backups.into_iter().next())
    }
}

/// File name for a backup taken at `timestamp`
pub fn backup_filename(timestamp: NaiveDateTime) -> String {
    format!(
        "{}{}{}",
        BACKUP_PREFIX,
        timestamp.format(TIMESTAMP_FORMAT),
        BACKUP_SUFFIX
    )
}

/// Parse backup info from a backup file path
fn parse_backup_info(path: &Path) -> Option<BackupInfo> {
    let filename = path.file_name()?.to_string_lossy().to_string();
    let (created_at, sequence) = parse_backup_timestamp(&filename)?;
    let size_bytes = fs::metadata(path).ok()?.len();

    Some(BackupInfo {
        filename,
        path: path.to_path_buf(),
        created_at,
        sequence,
        size_bytes,
    })
}

/// Parse the timestamp and same-second sequence embedded in a backup filename
fn parse_backup_timestamp(filename: &str) -> Option<(NaiveDateTime, u32)> {
    let stamp = filename
        .strip_prefix(BACKUP_PREFIX)?
        .strip_suffix(BACKUP_SUFFIX)?;

    // YYYYMMDD_HHMMSS is 15 characters; anything after is `_N`
    let (stamp, sequence) = match stamp.get(15..) {
        Some("") => (stamp, 0),
        Some(rest) => {
            let n = rest.strip_prefix('_')?;
            if n.is_empty() || !n.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            (&stamp[..15], n.parse().ok()?)
        }
        None => return None,
    };

    let created_at = NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT).ok()?;
    Some((created_at, sequence))
}
