//! Backup CLI commands
//!
//! Implements CLI commands for backup management.

use std::io::Write;
use std::path::PathBuf;

use clap::Subcommand;

use crate::backup::{BackupManager, RestoreManager};
use crate::config::paths::ExpensePaths;
use crate::error::{ExpenseError, ExpenseResult};

/// Backup subcommands
#[derive(Subcommand, Debug)]
pub enum BackupCommands {
    /// Create a new backup
    Create,

    /// List all available backups
    List {
        /// Show detailed information
        #[arg(short, long)]
        detailed: bool,
    },

    /// Restore from a backup
    Restore {
        /// Backup filename or path (use 'latest' for most recent)
        backup: String,

        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle a backup command
pub fn handle_backup_command<W: Write>(
    paths: &ExpensePaths,
    cmd: BackupCommands,
    out: &mut W,
) -> ExpenseResult<()> {
    let manager = BackupManager::new(paths);

    match cmd {
        BackupCommands::Create => {
            create_backup(&manager, out)?;
        }

        BackupCommands::List { detailed } => {
            let backups = manager.list_backups()?;

            if backups.is_empty() {
                writeln!(out, "No backups found.")?;
                writeln!(out, "Create one with: expenses backup create")?;
                return Ok(());
            }

            writeln!(out, "Available Backups")?;
            writeln!(out, "=================")?;
            writeln!(out)?;

            for (i, backup) in backups.iter().enumerate() {
                if detailed {
                    writeln!(
                        out,
                        "{}. {}\n   Created: {}\n   Size: {}\n   Path: {}\n",
                        i + 1,
                        backup.filename,
                        backup.created_at.format("%Y-%m-%d %H:%M:%S"),
                        format_size(backup.size_bytes),
                        backup.path.display(),
                    )?;
                } else {
                    writeln!(
                        out,
                        "  {}. {} ({})",
                        i + 1,
                        backup.filename,
                        format_size(backup.size_bytes),
                    )?;
                }
            }

            writeln!(out)?;
            writeln!(out, "Total: {} backup(s)", backups.len())?;
        }

        BackupCommands::Restore { backup, force } => {
            let backup_path = resolve_backup_path(&manager, paths, &backup)?;

            let restore_manager = RestoreManager::new(paths.clone());
            let validation = restore_manager.validate_backup(&backup_path)?;

            writeln!(out, "Backup Information")?;
            writeln!(out, "==================")?;
            writeln!(out, "File: {}", backup_path.display())?;
            if !validation.is_valid {
                writeln!(out, "Status: not an expense file")?;
                return Err(ExpenseError::Backup(format!(
                    "{} cannot be restored",
                    backup_path.display()
                )));
            }
            writeln!(out, "Expenses: {}", validation.record_count)?;
            if validation.unreadable_rows > 0 {
                writeln!(out, "Unreadable rows: {}", validation.unreadable_rows)?;
            }
            writeln!(out)?;

            if !force {
                writeln!(out, "WARNING: This will overwrite ALL current expenses!")?;
                writeln!(out, "To proceed, run again with --force flag:")?;
                writeln!(out, "  expenses backup restore {} --force", backup)?;
                return Ok(());
            }

            if paths.expense_file().exists() {
                writeln!(out, "Creating backup of current data before restore...")?;
                let pre_restore = manager.create_backup()?;
                writeln!(out, "Pre-restore backup saved: {}", pre_restore.display())?;
                writeln!(out)?;
            }

            let result = restore_manager.restore_from_file(&backup_path)?;
            writeln!(out, "Restore complete!")?;
            writeln!(out, "{}", result.summary())?;
        }
    }

    Ok(())
}

/// Back up the data file, reporting a missing file instead of failing
///
/// Returns the backup path when one was written.
pub fn create_backup<W: Write>(
    manager: &BackupManager,
    out: &mut W,
) -> ExpenseResult<Option<PathBuf>> {
    match manager.create_backup() {
        Ok(path) => {
            writeln!(out, "✓ Backup created: {}", path.display())?;
            Ok(Some(path))
        }
        Err(e) if e.is_not_found() => {
            writeln!(out, "No expense file found to backup")?;
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Resolve a backup identifier to a full path
fn resolve_backup_path(
    manager: &BackupManager,
    paths: &ExpensePaths,
    backup: &str,
) -> ExpenseResult<PathBuf> {
    if backup.eq_ignore_ascii_case("latest") {
        return manager
            .get_latest_backup()?
            .map(|b| b.path)
            .ok_or_else(|| ExpenseError::backup_not_found("latest"));
    }

    // Full path
    let path = PathBuf::from(backup);
    if path.exists() {
        return Ok(path);
    }

    // Filename in the backup directory
    let backup_path = paths.backup_dir().join(backup);
    if backup_path.exists() {
        return Ok(backup_path);
    }

    let with_ext = paths.backup_dir().join(format!("{}.csv", backup));
    if with_ext.exists() {
        return Ok(with_ext);
    }

    Err(ExpenseError::backup_not_found(backup))
}

/// Format a file size in human-readable form
fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
