//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer. Handlers write
//! to any `io::Write` so the interactive menu can reuse them.

pub mod backup;
pub mod config;
pub mod expense;
pub mod export;
pub mod report;

pub use backup::{create_backup, handle_backup_command, BackupCommands};
pub use config::show_config;
pub use expense::{
    handle_add, handle_list, handle_quick_food, parse_amount_arg, print_added, show_expenses,
    show_stats, AddArgs, ListArgs, QuickFoodArgs,
};
pub use export::{handle_export_tax, ExportTaxArgs};
pub use report::{handle_report, show_report, ReportArgs};
