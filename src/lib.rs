//! expense-cli - Personal command-line expense logger
//!
//! Records dated, categorized expenses in a plain CSV file and reports on
//! them: listings, all-time category statistics, a monthly report against
//! budget goals with an overspend alert for food, a tax export of business
//! expenses, and timestamped backups.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Money, categories and expense records
//! - `storage`: The CSV data file
//! - `reports`: Category statistics, filters and the monthly report
//! - `services`: Entry-side business logic
//! - `export`: Tax export
//! - `backup`: Backup and restore
//! - `display`: Terminal formatting
//! - `cli`: Subcommand handlers
//! - `interactive`: The numbered console menu
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_cli::config::{ExpensePaths, Settings};
//! use expense_cli::reports::{MonthWindow, MonthlyReport};
//! use expense_cli::storage::Storage;
//!
//! let paths = ExpensePaths::resolve(None)?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(paths);
//!
//! let records = storage.expenses.load_records()?;
//! let report = MonthlyReport::generate(&records, MonthWindow::parse("03-2024")?, &settings);
//! println!("{}", report.format_terminal(&settings.currency_symbol));
//! ```

pub mod backup;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod interactive;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::ExpenseError;
