//! Configuration module for the expense logger
//!
//! This module provides configuration management including:
//! - Path resolution for the data file, backups and exports
//! - User settings persistence (budget goals, watchlists)

pub mod paths;
pub mod settings;

pub use paths::ExpensePaths;
pub use settings::Settings;
