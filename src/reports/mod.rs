//! Reports module for the expense logger
//!
//! Provides per-category statistics, month and category filters, and the
//! monthly budget report.

pub mod category_stats;
pub mod filter;
pub mod monthly;

pub use category_stats::{CategoryBreakdown, CategoryStats, CategorySummary};
pub use filter::{filter_by_category, sort_newest_first, FilteredExpenses, MonthWindow};
pub use monthly::{MonthlyReport, MonthlyReportRow, OverspendAlert};
