//! Display formatting for terminal output
//!
//! Tables for expense lists and category statistics, plus shared helpers.

pub mod expense;
pub mod report;
pub mod tips;

pub use expense::{format_added, format_expense_list, format_hints};
pub use report::{
    double_separator, format_category_stats, format_percentage, money_line, status_icon,
};
pub use tips::format_tips;
