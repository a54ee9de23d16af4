//! Business logic layer for the expense logger
//!
//! Services sit between the command handlers and storage, applying the
//! validation and settings-driven rules.

pub mod expense;

pub use expense::{AddedExpense, ExpenseService, QUICK_FOOD_DESCRIPTION};
