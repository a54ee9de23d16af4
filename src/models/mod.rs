//! Core data models for the expense logger
//!
//! This module contains the data structures that represent the expense
//! domain: money amounts, categories and expense records.

pub mod category;
pub mod expense;
pub mod money;

pub use category::Category;
pub use expense::{EntryDate, ExpenseRecord, DATE_FORMAT, DEFAULT_DESCRIPTION};
pub use money::{AmountInputError, Money, MoneyParseError};
