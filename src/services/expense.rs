//! Expense service
//!
//! Entry-side business logic: validating and recording new expenses, the
//! quick food shortcut, and the follow-up hints shown after saving.

use chrono::NaiveDate;
use tracing::debug;

use crate::config::Settings;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Category, ExpenseRecord, Money};
use crate::storage::Storage;

/// Description used by the quick food entry when none is given
pub const QUICK_FOOD_DESCRIPTION: &str = "Food";

/// A saved expense and the hints that apply to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddedExpense {
    /// The record as written to the data file
    pub record: ExpenseRecord,
    /// The category is one the user is trying to spend less on
    pub on_watchlist: bool,
    /// A quick food entry above the pricey-meal threshold
    pub pricey: bool,
}

/// Service for recording expenses
pub struct ExpenseService<'a> {
    storage: &'a Storage,
    settings: &'a Settings,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        Self { storage, settings }
    }

    /// Record an expense
    ///
    /// The amount must be positive. An empty description is stored as
    /// "No description".
    pub fn add(
        &self,
        date: NaiveDate,
        category: Category,
        description: &str,
        amount: Money,
    ) -> ExpenseResult<AddedExpense> {
        if !amount.is_positive() {
            return Err(ExpenseError::Validation(format!(
                "Amount must be positive, got {}",
                amount
            )));
        }

        let record = ExpenseRecord::new(date, category, description, amount);
        self.storage.expenses.append(&record)?;

        let on_watchlist = self.settings.is_watchlisted(&record.category);
        debug!(category = %record.category, on_watchlist, "expense recorded");

        Ok(AddedExpense {
            record,
            on_watchlist,
            pricey: false,
        })
    }

    /// Record a food expense dated `today`
    pub fn quick_food(
        &self,
        today: NaiveDate,
        description: &str,
        amount: Money,
    ) -> ExpenseResult<AddedExpense> {
        let description = match description.trim() {
            "" => QUICK_FOOD_DESCRIPTION,
            given => given,
        };

        let mut added = self.add(today, Category::Food, description, amount)?;
        added.pricey = amount > self.settings.pricey_meal_threshold;
        Ok(added)
    }
}
