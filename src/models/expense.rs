//! Expense record model
//!
//! An expense is a dated, categorized amount with a free-text description.
//! The date is kept exactly as stored so that rows with a damaged date can
//! still be listed and simply skipped by date-based filters.

use chrono::NaiveDate;
use std::fmt;

use super::category::Category;
use super::money::Money;

/// Description used when none is entered
pub const DEFAULT_DESCRIPTION: &str = "No description";

/// Storage format for dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single recorded expense
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseRecord {
    /// Date text, normally `YYYY-MM-DD`
    pub date: String,
    /// Category label
    pub category: String,
    /// What the money was spent on
    pub description: String,
    /// Amount spent
    pub amount: Money,
}

impl ExpenseRecord {
    /// Create a record for a new entry
    ///
    /// An empty or whitespace-only description is replaced by
    /// [`DEFAULT_DESCRIPTION`].
    pub fn new(date: NaiveDate, category: Category, description: &str, amount: Money) -> Self {
        Self::with_label(date, category.label(), description, amount)
    }

    /// Create a record with an arbitrary category label
    pub fn with_label(
        date: NaiveDate,
        category: impl Into<String>,
        description: &str,
        amount: Money,
    ) -> Self {
        let description = description.trim();
        Self {
            date: date.format(DATE_FORMAT).to_string(),
            category: category.into(),
            description: if description.is_empty() {
                DEFAULT_DESCRIPTION.to_string()
            } else {
                description.to_string()
            },
            amount,
        }
    }

    /// Split the stored date into its year, month and day fields
    ///
    /// Returns `None` unless there are exactly three non-empty, all-digit
    /// fields.
    pub fn date_fields(&self) -> Option<(&str, &str, &str)> {
        let mut fields = self.date.split('-');
        let year = fields.next()?;
        let month = fields.next()?;
        let day = fields.next()?;
        if fields.next().is_some() {
            return None;
        }

        let numeric = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
        if numeric(year) && numeric(month) && numeric(day) {
            Some((year, month, day))
        } else {
            None
        }
    }

    /// The stored date as a calendar date, if it is valid
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, DATE_FORMAT).ok()
    }

    /// Whether the record belongs to the given category
    pub fn is_in(&self, category: Category) -> bool {
        self.category == category.label()
    }
}

impl fmt::Display for ExpenseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date, self.category, self.description, self.amount
        )
    }
}

/// Outcome of interpreting a date typed in at entry time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryDate {
    /// The input was a valid `YYYY-MM-DD` date
    Given(NaiveDate),
    /// Nothing was entered; today's date is used
    Today(NaiveDate),
    /// The input could not be parsed; today's date is used instead
    Fallback(NaiveDate),
}

impl EntryDate {
    /// Interpret user input, never rejecting it
    pub fn parse(input: &str, today: NaiveDate) -> Self {
        let input = input.trim();
        if input.is_empty() {
            return Self::Today(today);
        }

        match NaiveDate::parse_from_str(input, DATE_FORMAT) {
            Ok(date) => Self::Given(date),
            Err(_) => Self::Fallback(today),
        }
    }

    /// The date to record
    pub fn date(&self) -> NaiveDate {
        match self {
            Self::Given(d) | Self::Today(d) | Self::Fallback(d) => *d,
        }
    }

    /// Whether the input was unusable and should be reported to the user
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}
