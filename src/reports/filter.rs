//! Record filters for views and reports
//!
//! Month filtering compares the stored date text field by field, so a record
//! whose date is damaged never matches and is counted as skipped instead of
//! aborting the whole view.

use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;

use crate::error::ExpenseError;
use crate::models::ExpenseRecord;

/// A calendar month of a particular year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthWindow {
    month: u32,
    year: i32,
}

impl MonthWindow {
    /// Create a window, validating the month and a four-digit year
    pub fn new(month: u32, year: i32) -> Result<Self, ExpenseError> {
        if !(1..=12).contains(&month) {
            return Err(ExpenseError::Validation(format!(
                "Month must be between 1 and 12, got {}",
                month
            )));
        }
        if !(1000..=9999).contains(&year) {
            return Err(ExpenseError::Validation(format!(
                "Year must have four digits, got {}",
                year
            )));
        }
        Ok(Self { month, year })
    }

    /// Parse `MM-YYYY` (a single-digit month is accepted)
    pub fn parse(s: &str) -> Result<Self, ExpenseError> {
        let invalid = || {
            ExpenseError::Validation(format!(
                "Invalid month '{}'. Use MM-YYYY (e.g., 08-2023)",
                s.trim()
            ))
        };

        let (month, year) = s.trim().split_once('-').ok_or_else(invalid)?;
        let digits = |t: &str| !t.is_empty() && t.bytes().all(|b| b.is_ascii_digit());
        if !digits(month) || month.len() > 2 || !digits(year) || year.len() != 4 {
            return Err(invalid());
        }

        let month: u32 = month.parse().map_err(|_| invalid())?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        Self::new(month, year).map_err(|_| invalid())
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Whether a record's stored date falls in this month
    ///
    /// `None` means the stored date is malformed.
    pub fn matches(&self, record: &ExpenseRecord) -> Option<bool> {
        let (year, month, _day) = record.date_fields()?;
        Some(year == format!("{:04}", self.year) && month == format!("{:02}", self.month))
    }

    /// Keep the records dated in this month
    pub fn filter<'a, I>(&self, records: I) -> FilteredExpenses<'a>
    where
        I: IntoIterator<Item = &'a ExpenseRecord>,
    {
        let mut filtered = FilteredExpenses::default();
        for record in records {
            match self.matches(record) {
                Some(true) => filtered.records.push(record),
                Some(false) => {}
                None => filtered.skipped += 1,
            }
        }
        filtered
    }
}

impl fmt::Display for MonthWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:04}", self.month, self.year)
    }
}

impl FromStr for MonthWindow {
    type Err = ExpenseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Result of a date-window filter
#[derive(Debug, Clone, Default)]
pub struct FilteredExpenses<'a> {
    /// Matching records, in input order
    pub records: Vec<&'a ExpenseRecord>,
    /// Records whose date could not be read
    pub skipped: usize,
}

impl<'a> FilteredExpenses<'a> {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Keep the records with exactly this category label
pub fn filter_by_category<'a, I>(records: I, label: &str) -> Vec<&'a ExpenseRecord>
where
    I: IntoIterator<Item = &'a ExpenseRecord>,
{
    records
        .into_iter()
        .filter(|record| record.category == label)
        .collect()
}

/// Sort newest first; records with an unreadable date go last
pub fn sort_newest_first(records: &mut [&ExpenseRecord]) {
    records.sort_by_key(|record| match record.parsed_date() {
        Some(date) => (0, Reverse(Some(date))),
        None => (1, Reverse(None)),
    });
}
