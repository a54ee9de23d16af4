//! Expense CLI commands
//!
//! Adding expenses, the quick food shortcut, listings and all-time
//! statistics.

use std::io::Write;

use chrono::NaiveDate;
use clap::Args;

use crate::config::Settings;
use crate::display::{format_added, format_category_stats, format_expense_list, format_hints};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Category, EntryDate, Money};
use crate::reports::{filter_by_category, sort_newest_first, CategoryBreakdown, MonthWindow};
use crate::services::{AddedExpense, ExpenseService};
use crate::storage::Storage;

pub(crate) const NO_EXPENSES_YET: &str = "No expenses recorded yet. Start by adding one!";
pub(crate) const DATE_FALLBACK_WARNING: &str =
    "⚠️  Date format should be YYYY-MM-DD. Using today's date.";

/// Arguments for `add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Amount spent (e.g. 12.50 or $12.50)
    #[arg(allow_hyphen_values = true)]
    pub amount: String,

    /// Category
    #[arg(short, long, value_enum)]
    pub category: Category,

    /// What it was for
    #[arg(short, long)]
    pub description: Option<String>,

    /// Date (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub date: Option<String>,
}

/// Arguments for `quick-food`
#[derive(Args, Debug)]
pub struct QuickFoodArgs {
    /// Amount spent
    #[arg(allow_hyphen_values = true)]
    pub amount: String,

    /// What you ate
    #[arg(short, long)]
    pub description: Option<String>,
}

/// Arguments for `list`
#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Only show this category
    #[arg(short, long, value_enum)]
    pub category: Option<Category>,

    /// Only show this month (MM-YYYY)
    #[arg(short, long)]
    pub month: Option<MonthWindow>,
}

/// Parse an amount given on the command line
pub fn parse_amount_arg(input: &str) -> ExpenseResult<Money> {
    Money::parse_amount_input(input).map_err(|e| ExpenseError::Validation(e.to_string()))
}

/// Handle `add`
pub fn handle_add<W: Write>(
    storage: &Storage,
    settings: &Settings,
    args: AddArgs,
    today: NaiveDate,
    out: &mut W,
) -> ExpenseResult<()> {
    let amount = parse_amount_arg(&args.amount)?;

    let entry_date = EntryDate::parse(args.date.as_deref().unwrap_or(""), today);
    if entry_date.is_fallback() {
        writeln!(out, "{}", DATE_FALLBACK_WARNING)?;
    }

    let added = ExpenseService::new(storage, settings).add(
        entry_date.date(),
        args.category,
        args.description.as_deref().unwrap_or(""),
        amount,
    )?;

    print_added(&added, settings, out)
}

/// Handle `quick-food`
pub fn handle_quick_food<W: Write>(
    storage: &Storage,
    settings: &Settings,
    args: QuickFoodArgs,
    today: NaiveDate,
    out: &mut W,
) -> ExpenseResult<()> {
    let amount = parse_amount_arg(&args.amount)?;
    let added = ExpenseService::new(storage, settings).quick_food(
        today,
        args.description.as_deref().unwrap_or(""),
        amount,
    )?;

    print_added(&added, settings, out)
}

/// Print the confirmation and any reminders for a saved expense
pub fn print_added<W: Write>(
    added: &AddedExpense,
    settings: &Settings,
    out: &mut W,
) -> ExpenseResult<()> {
    writeln!(out, "{}", format_added(&added.record, &settings.currency_symbol))?;
    for hint in format_hints(added) {
        writeln!(out, "{}", hint)?;
    }
    Ok(())
}

/// Handle `list`
pub fn handle_list<W: Write>(
    storage: &Storage,
    settings: &Settings,
    args: ListArgs,
    out: &mut W,
) -> ExpenseResult<()> {
    show_expenses(storage, settings, args.category, args.month, out)
}

/// Print records, optionally narrowed to a category and a month, newest first
pub fn show_expenses<W: Write>(
    storage: &Storage,
    settings: &Settings,
    category: Option<Category>,
    month: Option<MonthWindow>,
    out: &mut W,
) -> ExpenseResult<()> {
    let records = storage.expenses.load_records()?;
    if records.is_empty() {
        writeln!(out, "{}", NO_EXPENSES_YET)?;
        return Ok(());
    }

    let mut selected = match category {
        Some(category) => filter_by_category(&records, category.label()),
        None => records.iter().collect(),
    };

    let mut skipped = 0;
    if let Some(window) = month {
        let filtered = window.filter(selected);
        skipped = filtered.skipped;
        selected = filtered.records;
    }

    sort_newest_first(&mut selected);
    write!(
        out,
        "{}",
        format_expense_list(&selected, &settings.currency_symbol)
    )?;

    if skipped > 0 {
        writeln!(
            out,
            "⚠️  Skipped {} record(s) with an unreadable date.",
            skipped
        )?;
    }
    Ok(())
}

/// Handle `stats`
pub fn show_stats<W: Write>(
    storage: &Storage,
    settings: &Settings,
    out: &mut W,
) -> ExpenseResult<()> {
    let records = storage.expenses.load_records()?;
    if records.is_empty() {
        writeln!(out, "{}", NO_EXPENSES_YET)?;
        return Ok(());
    }

    let breakdown = CategoryBreakdown::from_records(&records);
    write!(
        out,
        "{}",
        format_category_stats(&breakdown, &settings.currency_symbol)
    )?;
    Ok(())
}
