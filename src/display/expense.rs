//! Expense list display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{ExpenseRecord, Money};
use crate::services::AddedExpense;

#[derive(Tabled)]
struct ExpenseRow<'a> {
    #[tabled(rename = "Date")]
    date: &'a str,
    #[tabled(rename = "Category")]
    category: &'a str,
    #[tabled(rename = "Description")]
    description: &'a str,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format records as a grid with a total line underneath
pub fn format_expense_list(records: &[&ExpenseRecord], symbol: &str) -> String {
    if records.is_empty() {
        return "No expenses match your criteria.\n".to_string();
    }

    let rows = records.iter().map(|record| ExpenseRow {
        date: &record.date,
        category: &record.category,
        description: &record.description,
        amount: record.amount.format_with_symbol(symbol),
    });

    let mut table = Table::new(rows);
    table.with(Style::ascii());

    let total: Money = records.iter().map(|r| r.amount).sum();
    format!(
        "{}\n\n💰 Total: {}\n",
        table,
        total.format_with_symbol(symbol)
    )
}

/// One-line confirmation after an expense is saved
pub fn format_added(record: &ExpenseRecord, symbol: &str) -> String {
    format!(
        "✓ Expense added: {} {} ({}) on {}",
        record.amount.format_with_symbol(symbol),
        record.category,
        record.description,
        record.date
    )
}

/// Reminders that follow a saved expense, one per line
pub fn format_hints(added: &AddedExpense) -> Vec<String> {
    let mut hints = Vec::new();
    if added.on_watchlist {
        hints.push(format!(
            "💡 Remember: You're trying to spend less on {}!",
            added.record.category
        ));
    }
    if added.pricey {
        hints.push("💡 That's a bit pricey! Maybe cook at home next time?".to_string());
    }
    hints
}
