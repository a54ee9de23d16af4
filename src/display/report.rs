//! Report formatting utilities for terminal output
//!
//! Provides the category statistics table and small formatting helpers shared
//! by the report views.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Money;
use crate::reports::CategoryBreakdown;

/// Format a percentage with one decimal place
pub fn format_percentage(pct: f64) -> String {
    format!("{:.1}%", pct)
}

/// Marker for a budget check
pub fn status_icon(within_budget: bool) -> &'static str {
    if within_budget {
        "✅"
    } else {
        "❌"
    }
}

/// Format a double separator line
pub fn double_separator(width: usize) -> String {
    "=".repeat(width)
}

#[derive(Tabled)]
struct StatsRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Total")]
    total: String,
    #[tabled(rename = "Transactions")]
    count: usize,
    #[tabled(rename = "Avg/Transaction")]
    average: String,
    #[tabled(rename = "Percentage")]
    percentage: String,
}

/// Format all-time category statistics with an overall total
pub fn format_category_stats(breakdown: &CategoryBreakdown, symbol: &str) -> String {
    let rows = breakdown.categories.iter().map(|summary| StatsRow {
        category: summary.category.clone(),
        total: summary.stats.total.format_with_symbol(symbol),
        count: summary.stats.count,
        average: summary.stats.average.format_with_symbol(symbol),
        percentage: format_percentage(summary.stats.percentage),
    });

    let mut table = Table::new(rows);
    table.with(Style::psql());

    let mut output = String::new();
    output.push_str("📈 Spending Statistics (All Time)\n");
    output.push_str(&double_separator(50));
    output.push('\n');
    output.push_str(&table.to_string());
    output.push_str(&format!(
        "\n\nOverall Total: {}\n",
        breakdown.grand_total.format_with_symbol(symbol)
    ));
    output
}

/// Format a labelled money line, e.g. `💵 Total Spending: $50.00`
pub fn money_line(label: &str, amount: Money, symbol: &str) -> String {
    format!("{}: {}", label, amount.format_with_symbol(symbol))
}
