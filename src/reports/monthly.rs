//! Monthly Report
//!
//! Spending for one calendar month, by category, checked against each
//! category's budget goal. Food & Dining spend is additionally checked against
//! the separate monthly food limit.

use std::io::Write;

use tabled::settings::Style;
use tabled::{Table, Tabled};
use tracing::debug;

use super::category_stats::CategoryBreakdown;
use super::filter::MonthWindow;
use crate::config::Settings;
use crate::display::report::{format_percentage, money_line, status_icon};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Category, ExpenseRecord, Money};

/// One category's line in the monthly report
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyReportRow {
    /// Category label
    pub category: String,
    /// Amount spent in the month
    pub spent: Money,
    /// Share of the month's total spending
    pub percentage: f64,
    /// Budget goal for the category
    pub goal: Money,
    /// `spent <= goal`
    pub within_budget: bool,
}

/// Food & Dining spend measured against the monthly food limit
#[derive(Debug, Clone, PartialEq)]
pub struct OverspendAlert {
    /// Food & Dining spend in the month
    pub food_spent: Money,
    /// The monthly food limit it was compared to
    pub limit: Money,
    /// `food_spent / limit` in percent
    pub percent_used: f64,
    /// Spend is above the whole limit, not just the warning threshold
    pub over_limit: bool,
}

impl OverspendAlert {
    /// Raise an alert when spend exceeds `warning_percent` of `limit`
    pub fn check(food_spent: Money, limit: Money, warning_percent: f64) -> Option<Self> {
        if !limit.is_positive() {
            return None;
        }

        let percent_used = food_spent.percent_of(limit);
        if percent_used <= warning_percent {
            return None;
        }

        Some(Self {
            food_spent,
            limit,
            percent_used,
            over_limit: percent_used > 100.0,
        })
    }

    /// Alert text for the terminal
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = format!(
            "🚨 HEADS UP: You've spent {} on food already!\n   That's {:.1}% of your {} monthly limit!\n",
            self.food_spent.format_with_symbol(symbol),
            self.percent_used,
            self.limit.format_with_symbol(symbol),
        );
        if self.over_limit {
            output.push_str("   💀 Yikes - you're over budget!\n");
        }
        output.push_str("\n💡 Tip: Try meal prepping to save on food costs!\n");
        output
    }
}

/// Spending report for a single month
#[derive(Debug, Clone)]
pub struct MonthlyReport {
    /// The month covered
    pub window: MonthWindow,
    /// Categories, highest spend first
    pub rows: Vec<MonthlyReportRow>,
    /// Total spending in the month
    pub total: Money,
    /// Records left out because their stored date could not be read
    pub skipped_records: usize,
    /// Present when Food & Dining spend crossed the warning threshold
    pub overspend: Option<OverspendAlert>,
}

impl MonthlyReport {
    /// Generate the report for `window` from the full record set
    pub fn generate<'a, I>(records: I, window: MonthWindow, settings: &Settings) -> Self
    where
        I: IntoIterator<Item = &'a ExpenseRecord>,
    {
        let filtered = window.filter(records);
        debug!(
            month = %window,
            matched = filtered.records.len(),
            skipped = filtered.skipped,
            "generating monthly report"
        );

        let breakdown = CategoryBreakdown::from_records(filtered.records.iter().copied());

        let mut rows: Vec<MonthlyReportRow> = breakdown
            .categories
            .iter()
            .map(|summary| {
                let goal = settings.goal_for(&summary.category);
                MonthlyReportRow {
                    category: summary.category.clone(),
                    spent: summary.stats.total,
                    percentage: summary.stats.percentage,
                    goal,
                    within_budget: summary.stats.total <= goal,
                }
            })
            .collect();

        // Stable: equal totals keep first-seen order
        rows.sort_by(|a, b| b.spent.cmp(&a.spent));

        let overspend = OverspendAlert::check(
            breakdown.total_for(Category::Food.label()),
            settings.monthly_food_limit,
            settings.overspend_warning_percent,
        );

        Self {
            window,
            rows,
            total: breakdown.grand_total,
            skipped_records: filtered.skipped,
            overspend,
        }
    }

    /// Whether nothing was spent in the month
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The category with the highest spend
    pub fn highest(&self) -> Option<&MonthlyReportRow> {
        self.rows.first()
    }

    /// The category with the lowest spend, only when there is more than one
    pub fn lowest(&self) -> Option<&MonthlyReportRow> {
        if self.rows.len() > 1 {
            self.rows.last()
        } else {
            None
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        if self.is_empty() {
            let mut output = format!("No expenses recorded for {}.\n", self.window);
            output.push_str(&self.skipped_note());
            return output;
        }

        #[derive(Tabled)]
        struct Row {
            #[tabled(rename = "Category")]
            category: String,
            #[tabled(rename = "Amount")]
            amount: String,
            #[tabled(rename = "Percentage")]
            percentage: String,
            #[tabled(rename = "Budget Goal")]
            goal: String,
            #[tabled(rename = "Status")]
            status: &'static str,
        }

        let mut table = Table::new(self.rows.iter().map(|row| Row {
            category: row.category.clone(),
            amount: row.spent.format_with_symbol(symbol),
            percentage: format_percentage(row.percentage),
            goal: row.goal.format_with_symbol(symbol),
            status: status_icon(row.within_budget),
        }));
        table.with(Style::ascii());

        let mut output = format!("📊 Monthly Report for {}\n", self.window);
        output.push_str(&table.to_string());
        output.push_str("\n\n");
        output.push_str(&money_line("💵 Total Spending", self.total, symbol));
        output.push('\n');

        if let Some(top) = self.highest() {
            output.push_str(&format!(
                "📈 Highest Spending: {} ({})\n",
                top.category,
                top.spent.format_with_symbol(symbol)
            ));
        }
        if let Some(bottom) = self.lowest() {
            output.push_str(&format!(
                "📉 Lowest Spending: {} ({})\n",
                bottom.category,
                bottom.spent.format_with_symbol(symbol)
            ));
        }

        output.push_str(&self.skipped_note());

        if let Some(alert) = &self.overspend {
            output.push('\n');
            output.push_str(&alert.format_terminal(symbol));
        }

        output
    }

    fn skipped_note(&self) -> String {
        if self.skipped_records == 0 {
            String::new()
        } else {
            format!(
                "⚠️  Skipped {} record(s) with an unreadable date.\n",
                self.skipped_records
            )
        }
    }

    /// Export the report rows to CSV
    pub fn export_csv<W: Write>(&self, writer: W) -> ExpenseResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        let export_err = |e: csv::Error| ExpenseError::Export(e.to_string());

        csv_writer
            .write_record([
                "Month",
                "Category",
                "Amount",
                "Percentage",
                "Budget Goal",
                "Within Budget",
            ])
            .map_err(export_err)?;

        let month = self.window.to_string();
        for row in &self.rows {
            let spent = row.spent.to_decimal_string();
            let percentage = format!("{:.2}", row.percentage);
            let goal = row.goal.to_decimal_string();
            let within = if row.within_budget { "true" } else { "false" };
            csv_writer
                .write_record([
                    month.as_str(),
                    row.category.as_str(),
                    spent.as_str(),
                    percentage.as_str(),
                    goal.as_str(),
                    within,
                ])
                .map_err(export_err)?;
        }

        let total = self.total.to_decimal_string();
        let total_pct = if self.total.is_positive() { "100.00" } else { "0.00" };
        csv_writer
            .write_record([month.as_str(), "TOTAL", total.as_str(), total_pct, "", ""])
            .map_err(export_err)?;

        csv_writer
            .flush()
            .map_err(|e| ExpenseError::Export(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(date: (i32, u32, u32), category: Category, desc: &str, cents: i64) -> ExpenseRecord {
        ExpenseRecord::new(
            NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            category,
            desc,
            Money::from_cents(cents),
        )
    }

    fn scenario() -> Vec<ExpenseRecord> {
        vec![
            record((2024, 3, 1), Category::Food, "Lunch", 1250),
            record((2024, 3, 15), Category::Food, "Dinner", 2750),
            record((2024, 3, 10), Category::Transport, "Bus", 1000),
        ]
    }

    fn march() -> MonthWindow {
        MonthWindow::parse("03-2024").unwrap()
    }

    #[test]
    fn test_scenario_within_budget() {
        let report = MonthlyReport::generate(&scenario(), march(), &Settings::default());

        assert_eq!(report.rows.len(), 2);
        assert!(report.rows.iter().all(|r| r.within_budget));
        assert_eq!(report.rows[0].goal.cents(), 40000);
        assert_eq!(report.rows[1].goal.cents(), 20000);
        assert_eq!(report.highest().unwrap().category, Category::Food.label());
        assert_eq!(report.lowest().unwrap().category, Category::Transport.label());
        assert_eq!(report.total.cents(), 5000);
        assert!(report.overspend.is_none());
    }

    #[test]
    fn test_only_selected_month_counts() {
        let mut records = scenario();
        records.push(record((2024, 4, 1), Category::Shopping, "Shoes", 9000));
        records.push(record((2023, 3, 1), Category::Shopping, "Hat", 9000));

        let report = MonthlyReport::generate(&records, march(), &Settings::default());
        assert_eq!(report.total.cents(), 5000);
        assert!(report
            .rows
            .iter()
            .all(|r| r.category != Category::Shopping.label()));
    }

    #[test]
    fn test_over_goal_is_flagged() {
        let records = vec![
            record((2024, 3, 1), Category::Fun, "Concert", 15000),
            record((2024, 3, 2), Category::Bills, "Rent", 50000),
        ];
        let report = MonthlyReport::generate(&records, march(), &Settings::default());

        let fun = report
            .rows
            .iter()
            .find(|r| r.category == Category::Fun.label())
            .unwrap();
        assert!(!fun.within_budget);

        // Exactly on the goal still counts as within budget
        let bills = report
            .rows
            .iter()
            .find(|r| r.category == Category::Bills.label())
            .unwrap();
        assert!(bills.within_budget);
    }

    #[test]
    fn test_unknown_label_uses_default_goal() {
        let mut legacy = record((2024, 3, 1), Category::Misc, "Old", 16000);
        legacy.category = "Groceries".into();

        let report = MonthlyReport::generate(&[legacy], march(), &Settings::default());
        assert_eq!(report.rows[0].goal.cents(), 15000);
        assert!(!report.rows[0].within_budget);
    }

    #[test]
    fn test_sorted_descending_with_stable_ties() {
        let records = vec![
            record((2024, 3, 1), Category::Fun, "a", 500),
            record((2024, 3, 2), Category::Bills, "b", 9000),
            record((2024, 3, 3), Category::Misc, "c", 500),
            record((2024, 3, 4), Category::Shopping, "d", 700),
        ];
        let report = MonthlyReport::generate(&records, march(), &Settings::default());

        let order: Vec<_> = report.rows.iter().map(|r| r.category.as_str()).collect();
        assert_eq!(
            order,
            vec![
                Category::Bills.label(),
                Category::Shopping.label(),
                Category::Fun.label(),
                Category::Misc.label()
            ]
        );
    }

    #[test]
    fn test_single_category_has_no_lowest() {
        let records = vec![record((2024, 3, 1), Category::Food, "Lunch", 1000)];
        let report = MonthlyReport::generate(&records, march(), &Settings::default());

        assert!(report.highest().is_some());
        assert!(report.lowest().is_none());
    }

    #[test]
    fn test_empty_month() {
        let window = MonthWindow::parse("01-2020").unwrap();
        let report = MonthlyReport::generate(&scenario(), window, &Settings::default());
        assert!(report.is_empty());
        assert!(report.highest().is_none());
        assert!(report.total.is_zero());
        assert!(report
            .format_terminal("$")
            .contains("No expenses recorded for 01-2020."));
    }

    #[test]
    fn test_malformed_dates_are_counted_not_fatal() {
        let mut records = scenario();
        let mut broken = record((2024, 3, 5), Category::Food, "Snack", 300);
        broken.date = "03/05/2024".into();
        records.push(broken);

        let report = MonthlyReport::generate(&records, march(), &Settings::default());
        assert_eq!(report.skipped_records, 1);
        assert_eq!(report.total.cents(), 5000);
        assert!(report.format_terminal("$").contains("Skipped 1 record(s)"));
    }

    #[test]
    fn test_overspend_thresholds() {
        let limit = Money::from_cents(100_000);

        assert!(OverspendAlert::check(Money::from_cents(80_000), limit, 80.0).is_none());

        let warning = OverspendAlert::check(Money::from_cents(80_001), limit, 80.0).unwrap();
        assert!(!warning.over_limit);

        assert!(!OverspendAlert::check(Money::from_cents(100_000), limit, 80.0)
            .unwrap()
            .over_limit);

        let over = OverspendAlert::check(Money::from_cents(120_000), limit, 80.0).unwrap();
        assert!(over.over_limit);
        assert!((over.percent_used - 120.0).abs() < 1e-9);

        assert!(OverspendAlert::check(Money::from_cents(500), Money::zero(), 80.0).is_none());
    }

    #[test]
    fn test_overspend_uses_food_limit_not_goal() {
        // 500 is over the 400 food goal but well under 80% of the 1000 limit
        let records = vec![record((2024, 3, 1), Category::Food, "Feast", 50_000)];
        let report = MonthlyReport::generate(&records, march(), &Settings::default());
        assert!(!report.rows[0].within_budget);
        assert!(report.overspend.is_none());

        let records = vec![record((2024, 3, 1), Category::Food, "Banquet", 90_000)];
        let report = MonthlyReport::generate(&records, march(), &Settings::default());
        let alert = report.overspend.unwrap();
        assert!(!alert.over_limit);
        assert_eq!(alert.limit.cents(), 100_000);
    }

    #[test]
    fn test_format_terminal() {
        let report = MonthlyReport::generate(&scenario(), march(), &Settings::default());
        let output = report.format_terminal("$");

        assert!(output.contains("Monthly Report for 03-2024"));
        assert!(output.contains("Budget Goal"));
        assert!(output.contains("$400.00"));
        assert!(output.contains("💵 Total Spending: $50.00"));
        assert!(output.contains("📈 Highest Spending: 🍕 Food & Dining ($40.00)"));
        assert!(output.contains("📉 Lowest Spending: 🚗 Transport ($10.00)"));
        assert!(!output.contains("HEADS UP"));
    }

    #[test]
    fn test_export_csv() {
        let report = MonthlyReport::generate(&scenario(), march(), &Settings::default());
        let mut buffer = Vec::new();
        report.export_csv(&mut buffer).unwrap();

        let csv_string = String::from_utf8(buffer).unwrap();
        let lines: Vec<_> = csv_string.lines().collect();
        assert_eq!(
            lines[0],
            "Month,Category,Amount,Percentage,Budget Goal,Within Budget"
        );
        assert_eq!(lines[1], "03-2024,🍕 Food & Dining,40.00,80.00,400.00,true");
        assert_eq!(lines[3], "03-2024,TOTAL,50.00,100.00,,");
    }
}
