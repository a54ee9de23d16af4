//! Per-category aggregation
//!
//! Groups records by their category label and computes totals, counts,
//! averages and each category's share of the grand total. Any label is
//! accepted, including ones outside the entry-time category set.

use std::collections::HashMap;

use crate::models::{ExpenseRecord, Money};

/// Aggregate figures for one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryStats {
    /// Sum of amounts
    pub total: Money,
    /// Number of records
    pub count: usize,
    /// `total / count`, rounded to the cent
    pub average: Money,
    /// Share of the grand total in percent; 0 when the grand total is 0
    pub percentage: f64,
}

/// One row of a breakdown
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySummary {
    pub category: String,
    pub stats: CategoryStats,
}

/// Category statistics in order of each category's first appearance
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryBreakdown {
    pub categories: Vec<CategorySummary>,
    pub grand_total: Money,
}

impl CategoryBreakdown {
    /// Aggregate a sequence of records
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a ExpenseRecord>,
    {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut sums: Vec<(&str, Money, usize)> = Vec::new();
        let mut grand_total = Money::zero();

        for record in records {
            grand_total += record.amount;

            let slot = *index.entry(record.category.as_str()).or_insert_with(|| {
                sums.push((record.category.as_str(), Money::zero(), 0));
                sums.len() - 1
            });
            let entry = &mut sums[slot];
            entry.1 += record.amount;
            entry.2 += 1;
        }

        let categories = sums
            .into_iter()
            .map(|(label, total, count)| CategorySummary {
                category: label.to_string(),
                stats: CategoryStats {
                    total,
                    count,
                    average: total.div_round(count),
                    percentage: total.percent_of(grand_total),
                },
            })
            .collect();

        Self {
            categories,
            grand_total,
        }
    }

    /// Stats for a category label
    pub fn get(&self, category: &str) -> Option<&CategoryStats> {
        self.categories
            .iter()
            .find(|c| c.category == category)
            .map(|c| &c.stats)
    }

    /// Total for a category label, zero if it never appeared
    pub fn total_for(&self, category: &str) -> Money {
        self.get(category).map(|s| s.total).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use chrono::NaiveDate;

    fn record(day: u32, category: Category, desc: &str, cents: i64) -> ExpenseRecord {
        ExpenseRecord::new(
            NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
            category,
            desc,
            Money::from_cents(cents),
        )
    }

    fn scenario() -> Vec<ExpenseRecord> {
        vec![
            record(1, Category::Food, "Lunch", 1250),
            record(15, Category::Food, "Dinner", 2750),
            record(10, Category::Transport, "Bus", 1000),
        ]
    }

    #[test]
    fn test_scenario_totals_and_percentages() {
        let breakdown = CategoryBreakdown::from_records(&scenario());

        assert_eq!(breakdown.grand_total.cents(), 5000);
        assert_eq!(breakdown.len(), 2);

        let food = breakdown.get(Category::Food.label()).unwrap();
        assert_eq!(food.total.cents(), 4000);
        assert_eq!(food.count, 2);
        assert_eq!(food.average.cents(), 2000);
        assert!((food.percentage - 80.0).abs() < 1e-9);

        let transport = breakdown.get(Category::Transport.label()).unwrap();
        assert_eq!(transport.total.cents(), 1000);
        assert!((transport.percentage - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_first_seen_order() {
        let mut records = scenario();
        records.insert(0, record(2, Category::Bills, "Power", 9000));

        let breakdown = CategoryBreakdown::from_records(&records);
        let order: Vec<_> = breakdown
            .categories
            .iter()
            .map(|c| c.category.as_str())
            .collect();
        assert_eq!(
            order,
            vec![
                Category::Bills.label(),
                Category::Food.label(),
                Category::Transport.label()
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        let breakdown = CategoryBreakdown::from_records(&Vec::<ExpenseRecord>::new());
        assert!(breakdown.is_empty());
        assert!(breakdown.grand_total.is_zero());
    }

    #[test]
    fn test_zero_grand_total_gives_zero_percentages() {
        let records = vec![
            record(1, Category::Food, "Free sample", 0),
            record(2, Category::Fun, "Free entry", 0),
        ];
        let breakdown = CategoryBreakdown::from_records(&records);

        assert_eq!(breakdown.len(), 2);
        assert!(breakdown.categories.iter().all(|c| c.stats.percentage == 0.0));
        assert!(breakdown.categories.iter().all(|c| c.stats.average.is_zero()));
    }

    #[test]
    fn test_unknown_labels_still_aggregate() {
        let mut legacy = record(5, Category::Misc, "Old row", 300);
        legacy.category = "Groceries".to_string();
        let records = vec![legacy, record(6, Category::Misc, "New row", 700)];

        let breakdown = CategoryBreakdown::from_records(&records);
        assert_eq!(breakdown.total_for("Groceries").cents(), 300);
        assert_eq!(breakdown.total_for(Category::Misc.label()).cents(), 700);
        assert!(breakdown.total_for("Nope").is_zero());
    }

    #[test]
    fn test_aggregate_invariants() {
        let amounts = [1, 333, 1250, 99, 10_000, 7, 4321, 18, 250, 5];
        let categories = Category::all();
        let records: Vec<_> = amounts
            .iter()
            .enumerate()
            .map(|(i, cents)| {
                record(
                    (i % 28) as u32 + 1,
                    categories[i % categories.len()],
                    "x",
                    *cents,
                )
            })
            .collect();

        let breakdown = CategoryBreakdown::from_records(&records);

        let summed: Money = breakdown.categories.iter().map(|c| c.stats.total).sum();
        assert_eq!(summed, breakdown.grand_total);

        for summary in &breakdown.categories {
            let stats = &summary.stats;
            let rebuilt = stats.average.cents() * stats.count as i64;
            assert!((rebuilt - stats.total.cents()).abs() <= stats.count as i64);
        }

        let pct: f64 = breakdown
            .categories
            .iter()
            .map(|c| c.stats.percentage)
            .sum();
        assert!((pct - 100.0).abs() < 1e-6);
    }
}
