//! CLI command for the monthly report

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::Args;

use crate::config::Settings;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::ExpenseRecord;
use crate::reports::{MonthWindow, MonthlyReport};
use crate::storage::Storage;

use super::expense::NO_EXPENSES_YET;

/// Arguments for `report`
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Month to report on (MM-YYYY)
    #[arg(short, long)]
    pub month: MonthWindow,

    /// Export to CSV file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle `report`
pub fn handle_report<W: Write>(
    storage: &Storage,
    settings: &Settings,
    args: ReportArgs,
    out: &mut W,
) -> ExpenseResult<()> {
    let Some(report) = build_report(storage, settings, args.month, out)? else {
        return Ok(());
    };

    match args.output {
        Some(path) if !report.is_empty() => {
            let file = File::create(&path).map_err(|e| {
                ExpenseError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            report.export_csv(BufWriter::new(file))?;
            writeln!(out, "Monthly report exported to: {}", path.display())?;
        }
        _ => write!(out, "{}", report.format_terminal(&settings.currency_symbol))?,
    }

    Ok(())
}

/// Print the monthly report for `window` over already loaded records
pub fn show_report<W: Write>(
    records: &[ExpenseRecord],
    settings: &Settings,
    window: MonthWindow,
    out: &mut W,
) -> ExpenseResult<()> {
    let report = MonthlyReport::generate(records, window, settings);
    write!(out, "{}", report.format_terminal(&settings.currency_symbol))?;
    Ok(())
}

fn build_report<W: Write>(
    storage: &Storage,
    settings: &Settings,
    window: MonthWindow,
    out: &mut W,
) -> ExpenseResult<Option<MonthlyReport>> {
    let records = storage.expenses.load_records()?;
    if records.is_empty() {
        writeln!(out, "{}", NO_EXPENSES_YET)?;
        return Ok(None);
    }

    Ok(Some(MonthlyReport::generate(&records, window, settings)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExpensePaths;
    use crate::models::{Category, Money};
    use crate::storage::initialize_storage;
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::TempDir;

    fn setup() -> (TempDir, Storage, Settings) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        initialize_storage(&paths).unwrap();
        let storage = Storage::new(paths);

        let day = |d| NaiveDate::from_ymd_opt(2024, 3, d).unwrap();
        for record in [
            ExpenseRecord::new(day(1), Category::Food, "Lunch", Money::from_cents(1250)),
            ExpenseRecord::new(day(2), Category::Food, "Dinner", Money::from_cents(2750)),
            ExpenseRecord::new(day(3), Category::Transport, "Bus", Money::from_cents(1000)),
        ] {
            storage.expenses.append(&record).unwrap();
        }

        (temp_dir, storage, Settings::default())
    }

    fn march() -> MonthWindow {
        MonthWindow::new(3, 2024).unwrap()
    }

    #[test]
    fn test_terminal_report() {
        let (_temp, storage, settings) = setup();
        let args = ReportArgs {
            month: march(),
            output: None,
        };

        let mut out = Vec::new();
        handle_report(&storage, &settings, args, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("📊 Monthly Report for 03-2024"));
        assert!(text.contains("📈 Highest Spending: 🍕 Food & Dining ($40.00)"));
        assert!(text.contains("📉 Lowest Spending: 🚗 Transport ($10.00)"));
        assert!(!text.contains("❌"));
    }

    #[test]
    fn test_csv_output() {
        let (temp, storage, settings) = setup();
        let path = temp.path().join("march.csv");
        let args = ReportArgs {
            month: march(),
            output: Some(path.clone()),
        };

        let mut out = Vec::new();
        handle_report(&storage, &settings, args, &mut out).unwrap();

        let csv = fs::read_to_string(&path).unwrap();
        assert!(csv.starts_with("Month,Category,Amount,Percentage,Budget Goal,Within Budget"));
        assert!(csv.contains("03-2024,TOTAL,50.00"));
    }

    #[test]
    fn test_month_without_expenses() {
        let (_temp, storage, settings) = setup();

        let records = storage.expenses.load_records().unwrap();
        let mut out = Vec::new();
        show_report(
            &records,
            &settings,
            MonthWindow::new(4, 2024).unwrap(),
            &mut out,
        )
        .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "No expenses recorded for 04-2024.\n"
        );
    }
}
