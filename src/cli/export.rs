//! CLI command for the tax export

use std::io::Write;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Args;

use crate::config::Settings;
use crate::error::ExpenseResult;
use crate::export::{export_tax_file, TaxExport};
use crate::storage::Storage;

/// Arguments for `export-tax`
#[derive(Args, Debug, Default)]
pub struct ExportTaxArgs {
    /// Output file (defaults to tax_expenses_YYYYMMDD.csv in the data directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle `export-tax`
pub fn handle_export_tax<W: Write>(
    storage: &Storage,
    settings: &Settings,
    args: ExportTaxArgs,
    today: NaiveDate,
    out: &mut W,
) -> ExpenseResult<()> {
    let records = storage.expenses.load_records()?;
    if records.is_empty() {
        writeln!(out, "No expenses to export!")?;
        return Ok(());
    }

    let path = args
        .output
        .unwrap_or_else(|| storage.paths().tax_export_file(today));

    match export_tax_file(&records, settings, &path)? {
        TaxExport::Written { path, count } => {
            writeln!(
                out,
                "✓ Exported {} tax expense(s) to {}",
                count,
                path.display()
            )?;
            writeln!(out, "💡 Remember to keep receipts for tax time!")?;
        }
        TaxExport::NothingToExport => {
            writeln!(out, "No business-related expenses found.")?;
        }
    }

    Ok(())
}
