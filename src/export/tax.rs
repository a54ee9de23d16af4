//! Tax export
//!
//! Writes the records that fall in a business category to a separate CSV
//! file, tagged with a fixed tax purpose.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use crate::config::Settings;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::ExpenseRecord;

/// Value written to the `Tax Purpose` column
pub const TAX_PURPOSE: &str = "Business";

#[derive(Debug, Serialize)]
struct TaxRow<'a> {
    #[serde(rename = "Date")]
    date: &'a str,
    #[serde(rename = "Category")]
    category: &'a str,
    #[serde(rename = "Description")]
    description: &'a str,
    #[serde(rename = "Amount")]
    amount: String,
    #[serde(rename = "Tax Purpose")]
    tax_purpose: &'static str,
}

impl<'a> From<&'a ExpenseRecord> for TaxRow<'a> {
    fn from(record: &'a ExpenseRecord) -> Self {
        Self {
            date: &record.date,
            category: &record.category,
            description: &record.description,
            amount: record.amount.to_decimal_string(),
            tax_purpose: TAX_PURPOSE,
        }
    }
}

/// Outcome of a tax export
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaxExport {
    /// File written with this many rows
    Written { path: PathBuf, count: usize },
    /// No record qualified; nothing was written
    NothingToExport,
}

/// Select records whose category is on the business list, in file order
pub fn business_expenses<'a>(
    records: &'a [ExpenseRecord],
    settings: &Settings,
) -> Vec<&'a ExpenseRecord> {
    records
        .iter()
        .filter(|r| settings.is_business(&r.category))
        .collect()
}

/// Write tax rows (with header) to any writer
pub fn write_tax_csv<W: Write>(records: &[&ExpenseRecord], writer: W) -> ExpenseResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for record in records {
        csv_writer.serialize(TaxRow::from(*record))?;
    }
    csv_writer
        .flush()
        .map_err(|e| ExpenseError::Export(e.to_string()))?;
    Ok(())
}

/// Export the business records to `path`
///
/// The file is only created when at least one record qualifies.
pub fn export_tax_file(
    records: &[ExpenseRecord],
    settings: &Settings,
    path: &Path,
) -> ExpenseResult<TaxExport> {
    let selected = business_expenses(records, settings);
    if selected.is_empty() {
        debug!("no business expenses to export");
        return Ok(TaxExport::NothingToExport);
    }

    let file = File::create(path).map_err(|e| {
        ExpenseError::Export(format!("Failed to create {}: {}", path.display(), e))
    })?;
    write_tax_csv(&selected, BufWriter::new(file))?;

    info!(path = %path.display(), count = selected.len(), "tax export written");
    Ok(TaxExport::Written {
        path: path.to_path_buf(),
        count: selected.len(),
    })
}
