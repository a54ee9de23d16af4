//! Expense repository for CSV storage
//!
//! The data file is a plain CSV with the header
//! `Date,Category,Description,Amount`. Records are only ever appended; reads
//! always return a fresh snapshot of the whole file.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{ExpenseRecord, Money};

/// Column names of the data file, in order
pub const HEADER: [&str; 4] = ["Date", "Category", "Description", "Amount"];

/// On-disk shape of one row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct ExpenseRow {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Amount")]
    pub amount: String,
}

impl From<&ExpenseRecord> for ExpenseRow {
    fn from(record: &ExpenseRecord) -> Self {
        Self {
            date: record.date.clone(),
            category: record.category.clone(),
            description: record.description.clone(),
            amount: record.amount.to_decimal_string(),
        }
    }
}

impl TryFrom<ExpenseRow> for ExpenseRecord {
    type Error = ExpenseError;

    fn try_from(row: ExpenseRow) -> Result<Self, Self::Error> {
        let amount = Money::parse(&row.amount).map_err(|e| {
            ExpenseError::Storage(format!("Bad amount for {} {}: {}", row.date, row.category, e))
        })?;

        Ok(Self {
            date: row.date,
            category: row.category,
            description: row.description,
            amount,
        })
    }
}

/// Records read from the data file plus the rows that could not be read
#[derive(Debug, Clone, Default)]
pub struct LoadedExpenses {
    /// Successfully parsed records, in file order
    pub records: Vec<ExpenseRecord>,
    /// Number of data rows skipped because they could not be parsed
    pub skipped_rows: usize,
}

/// Repository for the expense data file
pub struct ExpenseRepository {
    path: PathBuf,
}

impl ExpenseRepository {
    /// Create a repository backed by the given CSV file
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the data file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the data file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Create the data file with its header row if it doesn't exist
    ///
    /// Returns `true` if the file was created.
    pub fn ensure_file(&self) -> ExpenseResult<bool> {
        if self.exists() {
            return Ok(false);
        }

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ExpenseError::Storage(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let mut writer = csv::Writer::from_path(&self.path)
            .map_err(|e| ExpenseError::Storage(format!("Failed to create data file: {}", e)))?;
        writer.write_record(HEADER)?;
        writer.flush()?;

        debug!(path = %self.path.display(), "created expense file");
        Ok(true)
    }

    /// Append a record to the end of the data file
    pub fn append(&self, record: &ExpenseRecord) -> ExpenseResult<()> {
        self.ensure_file()?;

        let file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .map_err(|e| {
                ExpenseError::Storage(format!("Failed to open {}: {}", self.path.display(), e))
            })?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        writer.serialize(ExpenseRow::from(record))?;
        writer.flush()?;

        debug!(date = %record.date, category = %record.category, "appended expense");
        Ok(())
    }

    /// Read every record in the data file
    ///
    /// A missing file reads as empty. Rows that cannot be parsed are skipped
    /// and counted rather than failing the whole read.
    pub fn load(&self) -> ExpenseResult<LoadedExpenses> {
        if !self.exists() {
            debug!(path = %self.path.display(), "no expense file yet");
            return Ok(LoadedExpenses::default());
        }

        let file = File::open(&self.path).map_err(|e| {
            ExpenseError::Storage(format!("Failed to open {}: {}", self.path.display(), e))
        })?;

        read_records(file)
    }

    /// Read every record, discarding the skipped-row count
    pub fn load_records(&self) -> ExpenseResult<Vec<ExpenseRecord>> {
        let loaded = self.load()?;
        Ok(loaded.records)
    }
}

/// Parse expense rows from any CSV source with a header row
pub(crate) fn read_records<R: std::io::Read>(source: R) -> ExpenseResult<LoadedExpenses> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(source);

    let mut loaded = LoadedExpenses::default();

    for (index, row) in reader.deserialize::<ExpenseRow>().enumerate() {
        let parsed = row
            .map_err(ExpenseError::from)
            .and_then(ExpenseRecord::try_from);

        match parsed {
            Ok(record) => loaded.records.push(record),
            Err(e) => {
                // +2: one for the header, one for 1-based numbering
                warn!(line = index + 2, error = %e, "skipping unreadable expense row");
                loaded.skipped_rows += 1;
            }
        }
    }

    Ok(loaded)
}

/// Check that a CSV source starts with the expected header row
pub(crate) fn has_expense_header<R: std::io::Read>(source: R) -> bool {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(source);

    match reader.headers() {
        Ok(headers) => headers.iter().eq(HEADER.iter().copied()),
        Err(_) => false,
    }
}
