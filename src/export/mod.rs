//! Export module for the expense logger
//!
//! - Tax: business expenses to a dedicated CSV file
//!
//! The monthly report CSV lives with the report itself
//! (`MonthlyReport::export_csv`).

pub mod tax;

pub use tax::{business_expenses, export_tax_file, write_tax_csv, TaxExport, TAX_PURPOSE};
