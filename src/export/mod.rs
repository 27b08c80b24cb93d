//! Export module for ledgerbook
//!
//! Provides complete data export functionality in multiple formats:
//! - CSV: journal lines and the trial balance (spreadsheet-compatible)
//! - JSON: machine-readable full book export, also accepted for import
//! - YAML: human-readable full book export

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::{export_journal_csv, export_trial_balance_csv};
pub use json::{export_full_json, import_from_json, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::{export_full_yaml, import_from_yaml};
