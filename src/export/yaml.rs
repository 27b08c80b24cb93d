//! YAML Export functionality
//!
//! Exports the complete book to YAML for a human-readable backup.

use std::io::Write;

use crate::error::{BookError, BookResult};
use crate::export::json::FullExport;
use crate::models::Book;

/// Export the full book to YAML format
pub fn export_full_yaml<W: Write>(book: &Book, writer: &mut W) -> BookResult<()> {
    let export = FullExport::from_book(book);
    let io_err = |e: std::io::Error| BookError::Export(e.to_string());

    writeln!(writer, "# ledgerbook full export").map_err(io_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(io_err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(io_err)?;
    writeln!(writer).map_err(io_err)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| BookError::Export(e.to_string()))?;

    Ok(())
}

/// Import from a YAML export
pub fn import_from_yaml(yaml_str: &str) -> BookResult<FullExport> {
    let export: FullExport =
        serde_yaml::from_str(yaml_str).map_err(|e| BookError::Import(e.to_string()))?;

    export.validate().map_err(BookError::Import)?;

    Ok(export)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{JournalLine, Money};
    use crate::services::{JournalService, NewJournalEntry};
    use chrono::NaiveDate;

    #[test]
    fn test_yaml_roundtrip() {
        let mut book = Book::with_default_chart();
        JournalService::new(&mut book)
            .record(
                NewJournalEntry::new(NaiveDate::from_ymd_opt(2025, 2, 1).unwrap())
                    .line(JournalLine::debit("1000", Money::from_cents(12345)))
                    .line(JournalLine::credit("3000", Money::from_cents(12345))),
            )
            .unwrap();

        let mut yaml_output = Vec::new();
        export_full_yaml(&book, &mut yaml_output).unwrap();
        let yaml_string = String::from_utf8(yaml_output).unwrap();

        assert!(yaml_string.starts_with("# ledgerbook full export"));
        assert!(yaml_string.contains("schema_version"));
        assert!(yaml_string.contains("Cash"));

        let imported = import_from_yaml(&yaml_string).unwrap().into_book();
        assert_eq!(imported, book);
    }
}
