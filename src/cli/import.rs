//! Import of full-book exports
//!
//! Accepts the JSON or YAML document written by `export all`. The file is
//! validated completely before the current book is replaced.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{BookError, BookResult};
use crate::export::{import_from_json, import_from_yaml, FullExport};
use crate::storage::BookStore;

/// Read and validate an export file, picking the parser from its extension
pub fn read_export(path: &Path) -> BookResult<FullExport> {
    let contents = fs::read_to_string(path)
        .map_err(|e| BookError::Import(format!("Failed to read {}: {}", path.display(), e)))?;

    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

    if is_yaml {
        import_from_yaml(&contents)
    } else {
        import_from_json(&contents)
    }
}

/// Replace the current book with the contents of an export file
pub fn handle_import_command(store: &mut BookStore, path: &Path) -> BookResult<()> {
    let export = read_export(path)?;
    let accounts = export.metadata.account_count;
    let journals = export.metadata.journal_count;

    store.replace(export.into_book());
    store.save()?;
    info!(path = %path.display(), accounts, journals, "imported book");

    println!(
        "Imported {} accounts and {} journal entries from: {}",
        accounts,
        journals,
        path.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::LedgerPaths;
    use crate::export::export_full_yaml;
    use crate::models::{Book, JournalLine, Money};
    use crate::services::{JournalService, NewJournalEntry};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn sample_book() -> Book {
        let mut book = Book::with_default_chart();
        JournalService::new(&mut book)
            .record(
                NewJournalEntry::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
                    .line(JournalLine::debit("1000", Money::from_cents(500000)))
                    .line(JournalLine::credit("3000", Money::from_cents(500000))),
            )
            .unwrap();
        book
    }

    #[test]
    fn test_import_yaml_replaces_book() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("book.yaml");
        let mut file = fs::File::create(&path).unwrap();
        export_full_yaml(&sample_book(), &mut file).unwrap();

        let paths = LedgerPaths::with_base_dir(temp_dir.path().join("data"));
        let mut store = BookStore::open(paths).unwrap();
        handle_import_command(&mut store, &path).unwrap();

        assert_eq!(store.book().journals.len(), 1);
        assert!(store.is_persisted());
    }

    #[test]
    fn test_invalid_file_leaves_book_alone() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let paths = LedgerPaths::with_base_dir(temp_dir.path().join("data"));
        let mut store = BookStore::open(paths).unwrap();
        assert!(handle_import_command(&mut store, &path).is_err());
        assert!(store.book().journals.is_empty());
        assert_eq!(store.book().accounts.len(), 9);
    }

    #[test]
    fn test_missing_file() {
        let err = read_export(Path::new("/nonexistent/book.json")).unwrap_err();
        assert!(matches!(err, BookError::Import(_)));
    }
}
