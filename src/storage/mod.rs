//! Storage layer for ledgerbook
//!
//! The whole book is one JSON document, `data/book.json`, written atomically.
//! Opening a store with no document seeds the default chart of accounts.

pub mod file_io;

pub use file_io::{read_json, write_json_atomic};

use tracing::{debug, info};

use crate::config::paths::LedgerPaths;
use crate::error::BookError;
use crate::models::Book;

/// Owns the book loaded from disk and writes it back
pub struct BookStore {
    paths: LedgerPaths,
    book: Book,
}

impl BookStore {
    /// Open the store, seeding the default chart when no document exists yet
    pub fn open(paths: LedgerPaths) -> Result<Self, BookError> {
        paths.ensure_directories()?;

        let book = match read_json::<Book, _>(paths.book_file())? {
            Some(book) => {
                debug!(
                    accounts = book.accounts.len(),
                    journals = book.journals.len(),
                    "loaded book"
                );
                book
            }
            None => {
                info!(path = %paths.book_file().display(), "seeding default chart of accounts");
                Book::with_default_chart()
            }
        };

        Ok(Self { paths, book })
    }

    pub fn paths(&self) -> &LedgerPaths {
        &self.paths
    }

    pub fn book(&self) -> &Book {
        &self.book
    }

    pub fn book_mut(&mut self) -> &mut Book {
        &mut self.book
    }

    /// Write the book to disk
    pub fn save(&self) -> Result<(), BookError> {
        write_json_atomic(self.paths.book_file(), &self.book)
    }

    /// Replace the in-memory book wholesale; call `save` to persist
    pub fn replace(&mut self, book: Book) {
        self.book = book;
    }

    /// Discard all data and restore the default chart of accounts
    pub fn reset(&mut self) -> Result<(), BookError> {
        self.book = Book::with_default_chart();
        self.save()?;
        info!("book reset to default chart of accounts");
        Ok(())
    }

    /// Whether a book document has been written yet
    pub fn is_persisted(&self) -> bool {
        self.paths.book_file().exists()
    }
}
