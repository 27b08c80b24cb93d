//! CSV Export functionality
//!
//! Exports the journal (one row per line) and the trial balance to CSV.

use std::io::Write;

use crate::error::{BookError, BookResult};
use crate::models::Book;
use crate::reports::{csv_amount, csv_field, TrialBalanceReport};

/// Export every journal line to CSV, entries in posting order
pub fn export_journal_csv<W: Write>(book: &Book, writer: &mut W) -> BookResult<()> {
    let io_err = |e: std::io::Error| BookError::Export(e.to_string());

    writeln!(
        writer,
        "Entry ID,Date,Reference,Account,Account Name,Debit,Credit,Quantity,Memo"
    )
    .map_err(io_err)?;

    for entry in &book.journals {
        for line in &entry.lines {
            let account_name = book
                .accounts
                .find(&line.account_id)
                .map(|a| a.name.as_str())
                .unwrap_or("Unknown");

            writeln!(
                writer,
                "{},{},{},{},{},{},{},{},{}",
                entry.id.as_uuid(),
                entry.date,
                csv_field(&entry.reference),
                csv_field(line.account_id.as_str()),
                csv_field(account_name),
                csv_amount(line.debit),
                csv_amount(line.credit),
                line.quantity.map(|q| q.to_string()).unwrap_or_default(),
                csv_field(&line.memo)
            )
            .map_err(io_err)?;
        }
    }

    Ok(())
}

/// Export the trial balance to CSV
pub fn export_trial_balance_csv<W: Write>(book: &Book, writer: &mut W) -> BookResult<()> {
    TrialBalanceReport::generate(book).export_csv(writer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{JournalLine, Money, Quantity};
    use crate::services::{JournalService, NewJournalEntry};
    use chrono::NaiveDate;

    fn book_with_entry() -> Book {
        let mut book = Book::with_default_chart();
        JournalService::new(&mut book)
            .record(
                NewJournalEntry::new(NaiveDate::from_ymd_opt(2025, 1, 15).unwrap())
                    .reference("INV-1, supplier")
                    .line(
                        JournalLine::debit("5000", Money::from_cents(2000))
                            .with_quantity(Quantity::from_units(10)),
                    )
                    .line(JournalLine::debit("1100", Money::from_cents(2000)))
                    .line(JournalLine::credit("2000", Money::from_cents(4000)).with_memo("on account")),
            )
            .unwrap();
        book
    }

    #[test]
    fn test_journal_csv() {
        let book = book_with_entry();
        let mut output = Vec::new();
        export_journal_csv(&book, &mut output).unwrap();
        let csv_string = String::from_utf8(output).unwrap();

        let lines: Vec<&str> = csv_string.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Entry ID,Date,Reference"));
        assert!(lines[1].contains("2025-01-15,\"INV-1, supplier\",5000,Purchases,20.00,0.00,10,"));
        assert!(lines[3].ends_with("0.00,40.00,,on account"));
    }

    #[test]
    fn test_trial_balance_csv() {
        let book = book_with_entry();
        let mut output = Vec::new();
        export_trial_balance_csv(&book, &mut output).unwrap();
        let csv_string = String::from_utf8(output).unwrap();
        assert!(csv_string.contains("TOTAL,,,40.00,40.00"));
    }
}
