//! Account Ledger Report
//!
//! Lists an account's posted history in order with a running balance that
//! follows the account's normal side.

use std::io::Write;

use chrono::NaiveDate;

use crate::error::{BookError, BookResult};
use crate::models::{AccountId, Book, JournalEntryId, Money, NormalSide};

use super::{csv_amount, csv_field, export_error};

/// A single line of the ledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerRow {
    pub date: NaiveDate,
    pub transaction_id: JournalEntryId,
    pub memo: String,
    pub debit: Money,
    pub credit: Money,
    /// Balance after this line
    pub running_balance: Money,
}

/// Account Ledger Report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountLedgerReport {
    pub account_id: AccountId,
    pub account_name: String,
    pub normal_side: NormalSide,
    pub rows: Vec<LedgerRow>,
    pub total_debits: Money,
    pub total_credits: Money,
    pub ending_balance: Money,
}

impl AccountLedgerReport {
    /// Generate the ledger of one account
    pub fn generate(book: &Book, account_id: &AccountId) -> BookResult<Self> {
        let account = book
            .accounts
            .find(account_id)
            .ok_or_else(|| BookError::account_not_found(account_id.to_string()))?;

        let mut running_balance = Money::zero();
        let mut rows = Vec::with_capacity(account.history().len());

        for record in account.history() {
            running_balance += match account.normal_side {
                NormalSide::Debit => record.debit - record.credit,
                NormalSide::Credit => record.credit - record.debit,
            };
            rows.push(LedgerRow {
                date: record.date,
                transaction_id: record.transaction_id,
                memo: record.memo.clone(),
                debit: record.debit,
                credit: record.credit,
                running_balance,
            });
        }

        Ok(Self {
            account_id: account.id.clone(),
            account_name: account.name.clone(),
            normal_side: account.normal_side,
            total_debits: account.debit_total(),
            total_credits: account.credit_total(),
            ending_balance: running_balance,
            rows,
        })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Ledger: {} - {} ({} normal)\n",
            self.account_id, self.account_name, self.normal_side
        ));
        output.push_str(&"=".repeat(90));
        output.push('\n');

        output.push_str(&format!(
            "{:<10} {:<12} {:<20} {:>14} {:>14} {:>14}\n",
            "Date", "Entry", "Memo", "Debit", "Credit", "Balance"
        ));
        output.push_str(&"-".repeat(90));
        output.push('\n');

        if self.rows.is_empty() {
            output.push_str("No postings.\n");
        }

        for row in &self.rows {
            let memo: String = row.memo.chars().take(20).collect();
            output.push_str(&format!(
                "{:<10} {:<12} {:<20} {:>14} {:>14} {:>14}\n",
                row.date.format("%Y-%m-%d").to_string(),
                row.transaction_id.to_string(),
                memo,
                blank_if_zero(row.debit),
                blank_if_zero(row.credit),
                row.running_balance
            ));
        }

        output.push_str(&"-".repeat(90));
        output.push('\n');
        output.push_str(&format!(
            "{:<44} {:>14} {:>14} {:>14}\n",
            "TOTAL", self.total_debits, self.total_credits, self.ending_balance
        ));

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> BookResult<()> {
        writeln!(writer, "Date,Entry,Memo,Debit,Credit,Balance").map_err(export_error)?;

        for row in &self.rows {
            writeln!(
                writer,
                "{},{},{},{},{},{}",
                row.date.format("%Y-%m-%d"),
                row.transaction_id.as_uuid(),
                csv_field(&row.memo),
                csv_amount(row.debit),
                csv_amount(row.credit),
                csv_amount(row.running_balance)
            )
            .map_err(export_error)?;
        }

        Ok(())
    }
}

fn blank_if_zero(amount: Money) -> String {
    if amount.is_zero() {
        String::new()
    } else {
        amount.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::JournalLine;
    use crate::services::{JournalService, NewJournalEntry};

    fn record(book: &mut Book, day: u32, debit: &str, credit: &str, cents: i64) {
        JournalService::new(book)
            .record(
                NewJournalEntry::new(NaiveDate::from_ymd_opt(2024, 1, day).unwrap())
                    .line(
                        JournalLine::debit(debit, Money::from_cents(cents)).with_memo("entry"),
                    )
                    .line(JournalLine::credit(credit, Money::from_cents(cents))),
            )
            .unwrap();
    }

    #[test]
    fn test_debit_normal_running_balance() {
        let mut book = Book::with_default_chart();
        record(&mut book, 1, "1000", "3000", 10000);
        record(&mut book, 2, "6100", "1000", 2500);
        record(&mut book, 3, "1000", "4000", 1000);

        let report = AccountLedgerReport::generate(&book, &"1000".into()).unwrap();
        let balances: Vec<i64> = report.rows.iter().map(|r| r.running_balance.cents()).collect();
        assert_eq!(balances, vec![10000, 7500, 8500]);
        assert_eq!(report.ending_balance.cents(), 8500);
        assert_eq!(report.rows[0].memo, "entry");
    }

    #[test]
    fn test_credit_normal_running_balance() {
        let mut book = Book::with_default_chart();
        record(&mut book, 1, "1000", "2000", 10000);
        record(&mut book, 2, "2000", "1000", 4000);

        let report = AccountLedgerReport::generate(&book, &"2000".into()).unwrap();
        let balances: Vec<i64> = report.rows.iter().map(|r| r.running_balance.cents()).collect();
        assert_eq!(balances, vec![10000, 6000]);
        assert_eq!(
            report.ending_balance,
            book.accounts.find(&"2000".into()).unwrap().balance()
        );
    }

    #[test]
    fn test_unknown_account() {
        let book = Book::with_default_chart();
        let err = AccountLedgerReport::generate(&book, &"9999".into()).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_outputs() {
        let mut book = Book::with_default_chart();
        let empty = AccountLedgerReport::generate(&book, &"1000".into()).unwrap();
        assert!(empty.format_terminal().contains("No postings."));

        record(&mut book, 1, "1000", "3000", 10000);
        let report = AccountLedgerReport::generate(&book, &"1000".into()).unwrap();
        assert!(report.format_terminal().contains("Ledger: 1000 - Cash"));

        let mut csv_output = Vec::new();
        report.export_csv(&mut csv_output).unwrap();
        let csv_string = String::from_utf8(csv_output).unwrap();
        assert!(csv_string.starts_with("Date,Entry,Memo,Debit,Credit,Balance"));
        assert!(csv_string.contains("2024-01-01"));
        assert!(csv_string.contains("100.00,0.00,100.00"));
    }
}
