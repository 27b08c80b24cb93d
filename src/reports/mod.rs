//! Reports module for ledgerbook
//!
//! Read-only views over a `Book`: trial balance, income statement, balance
//! sheet and per-account ledger. Generating a report never mutates state, so
//! the same book always yields the same report.

pub mod account_ledger;
pub mod balance_sheet;
pub mod income_statement;
pub mod trial_balance;

pub use account_ledger::{AccountLedgerReport, LedgerRow};
pub use balance_sheet::{BalanceSheetReport, BalanceSheetSection};
pub use income_statement::{IncomeStatementReport, IncomeStatementRow};
pub use trial_balance::{TrialBalanceReport, TrialBalanceRow};

use crate::error::BookError;
use crate::models::Money;

/// Plain decimal rendering for CSV cells ("-12.50"), without a currency symbol
pub fn csv_amount(amount: Money) -> String {
    let sign = if amount.is_negative() { "-" } else { "" };
    let cents = amount.cents().unsigned_abs();
    format!("{}{}.{:02}", sign, cents / 100, cents % 100)
}

/// Quote a CSV field when it contains a separator, quote or newline
pub fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

pub(crate) fn export_error(err: std::io::Error) -> BookError {
    BookError::Export(err.to_string())
}
