//! Trial Balance Report
//!
//! Lists every account's raw debit and credit totals side by side. The two
//! grand totals are equal whenever every posted entry balanced, which makes
//! this report a health check on the whole book.

use std::io::Write;

use crate::error::BookResult;
use crate::models::{AccountId, AccountType, Book, Money};

use super::{csv_amount, csv_field, export_error};

/// One account line of the trial balance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrialBalanceRow {
    pub account_id: AccountId,
    pub account_name: String,
    pub account_type: AccountType,
    pub debit_total: Money,
    pub credit_total: Money,
}

/// Trial Balance Report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrialBalanceReport {
    /// One row per account, in chart order
    pub rows: Vec<TrialBalanceRow>,
    pub total_debits: Money,
    pub total_credits: Money,
}

impl TrialBalanceReport {
    /// Generate the trial balance for the current book
    pub fn generate(book: &Book) -> Self {
        let rows: Vec<TrialBalanceRow> = book
            .accounts
            .iter()
            .map(|account| TrialBalanceRow {
                account_id: account.id.clone(),
                account_name: account.name.clone(),
                account_type: account.account_type,
                debit_total: account.debit_total(),
                credit_total: account.credit_total(),
            })
            .collect();

        let total_debits = rows.iter().map(|r| r.debit_total).sum();
        let total_credits = rows.iter().map(|r| r.credit_total).sum();

        Self {
            rows,
            total_debits,
            total_credits,
        }
    }

    /// Whether the debit and credit columns agree
    pub fn is_balanced(&self) -> bool {
        self.total_debits == self.total_credits
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str("Trial Balance\n");
        output.push_str(&"=".repeat(72));
        output.push('\n');

        output.push_str(&format!(
            "{:<8} {:<30} {:>15} {:>15}\n",
            "Code", "Account", "Debit", "Credit"
        ));
        output.push_str(&"-".repeat(72));
        output.push('\n');

        for row in &self.rows {
            output.push_str(&format!(
                "{:<8} {:<30} {:>15} {:>15}\n",
                row.account_id,
                truncate(&row.account_name, 30),
                row.debit_total,
                row.credit_total
            ));
        }

        output.push_str(&"-".repeat(72));
        output.push('\n');
        output.push_str(&format!(
            "{:<39} {:>15} {:>15}\n",
            "TOTAL", self.total_debits, self.total_credits
        ));

        if !self.is_balanced() {
            output.push_str(&format!(
                "\nOUT OF BALANCE by {}\n",
                (self.total_debits - self.total_credits).abs()
            ));
        }

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> BookResult<()> {
        writeln!(writer, "Code,Account,Type,Debit,Credit").map_err(export_error)?;

        for row in &self.rows {
            writeln!(
                writer,
                "{},{},{},{},{}",
                csv_field(row.account_id.as_str()),
                csv_field(&row.account_name),
                row.account_type,
                csv_amount(row.debit_total),
                csv_amount(row.credit_total)
            )
            .map_err(export_error)?;
        }

        writeln!(
            writer,
            "TOTAL,,,{},{}",
            csv_amount(self.total_debits),
            csv_amount(self.total_credits)
        )
        .map_err(export_error)?;

        Ok(())
    }
}

pub(crate) fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
