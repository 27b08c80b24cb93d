//! Balance Sheet Report
//!
//! Sums signed balances of asset, liability and equity accounts. Each account
//! is taken on its own: contra-asset accounts are not netted into assets.
//! The report does not assert that assets equal liabilities plus equity.

use std::io::Write;

use crate::error::BookResult;
use crate::models::{AccountId, AccountType, Book, Money};

use super::trial_balance::truncate;
use super::{csv_amount, csv_field, export_error};

/// Accounts of one type with their balances
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceSheetSection {
    pub account_type: AccountType,
    pub accounts: Vec<(AccountId, String, Money)>,
    pub total: Money,
}

impl BalanceSheetSection {
    fn collect(book: &Book, account_type: AccountType) -> Self {
        let accounts: Vec<(AccountId, String, Money)> = book
            .accounts
            .iter()
            .filter(|a| a.account_type == account_type)
            .map(|a| (a.id.clone(), a.name.clone(), a.balance()))
            .collect();
        let total = accounts.iter().map(|(_, _, balance)| *balance).sum();

        Self {
            account_type,
            accounts,
            total,
        }
    }
}

/// Balance Sheet Report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceSheetReport {
    pub assets: BalanceSheetSection,
    pub liabilities: BalanceSheetSection,
    pub equity: BalanceSheetSection,
}

impl BalanceSheetReport {
    /// Generate the balance sheet for the current book
    pub fn generate(book: &Book) -> Self {
        Self {
            assets: BalanceSheetSection::collect(book, AccountType::Asset),
            liabilities: BalanceSheetSection::collect(book, AccountType::Liability),
            equity: BalanceSheetSection::collect(book, AccountType::Equity),
        }
    }

    pub fn total_assets(&self) -> Money {
        self.assets.total
    }

    pub fn total_liabilities(&self) -> Money {
        self.liabilities.total
    }

    pub fn total_equity(&self) -> Money {
        self.equity.total
    }

    /// Assets minus liabilities and equity; informational only
    pub fn difference(&self) -> Money {
        self.total_assets() - (self.total_liabilities() + self.total_equity())
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str("Balance Sheet\n");
        output.push_str(&"=".repeat(56));
        output.push('\n');

        for (title, section) in [
            ("ASSETS", &self.assets),
            ("LIABILITIES", &self.liabilities),
            ("EQUITY", &self.equity),
        ] {
            output.push_str(title);
            output.push('\n');
            for (id, name, balance) in &section.accounts {
                output.push_str(&format!(
                    "  {:<8} {:<28} {:>15}\n",
                    id,
                    truncate(name, 28),
                    balance
                ));
            }
            output.push_str(&format!(
                "  {:<37} {:>15}\n\n",
                format!("Total {}", section.account_type),
                section.total
            ));
        }

        output.push_str(&"-".repeat(56));
        output.push('\n');
        output.push_str(&format!(
            "{:<39} {:>15}\n",
            "Liabilities + Equity",
            self.total_liabilities() + self.total_equity()
        ));

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> BookResult<()> {
        writeln!(writer, "Section,Code,Account,Balance").map_err(export_error)?;

        for section in [&self.assets, &self.liabilities, &self.equity] {
            for (id, name, balance) in &section.accounts {
                writeln!(
                    writer,
                    "{},{},{},{}",
                    section.account_type,
                    csv_field(id.as_str()),
                    csv_field(name),
                    csv_amount(*balance)
                )
                .map_err(export_error)?;
            }
        }

        writeln!(writer).map_err(export_error)?;
        writeln!(writer, "SUMMARY,,Total Assets,{}", csv_amount(self.total_assets()))
            .map_err(export_error)?;
        writeln!(
            writer,
            "SUMMARY,,Total Liabilities,{}",
            csv_amount(self.total_liabilities())
        )
        .map_err(export_error)?;
        writeln!(writer, "SUMMARY,,Total Equity,{}", csv_amount(self.total_equity()))
            .map_err(export_error)?;

        Ok(())
    }
}
