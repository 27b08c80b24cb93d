//! Report CLI commands
//!
//! Each report prints to the terminal, or writes CSV when `--output` is given.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use clap::Subcommand;

use crate::error::{BookError, BookResult};
use crate::models::{AccountId, Book};
use crate::reports::{
    AccountLedgerReport, BalanceSheetReport, IncomeStatementReport, TrialBalanceReport,
};
use crate::storage::BookStore;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Debit and credit totals per account
    TrialBalance {
        /// Write CSV to this file instead of printing
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Revenue, expenses and net result
    Income {
        /// Write CSV to this file instead of printing
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Assets, liabilities and equity
    BalanceSheet {
        /// Write CSV to this file instead of printing
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Posted history of one account with a running balance
    Ledger {
        /// Account code or name
        account: String,
        /// Write CSV to this file instead of printing
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle a report command
pub fn handle_report_command(store: &BookStore, cmd: ReportCommands) -> BookResult<()> {
    let book = store.book();

    match cmd {
        ReportCommands::TrialBalance { output } => {
            let report = TrialBalanceReport::generate(book);
            match output {
                Some(path) => {
                    let mut writer = create_output(&path)?;
                    report.export_csv(&mut writer)?;
                    println!("Trial balance exported to: {}", path.display());
                }
                None => print!("{}", report.format_terminal()),
            }
        }

        ReportCommands::Income { output } => {
            let report = IncomeStatementReport::generate(book);
            match output {
                Some(path) => {
                    let mut writer = create_output(&path)?;
                    report.export_csv(&mut writer)?;
                    println!("Income statement exported to: {}", path.display());
                }
                None => print!("{}", report.format_terminal()),
            }
        }

        ReportCommands::BalanceSheet { output } => {
            let report = BalanceSheetReport::generate(book);
            match output {
                Some(path) => {
                    let mut writer = create_output(&path)?;
                    report.export_csv(&mut writer)?;
                    println!("Balance sheet exported to: {}", path.display());
                }
                None => print!("{}", report.format_terminal()),
            }
        }

        ReportCommands::Ledger { account, output } => {
            let report = AccountLedgerReport::generate(book, &resolve_account(book, &account)?)?;
            match output {
                Some(path) => {
                    let mut writer = create_output(&path)?;
                    report.export_csv(&mut writer)?;
                    println!("Ledger exported to: {}", path.display());
                }
                None => print!("{}", report.format_terminal()),
            }
        }
    }

    Ok(())
}

fn resolve_account(book: &Book, identifier: &str) -> BookResult<AccountId> {
    book.accounts
        .find(&AccountId::from(identifier))
        .or_else(|| book.accounts.find_by_name(identifier))
        .map(|a| a.id.clone())
        .ok_or_else(|| BookError::account_not_found(identifier))
}

pub(crate) fn create_output(path: &Path) -> BookResult<BufWriter<File>> {
    let file = File::create(path)
        .map_err(|e| BookError::Export(format!("Failed to create {}: {}", path.display(), e)))?;
    Ok(BufWriter::new(file))
}
