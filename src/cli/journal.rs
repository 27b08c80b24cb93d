//! Journal CLI commands
//!
//! Posting entries from the command line. Lines are given as
//! `ACCOUNT:AMOUNT[:QUANTITY]`, where ACCOUNT is a code or a name.

use chrono::{Local, NaiveDate};
use clap::Subcommand;

use crate::display::journal::{format_journal, format_posting_outcome};
use crate::error::{BookError, BookResult};
use crate::models::{AccountId, Book, JournalLine, Money, Quantity};
use crate::services::{JournalService, NewJournalEntry};
use crate::storage::BookStore;

/// Journal subcommands
#[derive(Subcommand, Debug)]
pub enum JournalCommands {
    /// Validate and post a journal entry
    Post {
        /// Entry date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
        /// Free-form reference such as an invoice number
        #[arg(short, long, default_value = "")]
        reference: String,
        /// Memo applied to every line
        #[arg(short, long, default_value = "")]
        memo: String,
        /// Debit line as ACCOUNT:AMOUNT[:QUANTITY] (repeatable)
        #[arg(long = "debit")]
        debits: Vec<String>,
        /// Credit line as ACCOUNT:AMOUNT[:QUANTITY] (repeatable)
        #[arg(long = "credit")]
        credits: Vec<String>,
    },
    /// List journal entries, most recent first
    List {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
    /// Post a sample capital deposit (Cash 5000 / Capital 5000) dated today
    Sample,
}

/// Handle a journal command
pub fn handle_journal_command(store: &mut BookStore, cmd: JournalCommands) -> BookResult<()> {
    match cmd {
        JournalCommands::Post {
            date,
            reference,
            memo,
            debits,
            credits,
        } => {
            let date = date.as_deref().map(parse_date).transpose()?;

            let mut entry = NewJournalEntry {
                date,
                reference,
                lines: Vec::new(),
            };
            for spec in &debits {
                let (account, amount, quantity) = parse_line_spec(store.book(), spec)?;
                entry.lines.push(build_line(JournalLine::debit(account, amount), &memo, quantity));
            }
            for spec in &credits {
                let (account, amount, quantity) = parse_line_spec(store.book(), spec)?;
                entry.lines.push(build_line(JournalLine::credit(account, amount), &memo, quantity));
            }

            let outcome = JournalService::new(store.book_mut()).record(entry)?;
            store.save()?;
            print!("{}", format_posting_outcome(&outcome));
        }

        JournalCommands::List { limit } => {
            let book = store.book();
            print!("{}", format_journal(&book.recent_journals(limit), book));
        }

        JournalCommands::Sample => {
            let amount = Money::from_cents(500_000);
            let entry = NewJournalEntry::new(Local::now().date_naive())
                .reference("Capital deposit")
                .line(JournalLine::debit("1000", amount).with_memo("Capital deposit"))
                .line(JournalLine::credit("3000", amount).with_memo("Capital deposit"));

            let outcome = JournalService::new(store.book_mut()).record(entry)?;
            store.save()?;
            print!("{}", format_posting_outcome(&outcome));
        }
    }

    Ok(())
}

fn build_line(line: JournalLine, memo: &str, quantity: Option<Quantity>) -> JournalLine {
    let line = line.with_memo(memo);
    match quantity {
        Some(q) => line.with_quantity(q),
        None => line,
    }
}

pub(crate) fn parse_date(s: &str) -> BookResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
        BookError::Validation(format!("Invalid date: '{}'. Use YYYY-MM-DD", s))
    })
}

/// Split `ACCOUNT:AMOUNT[:QUANTITY]`, resolving ACCOUNT by code or name
fn parse_line_spec(
    book: &Book,
    spec: &str,
) -> BookResult<(AccountId, Money, Option<Quantity>)> {
    let parts: Vec<&str> = spec.split(':').collect();
    let (account, amount, quantity) = match parts.as_slice() {
        [account, amount] => (*account, *amount, None),
        [account, amount, quantity] => (*account, *amount, Some(*quantity)),
        _ => {
            return Err(BookError::Validation(format!(
                "Invalid line '{}'. Use ACCOUNT:AMOUNT or ACCOUNT:AMOUNT:QUANTITY",
                spec
            )))
        }
    };

    let amount = Money::parse(amount).map_err(|e| {
        BookError::Validation(format!("Invalid amount in '{}': {}", spec, e))
    })?;
    let quantity = quantity
        .map(|q| {
            Quantity::parse(q).map_err(|e| {
                BookError::Validation(format!("Invalid quantity in '{}': {}", spec, e))
            })
        })
        .transpose()?;

    // Unresolved references pass through so validation reports them
    let account_id = book
        .accounts
        .find(&AccountId::from(account))
        .or_else(|| book.accounts.find_by_name(account))
        .map(|a| a.id.clone())
        .unwrap_or_else(|| AccountId::from(account));

    Ok((account_id, amount, quantity))
}
