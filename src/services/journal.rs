//! Journal validation and recording
//!
//! `validate_entry` is the gate every entry passes before it may touch the
//! book. It is pure: it only reads the chart of accounts.

use chrono::NaiveDate;

use crate::error::{BookError, BookResult};
use crate::models::{AccountRegistry, Book, JournalLine, Money};

use super::posting::{PostingOutcome, PostingService};

/// An entry that passed validation
///
/// Only `validate_entry` can build one, so holding a `ValidatedEntry` proves
/// the lines are balanced, non-empty and reference known accounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedEntry {
    date: NaiveDate,
    lines: Vec<JournalLine>,
    total: Money,
}

impl ValidatedEntry {
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Effective lines; blank lines are already dropped
    pub fn lines(&self) -> &[JournalLine] {
        &self.lines
    }

    /// Total of either column
    pub fn total(&self) -> Money {
        self.total
    }

    pub(crate) fn into_parts(self) -> (NaiveDate, Vec<JournalLine>) {
        (self.date, self.lines)
    }
}

/// Check a proposed entry against the chart of accounts
pub fn validate_entry(
    registry: &AccountRegistry,
    lines: Vec<JournalLine>,
    date: Option<NaiveDate>,
) -> BookResult<ValidatedEntry> {
    let date = date.ok_or(BookError::MissingDate)?;

    let lines: Vec<JournalLine> = lines.into_iter().filter(|l| !l.is_blank()).collect();

    if let Some(line) = lines
        .iter()
        .find(|l| l.debit.is_negative() || l.credit.is_negative())
    {
        return Err(BookError::Validation(format!(
            "Line amounts cannot be negative (account {})",
            line.account_id
        )));
    }

    if lines.is_empty() {
        return Err(BookError::Empty);
    }

    if let Some(line) = lines.iter().find(|l| !registry.contains(&l.account_id)) {
        return Err(BookError::UnknownAccount(line.account_id.to_string()));
    }

    let debits = column_total(&lines, |l| l.debit, "Debit")?;
    let credits = column_total(&lines, |l| l.credit, "Credit")?;
    if debits != credits {
        return Err(BookError::Unbalanced { debits, credits });
    }

    Ok(ValidatedEntry {
        date,
        lines,
        total: debits,
    })
}

fn column_total(
    lines: &[JournalLine],
    side: impl Fn(&JournalLine) -> Money,
    label: &str,
) -> BookResult<Money> {
    lines
        .iter()
        .try_fold(Money::zero(), |total, line| total.checked_add(side(line)))
        .ok_or_else(|| BookError::Validation(format!("{} total is out of range", label)))
}

/// Input for recording a journal entry
#[derive(Debug, Clone, Default)]
pub struct NewJournalEntry {
    pub date: Option<NaiveDate>,
    pub reference: String,
    pub lines: Vec<JournalLine>,
}

impl NewJournalEntry {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date: Some(date),
            ..Self::default()
        }
    }

    pub fn reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = reference.into();
        self
    }

    pub fn line(mut self, line: JournalLine) -> Self {
        self.lines.push(line);
        self
    }
}

/// Service for recording and listing journal entries
pub struct JournalService<'a> {
    book: &'a mut Book,
}

impl<'a> JournalService<'a> {
    pub fn new(book: &'a mut Book) -> Self {
        Self { book }
    }

    /// Validate then post an entry
    pub fn record(&mut self, input: NewJournalEntry) -> BookResult<PostingOutcome> {
        let validated = validate_entry(&self.book.accounts, input.lines, input.date)?;
        PostingService::new(self.book).post(validated, input.reference)
    }

}
