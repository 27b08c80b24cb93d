//! Journal entry model
//!
//! A journal entry is a dated set of debit and credit lines. Once posted it is
//! kept unchanged in the book's journal.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::{AccountId, JournalEntryId};
use super::money::Money;
use super::quantity::Quantity;

/// One line of a journal entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalLine {
    pub account_id: AccountId,
    #[serde(default)]
    pub debit: Money,
    #[serde(default)]
    pub credit: Money,
    #[serde(default)]
    pub memo: String,
    /// Units purchased (inventory purchase line) or relieved (COGS line)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Quantity>,
}

impl JournalLine {
    pub fn debit(account_id: impl Into<AccountId>, amount: Money) -> Self {
        Self {
            account_id: account_id.into(),
            debit: amount,
            credit: Money::zero(),
            memo: String::new(),
            quantity: None,
        }
    }

    pub fn credit(account_id: impl Into<AccountId>, amount: Money) -> Self {
        Self {
            account_id: account_id.into(),
            debit: Money::zero(),
            credit: amount,
            memo: String::new(),
            quantity: None,
        }
    }

    pub fn with_memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = memo.into();
        self
    }

    pub fn with_quantity(mut self, quantity: Quantity) -> Self {
        self.quantity = Some(quantity);
        self
    }

    /// True when the line carries no economic effect
    pub fn is_blank(&self) -> bool {
        self.debit.is_zero() && self.credit.is_zero()
    }
}

/// A posted journal entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: JournalEntryId,
    pub date: NaiveDate,
    #[serde(default)]
    pub reference: String,
    pub lines: Vec<JournalLine>,
    pub posted: bool,
}

impl JournalEntry {
    pub fn total_debits(&self) -> Money {
        self.lines.iter().map(|l| l.debit).sum()
    }

    pub fn total_credits(&self) -> Money {
        self.lines.iter().map(|l| l.credit).sum()
    }

    pub fn is_balanced(&self) -> bool {
        self.total_debits() == self.total_credits()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_constructors() {
        let line = JournalLine::debit("1000", Money::from_cents(500)).with_memo("deposit");
        assert_eq!(line.account_id.as_str(), "1000");
        assert_eq!(line.debit.cents(), 500);
        assert!(line.credit.is_zero());
        assert_eq!(line.memo, "deposit");
        assert!(!line.is_blank());

        assert!(JournalLine::credit("3000", Money::zero()).is_blank());
    }

    #[test]
    fn test_entry_totals() {
        let entry = JournalEntry {
            id: JournalEntryId::new(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            reference: "J-1".into(),
            lines: vec![
                JournalLine::debit("1000", Money::from_cents(5000)),
                JournalLine::credit("3000", Money::from_cents(5000)),
            ],
            posted: true,
        };
        assert_eq!(entry.total_debits().cents(), 5000);
        assert_eq!(entry.total_credits().cents(), 5000);
        assert!(entry.is_balanced());
    }

    #[test]
    fn test_quantity_skipped_when_absent() {
        let line = JournalLine::debit("1000", Money::from_cents(100));
        let json = serde_json::to_string(&line).unwrap();
        assert!(!json.contains("quantity"));

        let line = line.with_quantity(Quantity::from_units(4));
        let json = serde_json::to_string(&line).unwrap();
        let back: JournalLine = serde_json::from_str(&json).unwrap();
        assert_eq!(back.quantity, Some(Quantity::from_units(4)));
    }
}
