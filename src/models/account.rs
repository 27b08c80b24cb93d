//! Account model
//!
//! Represents a chart-of-accounts entry together with its posted history.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{AccountId, JournalEntryId};
use super::money::Money;

/// Classification of an account in the chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    Asset,
    Liability,
    Equity,
    Revenue,
    Expense,
    ContraAsset,
    ContraExpense,
}

impl AccountType {
    /// The side on which balances of this type naturally increase
    pub fn default_normal_side(&self) -> NormalSide {
        match self {
            Self::Asset | Self::Expense => NormalSide::Debit,
            Self::Liability
            | Self::Equity
            | Self::Revenue
            | Self::ContraAsset
            | Self::ContraExpense => NormalSide::Credit,
        }
    }

    /// Parse account type from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "asset" | "assets" => Some(Self::Asset),
            "liability" | "liabilities" => Some(Self::Liability),
            "equity" => Some(Self::Equity),
            "revenue" | "income" => Some(Self::Revenue),
            "expense" | "expenses" => Some(Self::Expense),
            "contra_asset" | "contra-asset" => Some(Self::ContraAsset),
            "contra_expense" | "contra-expense" => Some(Self::ContraExpense),
            _ => None,
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Asset => "Asset",
            Self::Liability => "Liability",
            Self::Equity => "Equity",
            Self::Revenue => "Revenue",
            Self::Expense => "Expense",
            Self::ContraAsset => "Contra Asset",
            Self::ContraExpense => "Contra Expense",
        };
        f.pad(label)
    }
}

/// Debit or credit direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormalSide {
    Debit,
    Credit,
}

impl NormalSide {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "debit" | "dr" => Some(Self::Debit),
            "credit" | "cr" => Some(Self::Credit),
            _ => None,
        }
    }
}

impl fmt::Display for NormalSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Debit => "Debit",
            Self::Credit => "Credit",
        })
    }
}

/// Role an account plays in inventory side-effects of posting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountRole {
    #[default]
    None,
    InventoryPurchase,
    InventoryAsset,
    SalesRevenue,
    Cogs,
}

impl AccountRole {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "none" => Some(Self::None),
            "inventory_purchase" | "purchases" => Some(Self::InventoryPurchase),
            "inventory_asset" | "inventory" => Some(Self::InventoryAsset),
            "sales_revenue" | "sales" => Some(Self::SalesRevenue),
            "cogs" => Some(Self::Cogs),
            _ => None,
        }
    }
}

impl fmt::Display for AccountRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::None => "-",
            Self::InventoryPurchase => "Inventory Purchases",
            Self::InventoryAsset => "Inventory Asset",
            Self::SalesRevenue => "Sales Revenue",
            Self::Cogs => "Cost of Goods Sold",
        })
    }
}

/// One posted line in an account's history
///
/// Created only by the posting engine and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostingRecord {
    pub transaction_id: JournalEntryId,
    pub date: NaiveDate,
    pub debit: Money,
    pub credit: Money,
    #[serde(default)]
    pub memo: String,
}

/// A chart-of-accounts entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Stable chart code
    pub id: AccountId,

    /// Display name (e.g., "Cash")
    pub name: String,

    /// Type of account
    #[serde(rename = "type")]
    pub account_type: AccountType,

    /// Fixed at creation; decides the sign of `balance()`
    pub normal_side: NormalSide,

    #[serde(default)]
    pub role: AccountRole,

    /// Posted history, oldest first. Append-only.
    #[serde(default)]
    history: Vec<PostingRecord>,
}

impl Account {
    /// Create an account with the normal side implied by its type
    pub fn new(id: AccountId, name: impl Into<String>, account_type: AccountType) -> Self {
        Self {
            id,
            name: name.into(),
            account_type,
            normal_side: account_type.default_normal_side(),
            role: AccountRole::None,
            history: Vec::new(),
        }
    }

    pub fn with_role(mut self, role: AccountRole) -> Self {
        self.role = role;
        self
    }

    pub fn with_normal_side(mut self, normal_side: NormalSide) -> Self {
        self.normal_side = normal_side;
        self
    }

    pub fn history(&self) -> &[PostingRecord] {
        &self.history
    }

    /// Append a posted record; the registry is the only caller
    pub(crate) fn append_history(&mut self, record: PostingRecord) {
        self.history.push(record);
    }

    /// Sum of all debits posted to this account
    pub fn debit_total(&self) -> Money {
        self.history.iter().map(|h| h.debit).sum()
    }

    /// Sum of all credits posted to this account
    pub fn credit_total(&self) -> Money {
        self.history.iter().map(|h| h.credit).sum()
    }

    /// Net balance signed by the normal side
    pub fn balance(&self) -> Money {
        match self.normal_side {
            NormalSide::Debit => self.debit_total() - self.credit_total(),
            NormalSide::Credit => self.credit_total() - self.debit_total(),
        }
    }

    /// Validate the account
    pub fn validate(&self) -> Result<(), AccountValidationError> {
        if self.id.as_str().is_empty() {
            return Err(AccountValidationError::EmptyId);
        }

        if self.name.trim().is_empty() {
            return Err(AccountValidationError::EmptyName);
        }

        let name_chars = self.name.chars().count();
        if name_chars > 100 {
            return Err(AccountValidationError::NameTooLong(name_chars));
        }

        Ok(())
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.id, self.name)
    }
}

/// Validation errors for accounts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountValidationError {
    EmptyId,
    EmptyName,
    NameTooLong(usize),
}

impl fmt::Display for AccountValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "Account code cannot be empty"),
            Self::EmptyName => write!(f, "Account name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Account name too long ({} chars, max 100)", len)
            }
        }
    }
}

impl std::error::Error for AccountValidationError {}
