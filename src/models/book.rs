//! The book: all state one bookkeeping session owns
//!
//! Every service borrows a `Book` explicitly; there is no shared global.
//! Its serialized form is the persisted document
//! `{accounts, journals, inventory, settings}`.

use serde::{Deserialize, Serialize};

use super::account::{Account, AccountRole, AccountType};
use super::inventory::InventoryItem;
use super::journal::JournalEntry;
use super::registry::AccountRegistry;

/// Costing method for perpetual inventory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum InventoryMethod {
    #[default]
    Fifo,
}

/// Settings stored inside the book document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSettings {
    #[serde(default)]
    pub inventory_method: InventoryMethod,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    #[serde(default)]
    pub accounts: AccountRegistry,

    /// Posted entries in posting order
    #[serde(default)]
    pub journals: Vec<JournalEntry>,

    /// Stock items in creation order
    #[serde(default)]
    pub inventory: Vec<InventoryItem>,

    #[serde(default)]
    pub settings: BookSettings,
}

impl Book {
    /// An empty book with no accounts
    pub fn new() -> Self {
        Self::default()
    }

    /// Posted entries, most recent first
    pub fn recent_journals(&self, limit: usize) -> Vec<&JournalEntry> {
        self.journals.iter().rev().take(limit).collect()
    }

    /// A book seeded with the standard trading chart of accounts
    pub fn with_default_chart() -> Self {
        let mut book = Self::new();
        for account in default_chart() {
            book.accounts.insert(account);
        }
        book
    }
}

fn default_chart() -> Vec<Account> {
    vec![
        Account::new("1000".into(), "Cash", AccountType::Asset),
        Account::new("1100".into(), "Inventory", AccountType::Asset)
            .with_role(AccountRole::InventoryAsset),
        Account::new("2000".into(), "Suppliers", AccountType::Liability),
        Account::new("3000".into(), "Capital", AccountType::Equity),
        Account::new("4000".into(), "Sales", AccountType::Revenue)
            .with_role(AccountRole::SalesRevenue),
        Account::new("5000".into(), "Purchases", AccountType::Expense)
            .with_role(AccountRole::InventoryPurchase),
        Account::new("5100".into(), "Cost of Goods Sold", AccountType::Expense)
            .with_role(AccountRole::Cogs),
        Account::new("1600".into(), "Accumulated Depreciation", AccountType::ContraAsset),
        Account::new("6100".into(), "Depreciation Expense", AccountType::Expense),
    ]
}
