//! Account registry
//!
//! Holds the chart of accounts in creation order. Accounts are permanent:
//! there is no removal, so a code handed out once is never handed out again.

use serde::{Deserialize, Serialize};

use super::account::{Account, PostingRecord};
use super::ids::AccountId;

/// Code given to the first account of an empty chart
const FIRST_ACCOUNT_CODE: u64 = 1000;

/// Gap between generated account codes
const ACCOUNT_CODE_STEP: u64 = 10;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountRegistry {
    accounts: Vec<Account>,
}

impl AccountRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find(&self, id: &AccountId) -> Option<&Account> {
        self.accounts.iter().find(|a| &a.id == id)
    }

    /// Case-insensitive lookup by display name
    pub fn find_by_name(&self, name: &str) -> Option<&Account> {
        let name_lower = name.trim().to_lowercase();
        self.accounts
            .iter()
            .find(|a| a.name.to_lowercase() == name_lower)
    }

    pub fn contains(&self, id: &AccountId) -> bool {
        self.position(id).is_some()
    }

    pub(crate) fn position(&self, id: &AccountId) -> Option<usize> {
        self.accounts.iter().position(|a| &a.id == id)
    }

    /// Next free numeric code: highest numeric code plus the step
    pub fn next_id(&self) -> AccountId {
        let next = self
            .accounts
            .iter()
            .filter_map(|a| a.id.number())
            .max()
            .map(|max| max + ACCOUNT_CODE_STEP)
            .unwrap_or(FIRST_ACCOUNT_CODE);
        AccountId::new(next.to_string())
    }

    /// Add an account; returns false if its code is already taken
    pub(crate) fn insert(&mut self, account: Account) -> bool {
        if self.contains(&account.id) {
            return false;
        }
        self.accounts.push(account);
        true
    }

    /// Append a record to the account at a position resolved by `position`
    pub(crate) fn append_history(&mut self, index: usize, record: PostingRecord) {
        self.accounts[index].append_history(record);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Account> {
        self.accounts.iter()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
