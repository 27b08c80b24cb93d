//! Account service
//!
//! Provides business logic for the chart of accounts: creation with a fresh
//! code, lookup by code or name, and balance queries.

use tracing::info;

use crate::error::{BookError, BookResult};
use crate::models::{Account, AccountId, AccountRole, AccountType, Book, Money, NormalSide};
use crate::reports::AccountLedgerReport;

/// Input for creating a new account
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub name: String,
    pub account_type: AccountType,
    pub role: AccountRole,
    /// Overrides the side implied by `account_type`
    pub normal_side: Option<NormalSide>,
    /// Explicit chart code; a fresh one is assigned when absent
    pub id: Option<AccountId>,
}

impl NewAccount {
    pub fn new(name: impl Into<String>, account_type: AccountType) -> Self {
        Self {
            name: name.into(),
            account_type,
            role: AccountRole::None,
            normal_side: None,
            id: None,
        }
    }

    pub fn role(mut self, role: AccountRole) -> Self {
        self.role = role;
        self
    }

    pub fn normal_side(mut self, side: NormalSide) -> Self {
        self.normal_side = Some(side);
        self
    }

    pub fn id(mut self, id: impl Into<AccountId>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// Service for account management
pub struct AccountService<'a> {
    book: &'a mut Book,
}

impl<'a> AccountService<'a> {
    pub fn new(book: &'a mut Book) -> Self {
        Self { book }
    }

    /// Create an account whose normal side follows its type
    pub fn create(&mut self, name: &str, account_type: AccountType) -> BookResult<Account> {
        self.create_with(NewAccount::new(name, account_type))
    }

    /// Create an account from full input
    pub fn create_with(&mut self, input: NewAccount) -> BookResult<Account> {
        let name = input.name.trim();
        if name.is_empty() {
            return Err(BookError::Validation(
                "Account name cannot be empty".into(),
            ));
        }

        if self.book.accounts.find_by_name(name).is_some() {
            return Err(BookError::Duplicate {
                entity_type: "Account",
                identifier: name.to_string(),
            });
        }

        let id = input.id.unwrap_or_else(|| self.book.accounts.next_id());
        if self.book.accounts.contains(&id) {
            return Err(BookError::Duplicate {
                entity_type: "Account",
                identifier: id.to_string(),
            });
        }

        let mut account = Account::new(id, name, input.account_type).with_role(input.role);
        if let Some(side) = input.normal_side {
            account = account.with_normal_side(side);
        }

        account
            .validate()
            .map_err(|e| BookError::Validation(e.to_string()))?;

        self.book.accounts.insert(account.clone());
        info!(
            account = %account.id,
            name = %account.name,
            kind = %account.account_type,
            "created account"
        );

        Ok(account)
    }

    /// Find an account by code, then by name
    pub fn find(&self, identifier: &str) -> Option<&Account> {
        self.book
            .accounts
            .find(&AccountId::from(identifier))
            .or_else(|| self.book.accounts.find_by_name(identifier))
    }

    /// Find an account by name (case-insensitive)
    pub fn find_by_name(&self, name: &str) -> Option<&Account> {
        self.book.accounts.find_by_name(name)
    }

    /// Get all accounts in chart order
    pub fn list(&self) -> Vec<&Account> {
        self.book.accounts.iter().collect()
    }

    /// Balance of an account, signed by its normal side
    pub fn balance(&self, id: &AccountId) -> BookResult<Money> {
        self.book
            .accounts
            .find(id)
            .map(Account::balance)
            .ok_or_else(|| BookError::account_not_found(id.to_string()))
    }

    /// Posted history of an account with its running balance
    pub fn ledger(&self, id: &AccountId) -> BookResult<AccountLedgerReport> {
        AccountLedgerReport::generate(self.book, id)
    }
}
