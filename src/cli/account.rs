//! Account CLI commands
//!
//! Implements CLI commands for the chart of accounts.

use clap::Subcommand;

use crate::display::account::{format_account_details, format_account_list};
use crate::error::{BookError, BookResult};
use crate::models::{Account, AccountRole, AccountType, NormalSide};
use crate::services::{AccountService, NewAccount};
use crate::storage::BookStore;

/// Account subcommands
#[derive(Subcommand, Debug)]
pub enum AccountCommands {
    /// Create a new account
    Create {
        /// Account name
        name: String,
        /// Account type (asset, liability, equity, revenue, expense, contra_asset, contra_expense)
        #[arg(short = 't', long, default_value = "asset")]
        account_type: String,
        /// Inventory role (inventory_purchase, inventory_asset, sales_revenue, cogs)
        #[arg(short, long)]
        role: Option<String>,
        /// Override the normal side implied by the type (debit or credit)
        #[arg(long)]
        normal_side: Option<String>,
        /// Explicit account code; the next free code is used otherwise
        #[arg(short, long)]
        code: Option<String>,
    },
    /// List the chart of accounts
    List {
        /// Only accounts of this type
        #[arg(short = 't', long)]
        account_type: Option<String>,
    },
    /// Show account details
    Show {
        /// Account code or name
        account: String,
    },
}

/// Handle an account command
pub fn handle_account_command(store: &mut BookStore, cmd: AccountCommands) -> BookResult<()> {
    match cmd {
        AccountCommands::Create {
            name,
            account_type,
            role,
            normal_side,
            code,
        } => {
            let mut input = NewAccount::new(name, parse_account_type(&account_type)?);

            if let Some(role) = role {
                input = input.role(AccountRole::parse(&role).ok_or_else(|| {
                    BookError::Validation(format!(
                        "Invalid role: '{}'. Valid roles: none, inventory_purchase, inventory_asset, sales_revenue, cogs",
                        role
                    ))
                })?);
            }
            if let Some(side) = normal_side {
                input = input.normal_side(NormalSide::parse(&side).ok_or_else(|| {
                    BookError::Validation(format!(
                        "Invalid normal side: '{}'. Use debit or credit",
                        side
                    ))
                })?);
            }
            if let Some(code) = code {
                input = input.id(code);
            }

            let account = AccountService::new(store.book_mut()).create_with(input)?;
            store.save()?;

            println!("Created account: {}", account);
            println!("  Type: {}", account.account_type);
            println!("  Normal Side: {}", account.normal_side);
            if account.role != AccountRole::None {
                println!("  Role: {}", account.role);
            }
        }

        AccountCommands::List { account_type } => {
            let filter = account_type.as_deref().map(parse_account_type).transpose()?;
            let book = store.book();
            let accounts: Vec<&Account> = book
                .accounts
                .iter()
                .filter(|a| filter.map_or(true, |t| a.account_type == t))
                .collect();
            print!("{}", format_account_list(&accounts));
        }

        AccountCommands::Show { account } => {
            let service = AccountService::new(store.book_mut());
            let found = service
                .find(&account)
                .ok_or_else(|| BookError::account_not_found(&account))?;
            print!("{}", format_account_details(found));
        }
    }

    Ok(())
}

fn parse_account_type(s: &str) -> BookResult<AccountType> {
    AccountType::parse(s).ok_or_else(|| {
        BookError::Validation(format!(
            "Invalid account type: '{}'. Valid types: asset, liability, equity, revenue, expense, contra_asset, contra_expense",
            s
        ))
    })
}
