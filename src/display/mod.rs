//! Display formatting for terminal output
//!
//! Provides utilities for formatting accounts, journal entries and inventory
//! for terminal display.

pub mod account;
pub mod inventory;
pub mod journal;

pub use account::{format_account_details, format_account_list};
pub use inventory::format_inventory;
pub use journal::{format_journal, format_posting_outcome};
