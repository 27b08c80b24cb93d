//! Service layer for ledgerbook
//!
//! The service layer provides business logic on top of the `Book`: account
//! management, entry validation and posting, and inventory costing. Every
//! service borrows the book it works on.

pub mod account;
pub mod inventory;
pub mod journal;
pub mod posting;

pub use account::{AccountService, NewAccount};
pub use inventory::InventoryService;
pub use journal::{validate_entry, JournalService, NewJournalEntry, ValidatedEntry};
pub use posting::{PostingOutcome, PostingService};
