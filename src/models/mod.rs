//! Core data models for ledgerbook
//!
//! This module contains the data structures of the bookkeeping domain:
//! accounts and their posted history, journal entries, inventory cost layers,
//! and the `Book` that owns them all.

pub mod account;
pub mod book;
pub mod ids;
pub mod inventory;
pub mod journal;
pub mod money;
pub mod quantity;
pub mod registry;

pub use account::{Account, AccountRole, AccountType, NormalSide, PostingRecord};
pub use book::{Book, BookSettings, InventoryMethod};
pub use ids::{AccountId, InventoryItemId, JournalEntryId};
pub use inventory::{ConsumptionResult, CostLayer, InventoryItem, LayerSource};
pub use journal::{JournalEntry, JournalLine};
pub use money::Money;
pub use quantity::Quantity;
pub use registry::AccountRegistry;
