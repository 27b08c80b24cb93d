//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod account;
pub mod export;
pub mod import;
pub mod inventory;
pub mod journal;
pub mod report;

pub use account::{handle_account_command, AccountCommands};
pub use export::{handle_export_command, ExportCommands, ExportFormat};
pub use import::{handle_import_command, read_export};
pub use inventory::{handle_inventory_command, InventoryCommands};
pub use journal::{handle_journal_command, JournalCommands};
pub use report::{handle_report_command, ReportCommands};
