//! JSON Export functionality
//!
//! Exports the complete book to JSON with schema versioning, and reads such an
//! export back after checking its integrity.

use std::collections::HashSet;
use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{BookError, BookResult};
use crate::models::{AccountRegistry, Book, BookSettings, InventoryItem, JournalEntry, Money};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full book export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub accounts: AccountRegistry,
    pub journals: Vec<JournalEntry>,
    pub inventory: Vec<InventoryItem>,
    #[serde(default)]
    pub settings: BookSettings,

    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub account_count: usize,
    pub journal_count: usize,
    pub inventory_item_count: usize,

    /// Date range of journal entries (earliest)
    pub earliest_entry: Option<String>,

    /// Date range of journal entries (latest)
    pub latest_entry: Option<String>,
}

impl FullExport {
    /// Create a new full export from a book
    pub fn from_book(book: &Book) -> Self {
        let metadata = ExportMetadata {
            account_count: book.accounts.len(),
            journal_count: book.journals.len(),
            inventory_item_count: book.inventory.len(),
            earliest_entry: book.journals.iter().map(|j| j.date).min().map(|d| d.to_string()),
            latest_entry: book.journals.iter().map(|j| j.date).max().map(|d| d.to_string()),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            accounts: book.accounts.clone(),
            journals: book.journals.clone(),
            inventory: book.inventory.clone(),
            settings: book.settings.clone(),
            metadata,
        }
    }

    /// Validate the export structure
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }

        let mut account_ids = HashSet::new();
        for account in self.accounts.iter() {
            if !account_ids.insert(&account.id) {
                return Err(format!("Duplicate account code {}", account.id));
            }
            account
                .validate()
                .map_err(|e| format!("Account {}: {}", account.id, e))?;
        }

        let entry_ids: HashSet<_> = self.journals.iter().map(|j| j.id).collect();

        for entry in &self.journals {
            if let Some(line) = entry
                .lines
                .iter()
                .find(|l| l.debit.is_negative() || l.credit.is_negative())
            {
                return Err(format!(
                    "Journal entry {} has a negative amount on account {}",
                    entry.id, line.account_id
                ));
            }
            let debits = total_cents(entry.lines.iter().map(|l| l.debit));
            let credits = total_cents(entry.lines.iter().map(|l| l.credit));
            if debits != credits {
                return Err(format!(
                    "Journal entry {} is not balanced: debits {}, credits {} (cents)",
                    entry.id, debits, credits
                ));
            }
            if let Some(line) = entry
                .lines
                .iter()
                .find(|l| !account_ids.contains(&l.account_id))
            {
                return Err(format!(
                    "Journal entry {} references unknown account {}",
                    entry.id, line.account_id
                ));
            }
        }

        let (mut history_debits, mut history_credits) = (0i128, 0i128);
        for account in self.accounts.iter() {
            for record in account.history() {
                if !entry_ids.contains(&record.transaction_id) {
                    return Err(format!(
                        "Account {} has a posting for unknown journal entry {}",
                        account.id, record.transaction_id
                    ));
                }
                if record.debit.is_negative() || record.credit.is_negative() {
                    return Err(format!(
                        "Account {} has a negative posting for journal entry {}",
                        account.id, record.transaction_id
                    ));
                }
                history_debits += i128::from(record.debit.cents());
                history_credits += i128::from(record.credit.cents());
            }
        }
        if history_debits != history_credits {
            return Err(format!(
                "Posted history is not balanced: debits {}, credits {} (cents)",
                history_debits, history_credits
            ));
        }

        for item in &self.inventory {
            for layer in item.layers() {
                if !layer.qty.is_positive() {
                    return Err(format!(
                        "Inventory item {} has a layer with non-positive quantity {}",
                        item.name, layer.qty
                    ));
                }
                if layer.unit_cost.is_negative() {
                    return Err(format!(
                        "Inventory item {} has a layer with negative unit cost {}",
                        item.name, layer.unit_cost
                    ));
                }
            }
        }

        Ok(())
    }

    /// Convert back into a book
    pub fn into_book(self) -> Book {
        Book {
            accounts: self.accounts,
            journals: self.journals,
            inventory: self.inventory,
            settings: self.settings,
        }
    }
}

/// Column total without overflow for amounts read from a file
fn total_cents(amounts: impl Iterator<Item = Money>) -> i128 {
    amounts.map(|m| i128::from(m.cents())).sum()
}

/// Export the full book to JSON
pub fn export_full_json<W: Write>(book: &Book, writer: &mut W, pretty: bool) -> BookResult<()> {
    let export = FullExport::from_book(book);

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| BookError::Export(e.to_string()))?;

    Ok(())
}

/// Import from a JSON export
pub fn import_from_json(json_str: &str) -> BookResult<FullExport> {
    let export: FullExport =
        serde_json::from_str(json_str).map_err(|e| BookError::Import(e.to_string()))?;

    export.validate().map_err(BookError::Import)?;

    Ok(export)
}
