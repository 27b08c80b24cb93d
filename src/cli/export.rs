//! CLI commands for data export
//!
//! Provides commands for exporting the book in various formats.

use std::path::PathBuf;

use clap::{Subcommand, ValueEnum};

use crate::error::BookResult;
use crate::export::{csv, json, yaml};
use crate::storage::BookStore;

use super::report::create_output;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (journal lines only)
    Csv,
    /// JSON format (full book)
    Json,
    /// YAML format (full book, human-readable)
    Yaml,
}

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export the whole book to a file
    All {
        /// Output file path
        output: PathBuf,

        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Export journal lines to CSV
    Journal {
        /// Output file path
        output: PathBuf,
    },

    /// Export the trial balance to CSV
    TrialBalance {
        /// Output file path
        output: PathBuf,
    },

    /// Show export information without writing files
    Info,
}

/// Handle export commands
pub fn handle_export_command(store: &BookStore, cmd: ExportCommands) -> BookResult<()> {
    let book = store.book();

    match cmd {
        ExportCommands::All {
            output,
            format,
            pretty,
        } => {
            let mut writer = create_output(&output)?;
            match format {
                ExportFormat::Csv => {
                    csv::export_journal_csv(book, &mut writer)?;
                    println!("Journal exported to: {}", output.display());
                    println!("Note: CSV format exports journal lines only. Use JSON or YAML for a full export.");
                }
                ExportFormat::Json => {
                    json::export_full_json(book, &mut writer, pretty)?;
                    println!("Full book exported to: {}", output.display());
                }
                ExportFormat::Yaml => {
                    yaml::export_full_yaml(book, &mut writer)?;
                    println!("Full book exported to: {}", output.display());
                }
            }
        }

        ExportCommands::Journal { output } => {
            let mut writer = create_output(&output)?;
            csv::export_journal_csv(book, &mut writer)?;
            println!(
                "Exported {} journal entries to: {}",
                book.journals.len(),
                output.display()
            );
        }

        ExportCommands::TrialBalance { output } => {
            let mut writer = create_output(&output)?;
            csv::export_trial_balance_csv(book, &mut writer)?;
            println!("Trial balance exported to: {}", output.display());
        }

        ExportCommands::Info => {
            let export = json::FullExport::from_book(book);

            println!("Export Information");
            println!("==================\n");

            println!("Schema Version: {}", export.schema_version);
            println!("App Version:    {}", export.app_version);
            println!();

            println!("Data Summary:");
            println!("  Accounts:        {}", export.metadata.account_count);
            println!("  Journal entries: {}", export.metadata.journal_count);
            println!("  Inventory items: {}", export.metadata.inventory_item_count);

            if let Some(earliest) = &export.metadata.earliest_entry {
                println!("\nEntry Date Range:");
                println!("  Earliest: {}", earliest);
            }
            if let Some(latest) = &export.metadata.latest_entry {
                println!("  Latest:   {}", latest);
            }

            println!("\nExamples:");
            println!("  ledgerbook export all book.json --format json --pretty");
            println!("  ledgerbook export journal journal.csv");
        }
    }

    Ok(())
}
