use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};

use ledgerbook::cli::{
    handle_account_command, handle_export_command, handle_import_command,
    handle_inventory_command, handle_journal_command, handle_report_command,
};
use ledgerbook::config::{paths::LedgerPaths, settings::Settings};
use ledgerbook::logging;
use ledgerbook::storage::BookStore;

#[derive(Parser)]
#[command(
    name = "ledgerbook",
    version,
    about = "Double-entry bookkeeping with FIFO inventory costing",
    long_about = "ledgerbook keeps a double-entry journal for a small trading business. \
                  Every entry must balance before it is posted, purchases and sales \
                  move FIFO inventory layers, and the trial balance, income statement \
                  and balance sheet are derived from the posted history."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Chart of accounts commands
    #[command(subcommand)]
    Account(ledgerbook::cli::AccountCommands),

    /// Journal posting commands
    #[command(subcommand, alias = "je")]
    Journal(ledgerbook::cli::JournalCommands),

    /// Inventory layer commands
    #[command(subcommand, alias = "inv")]
    Inventory(ledgerbook::cli::InventoryCommands),

    /// Financial reports
    #[command(subcommand)]
    Report(ledgerbook::cli::ReportCommands),

    /// Export the book
    #[command(subcommand)]
    Export(ledgerbook::cli::ExportCommands),

    /// Replace the book with a JSON or YAML export
    Import {
        /// Path to the export file
        path: PathBuf,
    },

    /// Initialize a new book with the default chart of accounts
    Init,

    /// Show current configuration and paths
    Config,

    /// Discard all entries and restore the default chart of accounts
    Reset {
        /// Confirm the reset
        #[arg(long)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths, settings and logging
    let paths = LedgerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    logging::init(&settings.log_level);

    let mut store = BookStore::open(paths.clone())?;

    match cli.command {
        Some(Commands::Account(cmd)) => {
            handle_account_command(&mut store, cmd)?;
        }
        Some(Commands::Journal(cmd)) => {
            handle_journal_command(&mut store, cmd)?;
        }
        Some(Commands::Inventory(cmd)) => {
            handle_inventory_command(&mut store, &settings, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&store, cmd)?;
        }
        Some(Commands::Export(cmd)) => {
            handle_export_command(&store, cmd)?;
        }
        Some(Commands::Import { path }) => {
            handle_import_command(&mut store, &path)?;
        }
        Some(Commands::Init) => {
            println!("Initializing ledgerbook at: {}", paths.base_dir().display());
            if !store.is_persisted() {
                store.save()?;
            }
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Default chart of accounts:");
            for account in store.book().accounts.iter() {
                println!("  {}  {} ({})", account.id, account.name, account.account_type);
            }
            println!();
            println!("Run 'ledgerbook journal sample' to post a capital deposit.");
        }
        Some(Commands::Config) => {
            println!("ledgerbook Configuration");
            println!("========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Book file:      {}", paths.book_file().display());
            println!();
            println!("Settings:");
            println!("  Log level:              {}", settings.log_level);
            println!("  Default inventory item: {}", settings.default_inventory_item);
        }
        Some(Commands::Reset { yes }) => {
            if !yes {
                bail!("Refusing to reset without --yes");
            }
            store.reset()?;
            println!("Book reset to the default chart of accounts.");
        }
        None => {
            println!("ledgerbook - double-entry bookkeeping with FIFO inventory");
            println!();
            println!("Run 'ledgerbook --help' for usage information.");
        }
    }

    Ok(())
}
