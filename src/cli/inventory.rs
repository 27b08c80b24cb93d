//! Inventory CLI commands

use chrono::Local;
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::inventory::format_inventory;
use crate::error::{BookError, BookResult};
use crate::models::{Money, Quantity};
use crate::services::InventoryService;
use crate::storage::BookStore;

use super::journal::parse_date;

/// Inventory subcommands
#[derive(Subcommand, Debug)]
pub enum InventoryCommands {
    /// Add a cost layer to an item by hand
    Add {
        /// Quantity received
        quantity: String,
        /// Cost per unit
        unit_cost: String,
        /// Item id or name (defaults to the configured default item)
        #[arg(short, long)]
        item: Option<String>,
        /// Receipt date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List items with their FIFO layers
    List,
}

/// Handle an inventory command
pub fn handle_inventory_command(
    store: &mut BookStore,
    settings: &Settings,
    cmd: InventoryCommands,
) -> BookResult<()> {
    match cmd {
        InventoryCommands::Add {
            quantity,
            unit_cost,
            item,
            date,
        } => {
            let qty = Quantity::parse(&quantity).map_err(|e| {
                BookError::Validation(format!("Invalid quantity: {}", e))
            })?;
            let unit_cost = Money::parse(&unit_cost).map_err(|e| {
                BookError::Validation(format!("Invalid unit cost: {}", e))
            })?;
            let date = match date {
                Some(d) => parse_date(&d)?,
                None => Local::now().date_naive(),
            };
            let item = item.unwrap_or_else(|| settings.default_inventory_item.clone());

            let updated = InventoryService::new(store.book_mut()).add_layer(&item, qty, unit_cost, date)?;
            store.save()?;

            println!(
                "Added {} @ {} to {} (on hand {}, value {})",
                qty,
                unit_cost,
                updated.name,
                updated.quantity_on_hand(),
                updated.current_value()
            );
        }

        InventoryCommands::List => {
            print!("{}", format_inventory(&store.book().inventory));
        }
    }

    Ok(())
}
