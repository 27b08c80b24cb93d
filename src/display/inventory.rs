//! Inventory display formatting

use crate::models::{InventoryItem, Money};

/// Format items with their cost layers, oldest first
pub fn format_inventory(items: &[InventoryItem]) -> String {
    if items.is_empty() {
        return "No inventory items.\n".to_string();
    }

    let mut output = String::new();
    for item in items {
        output.push_str(&format!(
            "{} ({})  on hand {}  value {}\n",
            item.name,
            item.id,
            item.quantity_on_hand(),
            item.current_value()
        ));

        if item.layers().is_empty() {
            output.push_str("    (no layers)\n");
        }
        for layer in item.layers() {
            output.push_str(&format!(
                "    {}  {:>10} @ {:>12}  = {:>14}  {}\n",
                layer.date.format("%Y-%m-%d"),
                layer.qty,
                layer.unit_cost,
                layer.value(),
                layer.source
            ));
        }
    }

    let total: Money = items.iter().map(InventoryItem::current_value).sum();
    output.push_str(&format!("\nTotal FIFO value: {}\n", total));

    output
}
