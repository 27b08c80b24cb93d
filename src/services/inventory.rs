//! Inventory costing service (perpetual FIFO)
//!
//! Layers are consumed across items in item creation order and, within an
//! item, oldest layer first. A layer still holding quantity is never skipped
//! in favour of a newer one.

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::error::{BookError, BookResult};
use crate::models::{
    Book, ConsumptionResult, CostLayer, InventoryItem, InventoryItemId, LayerSource, Money,
    Quantity,
};

/// Name of the item journal purchases are booked to when none exists yet
pub const DEFAULT_ITEM_NAME: &str = "General Merchandise";

/// Service for inventory layers and valuation
pub struct InventoryService<'a> {
    book: &'a mut Book,
}

impl<'a> InventoryService<'a> {
    pub fn new(book: &'a mut Book) -> Self {
        Self { book }
    }

    /// Add a manually entered layer to an item, creating the item if needed
    ///
    /// `item` is matched against item ids first, then names (case-insensitive).
    pub fn add_layer(
        &mut self,
        item: &str,
        qty: Quantity,
        unit_cost: Money,
        date: NaiveDate,
    ) -> BookResult<InventoryItem> {
        if !qty.is_positive() {
            return Err(BookError::Validation(
                "Layer quantity must be greater than zero".into(),
            ));
        }
        if unit_cost.is_negative() {
            return Err(BookError::Validation(
                "Layer unit cost cannot be negative".into(),
            ));
        }

        let name = item.trim();
        let name = if name.is_empty() { DEFAULT_ITEM_NAME } else { name };
        let index = self.find_or_create(name);

        let layer = CostLayer {
            qty,
            unit_cost,
            date,
            source: LayerSource::Manual,
        };
        let target = &mut self.book.inventory[index];
        target.push_layer(layer);
        debug!(item = %target.id, %qty, %unit_cost, "added inventory layer");

        Ok(target.clone())
    }

    /// Relieve a monetary amount from inventory, reading it as a quantity
    pub fn consume(&mut self, amount: Money) -> ConsumptionResult {
        self.consume_quantity(Quantity::from_amount(amount))
    }

    /// Relieve `wanted` from inventory, oldest layers first
    ///
    /// Whatever could be taken stays taken; an uncovered remainder is reported
    /// as a shortfall rather than an error.
    pub fn consume_quantity(&mut self, wanted: Quantity) -> ConsumptionResult {
        let result = consume_fifo(&mut self.book.inventory, wanted);
        if !result.fully_covered {
            warn!(
                requested = %result.requested,
                shortfall = %result.shortfall,
                "inventory did not cover cost of goods sold"
            );
        }
        result
    }

    /// Find an item by id or case-insensitive name
    pub fn find(&self, identifier: &str) -> Option<&InventoryItem> {
        find_index(&self.book.inventory, identifier).map(|i| &self.book.inventory[i])
    }

    /// FIFO value of one item
    pub fn current_value(&self, identifier: &str) -> BookResult<Money> {
        self.find(identifier)
            .map(InventoryItem::current_value)
            .ok_or_else(|| BookError::item_not_found(identifier))
    }

    /// FIFO value of all stock
    pub fn total_value(&self) -> Money {
        self.book.inventory.iter().map(InventoryItem::current_value).sum()
    }

    fn find_or_create(&mut self, identifier: &str) -> usize {
        if let Some(index) = find_index(&self.book.inventory, identifier) {
            return index;
        }
        let item = InventoryItem::new(identifier);
        debug!(item = %item.id, name = %item.name, "created inventory item");
        self.book.inventory.push(item);
        self.book.inventory.len() - 1
    }
}

fn find_index(items: &[InventoryItem], identifier: &str) -> Option<usize> {
    let identifier = identifier.trim();
    if let Ok(id) = identifier.parse::<InventoryItemId>() {
        if let Some(index) = items.iter().position(|i| i.id == id) {
            return Some(index);
        }
    }
    let lower = identifier.to_lowercase();
    items.iter().position(|i| i.name.to_lowercase() == lower)
}

/// Walk items in order taking from their oldest layers until `wanted` is met
pub(crate) fn consume_fifo(items: &mut [InventoryItem], wanted: Quantity) -> ConsumptionResult {
    let mut remaining = wanted;

    for item in items.iter_mut() {
        if !remaining.is_positive() {
            break;
        }
        remaining -= item.take_fifo(remaining);
    }

    ConsumptionResult::new(wanted, wanted - remaining)
}

/// Append a layer produced by posting to the first item, creating it if needed
pub(crate) fn push_journal_layer(book: &mut Book, layer: CostLayer) -> InventoryItemId {
    if book.inventory.is_empty() {
        book.inventory.push(InventoryItem::new(DEFAULT_ITEM_NAME));
    }
    let item = &mut book.inventory[0];
    item.push_layer(layer);
    item.id
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    fn units(n: i64) -> Quantity {
        Quantity::from_units(n)
    }

    fn book_with_layers(layers: &[(i64, i64)]) -> Book {
        let mut book = Book::new();
        let mut service = InventoryService::new(&mut book);
        for (qty, cost) in layers {
            service
                .add_layer("Widget", units(*qty), Money::from_cents(*cost), day())
                .unwrap();
        }
        book
    }

    fn remaining(book: &Book) -> Vec<(Quantity, i64)> {
        book.inventory
            .iter()
            .flat_map(|i| i.layers().iter().map(|l| (l.qty, l.unit_cost.cents())))
            .collect()
    }

    #[test]
    fn test_add_layer_creates_item_once() {
        let book = book_with_layers(&[(5, 1000), (3, 1200)]);
        assert_eq!(book.inventory.len(), 1);
        assert_eq!(book.inventory[0].name, "Widget");
        assert_eq!(book.inventory[0].layers().len(), 2);
        assert_eq!(book.inventory[0].layers()[0].source, LayerSource::Manual);
    }

    #[test]
    fn test_add_layer_by_id() {
        let mut book = book_with_layers(&[(5, 1000)]);
        let id = book.inventory[0].id.as_uuid().to_string();

        let item = InventoryService::new(&mut book)
            .add_layer(&id, units(1), Money::from_cents(900), day())
            .unwrap();
        assert_eq!(item.layers().len(), 2);
        assert_eq!(book.inventory.len(), 1);
    }

    #[test]
    fn test_add_layer_rejects_bad_input() {
        let mut book = Book::new();
        let mut service = InventoryService::new(&mut book);

        let zero = service.add_layer("Widget", Quantity::zero(), Money::from_cents(100), day());
        assert!(matches!(zero, Err(BookError::Validation(_))));

        let negative = service.add_layer("Widget", units(1), Money::from_cents(-1), day());
        assert!(matches!(negative, Err(BookError::Validation(_))));

        assert!(book.inventory.is_empty());
    }

    #[test]
    fn test_fifo_order_preserved() {
        let mut book = book_with_layers(&[(5, 1000), (3, 1200)]);

        let result = InventoryService::new(&mut book).consume_quantity(units(6));
        assert!(result.fully_covered);
        assert!(result.shortfall.is_zero());
        assert_eq!(remaining(&book), vec![(units(2), 1200)]);
    }

    #[test]
    fn test_fifo_partial_oldest_layer() {
        let mut book = book_with_layers(&[(5, 1000), (3, 1200)]);

        InventoryService::new(&mut book).consume_quantity(units(3));
        assert_eq!(remaining(&book), vec![(units(2), 1000), (units(3), 1200)]);
    }

    #[test]
    fn test_shortfall_reported() {
        let mut book = book_with_layers(&[(5, 1000), (3, 1200)]);

        let result = InventoryService::new(&mut book).consume_quantity(units(20));
        assert!(!result.fully_covered);
        assert_eq!(result.consumed, units(8));
        assert_eq!(result.shortfall, units(12));
        assert!(remaining(&book).is_empty());
    }

    #[test]
    fn test_consume_walks_items_in_order() {
        let mut book = Book::new();
        let mut service = InventoryService::new(&mut book);
        service.add_layer("A", units(2), Money::from_cents(100), day()).unwrap();
        service.add_layer("B", units(4), Money::from_cents(200), day()).unwrap();

        let result = service.consume_quantity(units(3));
        assert!(result.fully_covered);
        assert!(book.inventory[0].layers().is_empty());
        assert_eq!(book.inventory[1].layers()[0].qty, units(3));
    }

    #[test]
    fn test_consume_amount_reads_amount_as_quantity() {
        let mut book = book_with_layers(&[(10, 200)]);

        let result = InventoryService::new(&mut book).consume(Money::from_cents(500));
        assert!(result.fully_covered);
        assert_eq!(remaining(&book), vec![(units(5), 200)]);
    }

    #[test]
    fn test_consume_on_empty_inventory() {
        let mut book = Book::new();
        let result = InventoryService::new(&mut book).consume_quantity(units(1));
        assert!(!result.fully_covered);
        assert_eq!(result.shortfall, units(1));
    }

    #[test]
    fn test_current_value() {
        let mut book = book_with_layers(&[(5, 1000), (3, 1200)]);
        let service = InventoryService::new(&mut book);
        assert_eq!(service.current_value("widget").unwrap().cents(), 8600);
        assert_eq!(service.total_value().cents(), 8600);
        assert!(service.current_value("gadget").unwrap_err().is_not_found());
    }

    #[test]
    fn test_push_journal_layer_targets_first_item() {
        let mut book = Book::new();
        let layer = CostLayer {
            qty: units(1),
            unit_cost: Money::from_cents(100),
            date: day(),
            source: LayerSource::Manual,
        };
        let first = push_journal_layer(&mut book, layer.clone());
        assert_eq!(book.inventory[0].name, DEFAULT_ITEM_NAME);

        book.inventory.push(InventoryItem::new("Other"));
        let second = push_journal_layer(&mut book, layer);
        assert_eq!(first, second);
        assert_eq!(book.inventory[0].layers().len(), 2);
    }
}
