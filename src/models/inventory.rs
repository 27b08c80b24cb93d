//! Inventory model
//!
//! Stock items hold FIFO cost layers, oldest first. A layer is removed as soon
//! as its quantity reaches zero, so no item ever carries an empty layer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{InventoryItemId, JournalEntryId};
use super::money::Money;
use super::quantity::Quantity;

/// What created a cost layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerSource {
    /// Entered directly, outside any journal entry
    Manual,
    /// Created by posting the given journal entry
    Journal(JournalEntryId),
}

impl fmt::Display for LayerSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Manual => write!(f, "manual"),
            Self::Journal(id) => write!(f, "{}", id),
        }
    }
}

/// A batch of stock at a fixed unit cost
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostLayer {
    pub qty: Quantity,
    pub unit_cost: Money,
    pub date: NaiveDate,
    pub source: LayerSource,
}

impl CostLayer {
    pub fn value(&self) -> Money {
        self.unit_cost.times(self.qty)
    }
}

/// A stock item and its remaining cost layers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: InventoryItemId,
    pub name: String,
    #[serde(default)]
    layers: Vec<CostLayer>,
}

impl InventoryItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: InventoryItemId::new(),
            name: name.into(),
            layers: Vec::new(),
        }
    }

    /// Remaining layers, oldest first
    pub fn layers(&self) -> &[CostLayer] {
        &self.layers
    }

    /// Append a layer as the newest one
    pub fn push_layer(&mut self, layer: CostLayer) {
        if layer.qty.is_positive() {
            self.layers.push(layer);
        }
    }

    /// Take up to `wanted` from the oldest layers and return what was taken
    pub fn take_fifo(&mut self, wanted: Quantity) -> Quantity {
        let mut remaining = wanted;

        for layer in self.layers.iter_mut() {
            if !remaining.is_positive() {
                break;
            }
            let take = layer.qty.min(remaining);
            layer.qty -= take;
            remaining -= take;
        }

        self.layers.retain(|l| l.qty.is_positive());
        wanted - remaining
    }

    pub fn quantity_on_hand(&self) -> Quantity {
        self.layers.iter().map(|l| l.qty).sum()
    }

    /// Sum of `qty * unit_cost` over remaining layers
    pub fn current_value(&self) -> Money {
        self.layers.iter().map(CostLayer::value).sum()
    }
}

/// Outcome of relieving stock from inventory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsumptionResult {
    pub requested: Quantity,
    pub consumed: Quantity,
    pub fully_covered: bool,
    /// Part of the request no layer could cover
    pub shortfall: Quantity,
}

impl ConsumptionResult {
    pub fn new(requested: Quantity, consumed: Quantity) -> Self {
        let shortfall = requested - consumed;
        Self {
            requested,
            consumed,
            fully_covered: !shortfall.is_positive(),
            shortfall,
        }
    }
}
