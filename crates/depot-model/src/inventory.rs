use serde::{Deserialize, Serialize};

use crate::ItemId;

/// One depot stock line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: ItemId,
    pub name: String,
    pub category: String,
    pub unit_price: f64,
    pub quantity: f64,
    pub unit: String,
    /// ISO date string as decoded from the source; empty when unknown.
    pub expiry_date: String,
}

impl InventoryItem {
    /// Current value of this stock line.
    pub fn stock_value(&self) -> f64 {
        self.unit_price * self.quantity
    }
}
