//! Weight-limited inventory.

use ql_core::Item;
use serde::{Deserialize, Serialize};

use crate::error::{MechError, MechResult};

/// Pounds a character can carry.
pub const MAX_CARRY_WEIGHT: f64 = 150.0;

const WEIGHT_EPSILON: f64 = 1e-9;

/// An ordered list of items with a weight ceiling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    /// Held items, in pickup order.
    pub items: Vec<Item>,
    /// Maximum total weight.
    pub max_weight: f64,
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new(MAX_CARRY_WEIGHT)
    }
}

impl Inventory {
    /// An empty inventory.
    pub fn new(max_weight: f64) -> Self {
        Self {
            items: Vec::new(),
            max_weight,
        }
    }

    /// Total weight of held items.
    pub fn current_weight(&self) -> f64 {
        ql_core::item::total_weight(&self.items)
    }

    /// Whether `weight` more pounds fit.
    pub fn can_carry(&self, weight: f64) -> bool {
        self.current_weight() + weight <= self.max_weight + WEIGHT_EPSILON
    }

    /// Add an item, refusing if it would exceed the weight limit.
    pub fn try_add(&mut self, item: Item) -> MechResult<()> {
        if !self.can_carry(item.weight) {
            return Err(MechError::TooHeavy {
                item: item.name,
                weight: item.weight,
                capacity: self.max_weight,
            });
        }
        self.items.push(item);
        Ok(())
    }

    /// Remove the first item with this id.
    pub fn remove(&mut self, item_id: &str) -> MechResult<Item> {
        let idx = self
            .items
            .iter()
            .position(|i| i.id == item_id)
            .ok_or_else(|| MechError::ItemNotHeld(item_id.to_string()))?;
        Ok(self.items.remove(idx))
    }

    /// Find a held item by id.
    pub fn find(&self, item_id: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.id == item_id)
    }

    /// Number of held items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing is held.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
