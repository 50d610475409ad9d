use std::fmt;

use serde::{Deserialize, Serialize};

/// Broad category of an item, used for display and for the `use` rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    /// Swords, staves, daggers.
    Weapon,
    /// Worn protection.
    Armor,
    /// Consumable healing draughts.
    Potion,
    /// Adventuring gear with no combat use.
    Tool,
    /// Valuables worth selling.
    Treasure,
    /// Anything else.
    Misc,
}

impl fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Weapon => "weapon",
            Self::Armor => "armor",
            Self::Potion => "potion",
            Self::Tool => "tool",
            Self::Treasure => "treasure",
            Self::Misc => "misc",
        };
        write!(f, "{s}")
    }
}

/// A catalog item. Items are values: moving one between containers is a
/// removal from one list and a push onto another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Stable kebab-case identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Flavor text shown by `look` and `inventory`.
    pub description: String,
    /// Weight in pounds.
    pub weight: f64,
    /// Base value in gold.
    pub value: u32,
    /// Category tag.
    pub category: ItemCategory,
    /// Whether `use` does anything with this item.
    #[serde(default)]
    pub usable: bool,
}

impl Item {
    /// Create a non-usable item with zero weight and value.
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: ItemCategory) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            weight: 0.0,
            value: 0,
            category,
            usable: false,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the weight in pounds.
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// Set the base value in gold.
    pub fn with_value(mut self, value: u32) -> Self {
        self.value = value;
        self
    }

    /// Mark the item as usable.
    pub fn usable(mut self) -> Self {
        self.usable = true;
        self
    }

    /// Whether this is a healing potion.
    pub fn is_potion(&self) -> bool {
        self.category == ItemCategory::Potion
    }
}

/// Sum of the weights of a slice of items.
pub fn total_weight(items: &[Item]) -> f64 {
    items.iter().map(|i| i.weight).sum()
}
