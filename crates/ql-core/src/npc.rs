use serde::{Deserialize, Serialize};

use crate::dialogue::DialogueNode;
use crate::item::Item;

/// Node ids tried, in order, when a conversation starts.
pub const START_NODE_PREFERENCE: [&str; 3] = ["greeting", "encounter", "combat"];

/// Combat stat block for an NPC that can fight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatStats {
    /// Current hit points.
    pub hit_points: i32,
    /// Armor class.
    pub armor_class: i32,
    /// Bonus added to attack rolls.
    pub attack_bonus: i32,
    /// Damage expression, e.g. `1d6+2`.
    pub damage: String,
}

impl CombatStats {
    /// Create a stat block.
    pub fn new(hit_points: i32, armor_class: i32, attack_bonus: i32, damage: impl Into<String>) -> Self {
        Self {
            hit_points,
            armor_class,
            attack_bonus,
            damage: damage.into(),
        }
    }
}

/// A merchant's stock and pricing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shop {
    /// Items for sale.
    pub items: Vec<Item>,
    /// Multiplier applied to item value when the player buys.
    pub buy_multiplier: f64,
    /// Multiplier applied to item value when the player sells.
    pub sell_multiplier: f64,
}

impl Shop {
    /// Create a shop.
    pub fn new(items: Vec<Item>, buy_multiplier: f64, sell_multiplier: f64) -> Self {
        Self {
            items,
            buy_multiplier,
            sell_multiplier,
        }
    }

    /// Price the player pays, rounded up.
    pub fn buy_price(&self, item: &Item) -> u32 {
        (f64::from(item.value) * self.buy_multiplier).ceil().max(0.0) as u32
    }

    /// Price the player receives, rounded down.
    pub fn sell_price(&self, item: &Item) -> u32 {
        (f64::from(item.value) * self.sell_multiplier).floor().max(0.0) as u32
    }

    /// Find stock by id.
    pub fn item(&self, item_id: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.id == item_id)
    }
}

/// A non-player character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Npc {
    /// Stable kebab-case identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Description shown by `look`.
    pub description: String,
    /// Hostile NPCs attack on sight and never converse.
    #[serde(default)]
    pub hostile: bool,
    /// Stat block, if the NPC can fight.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub combat: Option<CombatStats>,
    /// Whether the NPC hands out quests.
    #[serde(default)]
    pub quest_giver: bool,
    /// Shop, if the NPC trades.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shop: Option<Shop>,
    /// Dialogue nodes keyed by their `id`.
    #[serde(default)]
    pub dialogue: Vec<DialogueNode>,
}

impl Npc {
    /// Create a friendly NPC with no stats, shop, or dialogue.
    pub fn new(id: impl Into<String>, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            hostile: false,
            combat: None,
            quest_giver: false,
            shop: None,
            dialogue: Vec::new(),
        }
    }

    /// Make the NPC hostile with the given stats.
    pub fn hostile(mut self, stats: CombatStats) -> Self {
        self.hostile = true;
        self.combat = Some(stats);
        self
    }

    /// Give the NPC combat stats without making it hostile.
    pub fn with_combat(mut self, stats: CombatStats) -> Self {
        self.combat = Some(stats);
        self
    }

    /// Mark as a quest giver.
    pub fn quest_giver(mut self) -> Self {
        self.quest_giver = true;
        self
    }

    /// Attach a shop.
    pub fn with_shop(mut self, shop: Shop) -> Self {
        self.shop = Some(shop);
        self
    }

    /// Append a dialogue node.
    pub fn with_node(mut self, node: DialogueNode) -> Self {
        self.dialogue.push(node);
        self
    }

    /// Look up a dialogue node.
    pub fn dialogue_node(&self, node_id: &str) -> Option<&DialogueNode> {
        self.dialogue.iter().find(|n| n.id == node_id)
    }

    /// The node a conversation opens with.
    pub fn start_node(&self) -> Option<&DialogueNode> {
        START_NODE_PREFERENCE
            .iter()
            .find_map(|id| self.dialogue_node(id))
    }

    /// Whether the NPC is hostile and still standing.
    pub fn is_live_hostile(&self) -> bool {
        self.hostile && self.combat.as_ref().is_some_and(|c| c.hit_points > 0)
    }
}
