use ql_core::Direction;
use serde::{Deserialize, Serialize};

/// Option index that ends the current conversation.
pub const END_CONVERSATION: i32 = -1;

/// A typed player intent, produced by the parser and consumed by the
/// action processor.
///
/// The JSON form is `{"type": "MOVE", "direction": "north"}` and so on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    rename_all = "SCREAMING_SNAKE_CASE",
    rename_all_fields = "camelCase"
)]
pub enum Action {
    /// Walk through an exit.
    Move {
        /// Which exit.
        direction: Direction,
    },
    /// Start a conversation.
    Talk {
        /// Who to talk to.
        npc_id: String,
    },
    /// Choose a dialogue option (zero-based), or [`END_CONVERSATION`].
    DialogueSelect {
        /// Zero-based option index.
        option_index: i32,
    },
    /// Pick up an item from the ground.
    Take {
        /// Item to take.
        item_id: String,
    },
    /// Put down a held item.
    Drop {
        /// Item to drop.
        item_id: String,
    },
    /// Use a held item.
    Use {
        /// Item to use.
        item_id: String,
    },
    /// Attack an NPC or a live enemy.
    Attack {
        /// Who to attack.
        target_id: String,
    },
    /// Raise your guard until your next turn.
    Defend,
    /// Try to escape combat.
    Flee,
    /// Buy an item from a shop.
    Buy {
        /// Item to buy.
        item_id: String,
        /// Shopkeeper.
        npc_id: String,
    },
    /// Sell a held item to a shop.
    Sell {
        /// Item to sell.
        item_id: String,
        /// Shopkeeper.
        npc_id: String,
    },
    /// Rest to full health.
    Rest,
    /// Describe the current location.
    Look,
    /// List carried items.
    Inventory,
    /// Show the character sheet.
    Stats,
    /// Save the game.
    SaveGame,
    /// Load a saved game.
    LoadGame {
        /// Save slot.
        save_id: String,
    },
    /// List commands.
    Help,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_matches_action_vocabulary() {
        let json = serde_json::to_string(&Action::DialogueSelect { option_index: 2 }).unwrap();
        assert_eq!(json, r#"{"type":"DIALOGUE_SELECT","optionIndex":2}"#);

        let json = serde_json::to_string(&Action::Buy {
            item_id: "torch".to_string(),
            npc_id: "tobias".to_string(),
        })
        .unwrap();
        assert_eq!(json, r#"{"type":"BUY","itemId":"torch","npcId":"tobias"}"#);

        let json = serde_json::to_string(&Action::SaveGame).unwrap();
        assert_eq!(json, r#"{"type":"SAVE_GAME"}"#);
    }

    #[test]
    fn json_parses_back() {
        let action: Action = serde_json::from_str(r#"{"type":"MOVE","direction":"down"}"#).unwrap();
        assert_eq!(action, Action::Move { direction: Direction::Down });
        let action: Action = serde_json::from_str(r#"{"type":"LOAD_GAME","saveId":"slot1"}"#).unwrap();
        assert_eq!(action, Action::LoadGame { save_id: "slot1".to_string() });
    }
}
