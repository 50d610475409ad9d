use serde::{Deserialize, Serialize};

use crate::ability::Ability;

/// A requirement to pass an ability check before an option is taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityCheck {
    /// Ability whose modifier is added to the d20.
    pub ability: Ability,
    /// Difficulty class to meet or beat.
    pub dc: i32,
}

/// Side effect applied to the game state when an option is chosen.
///
/// Effects are data interpreted by the action processor, so dialogue
/// content stays serializable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DialogueEffect {
    /// Nothing happens beyond the dialogue itself.
    #[default]
    None,
    /// List the NPC's shop stock with buy prices.
    OpenShop {
        /// The shopkeeper.
        npc_id: String,
    },
    /// List the player's items with the NPC's sell prices.
    ListSellables {
        /// The shopkeeper.
        npc_id: String,
    },
    /// Restore hit points.
    Heal {
        /// Hit points restored.
        amount: u32,
    },
    /// Give the player gold.
    GiveGold {
        /// Gold given.
        amount: u32,
    },
    /// Accept a quest. Quest tracking is not wired to any rule yet.
    AcceptQuest {
        /// The quest offered.
        quest_id: String,
    },
}

impl DialogueEffect {
    /// Whether this effect does nothing.
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// One selectable reply in a dialogue node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogueOption {
    /// The player's line.
    pub text: String,
    /// Node to continue to; `None` ends the conversation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    /// Side effect applied when the option is taken.
    #[serde(default, skip_serializing_if = "DialogueEffect::is_none")]
    pub effect: DialogueEffect,
    /// Ability check that must pass first.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check: Option<AbilityCheck>,
}

impl DialogueOption {
    /// An option that ends the conversation.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            next: None,
            effect: DialogueEffect::None,
            check: None,
        }
    }

    /// Continue to another node.
    pub fn with_next(mut self, node_id: impl Into<String>) -> Self {
        self.next = Some(node_id.into());
        self
    }

    /// Attach a side effect.
    pub fn with_effect(mut self, effect: DialogueEffect) -> Self {
        self.effect = effect;
        self
    }

    /// Require an ability check.
    pub fn with_check(mut self, ability: Ability, dc: i32) -> Self {
        self.check = Some(AbilityCheck { ability, dc });
        self
    }
}

/// A line of NPC dialogue and the replies available to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogueNode {
    /// Node id, unique within its NPC.
    pub id: String,
    /// What the NPC says.
    pub text: String,
    /// Available replies. Empty means the line closes the conversation.
    #[serde(default)]
    pub options: Vec<DialogueOption>,
}

impl DialogueNode {
    /// Create a node with no options.
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            options: Vec::new(),
        }
    }

    /// Append an option.
    pub fn with_option(mut self, option: DialogueOption) -> Self {
        self.options.push(option);
        self
    }
}
