use serde::{Deserialize, Serialize};

/// What a quest objective asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectiveKind {
    /// Defeat an NPC.
    Defeat,
    /// Carry an item.
    Collect,
    /// Reach a location.
    Visit,
    /// Speak with an NPC.
    TalkTo,
}

/// Lifecycle of a quest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestStatus {
    /// Offered but not taken.
    #[default]
    Available,
    /// In progress.
    Active,
    /// Done.
    Completed,
    /// Can no longer be completed.
    Failed,
}

/// A single step of a quest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestObjective {
    /// Kind of objective.
    pub kind: ObjectiveKind,
    /// Target id (NPC, item, or location).
    pub target: String,
    /// How many are needed.
    pub required: u32,
    /// How many are done.
    #[serde(default)]
    pub progress: u32,
}

impl QuestObjective {
    /// Whether progress has reached the requirement.
    pub fn is_complete(&self) -> bool {
        self.progress >= self.required
    }
}

/// A quest record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quest {
    /// Stable identifier.
    pub id: String,
    /// Title.
    pub title: String,
    /// Description.
    pub description: String,
    /// NPC who gives the quest.
    pub giver: String,
    /// Steps to finish.
    #[serde(default)]
    pub objectives: Vec<QuestObjective>,
    /// Current status.
    #[serde(default)]
    pub status: QuestStatus,
}
