use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::item::Item;

/// Compass and vertical directions. Ordered so exit listings are stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// North.
    North,
    /// South.
    South,
    /// East.
    East,
    /// West.
    West,
    /// Up.
    Up,
    /// Down.
    Down,
}

impl Direction {
    /// All directions in listing order.
    pub const ALL: [Direction; 6] = [
        Self::North,
        Self::South,
        Self::East,
        Self::West,
        Self::Up,
        Self::Down,
    ];

    /// Parse a direction from a full name or single-letter alias.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "n" | "north" => Some(Self::North),
            "s" | "south" => Some(Self::South),
            "e" | "east" => Some(Self::East),
            "w" | "west" => Some(Self::West),
            "u" | "up" => Some(Self::Up),
            "d" | "down" => Some(Self::Down),
            _ => None,
        }
    }

    /// Lowercase name of the direction.
    pub fn name(self) -> &'static str {
        match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
            Self::Up => "up",
            Self::Down => "down",
        }
    }

    /// The direction pointing back the way you came.
    pub fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A place in the world graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Stable kebab-case identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Room description shown on arrival and by `look`.
    pub description: String,
    /// Exits keyed by direction. Only valid exits are present.
    #[serde(default)]
    pub exits: BTreeMap<Direction, String>,
    /// Ids of NPCs currently here.
    #[serde(default)]
    pub npcs: Vec<String>,
    /// Items lying on the ground.
    #[serde(default)]
    pub items: Vec<Item>,
    /// Whether the player has been here.
    #[serde(default)]
    pub visited: bool,
}

impl Location {
    /// Create an empty location.
    pub fn new(id: impl Into<String>, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            exits: BTreeMap::new(),
            npcs: Vec::new(),
            items: Vec::new(),
            visited: false,
        }
    }

    /// Add an exit.
    pub fn with_exit(mut self, direction: Direction, target: impl Into<String>) -> Self {
        self.exits.insert(direction, target.into());
        self
    }

    /// Place an NPC here.
    pub fn with_npc(mut self, npc_id: impl Into<String>) -> Self {
        self.npcs.push(npc_id.into());
        self
    }

    /// Place an item on the ground.
    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    /// Place several items on the ground.
    pub fn with_items(mut self, items: Vec<Item>) -> Self {
        self.items.extend(items);
        self
    }

    /// The location id reached by going `direction`, if any.
    pub fn connected_location(&self, direction: Direction) -> Option<&str> {
        self.exits.get(&direction).map(String::as_str)
    }

    /// Directions with a defined exit, in listing order.
    pub fn available_directions(&self) -> Vec<Direction> {
        self.exits.keys().copied().collect()
    }

    /// Whether an NPC with this id is present.
    pub fn has_npc(&self, npc_id: &str) -> bool {
        self.npcs.iter().any(|n| n == npc_id)
    }

    /// Find an item on the ground by id.
    pub fn item(&self, item_id: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.id == item_id)
    }

    /// Remove the first item with this id from the ground and return it.
    pub fn take_item(&mut self, item_id: &str) -> Option<Item> {
        let idx = self.items.iter().position(|i| i.id == item_id)?;
        Some(self.items.remove(idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemCategory;

    fn crossroads() -> Location {
        Location::new("crossroads", "Crossroads", "Four roads meet.")
            .with_exit(Direction::West, "mill")
            .with_exit(Direction::North, "hill")
            .with_item(Item::new("stick", "Stick", ItemCategory::Misc))
    }

    #[test]
    fn direction_aliases() {
        assert_eq!(Direction::parse("n"), Some(Direction::North));
        assert_eq!(Direction::parse("down"), Some(Direction::Down));
        assert_eq!(Direction::parse("northeast"), None);
        assert_eq!(Direction::Up.opposite(), Direction::Down);
    }

    #[test]
    fn connected_and_available() {
        let loc = crossroads();
        assert_eq!(loc.connected_location(Direction::West), Some("mill"));
        assert_eq!(loc.connected_location(Direction::East), None);
        assert_eq!(loc.available_directions(), vec![Direction::North, Direction::West]);
    }

    #[test]
    fn take_item_removes_once() {
        let mut loc = crossroads();
        assert!(loc.take_item("stick").is_some());
        assert!(loc.take_item("stick").is_none());
        assert!(loc.items.is_empty());
    }
}
