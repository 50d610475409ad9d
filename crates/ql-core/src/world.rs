//! World templates and the per-game world they instantiate.
//!
//! A [`WorldTemplate`] is read-only content. Each playthrough calls
//! [`WorldTemplate::instantiate`] once and owns the resulting [`World`]
//! outright, so shop stock, ground items, and NPC hit points never leak
//! between games.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::location::Location;
use crate::npc::Npc;

/// Locations where the `rest` command is allowed.
pub const SAFE_REST_LOCATIONS: [&str; 2] = ["tavern", "temple"];

static STANDARD: LazyLock<WorldTemplate> = LazyLock::new(crate::content::standard_world);

/// Immutable world content: the location graph and NPC definitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldTemplate {
    /// Where new games begin.
    pub start_location: String,
    /// Every location.
    pub locations: Vec<Location>,
    /// Every NPC.
    pub npcs: Vec<Npc>,
}

impl WorldTemplate {
    /// The built-in reference world.
    pub fn standard() -> &'static WorldTemplate {
        &STANDARD
    }

    /// Load a template from JSON.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the template as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> CoreResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Fresh copies of every location, keyed by id, with visited flags cleared.
    pub fn initialize_locations(&self) -> BTreeMap<String, Location> {
        self.locations
            .iter()
            .map(|loc| {
                let mut loc = loc.clone();
                loc.visited = false;
                (loc.id.clone(), loc)
            })
            .collect()
    }

    /// Fresh copies of every NPC, keyed by id.
    pub fn initialize_npcs(&self) -> BTreeMap<String, Npc> {
        self.npcs
            .iter()
            .map(|npc| (npc.id.clone(), npc.clone()))
            .collect()
    }

    /// Produce an independent world for one playthrough.
    pub fn instantiate(&self) -> World {
        World {
            locations: self.initialize_locations(),
            npcs: self.initialize_npcs(),
        }
    }

    /// Check the content for broken references.
    pub fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        let location_ids: BTreeSet<&str> = self.locations.iter().map(|l| l.id.as_str()).collect();
        let npc_ids: BTreeSet<&str> = self.npcs.iter().map(|n| n.id.as_str()).collect();

        if location_ids.len() != self.locations.len() {
            issues.push(ValidationIssue::error("world", "duplicate location ids"));
        }
        if npc_ids.len() != self.npcs.len() {
            issues.push(ValidationIssue::error("world", "duplicate npc ids"));
        }
        if !location_ids.contains(self.start_location.as_str()) {
            issues.push(ValidationIssue::error(
                "world",
                format!("start location '{}' does not exist", self.start_location),
            ));
        }

        for loc in &self.locations {
            for (direction, target) in &loc.exits {
                if !location_ids.contains(target.as_str()) {
                    issues.push(ValidationIssue::error(
                        &loc.id,
                        format!("exit {direction} leads to unknown location '{target}'"),
                    ));
                }
            }
            for npc_id in &loc.npcs {
                if !npc_ids.contains(npc_id.as_str()) {
                    issues.push(ValidationIssue::error(
                        &loc.id,
                        format!("npc '{npc_id}' has no definition"),
                    ));
                }
            }
        }

        for npc in &self.npcs {
            validate_npc(npc, &mut issues);
        }

        issues
    }
}

fn validate_npc(npc: &Npc, issues: &mut Vec<ValidationIssue>) {
    if npc.hostile && npc.combat.is_none() {
        issues.push(ValidationIssue::error(&npc.id, "hostile npc has no combat stats"));
    }
    if npc
        .shop
        .as_ref()
        .is_some_and(|shop| shop.buy_multiplier < 0.0 || shop.sell_multiplier < 0.0)
    {
        issues.push(ValidationIssue::error(&npc.id, "shop multipliers must not be negative"));
    }
    if !npc.hostile && !npc.dialogue.is_empty() && npc.start_node().is_none() {
        issues.push(ValidationIssue::warning(
            &npc.id,
            "dialogue has no greeting, encounter, or combat node",
        ));
    }
    for node in &npc.dialogue {
        for next in node.options.iter().filter_map(|o| o.next.as_ref()) {
            if npc.dialogue_node(next).is_none() {
                issues.push(ValidationIssue::error(
                    &npc.id,
                    format!("node '{}' points to missing node '{next}'", node.id),
                ));
            }
        }
    }
}

/// A warning or error found while validating a world template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// The location or NPC id where the issue was found.
    pub entity: String,
    /// A human-readable description of the issue.
    pub message: String,
    /// Whether this is an error (true) or a warning (false).
    pub is_error: bool,
}

impl ValidationIssue {
    fn error(entity: &str, message: impl Into<String>) -> Self {
        Self {
            entity: entity.to_string(),
            message: message.into(),
            is_error: true,
        }
    }

    fn warning(entity: &str, message: impl Into<String>) -> Self {
        Self {
            entity: entity.to_string(),
            message: message.into(),
            is_error: false,
        }
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let level = if self.is_error { "error" } else { "warning" };
        write!(f, "{level}: {}: {}", self.entity, self.message)
    }
}

/// The mutable world owned by a single game.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct World {
    /// Locations keyed by id.
    pub locations: BTreeMap<String, Location>,
    /// NPCs keyed by id.
    pub npcs: BTreeMap<String, Npc>,
}

impl World {
    /// Look up a location.
    pub fn location(&self, id: &str) -> CoreResult<&Location> {
        self.locations
            .get(id)
            .ok_or_else(|| CoreError::UnknownLocation(id.to_string()))
    }

    /// Look up a location mutably.
    pub fn location_mut(&mut self, id: &str) -> CoreResult<&mut Location> {
        self.locations
            .get_mut(id)
            .ok_or_else(|| CoreError::UnknownLocation(id.to_string()))
    }

    /// Look up an NPC.
    pub fn npc(&self, id: &str) -> CoreResult<&Npc> {
        self.npcs
            .get(id)
            .ok_or_else(|| CoreError::UnknownNpc(id.to_string()))
    }

    /// NPCs present at a location, in the location's listing order.
    /// Ids without a definition are skipped.
    pub fn npcs_at(&self, location_id: &str) -> Vec<&Npc> {
        self.locations
            .get(location_id)
            .map(|loc| loc.npcs.iter().filter_map(|id| self.npcs.get(id)).collect())
            .unwrap_or_default()
    }

    /// Remove an NPC id from every location.
    pub fn remove_npc_everywhere(&mut self, npc_id: &str) {
        for loc in self.locations.values_mut() {
            loc.npcs.retain(|id| id != npc_id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialogue::{DialogueNode, DialogueOption};
    use crate::location::Direction;
    use crate::npc::CombatStats;

    fn tiny() -> WorldTemplate {
        WorldTemplate {
            start_location: "hall".to_string(),
            locations: vec![
                Location::new("hall", "Hall", "A hall.")
                    .with_exit(Direction::North, "yard")
                    .with_npc("rat"),
                Location::new("yard", "Yard", "A yard.")
                    .with_exit(Direction::South, "hall")
                    .with_npc("rat"),
            ],
            npcs: vec![Npc::new("rat", "Rat", "").hostile(CombatStats::new(2, 10, 0, "1d2"))],
        }
    }

    #[test]
    fn instances_are_independent() {
        let template = tiny();
        let mut a = template.instantiate();
        let b = template.instantiate();
        a.location_mut("hall").unwrap().visited = true;
        a.npcs.get_mut("rat").unwrap().name = "Big Rat".to_string();
        assert!(!b.location("hall").unwrap().visited);
        assert_eq!(b.npc("rat").unwrap().name, "Rat");
        assert_eq!(template.npcs[0].name, "Rat");
    }

    #[test]
    fn instantiate_clears_visited() {
        let mut template = tiny();
        template.locations[0].visited = true;
        assert!(!template.instantiate().location("hall").unwrap().visited);
    }

    #[test]
    fn remove_npc_everywhere_prunes_all_locations() {
        let mut world = tiny().instantiate();
        world.remove_npc_everywhere("rat");
        assert!(world.locations.values().all(|l| l.npcs.is_empty()));
        assert!(world.npc("rat").is_ok());
    }

    #[test]
    fn npcs_at_skips_missing() {
        let mut world = tiny().instantiate();
        world.location_mut("hall").unwrap().npcs.push("ghost".to_string());
        let ids: Vec<&str> = world.npcs_at("hall").iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["rat"]);
        assert!(world.npcs_at("nowhere").is_empty());
    }

    #[test]
    fn unknown_lookups_error() {
        let world = tiny().instantiate();
        assert!(matches!(world.location("cellar"), Err(CoreError::UnknownLocation(_))));
        assert!(matches!(world.npc("bob"), Err(CoreError::UnknownNpc(_))));
    }

    #[test]
    fn validate_reports_broken_references() {
        let mut template = tiny();
        template.start_location = "void".to_string();
        template.locations[0].exits.insert(Direction::Up, "attic".to_string());
        template.locations[1].npcs.push("ghost".to_string());
        template.npcs.push(Npc::new("bandit", "Bandit", "").with_node(
            DialogueNode::new("greeting", "Hm?")
                .with_option(DialogueOption::new("Hi").with_next("missing")),
        ));
        let mut hostile = Npc::new("ogre", "Ogre", "");
        hostile.hostile = true;
        template.npcs.push(hostile);

        let issues = template.validate();
        let text: Vec<String> = issues.iter().map(ToString::to_string).collect();
        assert!(text.iter().any(|t| t.contains("start location 'void'")));
        assert!(text.iter().any(|t| t.contains("unknown location 'attic'")));
        assert!(text.iter().any(|t| t.contains("npc 'ghost'")));
        assert!(text.iter().any(|t| t.contains("missing node 'missing'")));
        assert!(text.iter().any(|t| t.starts_with("error: ogre:")));
    }

    #[test]
    fn validate_warns_on_missing_start_node() {
        let mut template = tiny();
        template
            .npcs
            .push(Npc::new("mute", "Mute", "").with_node(DialogueNode::new("later", "...")));
        let issues = template.validate();
        assert_eq!(issues.len(), 1);
        assert!(!issues[0].is_error);
    }

    #[test]
    fn json_round_trip_preserves_template() {
        let template = tiny();
        let json = template.to_json_pretty().unwrap();
        assert_eq!(WorldTemplate::from_json(&json).unwrap(), template);
        assert!(matches!(WorldTemplate::from_json("{"), Err(CoreError::Json(_))));
    }
}
