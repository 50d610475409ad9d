//! World data for Questline: items, locations, NPCs, and dialogue trees.
//!
//! Everything in this crate is plain data. A [`WorldTemplate`] is an
//! immutable table of content; [`WorldTemplate::instantiate`] produces an
//! owned [`World`] that a single playthrough can mutate freely without
//! touching the template or any other playthrough.

/// The six character abilities.
pub mod ability;
/// The built-in reference world.
pub mod content;
/// Dialogue nodes, options, ability checks, and side effects.
pub mod dialogue;
/// Error types used throughout the crate.
pub mod error;
/// Item catalog entries.
pub mod item;
/// Locations and compass directions.
pub mod location;
/// Non-player characters, combat stats, and shops.
pub mod npc;
/// Quest records.
pub mod quest;
/// World templates and per-game world instances.
pub mod world;

/// Re-export ability types.
pub use ability::Ability;
/// Re-export dialogue types.
pub use dialogue::{AbilityCheck, DialogueEffect, DialogueNode, DialogueOption};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export item types.
pub use item::{Item, ItemCategory};
/// Re-export location types.
pub use location::{Direction, Location};
/// Re-export NPC types.
pub use npc::{CombatStats, Npc, Shop};
/// Re-export quest types.
pub use quest::{ObjectiveKind, Quest, QuestObjective, QuestStatus};
/// Re-export world model types.
pub use world::{ValidationIssue, World, WorldTemplate};
