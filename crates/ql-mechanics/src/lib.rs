//! Game mechanics for Questline.
//!
//! Provides dice rolling behind the [`RollSource`] trait, the character
//! model (ability scores, hit points, inventory, leveling), and the
//! turn-based combat engine. Every function that needs randomness takes
//! `&mut dyn RollSource`, so callers choose between a seeded
//! [`rand::rngs::StdRng`] and a [`ScriptedRolls`] replay.

pub mod combat;
pub mod dice;
pub mod error;
pub mod sheet;

pub use combat::{CombatState, Enemy, PLAYER_ID, Rewards};
pub use dice::{DamageExpr, Die, RollSource, ScriptedRolls, ability_modifier};
pub use error::{MechError, MechResult};
pub use sheet::{AbilityScores, Character, HitPoints, Inventory, LevelUp, create_character};
