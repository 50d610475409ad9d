//! Character classes, races, and names.

use crate::dice::{Die, RollSource};
use crate::error::{MechError, MechResult};

/// Weapon damage for classes missing from [`CLASSES`].
pub const DEFAULT_WEAPON_DAMAGE: &str = "1d6";

/// A playable class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassDef {
    /// Identifier used on the command line.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Hit die rolled for starting and level-up hit points.
    pub hit_die: Die,
    /// Starting gold.
    pub gold: u32,
    /// Catalog ids of the starting equipment.
    pub equipment: &'static [&'static str],
    /// Base weapon damage expression.
    pub weapon_damage: &'static str,
    /// Whether the class attacks with dexterity instead of strength.
    pub ranged: bool,
}

/// Every playable class.
pub const CLASSES: [ClassDef; 4] = [
    ClassDef {
        id: "fighter",
        name: "Fighter",
        hit_die: Die::D10,
        gold: 15,
        equipment: &["longsword", "chain-shirt", "health-potion"],
        weapon_damage: "1d8",
        ranged: false,
    },
    ClassDef {
        id: "wizard",
        name: "Wizard",
        hit_die: Die::D6,
        gold: 10,
        equipment: &["quarterstaff", "spellbook", "health-potion", "health-potion"],
        weapon_damage: "1d6",
        ranged: false,
    },
    ClassDef {
        id: "rogue",
        name: "Rogue",
        hit_die: Die::D8,
        gold: 25,
        equipment: &["dagger", "lockpicks", "health-potion"],
        weapon_damage: "1d4",
        ranged: true,
    },
    ClassDef {
        id: "cleric",
        name: "Cleric",
        hit_die: Die::D8,
        gold: 15,
        equipment: &["mace", "holy-symbol", "health-potion"],
        weapon_damage: "1d6",
        ranged: false,
    },
];

/// Playable races.
pub const RACES: [&str; 5] = ["Human", "Elf", "Dwarf", "Halfling", "Half-Orc"];

/// First names drawn for new characters.
pub const NAMES: [&str; 12] = [
    "Aldric", "Brenna", "Cael", "Dorian", "Elara", "Finn", "Gwen", "Haldor", "Isolde", "Jorah",
    "Kira", "Lysander",
];

/// Look up a class by id.
pub fn class_def(id: &str) -> MechResult<&'static ClassDef> {
    CLASSES
        .iter()
        .find(|c| c.id == id)
        .ok_or_else(|| MechError::UnknownClass(id.to_string()))
}

/// Base weapon damage for a class id.
pub fn base_weapon_damage(class_id: &str) -> &'static str {
    class_def(class_id).map_or(DEFAULT_WEAPON_DAMAGE, |c| c.weapon_damage)
}

fn pick<'a>(pool: &[&'a str], rng: &mut dyn RollSource) -> &'a str {
    let sides = u32::try_from(pool.len()).unwrap_or(u32::MAX);
    let idx = usize::try_from(rng.roll(sides)).unwrap_or(1) - 1;
    pool.get(idx).copied().unwrap_or_default()
}

/// Draw a random first name.
pub fn random_name(rng: &mut dyn RollSource) -> &'static str {
    pick(&NAMES, rng)
}

/// Draw a random race.
pub fn random_race(rng: &mut dyn RollSource) -> &'static str {
    pick(&RACES, rng)
}
