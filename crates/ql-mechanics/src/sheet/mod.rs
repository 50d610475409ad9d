//! The player character: ability scores, hit points, inventory, and
//! leveling.
//!
//! A [`Character`] is never mutated in place by game rules. [`Character::heal`],
//! [`Character::damage`], and [`Character::award_experience`] return a new
//! value.

pub mod class;
pub mod hit_points;
pub mod inventory;

pub use class::{CLASSES, ClassDef, class_def};
pub use hit_points::HitPoints;
pub use inventory::{Inventory, MAX_CARRY_WEIGHT};

use ql_core::Ability;
use serde::{Deserialize, Serialize};

use crate::dice::{RollSource, ability_modifier, roll_ability_scores};
use crate::error::{MechError, MechResult};

/// Experience needed per level: level `n` ends at `n * XP_PER_LEVEL`.
pub const XP_PER_LEVEL: u32 = 1000;

/// The six ability scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityScores {
    /// Strength.
    pub strength: i32,
    /// Dexterity.
    pub dexterity: i32,
    /// Constitution.
    pub constitution: i32,
    /// Intelligence.
    pub intelligence: i32,
    /// Wisdom.
    pub wisdom: i32,
    /// Charisma.
    pub charisma: i32,
}

impl AbilityScores {
    /// All six scores set to the same value.
    pub fn uniform(score: i32) -> Self {
        Self::from_array([score; 6])
    }

    /// Scores in [`Ability::ALL`] order.
    pub fn from_array(scores: [i32; 6]) -> Self {
        let [strength, dexterity, constitution, intelligence, wisdom, charisma] = scores;
        Self {
            strength,
            dexterity,
            constitution,
            intelligence,
            wisdom,
            charisma,
        }
    }

    /// Roll 3d6 for each score.
    pub fn roll(rng: &mut dyn RollSource) -> Self {
        Self::from_array(roll_ability_scores(rng))
    }

    /// Score for one ability.
    pub fn get(&self, ability: Ability) -> i32 {
        match ability {
            Ability::Strength => self.strength,
            Ability::Dexterity => self.dexterity,
            Ability::Constitution => self.constitution,
            Ability::Intelligence => self.intelligence,
            Ability::Wisdom => self.wisdom,
            Ability::Charisma => self.charisma,
        }
    }

    /// Modifier for one ability.
    pub fn modifier(&self, ability: Ability) -> i32 {
        ability_modifier(self.get(ability))
    }
}

/// Result of awarding experience.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LevelUp {
    /// Levels gained by this award.
    pub levels_gained: u32,
    /// Hit points added to max (and current).
    pub hp_gained: i32,
}

impl LevelUp {
    /// Whether any level was gained.
    pub fn leveled(&self) -> bool {
        self.levels_gained > 0
    }
}

/// A player character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    /// Name.
    pub name: String,
    /// Race label.
    pub race: String,
    /// Class id (see [`CLASSES`]).
    pub class_id: String,
    /// Class display name.
    pub class_name: String,
    /// Level, starting at 1.
    pub level: u32,
    /// Accumulated experience.
    pub experience: u32,
    /// Hit points.
    pub hit_points: HitPoints,
    /// Ability scores.
    pub abilities: AbilityScores,
    /// Carried items.
    pub inventory: Inventory,
    /// Gold pieces.
    pub gold: u32,
    /// Base armor class.
    pub armor_class: i32,
}

impl Character {
    /// Modifier for one ability.
    pub fn ability_modifier(&self, ability: Ability) -> i32 {
        self.abilities.modifier(ability)
    }

    /// Whether the character still stands.
    pub fn is_alive(&self) -> bool {
        self.hit_points.is_alive()
    }

    /// A copy with hit points restored by up to `amount`.
    pub fn heal(&self, amount: u32) -> Character {
        Character {
            hit_points: self.hit_points.heal(amount),
            ..self.clone()
        }
    }

    /// A copy with hit points reduced by up to `amount`.
    pub fn damage(&self, amount: u32) -> Character {
        Character {
            hit_points: self.hit_points.damage(amount),
            ..self.clone()
        }
    }

    /// Add experience, leveling up as many times as the total allows.
    ///
    /// Each level adds `max(1, hit die + CON modifier)` to max and current
    /// hit points.
    pub fn award_experience(
        mut self,
        xp: u32,
        rng: &mut dyn RollSource,
    ) -> (Character, LevelUp) {
        self.experience = self.experience.saturating_add(xp);
        let hit_die = class_def(&self.class_id).map_or(crate::dice::Die::D8, |c| c.hit_die);
        let con = self.ability_modifier(Ability::Constitution);
        let mut result = LevelUp::default();

        while self.experience >= self.level.saturating_mul(XP_PER_LEVEL) {
            let roll = i32::try_from(rng.roll(hit_die.sides())).unwrap_or(1);
            let gain = (roll + con).max(1);
            self.level += 1;
            self.hit_points = self.hit_points.increase_max(gain);
            result.levels_gained += 1;
            result.hp_gained += gain;
            tracing::debug!(level = self.level, gain, "level up");
        }

        (self, result)
    }
}

/// Create a level-1 character.
///
/// Scores are rolled when `scores` is `None`.
pub fn create_character(
    name: &str,
    race: &str,
    class_id: &str,
    scores: Option<AbilityScores>,
    rng: &mut dyn RollSource,
) -> MechResult<Character> {
    let class = class_def(class_id)?;
    let abilities = scores.unwrap_or_else(|| AbilityScores::roll(rng));

    let hit_die = i32::try_from(class.hit_die.sides()).unwrap_or(1);
    let max_hp = (hit_die + abilities.modifier(Ability::Constitution)).max(1);

    let mut inventory = Inventory::default();
    for id in class.equipment {
        let item = ql_core::content::items::item(id)
            .map_err(|_| MechError::UnknownItem((*id).to_string()))?;
        inventory.try_add(item)?;
    }

    Ok(Character {
        name: name.to_string(),
        race: race.to_string(),
        class_id: class.id.to_string(),
        class_name: class.name.to_string(),
        level: 1,
        experience: 0,
        hit_points: HitPoints::full(max_hp),
        abilities,
        inventory,
        gold: class.gold,
        armor_class: 10 + abilities.modifier(Ability::Dexterity),
    })
}
