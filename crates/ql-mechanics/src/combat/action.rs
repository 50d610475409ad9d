//! Attack, damage, and flee resolution.

use ql_core::Ability;

use crate::dice::{RollSource, d20, roll_damage_expression};
use crate::error::MechResult;
use crate::sheet::Character;
use crate::sheet::class::{base_weapon_damage, class_def};

/// Total needed on d20 + DEX to escape.
pub const FLEE_DC: i32 = 12;

/// Armor class bonus while defending.
pub const DEFEND_AC_BONUS: i32 = 2;

/// The result of one attack roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackRoll {
    /// The natural d20.
    pub roll: u32,
    /// Bonus added to the roll.
    pub bonus: i32,
    /// Roll plus bonus.
    pub total: i32,
    /// Whether the attack connects.
    pub hit: bool,
    /// Natural 20.
    pub critical: bool,
    /// Natural 1.
    pub critical_fail: bool,
}

/// Roll d20 + `bonus` against `target_ac`. A natural 20 always hits.
pub fn resolve_attack(bonus: i32, target_ac: i32, rng: &mut dyn RollSource) -> AttackRoll {
    let roll = d20(rng);
    let natural = i32::try_from(roll).unwrap_or(1);
    let total = natural + bonus;
    let critical = roll == 20;
    AttackRoll {
        roll,
        bonus,
        total,
        hit: total >= target_ac || critical,
        critical,
        critical_fail: roll == 1,
    }
}

/// Proficiency bonus for a level: +2 at level 1, +1 every four levels.
pub fn proficiency_bonus(level: u32) -> i32 {
    i32::try_from(level.saturating_sub(1) / 4).unwrap_or(0) + 2
}

fn attack_ability(character: &Character) -> Ability {
    if class_def(&character.class_id).is_ok_and(|c| c.ranged) {
        Ability::Dexterity
    } else {
        Ability::Strength
    }
}

/// Attack bonus: STR (or DEX for ranged classes) modifier plus proficiency.
pub fn attack_bonus(character: &Character) -> i32 {
    character.ability_modifier(attack_ability(character)) + proficiency_bonus(character.level)
}

/// Weapon damage expression: the class die plus the attack ability modifier.
pub fn weapon_damage(character: &Character) -> String {
    let base = base_weapon_damage(&character.class_id);
    format!("{base}{:+}", character.ability_modifier(attack_ability(character)))
}

/// Roll damage, doubling the total on a critical hit.
pub fn roll_weapon_damage(expr: &str, critical: bool, rng: &mut dyn RollSource) -> MechResult<u32> {
    let damage = roll_damage_expression(expr, rng)?;
    Ok(if critical { damage.saturating_mul(2) } else { damage })
}

/// The result of trying to flee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FleeAttempt {
    /// The natural d20.
    pub roll: u32,
    /// Roll plus DEX modifier.
    pub total: i32,
    /// Whether the total met [`FLEE_DC`].
    pub success: bool,
}

/// Roll d20 + DEX against [`FLEE_DC`].
pub fn attempt_flee(character: &Character, rng: &mut dyn RollSource) -> FleeAttempt {
    let roll = d20(rng);
    let total = i32::try_from(roll).unwrap_or(1) + character.ability_modifier(Ability::Dexterity);
    FleeAttempt {
        roll,
        total,
        success: total >= FLEE_DC,
    }
}
