//! Turn-based combat state machine.
//!
//! Live enemies are snapshots cloned from NPC templates when combat starts.
//! The turn order is decided once by initiative; defeated enemies are
//! spliced out of both the enemy list and the turn order, and the cursor
//! is kept pointing at whoever acts next.

pub mod action;

pub use action::{
    AttackRoll, DEFEND_AC_BONUS, FLEE_DC, FleeAttempt, attack_bonus, attempt_flee,
    proficiency_bonus, resolve_attack, roll_weapon_damage, weapon_damage,
};

use std::collections::BTreeMap;

use ql_core::{Ability, CombatStats, Npc};
use serde::{Deserialize, Serialize};

use crate::dice::{RollSource, ability_modifier, d20, roll_uniform_offset};
use crate::error::{MechError, MechResult};
use crate::sheet::Character;

/// Combatant id of the player.
pub const PLAYER_ID: &str = "player";

/// Experience awarded per enemy in the original encounter.
pub const XP_PER_ENEMY: u32 = 100;

/// A live enemy snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy {
    /// NPC id the snapshot was taken from.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Current stats; hit points drop as the fight goes on.
    pub stats: CombatStats,
}

impl Enemy {
    /// Snapshot an NPC. Fails if it has no combat stats.
    pub fn from_npc(npc: &Npc) -> MechResult<Self> {
        let stats = npc
            .combat
            .clone()
            .ok_or_else(|| MechError::NoCombatStats(npc.id.clone()))?;
        Ok(Self {
            id: npc.id.clone(),
            name: npc.name.clone(),
            stats,
        })
    }

    /// Whether the enemy still stands.
    pub fn is_alive(&self) -> bool {
        self.stats.hit_points > 0
    }

    /// Attack a target with the given armor class. Returns the roll and the
    /// damage dealt (zero on a miss).
    pub fn attack(&self, target_ac: i32, rng: &mut dyn RollSource) -> MechResult<(AttackRoll, u32)> {
        let roll = resolve_attack(self.stats.attack_bonus, target_ac, rng);
        let damage = if roll.hit {
            roll_weapon_damage(&self.stats.damage, roll.critical, rng)?
        } else {
            0
        };
        Ok((roll, damage))
    }
}

/// One combatant's initiative roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Initiative {
    /// Combatant id.
    pub id: String,
    /// d20 plus modifier.
    pub total: i32,
}

/// Rewards for winning a fight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rewards {
    /// Experience points.
    pub experience: u32,
    /// Gold pieces.
    pub gold: u32,
}

/// The state of a fight. The default value is "no fight".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatState {
    /// Whether a fight is in progress.
    pub active: bool,
    /// Enemies still standing.
    pub enemies: Vec<Enemy>,
    /// Starting hit points by enemy id.
    pub starting_hp: BTreeMap<String, i32>,
    /// Number of enemies when the fight began.
    pub total_enemies: u32,
    /// Live combatant ids in initiative order.
    pub turn_order: Vec<String>,
    /// Index into `turn_order` of whoever acts now.
    pub cursor: usize,
    /// Round number, starting at 1.
    pub round: u32,
    /// Initiative rolls, highest first.
    pub initiative: Vec<Initiative>,
    /// Transient armor class bonus from defending.
    pub defend_bonus: i32,
    /// Ids of enemies defeated so far.
    pub defeated: Vec<String>,
}

/// Start a fight between the character and `enemies`.
///
/// The player rolls d20 + DEX; each enemy rolls d20 plus a modifier
/// derived from its armor class. Ties keep encounter order.
pub fn initiate_combat(
    character: &Character,
    enemies: &[Npc],
    rng: &mut dyn RollSource,
) -> MechResult<CombatState> {
    let snapshots = enemies
        .iter()
        .map(Enemy::from_npc)
        .collect::<MechResult<Vec<_>>>()?;

    let mut initiative = Vec::with_capacity(snapshots.len() + 1);
    initiative.push(Initiative {
        id: PLAYER_ID.to_string(),
        total: d20_i32(rng) + character.ability_modifier(Ability::Dexterity),
    });
    for enemy in &snapshots {
        initiative.push(Initiative {
            id: enemy.id.clone(),
            total: d20_i32(rng) + ability_modifier(enemy.stats.armor_class),
        });
    }
    initiative.sort_by(|a, b| b.total.cmp(&a.total));

    let state = CombatState {
        active: true,
        starting_hp: snapshots
            .iter()
            .map(|e| (e.id.clone(), e.stats.hit_points))
            .collect(),
        total_enemies: u32::try_from(snapshots.len()).unwrap_or(u32::MAX),
        turn_order: initiative.iter().map(|i| i.id.clone()).collect(),
        cursor: 0,
        round: 1,
        initiative,
        enemies: snapshots,
        defend_bonus: 0,
        defeated: Vec::new(),
    };
    tracing::debug!(order = ?state.turn_order, "combat initiated");
    Ok(state)
}

fn d20_i32(rng: &mut dyn RollSource) -> i32 {
    i32::try_from(d20(rng)).unwrap_or(1)
}

impl CombatState {
    /// Id of whoever acts now.
    pub fn current_combatant(&self) -> Option<&str> {
        self.turn_order.get(self.cursor).map(String::as_str)
    }

    /// Whether the fight is on and it is the player's turn.
    pub fn is_player_turn(&self) -> bool {
        self.active && self.current_combatant() == Some(PLAYER_ID)
    }

    /// Move the cursor to the player's slot.
    pub fn set_player_turn(&mut self) {
        if let Some(idx) = self.turn_order.iter().position(|id| id == PLAYER_ID) {
            self.cursor = idx;
        }
    }

    /// Look up a live enemy.
    pub fn enemy(&self, id: &str) -> Option<&Enemy> {
        self.enemies.iter().find(|e| e.id == id)
    }

    /// Advance to the next combatant. Returns true if a new round started.
    pub fn advance_turn(&mut self) -> bool {
        if self.turn_order.is_empty() {
            return false;
        }
        self.cursor += 1;
        if self.cursor >= self.turn_order.len() {
            self.cursor = 0;
            self.round += 1;
            tracing::debug!(round = self.round, "new round");
            return true;
        }
        false
    }

    /// Subtract `amount` from an enemy's hit points.
    ///
    /// Returns true if this blow defeated it, in which case the enemy is
    /// removed from the fight.
    pub fn apply_damage_to_enemy(&mut self, enemy_id: &str, amount: u32) -> MechResult<bool> {
        if !self.active {
            return Err(MechError::NotInCombat);
        }
        let idx = self
            .enemies
            .iter()
            .position(|e| e.id == enemy_id)
            .ok_or_else(|| MechError::EnemyNotInCombat(enemy_id.to_string()))?;

        let amount = i32::try_from(amount).unwrap_or(i32::MAX);
        let stats = &mut self.enemies[idx].stats;
        stats.hit_points = stats.hit_points.saturating_sub(amount).max(0);
        if stats.hit_points > 0 {
            return Ok(false);
        }

        let defeated = self.enemies.remove(idx);
        self.remove_from_turn_order(&defeated.id);
        self.defeated.push(defeated.id);
        Ok(true)
    }

    fn remove_from_turn_order(&mut self, id: &str) {
        let Some(pos) = self.turn_order.iter().position(|t| t == id) else {
            return;
        };
        self.turn_order.remove(pos);
        if pos < self.cursor {
            self.cursor -= 1;
        }
        if self.cursor >= self.turn_order.len() {
            self.cursor = 0;
        }
    }

    /// True once no enemy is left standing.
    pub fn is_combat_over(&self) -> bool {
        self.enemies.iter().all(|e| !e.is_alive())
    }

    /// Armor class enemies attack against.
    pub fn effective_player_ac(&self, base: i32) -> i32 {
        base + self.defend_bonus
    }

    /// Rewards based on the number of enemies the fight started with.
    pub fn settle_combat(&self, rng: &mut dyn RollSource) -> MechResult<Rewards> {
        let mut gold = 0;
        for _ in 0..self.total_enemies {
            gold += roll_uniform_offset(rng, 41, 10)?;
        }
        let rewards = Rewards {
            experience: self.total_enemies.saturating_mul(XP_PER_ENEMY),
            gold,
        };
        tracing::debug!(?rewards, "combat settled");
        Ok(rewards)
    }

    /// End the fight.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::ScriptedRolls;
    use crate::sheet::{AbilityScores, create_character};

    fn hero() -> Character {
        let mut rng = ScriptedRolls::new([1]);
        create_character("Hero", "Human", "fighter", Some(AbilityScores::uniform(10)), &mut rng)
            .unwrap()
    }

    fn goblin(id: &str, hp: i32, ac: i32) -> Npc {
        Npc::new(id, id, "").hostile(CombatStats::new(hp, ac, 4, "1d6+2"))
    }

    #[test]
    fn initiative_sorted_descending() {
        let mut rng = ScriptedRolls::new([5, 10, 18]);
        let combat = initiate_combat(
            &hero(),
            &[goblin("a", 7, 15), goblin("b", 7, 10)],
            &mut rng,
        )
        .unwrap();
        assert_eq!(combat.turn_order, vec!["b", "a", "player"]);
        assert_eq!(combat.initiative[0].total, 18);
        assert_eq!(combat.round, 1);
        assert_eq!(combat.total_enemies, 2);
        assert_eq!(combat.starting_hp["a"], 7);
    }

    #[test]
    fn ties_keep_encounter_order() {
        let mut rng = ScriptedRolls::new([10]);
        let combat = initiate_combat(
            &hero(),
            &[goblin("a", 7, 10), goblin("b", 7, 11)],
            &mut rng,
        )
        .unwrap();
        assert_eq!(combat.turn_order, vec!["player", "a", "b"]);
    }

    #[test]
    fn enemy_without_stats_is_rejected() {
        let mut rng = ScriptedRolls::new([10]);
        let err = initiate_combat(&hero(), &[Npc::new("cat", "Cat", "")], &mut rng).unwrap_err();
        assert_eq!(err, MechError::NoCombatStats("cat".to_string()));
    }

    #[test]
    fn advance_wraps_into_new_round() {
        let mut rng = ScriptedRolls::new([10]);
        let mut combat = initiate_combat(&hero(), &[goblin("a", 7, 10)], &mut rng).unwrap();
        assert!(!combat.advance_turn());
        assert!(combat.advance_turn());
        assert_eq!(combat.round, 2);
        assert_eq!(combat.cursor, 0);
    }

    #[test]
    fn lethal_damage_ends_combat_with_original_rewards() {
        let mut rng = ScriptedRolls::new([10]);
        let mut combat = initiate_combat(&hero(), &[goblin("brute", 15, 12)], &mut rng).unwrap();
        assert!(!combat.apply_damage_to_enemy("brute", 6).unwrap());
        assert_eq!(combat.enemy("brute").unwrap().stats.hit_points, 9);
        assert!(combat.apply_damage_to_enemy("brute", 20).unwrap());
        assert!(combat.is_combat_over());
        assert!(combat.enemies.is_empty());
        assert_eq!(combat.turn_order, vec!["player"]);
        assert_eq!(combat.defeated, vec!["brute"]);

        let mut gold_rng = ScriptedRolls::new([41]);
        let rewards = combat.settle_combat(&mut gold_rng).unwrap();
        assert_eq!(rewards, Rewards { experience: 100, gold: 50 });
    }

    #[test]
    fn removal_before_cursor_keeps_next_combatant() {
        let mut rng = ScriptedRolls::new([15, 20, 10]);
        let mut combat = initiate_combat(
            &hero(),
            &[goblin("a", 5, 10), goblin("b", 5, 10)],
            &mut rng,
        )
        .unwrap();
        assert_eq!(combat.turn_order, vec!["a", "player", "b"]);
        combat.set_player_turn();
        combat.apply_damage_to_enemy("a", 5).unwrap();
        assert_eq!(combat.current_combatant(), Some(PLAYER_ID));
        combat.advance_turn();
        assert_eq!(combat.current_combatant(), Some("b"));
    }

    #[test]
    fn removal_at_end_wraps_cursor() {
        let mut rng = ScriptedRolls::new([15, 10]);
        let mut combat = initiate_combat(&hero(), &[goblin("a", 5, 10)], &mut rng).unwrap();
        combat.advance_turn();
        assert_eq!(combat.current_combatant(), Some("a"));
        combat.apply_damage_to_enemy("a", 5).unwrap();
        assert_eq!(combat.current_combatant(), Some(PLAYER_ID));
    }

    #[test]
    fn damage_errors() {
        let mut combat = CombatState::default();
        assert_eq!(combat.apply_damage_to_enemy("a", 1), Err(MechError::NotInCombat));
        let mut rng = ScriptedRolls::new([10]);
        combat = initiate_combat(&hero(), &[goblin("a", 5, 10)], &mut rng).unwrap();
        assert_eq!(
            combat.apply_damage_to_enemy("zz", 1),
            Err(MechError::EnemyNotInCombat("zz".to_string()))
        );
    }

    #[test]
    fn enemy_attack_rolls_damage_on_hit() {
        let enemy = Enemy::from_npc(&goblin("a", 7, 15)).unwrap();
        let mut rng = ScriptedRolls::new([10, 3]);
        let (roll, damage) = enemy.attack(14, &mut rng).unwrap();
        assert!(roll.hit);
        assert_eq!(damage, 5);

        let mut rng = ScriptedRolls::new([9]);
        let (roll, damage) = enemy.attack(14, &mut rng).unwrap();
        assert!(!roll.hit);
        assert_eq!(damage, 0);
    }

    #[test]
    fn defend_bonus_applies_to_effective_ac() {
        let mut combat = CombatState {
            defend_bonus: DEFEND_AC_BONUS,
            ..CombatState::default()
        };
        assert_eq!(combat.effective_player_ac(10), 12);
        combat.reset();
        assert_eq!(combat, CombatState::default());
    }
}
