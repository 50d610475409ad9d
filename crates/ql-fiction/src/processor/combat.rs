use ql_core::Npc;
use ql_mechanics::combat::{
    CombatState, DEFEND_AC_BONUS, PLAYER_ID, Rewards, attack_bonus, attempt_flee,
    initiate_combat, resolve_attack, roll_weapon_damage, weapon_damage,
};
use ql_mechanics::RollSource;

use crate::state::GameState;

/// Start a fight with the given NPCs and let enemies act if they won
/// initiative.
pub(super) fn start_encounter(state: &mut GameState, npc_ids: &[String], rng: &mut dyn RollSource) {
    let Some(combat) = begin(state, npc_ids, rng) else {
        return;
    };
    for id in npc_ids {
        if let Some(npc) = state.world.npc(id).ok()
            && let Some(node) = npc.start_node()
        {
            let line = format!("{}: {}", npc.name, node.text);
            state.log.dialogue(line);
        }
    }
    let names: Vec<&str> = combat.enemies.iter().map(|e| e.name.as_str()).collect();
    state.log.combat(format!("Combat! {} attack!", names.join(", ")));
    state.combat = combat;
    log_initiative(state);
    run_enemy_turns(state, rng);
}

fn begin(state: &mut GameState, npc_ids: &[String], rng: &mut dyn RollSource) -> Option<CombatState> {
    let npcs: Vec<Npc> = npc_ids
        .iter()
        .filter_map(|id| state.world.npc(id).ok().cloned())
        .collect();
    match initiate_combat(&state.character, &npcs, rng) {
        Ok(combat) => {
            state.active_dialogue = None;
            Some(combat)
        }
        Err(e) => {
            state.log.warning(format!("The fight never starts: {e}."));
            None
        }
    }
}

fn log_initiative(state: &mut GameState) {
    let order: Vec<String> = state
        .combat
        .initiative
        .iter()
        .map(|i| {
            let name = if i.id == PLAYER_ID {
                "You".to_string()
            } else {
                state
                    .combat
                    .enemy(&i.id)
                    .map_or_else(|| i.id.clone(), |e| e.name.clone())
            };
            format!("{name} {}", i.total)
        })
        .collect();
    state.log.combat(format!("Initiative: {}.", order.join(", ")));
}

pub(super) fn do_attack(state: &mut GameState, target_id: &str, rng: &mut dyn RollSource) {
    if state.in_combat() {
        if !state.combat.is_player_turn() {
            state.log.warning("It's not your turn.");
            return;
        }
        if state.combat.enemy(target_id).is_none() {
            state
                .log
                .warning(format!("\"{target_id}\" is not part of this fight."));
            return;
        }
        strike(state, target_id, rng);
        return;
    }

    let Some(npc) = state
        .location()
        .filter(|loc| loc.has_npc(target_id))
        .and_then(|_| state.world.npc(target_id).ok())
    else {
        state.log.warning("There is no one like that here to attack.");
        return;
    };
    if npc.combat.is_none() {
        let text = format!("{} is not someone you can fight.", npc.name);
        state.log.warning(text);
        return;
    }
    let name = npc.name.clone();
    let Some(combat) = begin(state, &[target_id.to_string()], rng) else {
        return;
    };
    state.log.combat(format!("You strike first at {name}!"));
    state.combat = combat;
    log_initiative(state);
    state.combat.set_player_turn();
    strike(state, target_id, rng);
}

/// The player's attack, followed by the enemy turns it hands over to.
fn strike(state: &mut GameState, target_id: &str, rng: &mut dyn RollSource) {
    let Some(enemy) = state.combat.enemy(target_id).cloned() else {
        return;
    };
    let bonus = attack_bonus(&state.character);
    let roll = resolve_attack(bonus, enemy.stats.armor_class, rng);
    let summary = format!(
        "You attack {}: {} {:+} = {} vs AC {}.",
        enemy.name, roll.roll, roll.bonus, roll.total, enemy.stats.armor_class
    );

    if roll.hit {
        let damage = match roll_weapon_damage(&weapon_damage(&state.character), roll.critical, rng) {
            Ok(damage) => damage,
            Err(e) => {
                state.log.warning(format!("Your weapon fails you: {e}."));
                0
            }
        };
        let verdict = if roll.critical { "Critical hit!" } else { "Hit!" };
        state
            .log
            .combat(format!("{summary} {verdict} {damage} damage."));
        match state.combat.apply_damage_to_enemy(&enemy.id, damage) {
            Ok(true) => state.log.success(format!("{} is defeated!", enemy.name)),
            Ok(false) => {
                if let Some(left) = state.combat.enemy(&enemy.id) {
                    let text = format!("{} has {} HP left.", left.name, left.stats.hit_points);
                    state.log.combat(text);
                }
            }
            Err(e) => state.log.warning(e.to_string()),
        }
        if state.combat.is_combat_over() {
            settle_victory(state, rng);
            return;
        }
    } else if roll.critical_fail {
        state.log.combat(format!("{summary} Critical miss!"));
    } else {
        state.log.combat(format!("{summary} Miss."));
    }

    end_player_turn(state, rng);
}

pub(super) fn do_defend(state: &mut GameState, rng: &mut dyn RollSource) {
    if !state.in_combat() {
        state.log.warning("There is nothing to defend against.");
        return;
    }
    if !state.combat.is_player_turn() {
        state.log.warning("It's not your turn.");
        return;
    }
    state.combat.defend_bonus = DEFEND_AC_BONUS;
    state.log.combat(format!(
        "You raise your guard. (+{DEFEND_AC_BONUS} AC until your next turn)"
    ));
    end_player_turn(state, rng);
    state.combat.defend_bonus = 0;
}

pub(super) fn do_flee(state: &mut GameState, rng: &mut dyn RollSource) {
    if !state.in_combat() {
        state.log.warning("You are not in combat.");
        return;
    }
    let attempt = attempt_flee(&state.character, rng);
    if attempt.success {
        state.combat.reset();
        state
            .log
            .success(format!("You escape! (rolled {}, total {})", attempt.roll, attempt.total));
    } else {
        state.log.combat(format!(
            "You try to flee but can't get away. (rolled {}, total {})",
            attempt.roll, attempt.total
        ));
        end_player_turn(state, rng);
    }
}

fn end_player_turn(state: &mut GameState, rng: &mut dyn RollSource) {
    state.combat.advance_turn();
    run_enemy_turns(state, rng);
}

/// Let enemies act until it is the player's turn or the fight is over.
fn run_enemy_turns(state: &mut GameState, rng: &mut dyn RollSource) {
    let mut remaining = state.combat.turn_order.len();
    while state.in_combat() && remaining > 0 {
        remaining -= 1;
        let Some(current) = state.combat.current_combatant().map(str::to_string) else {
            break;
        };
        if current == PLAYER_ID {
            break;
        }
        let Some(enemy) = state.combat.enemy(&current).filter(|e| e.is_alive()).cloned() else {
            state.combat.advance_turn();
            continue;
        };

        let ac = state.combat.effective_player_ac(state.character.armor_class);
        match enemy.attack(ac, rng) {
            Ok((roll, damage)) if roll.hit => {
                state.character = state.character.damage(damage);
                let verb = if roll.critical { "lands a critical hit on" } else { "hits" };
                let text = format!(
                    "{} {verb} you for {damage} damage. ({} HP left)",
                    enemy.name, state.character.hit_points
                );
                state.log.combat(text);
            }
            Ok(_) => state.log.combat(format!("{} attacks and misses.", enemy.name)),
            Err(e) => state.log.warning(format!("{} fumbles: {e}.", enemy.name)),
        }

        if !state.character.is_alive() {
            state
                .log
                .error("You have fallen... Your adventure is over.");
            state.combat.reset();
            return;
        }
        state.combat.advance_turn();
    }
}

fn settle_victory(state: &mut GameState, rng: &mut dyn RollSource) {
    let rewards = state.combat.settle_combat(rng).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "reward roll failed");
        Rewards {
            experience: 0,
            gold: 0,
        }
    });
    let defeated = std::mem::take(&mut state.combat.defeated);
    let (character, level_up) = state
        .character
        .clone()
        .award_experience(rewards.experience, rng);
    state.character = character;
    state.character.gold = state.character.gold.saturating_add(rewards.gold);
    state.combat.reset();

    state.log.success(format!(
        "Victory! You gain {} XP and {} gold.",
        rewards.experience, rewards.gold
    ));
    if level_up.leveled() {
        state.log.success(format!(
            "You reached level {}! (+{} max HP)",
            state.character.level, level_up.hp_gained
        ));
    }
    for id in &defeated {
        state.world.remove_npc_everywhere(id);
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use crate::action::Action;
    use crate::log::LogKind;
    use crate::processor::process;
    use crate::state::GameState;
    use ql_core::Direction;
    use ql_mechanics::ScriptedRolls;

    fn lone_goblin() -> GameState {
        let mut state = plain_fighter_at("goblin-warren");
        if let Some(loc) = state.location_mut() {
            loc.npcs.retain(|id| id == "goblin-warrior");
        }
        state
    }

    fn attack(target: &str) -> Action {
        Action::Attack {
            target_id: target.to_string(),
        }
    }

    #[test]
    fn critical_hit_wins_the_fight() {
        let state = lone_goblin();
        // initiative 15 vs 5, natural 20, d8 shows 4 (doubled), gold roll 20
        let mut rng = ScriptedRolls::new([15, 5, 20, 4, 20]);
        let next = process(&state, &attack("goblin-warrior"), &mut rng);

        assert!(!next.combat.active);
        assert_eq!(next.character.experience, 100);
        assert_eq!(next.character.gold, 15 + 29);
        assert!(next.world.npcs.contains_key("goblin-warrior"));
        assert!(next.world.locations.values().all(|loc| !loc.has_npc("goblin-warrior")));
        let texts = texts_since(&next, state.log.len());
        assert!(texts.iter().any(|t| t.contains("Critical hit! 8 damage")));
        assert!(texts.iter().any(|t| t.starts_with("Victory!")));
    }

    #[test]
    fn the_opening_attack_goes_first_even_after_losing_initiative() {
        let state = lone_goblin();
        // player initiative 1, goblin 10 + 2; attack 15 + 2 hits AC 15 for 3;
        // goblin answers with 9 + 4 against AC 10 for 1 + 2
        let mut rng = ScriptedRolls::new([1, 10, 15, 3, 9, 1]);
        let next = process(&state, &attack("goblin-warrior"), &mut rng);

        assert!(next.combat.active);
        assert_eq!(next.combat.enemy("goblin-warrior").unwrap().stats.hit_points, 4);
        assert_eq!(next.character.hit_points.current, 7);
        assert!(next.combat.is_player_turn());
        assert_eq!(next.combat.round, 2);
    }

    #[test]
    fn defending_turns_a_hit_into_a_miss() {
        let state = lone_goblin();
        let mut rng = ScriptedRolls::new([1, 10, 15, 3, 9, 1]);
        let fighting = process(&state, &attack("goblin-warrior"), &mut rng);

        // 7 + 4 = 11 would hit AC 10 but not AC 12
        let mut rng = ScriptedRolls::new([7]);
        let next = process(&fighting, &Action::Defend, &mut rng);
        assert_eq!(next.character.hit_points.current, 7);
        assert_eq!(next.combat.defend_bonus, 0);
        assert!(next.combat.is_player_turn());
        let texts = texts_since(&next, fighting.log.len());
        assert!(texts.iter().any(|t| t.contains("misses")));
    }

    #[test]
    fn flee_success_ends_the_fight() {
        let state = lone_goblin();
        let mut rng = ScriptedRolls::new([1, 10, 15, 3, 9, 1]);
        let fighting = process(&state, &attack("goblin-warrior"), &mut rng);

        let mut rng = ScriptedRolls::new([12]);
        let next = process(&fighting, &Action::Flee, &mut rng);
        assert!(!next.combat.active);
        assert_eq!(next.current_location, "goblin-warren");
        assert!(next.world.npcs.contains_key("goblin-warrior"));
    }

    #[test]
    fn failed_flee_gives_enemies_a_turn() {
        let state = lone_goblin();
        let mut rng = ScriptedRolls::new([1, 10, 15, 3, 9, 1]);
        let fighting = process(&state, &attack("goblin-warrior"), &mut rng);

        // flee roll 5 fails, goblin hits with 10 + 4 for 2 + 2
        let mut rng = ScriptedRolls::new([5, 10, 2]);
        let next = process(&fighting, &Action::Flee, &mut rng);
        assert!(next.combat.active);
        assert_eq!(next.character.hit_points.current, 3);
        assert!(next.combat.is_player_turn());
    }

    #[test]
    fn falling_in_battle_ends_the_game() {
        let state = plain_fighter_at("dark-woods");
        // wolf wins initiative but the opener is ours; we miss, it crits 2d4+2
        let mut rng = ScriptedRolls::new([1, 20, 2, 20, 4, 4]);
        let next = process(&state, &attack("grey-wolf"), &mut rng);

        assert!(!next.character.is_alive());
        assert!(!next.combat.active);
        assert_eq!(next.log.last().map(|e| e.kind), Some(LogKind::Error));
    }

    #[test]
    fn peaceful_npcs_cannot_be_fought_without_stats() {
        let state = plain_fighter_at("tavern");
        let mut rng = ScriptedRolls::new([10]);
        let next = process(&state, &attack("marta"), &mut rng);
        assert!(!next.combat.active);
        assert_eq!(next.log.last().map(|e| e.kind), Some(LogKind::Warning));
    }

    #[test]
    fn defend_and_flee_need_a_fight() {
        let state = plain_fighter_at("village-square");
        let mut rng = ScriptedRolls::new([10]);
        for action in [Action::Defend, Action::Flee] {
            let next = process(&state, &action, &mut rng);
            assert_eq!(next.log.last().map(|e| e.kind), Some(LogKind::Warning));
            assert_eq!(next.character, state.character);
        }
    }

    #[test]
    fn attacking_someone_absent_is_refused() {
        let state = plain_fighter_at("village-square");
        let mut rng = ScriptedRolls::new([10]);
        let next = process(&state, &attack("grey-wolf"), &mut rng);
        assert!(!next.combat.active);
        assert_eq!(next.log.last().map(|e| e.kind), Some(LogKind::Warning));
    }

    #[test]
    fn the_rest_of_the_queue_waits_once_the_player_falls() {
        let state = plain_fighter_at("cave-entrance");
        // warrior 20 + 2 and archer 19 + 1 both beat us; the warrior crits
        // for (6 + 2) * 2 and the archer never gets to roll
        let mut rng = ScriptedRolls::new([1, 20, 19, 20, 6, 20, 6]);
        let next = process(
            &state,
            &Action::Move {
                direction: Direction::Down,
            },
            &mut rng,
        );

        assert!(!next.character.is_alive());
        assert!(!next.combat.active);
        let attacks: Vec<String> = texts_since(&next, state.log.len())
            .into_iter()
            .filter(|t| t.contains(" you for ") || t.contains("misses"))
            .collect();
        assert_eq!(attacks.len(), 1);
        assert!(attacks[0].starts_with("Goblin Warrior lands a critical hit on you for 16"));
        assert_eq!(next.log.last().map(|e| e.kind), Some(LogKind::Error));
    }

    #[test]
    fn stale_turn_entries_are_skipped() {
        let state = lone_goblin();
        let mut rng = ScriptedRolls::new([1, 10, 15, 3, 9, 1]);
        let mut fighting = process(&state, &attack("goblin-warrior"), &mut rng);
        fighting.combat.turn_order.push("ghost".to_string());
        assert_eq!(fighting.combat.turn_order, vec!["goblin-warrior", "player", "ghost"]);

        // the ghost slot passes silently; the goblin's 7 + 4 misses AC 12
        let mut rng = ScriptedRolls::new([7]);
        let next = process(&fighting, &Action::Defend, &mut rng);
        assert!(next.combat.active);
        assert!(next.combat.is_player_turn());
        assert_eq!(next.combat.round, 3);
        let texts = texts_since(&next, fighting.log.len());
        assert_eq!(texts.iter().filter(|t| t.contains("misses")).count(), 1);
        assert!(!texts.iter().any(|t| t.contains("ghost")));
    }
}
