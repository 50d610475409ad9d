use ql_core::{DialogueEffect, DialogueNode, DialogueOption};
use ql_mechanics::RollSource;
use ql_mechanics::dice::d20;

use crate::action::END_CONVERSATION;
use crate::state::{ActiveDialogue, GameState};

pub(super) fn do_talk(state: &mut GameState, npc_id: &str) {
    if state.in_combat() {
        state.log.warning("This is no time for conversation!");
        return;
    }
    let present = state.location().is_some_and(|loc| loc.has_npc(npc_id));
    let Some(npc) = state.world.npc(npc_id).ok().filter(|_| present) else {
        state.log.warning("There is no one like that here.");
        return;
    };
    if npc.hostile {
        let text = format!("{} has no interest in talking.", npc.name);
        state.log.warning(text);
        return;
    }
    let Some(node) = npc.start_node().cloned() else {
        let text = format!("{} has nothing to say.", npc.name);
        state.log.info(text);
        return;
    };
    let name = npc.name.clone();
    enter_node(state, npc_id, &name, &node);
}

/// Speak a node and keep the conversation open if it offers replies.
fn enter_node(state: &mut GameState, npc_id: &str, name: &str, node: &DialogueNode) {
    state.log.dialogue(format!("{name}: {}", node.text));
    if node.options.is_empty() {
        state.active_dialogue = None;
        return;
    }
    list_options(state, node);
    state.active_dialogue = Some(ActiveDialogue {
        npc_id: npc_id.to_string(),
        node_id: node.id.clone(),
    });
}

fn list_options(state: &mut GameState, node: &DialogueNode) {
    for (i, option) in node.options.iter().enumerate() {
        state.log.dialogue(format!("  {}. {}", i + 1, option.text));
    }
}

pub(super) fn do_select(state: &mut GameState, option_index: i32, rng: &mut dyn RollSource) {
    let Some(active) = state.active_dialogue.clone() else {
        state.log.warning("You are not talking to anyone.");
        return;
    };
    let Some(npc) = state.world.npc(&active.npc_id).ok() else {
        state.active_dialogue = None;
        return;
    };
    let name = npc.name.clone();
    if option_index == END_CONVERSATION {
        state.active_dialogue = None;
        state.log.info(format!("You end the conversation with {name}."));
        return;
    }
    let Some(node) = npc.dialogue_node(&active.node_id).cloned() else {
        state.active_dialogue = None;
        return;
    };
    let Some(option) = usize::try_from(option_index)
        .ok()
        .and_then(|i| node.options.get(i))
        .cloned()
    else {
        state.log.warning(format!(
            "Choose an option between 1 and {}.",
            node.options.len()
        ));
        return;
    };
    let next_node = option
        .next
        .as_deref()
        .and_then(|id| npc.dialogue_node(id))
        .cloned();

    state.log.dialogue(format!("You: {}", option.text));
    if !passes_check(state, &option, rng) {
        list_options(state, &node);
        return;
    }
    apply_effect(state, &option.effect);

    match next_node {
        Some(next) => enter_node(state, &active.npc_id, &name, &next),
        None => state.active_dialogue = None,
    }
}

fn passes_check(state: &mut GameState, option: &DialogueOption, rng: &mut dyn RollSource) -> bool {
    let Some(check) = option.check else {
        return true;
    };
    let roll = i32::try_from(d20(rng)).unwrap_or(1);
    let total = roll + state.character.ability_modifier(check.ability);
    let summary = format!(
        "{} check: {roll} {:+} = {total} vs DC {}",
        check.ability,
        total - roll,
        check.dc
    );
    if total >= check.dc {
        state.log.success(format!("{summary}. Success!"));
        true
    } else {
        state.log.warning(format!("{summary}. Failed."));
        false
    }
}

fn apply_effect(state: &mut GameState, effect: &DialogueEffect) {
    match effect {
        DialogueEffect::None => {}
        DialogueEffect::OpenShop { npc_id } => {
            let Some(shop) = state.world.npc(npc_id).ok().and_then(|n| n.shop.as_ref()) else {
                return;
            };
            let lines: Vec<String> = shop
                .items
                .iter()
                .map(|item| format!("  {} ({}): {} gold", item.name, item.id, shop.buy_price(item)))
                .collect();
            state.log.info("For sale:");
            for line in lines {
                state.log.info(line);
            }
        }
        DialogueEffect::ListSellables { npc_id } => {
            let Some(shop) = state.world.npc(npc_id).ok().and_then(|n| n.shop.as_ref()) else {
                return;
            };
            let lines: Vec<String> = state
                .character
                .inventory
                .items
                .iter()
                .map(|item| format!("  {} ({}): {} gold", item.name, item.id, shop.sell_price(item)))
                .collect();
            if lines.is_empty() {
                state.log.info("You have nothing to sell.");
                return;
            }
            state.log.info("They would pay:");
            for line in lines {
                state.log.info(line);
            }
        }
        DialogueEffect::Heal { amount } => {
            let before = state.character.hit_points.current;
            state.character = state.character.heal(*amount);
            let healed = state.character.hit_points.current - before;
            state.log.success(format!(
                "You recover {healed} HP. ({})",
                state.character.hit_points
            ));
        }
        DialogueEffect::GiveGold { amount } => {
            state.character.gold = state.character.gold.saturating_add(*amount);
            state.log.success(format!("You receive {amount} gold."));
        }
        DialogueEffect::AcceptQuest { quest_id } => {
            tracing::debug!(quest_id, "quest offered");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use crate::action::{Action, END_CONVERSATION};
    use crate::log::LogKind;
    use crate::processor::process;
    use crate::state::{ActiveDialogue, GameState};
    use ql_mechanics::ScriptedRolls;

    fn talk(npc: &str) -> Action {
        Action::Talk {
            npc_id: npc.to_string(),
        }
    }

    fn select(option_index: i32) -> Action {
        Action::DialogueSelect { option_index }
    }

    fn talking_to(location: &str, npc: &str) -> GameState {
        let state = plain_fighter_at(location);
        let mut rng = ScriptedRolls::new([10]);
        process(&state, &talk(npc), &mut rng)
    }

    #[test]
    fn talking_opens_the_greeting() {
        let state = plain_fighter_at("tavern");
        let mut rng = ScriptedRolls::new([10]);
        let next = process(&state, &talk("marta"), &mut rng);
        assert_eq!(
            next.active_dialogue,
            Some(ActiveDialogue {
                npc_id: "marta".to_string(),
                node_id: "greeting".to_string(),
            })
        );
        let texts = texts_since(&next, state.log.len());
        assert!(texts[0].starts_with("Marta: "));
        assert_eq!(texts[1], "  1. Heard any rumors?");
        assert_eq!(texts.len(), 5);
    }

    #[test]
    fn cannot_talk_to_someone_elsewhere() {
        let state = plain_fighter_at("village-square");
        let mut rng = ScriptedRolls::new([10]);
        let next = process(&state, &talk("marta"), &mut rng);
        assert!(next.active_dialogue.is_none());
        assert_eq!(next.log.last().map(|e| e.kind), Some(LogKind::Warning));
    }

    #[test]
    fn hostiles_do_not_talk() {
        let state = plain_fighter_at("dark-woods");
        let mut rng = ScriptedRolls::new([10]);
        let next = process(&state, &talk("grey-wolf"), &mut rng);
        assert!(next.active_dialogue.is_none());
        assert!(!next.combat.active);
        assert_eq!(next.log.last().map(|e| e.kind), Some(LogKind::Warning));
    }

    #[test]
    fn following_an_option_moves_to_the_next_node() {
        let state = talking_to("tavern", "marta");
        let mut rng = ScriptedRolls::new([10]);
        let next = process(&state, &select(0), &mut rng);
        assert_eq!(next.active_dialogue.as_ref().unwrap().node_id, "rumors");
    }

    #[test]
    fn a_node_without_options_ends_the_conversation() {
        let state = talking_to("tavern", "marta");
        let mut rng = ScriptedRolls::new([10]);
        let next = process(&state, &select(1), &mut rng);
        assert!(next.active_dialogue.is_none());
        let texts = texts_since(&next, state.log.len());
        assert!(texts.iter().any(|t| t.starts_with("Marta: \"Bless you.")));
    }

    #[test]
    fn out_of_range_keeps_the_dialogue() {
        let state = talking_to("tavern", "marta");
        let mut rng = ScriptedRolls::new([10]);
        let next = process(&state, &select(9), &mut rng);
        assert_eq!(next.active_dialogue, state.active_dialogue);
        assert_eq!(next.log.last().map(|e| e.kind), Some(LogKind::Warning));
    }

    #[test]
    fn leaving_ends_the_dialogue() {
        let state = talking_to("tavern", "marta");
        let mut rng = ScriptedRolls::new([10]);
        let next = process(&state, &select(END_CONVERSATION), &mut rng);
        assert!(next.active_dialogue.is_none());
    }

    #[test]
    fn selecting_without_a_conversation_warns() {
        let state = plain_fighter_at("tavern");
        let mut rng = ScriptedRolls::new([10]);
        let next = process(&state, &select(0), &mut rng);
        assert_eq!(next.log.last().map(|e| e.kind), Some(LogKind::Warning));
    }

    #[test]
    fn failed_check_stays_put_and_skips_the_effect() {
        let state = talking_to("market", "tobias");
        // Charisma +0 against DC 14
        let mut rng = ScriptedRolls::new([13]);
        let next = process(&state, &select(2), &mut rng);
        assert_eq!(next.character.gold, state.character.gold);
        assert_eq!(next.active_dialogue, state.active_dialogue);
    }

    #[test]
    fn passed_check_applies_the_effect() {
        let state = talking_to("market", "tobias");
        let mut rng = ScriptedRolls::new([14]);
        let next = process(&state, &select(2), &mut rng);
        assert_eq!(next.character.gold, state.character.gold + 10);
        assert!(next.active_dialogue.is_none());
    }

    #[test]
    fn healing_is_capped_at_max() {
        let mut state = talking_to("temple", "sister-elowen");
        state.character = state.character.damage(3);
        let mut rng = ScriptedRolls::new([10]);
        let next = process(&state, &select(0), &mut rng);
        assert!(next.character.hit_points.is_full());
    }

    #[test]
    fn shop_listing_shows_rounded_up_prices() {
        let state = talking_to("market", "tobias");
        let mut rng = ScriptedRolls::new([10]);
        let next = process(&state, &select(0), &mut rng);
        let texts = texts_since(&next, state.log.len());
        assert!(texts.iter().any(|t| t == "  Health Potion (health-potion): 15 gold"));
        assert_eq!(next.active_dialogue.as_ref().unwrap().node_id, "greeting");
    }

    #[test]
    fn talking_is_blocked_in_combat() {
        let mut state = plain_fighter_at("tavern");
        state.combat.active = true;
        let mut rng = ScriptedRolls::new([10]);
        let next = process(&state, &talk("marta"), &mut rng);
        assert!(next.active_dialogue.is_none());
        assert_eq!(next.log.last().map(|e| e.kind), Some(LogKind::Warning));
    }
}
