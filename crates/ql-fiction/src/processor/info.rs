use ql_core::{Ability, Location};
use ql_mechanics::combat::PLAYER_ID;
use ql_mechanics::sheet::XP_PER_LEVEL;

use crate::state::{GameState, location_text};

const HELP_TEXT: &[&str] = &[
    "Commands:",
    "  n, s, e, w, u, d / go <direction>   move",
    "  look                                describe your surroundings",
    "  talk to <someone>                   start a conversation",
    "  1, 2, 3... / bye                    pick a dialogue option / end it",
    "  take <item>, drop <item>            pick up or put down",
    "  use <item>                          drink a potion, light a torch...",
    "  buy <item> [from <npc>]             buy from a shop",
    "  sell <item> [to <npc>]              sell to a shop",
    "  attack <target>, defend, flee       fight",
    "  rest                                recover at the tavern or temple",
    "  inventory, stats                    check yourself",
    "  save, load, help",
];

/// "Exits: north, south." or "There are no exits."
pub(super) fn exit_list(location: &Location) -> String {
    let directions: Vec<&str> = location
        .available_directions()
        .into_iter()
        .map(|d| d.name())
        .collect();
    if directions.is_empty() {
        "There are no exits.".to_string()
    } else {
        format!("Exits: {}.", directions.join(", "))
    }
}

pub(super) fn describe_ground_items(state: &mut GameState) {
    let Some(location) = state.location() else {
        return;
    };
    if location.items.is_empty() {
        return;
    }
    let names: Vec<&str> = location.items.iter().map(|i| i.name.as_str()).collect();
    let text = format!("You see: {}.", names.join(", "));
    state.log.info(text);
}

pub(super) fn describe_npcs(state: &mut GameState) {
    let names: Vec<String> = state
        .world
        .npcs_at(&state.current_location)
        .into_iter()
        .map(|npc| npc.name.clone())
        .collect();
    if !names.is_empty() {
        state.log.info(format!("Here: {}.", names.join(", ")));
    }
}

pub(super) fn do_look(state: &mut GameState) {
    let Some(location) = state.location() else {
        state.log.error("You are nowhere at all.");
        return;
    };
    let text = location_text(location);
    let exits = exit_list(location);
    state.log.info(text);
    describe_ground_items(state);
    describe_npcs(state);
    state.log.info(exits);

    if state.in_combat() {
        let order: Vec<String> = state
            .combat
            .turn_order
            .iter()
            .map(|id| {
                if id == PLAYER_ID {
                    "you".to_string()
                } else {
                    state
                        .combat
                        .enemy(id)
                        .map(|e| format!("{} ({} HP)", e.name, e.stats.hit_points))
                        .unwrap_or_else(|| id.clone())
                }
            })
            .collect();
        state.log.combat(format!(
            "Round {}. Turn order: {}.",
            state.combat.round,
            order.join(", ")
        ));
    }
}

pub(super) fn do_inventory(state: &mut GameState) {
    let inventory = &state.character.inventory;
    let mut lines = vec![format!(
        "Inventory ({:.1}/{:.1} lb):",
        inventory.current_weight(),
        inventory.max_weight
    )];
    if inventory.is_empty() {
        lines.push("  Your pack is empty.".to_string());
    }
    for item in &inventory.items {
        lines.push(format!("  {} ({} lb) - {}", item.name, item.weight, item.description));
    }
    lines.push(format!("Gold: {}", state.character.gold));
    for line in lines {
        state.log.info(line);
    }
}

pub(super) fn do_stats(state: &mut GameState) {
    let c = &state.character;
    let scores: Vec<String> = Ability::ALL
        .iter()
        .map(|&a| format!("{} {} ({:+})", a.abbreviation(), c.abilities.get(a), c.ability_modifier(a)))
        .collect();
    let lines = [
        format!("{}, level {} {} {}", c.name, c.level, c.race, c.class_name),
        format!(
            "HP {}  AC {}  XP {}/{}",
            c.hit_points,
            c.armor_class,
            c.experience,
            c.level.saturating_mul(XP_PER_LEVEL)
        ),
        scores.join("  "),
        format!("Gold: {}", c.gold),
    ];
    for line in lines {
        state.log.info(line);
    }
}

pub(super) fn do_help(state: &mut GameState) {
    for line in HELP_TEXT {
        state.log.info(*line);
    }
}

pub(super) fn do_save(state: &mut GameState) {
    tracing::debug!("save requested");
    state
        .log
        .info("Saving is not available yet. Your progress lasts for this session only.");
}

pub(super) fn do_load(state: &mut GameState, save_id: &str) {
    tracing::debug!(save_id, "load requested");
    state
        .log
        .info(format!("There is no saved game \"{save_id}\" to load."));
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use crate::action::Action;
    use crate::processor::process;
    use ql_mechanics::ScriptedRolls;

    #[test]
    fn look_describes_everything() {
        let state = plain_fighter_at("market");
        let mut rng = ScriptedRolls::new([10]);
        let next = process(&state, &Action::Look, &mut rng);
        let texts = texts_since(&next, state.log.len());
        assert!(texts[0].starts_with("Market Row"));
        assert!(texts.iter().any(|t| t == "Here: Tobias, Greta."));
        assert!(texts.iter().any(|t| t == "Exits: west."));
        assert_eq!(next.world, state.world);
    }

    #[test]
    fn inventory_lists_items_and_gold() {
        let state = plain_fighter_at("village-square");
        let mut rng = ScriptedRolls::new([10]);
        let next = process(&state, &Action::Inventory, &mut rng);
        let texts = texts_since(&next, state.log.len());
        assert_eq!(texts[0], "Inventory (23.5/150.0 lb):");
        assert!(texts.iter().any(|t| t.starts_with("  Longsword")));
        assert_eq!(texts.last().map(String::as_str), Some("Gold: 15"));
    }

    #[test]
    fn stats_show_modifiers() {
        let state = plain_fighter_at("village-square");
        let mut rng = ScriptedRolls::new([10]);
        let next = process(&state, &Action::Stats, &mut rng);
        let texts = texts_since(&next, state.log.len());
        assert_eq!(texts[0], "Tester, level 1 Human Fighter");
        assert_eq!(texts[1], "HP 10/10  AC 10  XP 0/1000");
        assert!(texts[2].starts_with("STR 10 (+0)"));
    }

    #[test]
    fn save_and_load_are_acknowledged() {
        let state = plain_fighter_at("village-square");
        let mut rng = ScriptedRolls::new([10]);
        let saved = process(&state, &Action::SaveGame, &mut rng);
        assert_eq!(saved.log.len(), state.log.len() + 1);
        assert_eq!(saved.character, state.character);
        let loaded = process(&state, &Action::LoadGame { save_id: "slot1".to_string() }, &mut rng);
        assert!(loaded.log.last().unwrap().text.contains("slot1"));
    }

    #[test]
    fn help_lists_commands() {
        let state = plain_fighter_at("village-square");
        let mut rng = ScriptedRolls::new([10]);
        let next = process(&state, &Action::Help, &mut rng);
        assert!(texts_since(&next, state.log.len()).iter().any(|t| t.contains("talk to")));
    }
}
