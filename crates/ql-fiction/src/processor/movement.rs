use ql_core::Direction;
use ql_mechanics::RollSource;

use super::{combat, info};
use crate::state::{GameState, location_text};

pub(super) fn do_move(state: &mut GameState, direction: Direction, rng: &mut dyn RollSource) {
    if state.in_combat() {
        state
            .log
            .warning("You can't leave in the middle of a fight! Attack, defend, or flee.");
        return;
    }
    let Some(here) = state.location() else {
        state.log.error("You are nowhere at all.");
        return;
    };
    let Some(destination) = here.connected_location(direction).map(str::to_string) else {
        let exits = info::exit_list(here);
        state
            .log
            .warning(format!("You can't go {direction} from here. {exits}"));
        return;
    };
    if !state.world.locations.contains_key(&destination) {
        state.log.warning(format!("The way {direction} is blocked."));
        return;
    }

    state.active_dialogue = None;
    state.current_location = destination;
    let Some(arrived) = state.location_mut() else {
        return;
    };
    arrived.visited = true;
    let text = location_text(arrived);
    state.log.info(format!("You head {direction}."));
    state.log.info(text);
    info::describe_ground_items(state);

    let hostiles: Vec<String> = state
        .world
        .npcs_at(&state.current_location)
        .into_iter()
        .filter(|npc| npc.is_live_hostile())
        .map(|npc| npc.id.clone())
        .collect();

    if hostiles.is_empty() {
        info::describe_npcs(state);
    } else {
        combat::start_encounter(state, &hostiles, rng);
    }
}
