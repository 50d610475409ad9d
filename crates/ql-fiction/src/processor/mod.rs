//! The action processor.
//!
//! [`process`] clones the incoming state, applies one action to the clone,
//! and returns it. Every refusal is reported as a log entry. Handlers check
//! all preconditions before touching the clone, so a refused action leaves
//! nothing behind except its log lines.

mod combat;
mod dialogue;
mod info;
mod items;
mod movement;
mod rest;
mod trade;

use chrono::Utc;
use ql_mechanics::RollSource;

use crate::action::Action;
use crate::state::GameState;

/// Apply `action` to `state` and return the next state.
pub fn process(state: &GameState, action: &Action, rng: &mut dyn RollSource) -> GameState {
    let mut next = state.clone();
    next.last_update = Utc::now();
    tracing::debug!(?action, "processing action");

    if !next.character.is_alive() && !matches!(action, Action::LoadGame { .. }) {
        next.log
            .error("Your adventure is over. Load a saved game or restart to play again.");
        return next;
    }

    match action {
        Action::Move { direction } => movement::do_move(&mut next, *direction, rng),
        Action::Talk { npc_id } => dialogue::do_talk(&mut next, npc_id),
        Action::DialogueSelect { option_index } => {
            dialogue::do_select(&mut next, *option_index, rng);
        }
        Action::Take { item_id } => items::do_take(&mut next, item_id),
        Action::Drop { item_id } => items::do_drop(&mut next, item_id),
        Action::Use { item_id } => items::do_use(&mut next, item_id, rng),
        Action::Attack { target_id } => combat::do_attack(&mut next, target_id, rng),
        Action::Defend => combat::do_defend(&mut next, rng),
        Action::Flee => combat::do_flee(&mut next, rng),
        Action::Buy { item_id, npc_id } => trade::do_buy(&mut next, item_id, npc_id),
        Action::Sell { item_id, npc_id } => trade::do_sell(&mut next, item_id, npc_id),
        Action::Rest => rest::do_rest(&mut next),
        Action::Look => info::do_look(&mut next),
        Action::Inventory => info::do_inventory(&mut next),
        Action::Stats => info::do_stats(&mut next),
        Action::SaveGame => info::do_save(&mut next),
        Action::LoadGame { save_id } => info::do_load(&mut next, save_id),
        Action::Help => info::do_help(&mut next),
    }

    next
}
