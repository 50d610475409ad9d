use ql_mechanics::RollSource;
use ql_mechanics::dice::roll_uniform;

use crate::state::GameState;

pub(super) fn do_take(state: &mut GameState, item_id: &str) {
    if state.in_combat() {
        state.log.warning("You can't pick things up in the middle of a fight!");
        return;
    }
    let Some(item) = state.location().and_then(|loc| loc.item(item_id)).cloned() else {
        state.log.warning("You don't see that here.");
        return;
    };
    let inventory = &state.character.inventory;
    if !inventory.can_carry(item.weight) {
        let text = format!(
            "The {} is too heavy. ({:.1}/{:.1} lb carried, it weighs {:.1} lb)",
            item.name,
            inventory.current_weight(),
            inventory.max_weight,
            item.weight
        );
        state.log.warning(text);
        return;
    }

    let Some(taken) = state.location_mut().and_then(|loc| loc.take_item(item_id)) else {
        return;
    };
    if let Err(e) = state.character.inventory.try_add(taken) {
        state.log.warning(e.to_string());
        return;
    }
    state.log.success(format!("You take the {}.", item.name));
}

pub(super) fn do_drop(state: &mut GameState, item_id: &str) {
    if state.in_combat() {
        state.log.warning("You can't drop things in the middle of a fight!");
        return;
    }
    if state.location().is_none() {
        state.log.error("You are nowhere at all.");
        return;
    }
    let Ok(item) = state.character.inventory.remove(item_id) else {
        state.log.warning("You aren't carrying that.");
        return;
    };
    let text = format!("You drop the {}.", item.name);
    if let Some(loc) = state.location_mut() {
        loc.items.push(item);
    }
    state.log.info(text);
}

/// Using an item never costs a combat turn.
pub(super) fn do_use(state: &mut GameState, item_id: &str, rng: &mut dyn RollSource) {
    let Some(item) = state.character.inventory.find(item_id).cloned() else {
        state.log.warning("You aren't carrying that.");
        return;
    };
    if !item.usable {
        state.log.warning(format!("You can't use the {}.", item.name));
        return;
    }

    if item.is_potion() {
        let heal = match roll_uniform(rng, 4) {
            Ok(roll) => 2 * roll + 2,
            Err(e) => {
                state.log.warning(e.to_string());
                return;
            }
        };
        if state.character.inventory.remove(item_id).is_err() {
            return;
        }
        let before = state.character.hit_points.current;
        state.character = state.character.heal(heal);
        let healed = state.character.hit_points.current - before;
        state.log.success(format!(
            "You drink the {} and recover {healed} HP. ({})",
            item.name, state.character.hit_points
        ));
        return;
    }

    state.log.info(flavor(&item.id, &item.name));
}

fn flavor(item_id: &str, name: &str) -> String {
    match item_id {
        "torch" => "You light the torch. Shadows retreat to the corners.".to_string(),
        "lockpicks" => "You fiddle with the lockpicks, but there is nothing here to open.".to_string(),
        "holy-symbol" => "You hold up the holy symbol and murmur a prayer.".to_string(),
        "rations" => "You nibble at your rations and put the rest away for later.".to_string(),
        _ => format!("You turn the {name} over in your hands. Nothing happens."),
    }
}
