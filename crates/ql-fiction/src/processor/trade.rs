use ql_core::{Npc, Shop};

use crate::state::GameState;

/// The shop of an NPC standing here, or a warning explaining why not.
fn shopkeeper<'s>(state: &'s GameState, npc_id: &str) -> Result<(&'s Npc, &'s Shop), String> {
    let present = state.location().is_some_and(|loc| loc.has_npc(npc_id));
    let npc = state
        .world
        .npcs
        .get(npc_id)
        .filter(|_| present)
        .ok_or_else(|| "There is no one like that here to trade with.".to_string())?;
    let shop = npc
        .shop
        .as_ref()
        .ok_or_else(|| format!("{} has nothing to trade.", npc.name))?;
    Ok((npc, shop))
}

pub(super) fn do_buy(state: &mut GameState, item_id: &str, npc_id: &str) {
    if state.in_combat() {
        state.log.warning("You can't shop in the middle of a fight!");
        return;
    }
    let (item, price) = match shopkeeper(state, npc_id) {
        Ok((npc, shop)) => match shop.item(item_id) {
            Some(item) => (item.clone(), shop.buy_price(item)),
            None => {
                let text = format!("{} doesn't sell that.", npc.name);
                state.log.warning(text);
                return;
            }
        },
        Err(text) => {
            state.log.warning(text);
            return;
        }
    };
    if state.character.gold < price {
        state.log.warning(format!(
            "The {} costs {price} gold, but you only have {}.",
            item.name, state.character.gold
        ));
        return;
    }
    if !state.character.inventory.can_carry(item.weight) {
        state
            .log
            .warning(format!("You can't carry the {}. It's too heavy.", item.name));
        return;
    }

    let Some(shop) = state
        .world
        .npcs
        .get_mut(npc_id)
        .and_then(|npc| npc.shop.as_mut())
    else {
        return;
    };
    let Some(idx) = shop.items.iter().position(|i| i.id == item_id) else {
        return;
    };
    let bought = shop.items.remove(idx);
    if let Err(e) = state.character.inventory.try_add(bought) {
        state.log.warning(e.to_string());
        return;
    }
    state.character.gold -= price;
    state.log.success(format!(
        "You buy the {} for {price} gold. ({} gold left)",
        item.name, state.character.gold
    ));
}

pub(super) fn do_sell(state: &mut GameState, item_id: &str, npc_id: &str) {
    if state.in_combat() {
        state.log.warning("You can't shop in the middle of a fight!");
        return;
    }
    let npc_name = match shopkeeper(state, npc_id) {
        Ok((npc, _)) => npc.name.clone(),
        Err(text) => {
            state.log.warning(text);
            return;
        }
    };
    let Ok(item) = state.character.inventory.remove(item_id) else {
        state.log.warning("You aren't carrying that.");
        return;
    };
    let Some(shop) = state
        .world
        .npcs
        .get_mut(npc_id)
        .and_then(|npc| npc.shop.as_mut())
    else {
        return;
    };
    let price = shop.sell_price(&item);
    let name = item.name.clone();
    shop.items.push(item);
    state.character.gold = state.character.gold.saturating_add(price);
    state.log.success(format!(
        "You sell the {name} to {npc_name} for {price} gold. ({} gold)",
        state.character.gold
    ));
}
