//! Verb tables and the command grammar.

use ql_core::{Direction, Item, Npc};
use ql_mechanics::Enemy;

use super::resolver::find;
use crate::action::{Action, END_CONVERSATION};
use crate::error::ParseError;
use crate::state::GameState;

/// Verb synonyms for command parsing.
const MOVE_VERBS: &[&str] = &["go", "move", "walk"];
const TALK_VERBS: &[&str] = &["talk", "speak", "chat"];
const TAKE_VERBS: &[&str] = &["take", "get", "grab"];
const DROP_VERBS: &[&str] = &["drop"];
const USE_VERBS: &[&str] = &["use", "drink", "eat", "consume", "quaff"];
const ATTACK_VERBS: &[&str] = &["attack", "hit", "fight", "kill", "strike"];
const DEFEND_VERBS: &[&str] = &["defend", "block", "parry", "guard"];
const FLEE_VERBS: &[&str] = &["flee", "run", "escape", "retreat"];
const BUY_VERBS: &[&str] = &["buy", "purchase"];
const SELL_VERBS: &[&str] = &["sell"];
const REST_VERBS: &[&str] = &["rest", "sleep", "camp"];
const LOOK_VERBS: &[&str] = &["look", "examine", "inspect", "l"];
const INVENTORY_VERBS: &[&str] = &["inventory", "items", "i"];
const STATS_VERBS: &[&str] = &["stats", "character", "status", "char"];
const SAVE_VERBS: &[&str] = &["save"];
const LOAD_VERBS: &[&str] = &["load"];
const HELP_VERBS: &[&str] = &["help", "?"];

/// Verbs that pick a dialogue option by number.
const SELECT_VERBS: &[&str] = &["reply", "choose", "select", "say", "option", "pick"];
/// Words that end a conversation.
const LEAVE_WORDS: &[&str] = &["leave", "bye", "goodbye", "exit", "back"];

/// Save slot used when `load` names none.
pub const DEFAULT_SAVE_SLOT: &str = "quicksave";

/// Trim, lowercase, and collapse runs of whitespace.
pub fn normalize(input: &str) -> String {
    input
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse player input against the current state.
pub fn parse(input: &str, state: &GameState) -> Result<Action, ParseError> {
    let normalized = normalize(input);
    if normalized.is_empty() {
        return Err(ParseError::Empty);
    }
    let words: Vec<&str> = normalized.split(' ').collect();

    if state.active_dialogue.is_some()
        && let Some(action) = parse_dialogue(&words)?
    {
        return Ok(action);
    }

    let verb = words[0];
    let rest = &words[1..];

    if rest.is_empty()
        && let Some(direction) = Direction::parse(verb)
    {
        return Ok(Action::Move { direction });
    }

    let is = |verbs: &[&str]| verbs.contains(&verb);

    if is(MOVE_VERBS) {
        parse_move(verb, rest)
    } else if is(TALK_VERBS) {
        parse_talk(verb, skip_filler(rest, &["to", "with"]), state)
    } else if is(TAKE_VERBS) {
        parse_take(verb, rest, state)
    } else if verb == "pick" && rest.first() == Some(&"up") {
        parse_take("pick up", &rest[1..], state)
    } else if is(DROP_VERBS) {
        parse_held(verb, rest, state, "in your pack to drop", |item_id| Action::Drop { item_id })
    } else if is(USE_VERBS) {
        parse_held(verb, rest, state, "in your pack to use", |item_id| Action::Use { item_id })
    } else if is(ATTACK_VERBS) {
        parse_attack(verb, rest, state)
    } else if is(DEFEND_VERBS) {
        Ok(Action::Defend)
    } else if is(FLEE_VERBS) {
        Ok(Action::Flee)
    } else if is(BUY_VERBS) {
        parse_buy(verb, rest, state)
    } else if is(SELL_VERBS) {
        parse_sell(verb, rest, state)
    } else if is(REST_VERBS) {
        Ok(Action::Rest)
    } else if is(LOOK_VERBS) {
        Ok(Action::Look)
    } else if is(INVENTORY_VERBS) {
        Ok(Action::Inventory)
    } else if is(STATS_VERBS) {
        Ok(Action::Stats)
    } else if is(SAVE_VERBS) {
        Ok(Action::SaveGame)
    } else if is(LOAD_VERBS) {
        Ok(Action::LoadGame {
            save_id: rest.first().copied().unwrap_or(DEFAULT_SAVE_SLOT).to_string(),
        })
    } else if is(HELP_VERBS) {
        Ok(Action::Help)
    } else {
        Err(ParseError::UnknownCommand(normalized))
    }
}

/// Dialogue-mode input. `Ok(None)` means "not a dialogue command".
fn parse_dialogue(words: &[&str]) -> Result<Option<Action>, ParseError> {
    let number = match words {
        [n] if n.parse::<i64>().is_ok() => Some(*n),
        [verb, n] if SELECT_VERBS.contains(verb) && n.parse::<i64>().is_ok() => Some(*n),
        _ => None,
    };
    if let Some(text) = number {
        return select_option(text).map(Some);
    }
    if LEAVE_WORDS.contains(&words[0]) {
        return Ok(Some(Action::DialogueSelect {
            option_index: END_CONVERSATION,
        }));
    }
    Ok(None)
}

fn select_option(text: &str) -> Result<Action, ParseError> {
    let n = text
        .parse::<i64>()
        .map_err(|_| ParseError::InvalidOption(text.to_string()))?;
    if n < 1 {
        return Err(ParseError::InvalidOption(text.to_string()));
    }
    let option_index =
        i32::try_from(n - 1).map_err(|_| ParseError::InvalidOption(text.to_string()))?;
    Ok(Action::DialogueSelect { option_index })
}

fn skip_filler<'a, 'b>(rest: &'a [&'b str], filler: &[&str]) -> &'a [&'b str] {
    match rest.split_first() {
        Some((first, tail)) if filler.contains(first) => tail,
        _ => rest,
    }
}

fn missing(verb: &str, what: &str) -> ParseError {
    ParseError::MissingArgument {
        verb: verb.to_string(),
        what: what.to_string(),
    }
}

fn parse_move(verb: &str, rest: &[&str]) -> Result<Action, ParseError> {
    let Some(word) = rest.first() else {
        return Err(missing(verb, "a direction"));
    };
    Direction::parse(word)
        .map(|direction| Action::Move { direction })
        .ok_or_else(|| ParseError::InvalidDirection(rest.join(" ")))
}

fn npcs_here(state: &GameState) -> Vec<&Npc> {
    state.world.npcs_at(&state.current_location)
}

fn ground_items(state: &GameState) -> Vec<&Item> {
    state
        .location()
        .map(|loc| loc.items.iter().collect())
        .unwrap_or_default()
}

fn held_items(state: &GameState) -> Vec<&Item> {
    state.character.inventory.items.iter().collect()
}

fn parse_talk(verb: &str, rest: &[&str], state: &GameState) -> Result<Action, ParseError> {
    if rest.is_empty() {
        return Err(missing(verb, "someone to talk to"));
    }
    let npc = find(&npcs_here(state), &rest.join(" "), true, "here to talk to")?;
    Ok(Action::Talk {
        npc_id: npc.id.clone(),
    })
}

fn parse_take(verb: &str, rest: &[&str], state: &GameState) -> Result<Action, ParseError> {
    if rest.is_empty() {
        return Err(missing(verb, "an item"));
    }
    let item = find(&ground_items(state), &rest.join(" "), false, "here to take")?;
    Ok(Action::Take {
        item_id: item.id.clone(),
    })
}

fn parse_held(
    verb: &str,
    rest: &[&str],
    state: &GameState,
    what: &str,
    build: impl FnOnce(String) -> Action,
) -> Result<Action, ParseError> {
    if rest.is_empty() {
        return Err(missing(verb, "an item"));
    }
    let item = find(&held_items(state), &rest.join(" "), false, what)?;
    Ok(build(item.id.clone()))
}

fn parse_attack(verb: &str, rest: &[&str], state: &GameState) -> Result<Action, ParseError> {
    if state.in_combat() {
        let enemies: Vec<&Enemy> = state.combat.enemies.iter().collect();
        let target = if rest.is_empty() {
            enemies
                .first()
                .copied()
                .ok_or_else(|| missing(verb, "a target"))?
        } else {
            find(&enemies, &rest.join(" "), true, "in this fight")?
        };
        return Ok(Action::Attack {
            target_id: target.id.clone(),
        });
    }

    if rest.is_empty() {
        return Err(missing(verb, "a target"));
    }
    let npc = find(&npcs_here(state), &rest.join(" "), true, "here to attack")?;
    Ok(Action::Attack {
        target_id: npc.id.clone(),
    })
}

/// Split `item words [keyword npc words]`.
fn split_clause<'a, 'b>(rest: &'a [&'b str], keyword: &str) -> (&'a [&'b str], Option<&'a [&'b str]>) {
    match rest.iter().position(|w| *w == keyword) {
        Some(idx) => (&rest[..idx], Some(&rest[idx + 1..])),
        None => (rest, None),
    }
}

/// The shopkeeper named in the clause, or the first one present.
fn pick_shopkeeper<'s>(
    clause: Option<&[&str]>,
    state: &'s GameState,
) -> Result<&'s Npc, ParseError> {
    let here = npcs_here(state);
    match clause {
        Some(words) if !words.is_empty() => {
            find(&here, &words.join(" "), true, "here to trade with")
        }
        _ => here
            .into_iter()
            .find(|npc| npc.shop.is_some())
            .ok_or(ParseError::NoShop),
    }
}

fn slug(words: &[&str]) -> String {
    words.join("-")
}

fn parse_buy(verb: &str, rest: &[&str], state: &GameState) -> Result<Action, ParseError> {
    let (item_words, clause) = split_clause(rest, "from");
    if item_words.is_empty() {
        return Err(missing(verb, "an item"));
    }
    let npc = pick_shopkeeper(clause, state)?;
    let item_id = match &npc.shop {
        Some(shop) => {
            let stock: Vec<&Item> = shop.items.iter().collect();
            find(&stock, &item_words.join(" "), false, "for sale here")?
                .id
                .clone()
        }
        None => slug(item_words),
    };
    Ok(Action::Buy {
        item_id,
        npc_id: npc.id.clone(),
    })
}

fn parse_sell(verb: &str, rest: &[&str], state: &GameState) -> Result<Action, ParseError> {
    let (item_words, clause) = split_clause(rest, "to");
    if item_words.is_empty() {
        return Err(missing(verb, "an item"));
    }
    let npc = pick_shopkeeper(clause, state)?;
    let item = find(&held_items(state), &item_words.join(" "), false, "in your pack to sell")?;
    Ok(Action::Sell {
        item_id: item.id.clone(),
        npc_id: npc.id.clone(),
    })
}
