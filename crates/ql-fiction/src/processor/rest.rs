use ql_core::world::SAFE_REST_LOCATIONS;

use crate::state::GameState;

pub(super) fn do_rest(state: &mut GameState) {
    if state.in_combat() {
        state.log.warning("You can't rest while enemies are near!");
        return;
    }
    if !SAFE_REST_LOCATIONS.contains(&state.current_location.as_str()) {
        state
            .log
            .warning("This is no place to rest. Try the tavern or the temple.");
        return;
    }
    if state.character.hit_points.is_full() {
        state.log.info("You are already at full health.");
        return;
    }
    state.character.hit_points = state.character.hit_points.restore();
    state.log.success(format!(
        "You rest and recover your strength. ({} HP)",
        state.character.hit_points
    ));
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use crate::action::Action;
    use crate::log::LogKind;
    use crate::processor::process;
    use ql_mechanics::ScriptedRolls;

    #[test]
    fn resting_in_the_tavern_heals_fully() {
        let mut state = plain_fighter_at("tavern");
        state.character = state.character.damage(6);
        let mut rng = ScriptedRolls::new([10]);
        let next = process(&state, &Action::Rest, &mut rng);
        assert!(next.character.hit_points.is_full());
        assert_eq!(next.log.last().map(|e| e.kind), Some(LogKind::Success));
    }

    #[test]
    fn resting_outdoors_is_refused() {
        let mut state = plain_fighter_at("forest-path");
        state.character = state.character.damage(6);
        let mut rng = ScriptedRolls::new([10]);
        let next = process(&state, &Action::Rest, &mut rng);
        assert_eq!(next.character.hit_points, state.character.hit_points);
        assert_eq!(next.log.last().map(|e| e.kind), Some(LogKind::Warning));
    }

    #[test]
    fn resting_at_full_health_is_a_no_op() {
        let state = plain_fighter_at("temple");
        let mut rng = ScriptedRolls::new([10]);
        let next = process(&state, &Action::Rest, &mut rng);
        assert_eq!(next.character, state.character);
        assert_eq!(next.log.last().map(|e| e.kind), Some(LogKind::Info));
    }
}
