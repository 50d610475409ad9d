//! A running game: one state, one seeded RNG, and the world it was built from.

use ql_core::WorldTemplate;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::action::Action;
use crate::config::GameConfig;
use crate::error::FictionResult;
use crate::log::LogEntry;
use crate::parser::parse;
use crate::processor::process;
use crate::state::{GameState, new_game, new_game_with_name};

/// Owns the game state between turns.
#[derive(Debug, Clone)]
pub struct Session {
    state: GameState,
    rng: StdRng,
    config: GameConfig,
    template: WorldTemplate,
}

impl Session {
    /// Start a session in `template`.
    pub fn new(config: GameConfig, template: WorldTemplate) -> FictionResult<Self> {
        let mut rng = StdRng::seed_from_u64(config.seed);
        let state = start(&config, &template, &mut rng)?;
        tracing::debug!(seed = config.seed, class = %config.class_id, "session started");
        Ok(Self {
            state,
            rng,
            config,
            template,
        })
    }

    /// Start a session in the built-in world.
    pub fn with_standard_world(config: GameConfig) -> FictionResult<Self> {
        Self::new(config, WorldTemplate::standard().clone())
    }

    /// The current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The configuration the session was started with.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Parse and apply one line of input, returning the new log entries.
    ///
    /// A line that does not parse is logged as an error and changes nothing
    /// else.
    pub fn submit(&mut self, input: &str) -> &[LogEntry] {
        let before = self.state.log.len();
        match parse(input, &self.state) {
            Ok(action) => self.state = process(&self.state, &action, &mut self.rng),
            Err(e) => {
                tracing::debug!(input, error = %e, "parse failed");
                self.state.log.error(e.to_string());
            }
        }
        self.state.log.since(before)
    }

    /// Apply an already-typed action.
    pub fn apply(&mut self, action: &Action) -> &[LogEntry] {
        let before = self.state.log.len();
        self.state = process(&self.state, action, &mut self.rng);
        self.state.log.since(before)
    }

    /// Throw the current game away and start again with the same class.
    ///
    /// The RNG carries on, so a restarted game rolls a different character.
    pub fn restart(&mut self) -> FictionResult<&[LogEntry]> {
        self.state = start(&self.config, &self.template, &mut self.rng)?;
        Ok(self.state.log.entries())
    }

    /// Log entries after the first `n`.
    pub fn entries_since(&self, n: usize) -> &[LogEntry] {
        self.state.log.since(n)
    }

    /// Whether the character has died.
    pub fn is_over(&self) -> bool {
        !self.state.character.is_alive()
    }
}

fn start(config: &GameConfig, template: &WorldTemplate, rng: &mut StdRng) -> FictionResult<GameState> {
    match &config.character_name {
        Some(name) => new_game_with_name(name, &config.class_id, template, rng),
        None => new_game(&config.class_id, template, rng),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FictionError;
    use crate::log::LogKind;
    use ql_mechanics::MechError;

    fn session(seed: u64) -> Session {
        Session::with_standard_world(GameConfig::default().with_seed(seed).with_name("Tester"))
            .unwrap()
    }

    #[test]
    fn same_seed_same_game() {
        let mut a = session(7);
        let mut b = session(7);
        assert_eq!(a.state().character, b.state().character);
        for line in ["s", "w", "look", "attack wolf", "attack wolf"] {
            a.submit(line);
            b.submit(line);
        }
        assert_eq!(a.state().character, b.state().character);
        assert_eq!(a.state().combat, b.state().combat);
    }

    #[test]
    fn parse_errors_are_logged() {
        let mut s = session(1);
        let entries = s.submit("dance wildly");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].kind, LogKind::Error);
        assert!(entries[0].text.contains("dance"));
    }

    #[test]
    fn submit_returns_only_new_entries() {
        let mut s = session(1);
        let before = s.state().log.len();
        let count = s.submit("look").len();
        assert!(count > 0);
        assert_eq!(s.state().log.len(), before + count);
        assert_eq!(s.entries_since(before).len(), count);
    }

    #[test]
    fn apply_skips_the_parser() {
        let mut s = session(1);
        s.apply(&Action::Move {
            direction: ql_core::Direction::North,
        });
        assert_eq!(s.state().current_location, "tavern");
    }

    #[test]
    fn restart_starts_over() {
        let mut s = session(3);
        s.submit("n");
        let entries = s.restart().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(s.state().current_location, "village-square");
        assert_eq!(s.state().character.name, "Tester");
        assert!(!s.is_over());
    }

    #[test]
    fn unknown_class_is_rejected() {
        let result = Session::with_standard_world(GameConfig::default().with_class("bard"));
        assert!(matches!(
            result,
            Err(FictionError::Mechanics(MechError::UnknownClass(_)))
        ));
    }

    #[test]
    fn a_dead_character_ends_the_session() {
        let mut s = session(1);
        s.state.character = s.state.character.damage(1000);
        assert!(s.is_over());
        let entries = s.submit("look");
        assert_eq!(entries[0].kind, LogKind::Error);
    }
}
