use chrono::{DateTime, Utc};
use ql_core::{Location, Quest, World, WorldTemplate};
use ql_mechanics::combat::CombatState;
use ql_mechanics::sheet::class::{class_def, random_name, random_race};
use ql_mechanics::{Character, RollSource, create_character};
use serde::{Deserialize, Serialize};

use crate::error::{FictionError, FictionResult};
use crate::log::GameLog;

/// The conversation in progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveDialogue {
    /// Who the player is talking to.
    pub npc_id: String,
    /// The node whose options are on offer.
    pub node_id: String,
}

/// Everything about one playthrough.
///
/// The action processor never mutates a `GameState` it is handed; it
/// returns a new one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// The player character.
    pub character: Character,
    /// Id of the location the player is in.
    pub current_location: String,
    /// This game's own copy of the world.
    pub world: World,
    /// Known quests.
    pub quests: Vec<Quest>,
    /// The current fight, inactive when there is none.
    pub combat: CombatState,
    /// The current conversation, if any.
    pub active_dialogue: Option<ActiveDialogue>,
    /// Everything that has happened.
    pub log: GameLog,
    /// When the state last changed.
    pub last_update: DateTime<Utc>,
}

impl GameState {
    /// Start a game for an existing character.
    ///
    /// The start location is marked visited and the log opens with an
    /// arrival announcement and the location description.
    pub fn new(character: Character, template: &WorldTemplate) -> FictionResult<Self> {
        let mut world = template.instantiate();
        let start = world
            .locations
            .get_mut(&template.start_location)
            .ok_or_else(|| FictionError::StartLocationMissing(template.start_location.clone()))?;
        start.visited = true;
        let description = location_text(start);

        let mut log = GameLog::new();
        log.success(format!(
            "{} the {} {} arrives. Your adventure begins!",
            character.name, character.race, character.class_name
        ));
        log.info(description);

        Ok(Self {
            character,
            current_location: template.start_location.clone(),
            world,
            quests: Vec::new(),
            combat: CombatState::default(),
            active_dialogue: None,
            log,
            last_update: Utc::now(),
        })
    }

    /// The location the player is in.
    pub fn location(&self) -> Option<&Location> {
        self.world.locations.get(&self.current_location)
    }

    /// The location the player is in, mutably.
    pub fn location_mut(&mut self) -> Option<&mut Location> {
        self.world.locations.get_mut(&self.current_location)
    }

    /// Whether a fight is in progress.
    pub fn in_combat(&self) -> bool {
        self.combat.active
    }
}

/// Name and description of a location as one log line.
pub(crate) fn location_text(location: &Location) -> String {
    format!("{}\n{}", location.name, location.description)
}

/// Start a game with a random name and race.
pub fn new_game(
    class_id: &str,
    template: &WorldTemplate,
    rng: &mut dyn RollSource,
) -> FictionResult<GameState> {
    class_def(class_id)?;
    let name = random_name(rng);
    new_game_with_name(name, class_id, template, rng)
}

/// Start a game with a fixed name and a random race.
pub fn new_game_with_name(
    name: &str,
    class_id: &str,
    template: &WorldTemplate,
    rng: &mut dyn RollSource,
) -> FictionResult<GameState> {
    let race = random_race(rng);
    let character = create_character(name, race, class_id, None, rng)?;
    tracing::debug!(name, race, class_id, "new game");
    GameState::new(character, template)
}
