//! The built-in reference world: a village, the woods south of it, and a
//! goblin warren under the hills.

/// Item catalog.
pub mod items;
/// Locations of the reference world.
pub mod locations;
/// NPCs of the reference world.
pub mod npcs;

use crate::world::WorldTemplate;

/// Id of the location new games start in.
pub const START_LOCATION: &str = "village-square";

/// Build the reference world template.
pub(crate) fn standard_world() -> WorldTemplate {
    WorldTemplate {
        start_location: START_LOCATION.to_string(),
        locations: locations::all(),
        npcs: npcs::all(),
    }
}
