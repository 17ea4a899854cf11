//! Target assignment: every survivor picks a fresh random opposing slot.
//!
//! Targeting is not sticky. The index is reinterpreted next tick against
//! whichever agent then occupies that slot.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skirmish_core::components::Target;
use skirmish_core::enums::Faction;

use crate::roster::Populations;

/// Reassign targets for both factions. Must run after cleanup so every
/// index is in range for the rosters as they stand at the end of the tick.
pub fn run(world: &mut World, populations: &Populations, rng: &mut ChaCha8Rng) {
    for faction in Faction::ALL {
        let opponents = populations.len(faction.opponent());
        for &entity in populations.roster(faction) {
            if let Ok(mut target) = world.get::<&mut Target>(entity) {
                target.index = pick_target(rng, opponents);
            }
        }
    }
}

/// Uniform slot in `0..opponents`, or `None` if there is nobody to chase.
pub fn pick_target(rng: &mut ChaCha8Rng, opponents: usize) -> Option<usize> {
    if opponents == 0 {
        None
    } else {
        Some(rng.gen_range(0..opponents))
    }
}
