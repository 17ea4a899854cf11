//! Combat resolution: contact damage between overlapping opposing agents.
//!
//! Red agents are the outer loop; each scans the blue grid's 3x3 block
//! around its current cell. Every overlapping (red, blue) pair costs both
//! agents an independent `DAMAGE_MIN..=DAMAGE_MAX` roll. Nobody is removed
//! here; lethality is checked once by the cleanup system afterward.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skirmish_core::components::{Body, Health};
use skirmish_core::constants::{DAMAGE_MAX, DAMAGE_MIN};
use skirmish_core::enums::Faction;
use skirmish_core::types::Position;

use crate::grid::{FactionGrids, SpatialGrid};
use crate::roster::Populations;

/// Resolve all contacts for this tick. Returns the number of colliding pairs.
pub fn run(
    world: &mut World,
    populations: &Populations,
    grids: &FactionGrids,
    rng: &mut ChaCha8Rng,
) -> usize {
    resolve(
        world,
        populations.roster(Faction::Red),
        grids.grid(Faction::Blue),
        rng,
    )
}

/// Damage every (attacker, defender) pair in contact, where defenders come
/// from `defender_grid`'s neighborhood of each attacker.
pub fn resolve(
    world: &mut World,
    attackers: &[Entity],
    defender_grid: &SpatialGrid,
    rng: &mut ChaCha8Rng,
) -> usize {
    let mut contacts = 0;

    for &attacker in attackers {
        let Some((pos, radius)) = body(world, attacker) else {
            continue;
        };

        for defender in defender_grid.neighbors(pos.cell()) {
            let Some((other_pos, other_radius)) = body(world, defender) else {
                continue;
            };
            let reach = radius + other_radius;
            if pos.distance_squared(&other_pos) < reach * reach {
                apply_damage(world, attacker, roll_damage(rng));
                apply_damage(world, defender, roll_damage(rng));
                contacts += 1;
            }
        }
    }

    contacts
}

/// One independent damage roll.
pub fn roll_damage(rng: &mut ChaCha8Rng) -> i32 {
    rng.gen_range(DAMAGE_MIN..=DAMAGE_MAX)
}

fn apply_damage(world: &World, entity: Entity, damage: i32) {
    if let Ok(mut health) = world.get::<&mut Health>(entity) {
        health.value = health.value.saturating_sub(damage);
    }
}

fn body(world: &World, entity: Entity) -> Option<(Position, f32)> {
    let pos = *world.get::<&Position>(entity).ok()?;
    let radius = world.get::<&Body>(entity).ok()?.radius;
    Some((pos, radius))
}
