//! Entity spawn factories for setting up the simulation world.
//!
//! Armies are created once per game, in pairs: spawn index `i` produces one
//! red and one blue agent, each initially aimed at opposing slot `i`.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skirmish_core::components::{Body, Health, Target};
use skirmish_core::constants::*;
use skirmish_core::enums::Faction;
use skirmish_core::types::Position;

use crate::roster::Populations;

/// Spawn `faction_size` agents per faction into `world`, appending their
/// handles to the rosters in spawn order.
pub fn spawn_armies(
    world: &mut World,
    populations: &mut Populations,
    rng: &mut ChaCha8Rng,
    faction_size: u32,
) {
    let size = faction_size as usize;
    for faction in Faction::ALL {
        populations.roster_mut(faction).reserve(size);
    }

    for i in 0..size {
        for faction in Faction::ALL {
            let health = roll_health(rng);
            let position = spawn_position(rng, faction);
            let entity = spawn_agent(world, faction, position, health, Some(i));
            populations.roster_mut(faction).push(entity);
        }
    }
}

/// Spawn a single agent. Does not touch the rosters.
pub fn spawn_agent(
    world: &mut World,
    faction: Faction,
    position: Position,
    health: i32,
    target: Option<usize>,
) -> Entity {
    world.spawn((
        faction,
        position,
        Body {
            radius: AGENT_RADIUS,
        },
        Health { value: health },
        Target { index: target },
    ))
}

/// Base health plus a uniform bonus in `0..=HEALTH_BONUS_MAX`.
pub fn roll_health(rng: &mut ChaCha8Rng) -> i32 {
    BASE_HEALTH + rng.gen_range(0..=HEALTH_BONUS_MAX)
}

/// Random point in `faction`'s spawn band: a column near its side of the
/// field, spanning most of the field's height. Whole-unit coordinates.
pub fn spawn_position(rng: &mut ChaCha8Rng, faction: Faction) -> Position {
    let column = match faction {
        Faction::Red => RED_SPAWN_X,
        Faction::Blue => BLUE_SPAWN_X,
    };
    let x = column + rng.gen_range(-SPAWN_X_JITTER..=SPAWN_X_JITTER);
    let y = SPAWN_Y_MIN + rng.gen_range(0..=SPAWN_Y_SPAN);
    Position::new(x as f32, y as f32)
}
