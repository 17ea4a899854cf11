//! Seek system: constant-speed pursuit of each agent's current target.
//!
//! Agents step one unit per tick toward the opposing agent in their target
//! slot. Speed is not scaled by tick duration.

use glam::Vec2;
use hecs::{Entity, World};

use skirmish_core::components::Target;
use skirmish_core::constants::SEEK_ARRIVAL_DIST_SQ;
use skirmish_core::enums::Faction;
use skirmish_core::types::Position;

use crate::roster::Populations;

/// Move every agent toward its target. Red moves first, so blue agents
/// chase red positions already updated this tick.
pub fn run(world: &mut World, populations: &Populations) {
    for faction in Faction::ALL {
        let opponents = populations.roster(faction.opponent());
        for &entity in populations.roster(faction) {
            seek(world, entity, opponents);
        }
    }
}

/// Step `entity` toward its target in `opponents`. Returns whether it moved.
///
/// A missing, stale (out of range) or despawned target means no movement.
pub fn seek(world: &World, entity: Entity, opponents: &[Entity]) -> bool {
    let Some(target) = target_position(world, entity, opponents) else {
        return false;
    };
    let Ok(mut pos) = world.get::<&mut Position>(entity) else {
        return false;
    };
    match seek_step(pos.to_vec2(), target) {
        Some(step) => {
            *pos = Position::from(pos.to_vec2() + step);
            true
        }
        None => false,
    }
}

/// Unit step from `from` toward `to`, or `None` inside the arrival dead zone.
pub fn seek_step(from: Vec2, to: Vec2) -> Option<Vec2> {
    let delta = to - from;
    let dist_sq = delta.length_squared();
    if dist_sq > SEEK_ARRIVAL_DIST_SQ {
        Some(delta * dist_sq.sqrt().recip())
    } else {
        None
    }
}

fn target_position(world: &World, entity: Entity, opponents: &[Entity]) -> Option<Vec2> {
    let index = world.get::<&Target>(entity).ok()?.index?;
    let target = *opponents.get(index)?;
    let pos = world.get::<&Position>(target).ok()?;
    Some(pos.to_vec2())
}
