//! Separation: same-faction repulsion to keep agents from stacking up.
//!
//! Only one faction separates per tick: red on even ticks, blue on odd.
//! Neighborhoods come from the grid built at tick start, so agents culled
//! this tick may still sit in a bucket; their handles no longer resolve and
//! are skipped. Each agent moves only itself, reading neighbors' live
//! positions, so earlier agents' pushes are visible to later ones.

use glam::Vec2;
use hecs::{Entity, World};

use skirmish_core::constants::{SEPARATION_DISTANCE, SEPARATION_MIN_DIST_SQ};
use skirmish_core::enums::Faction;
use skirmish_core::types::Position;

use crate::grid::SpatialGrid;
use crate::roster::Populations;

/// Faction that separates on `tick`.
pub fn active_faction(tick: u64) -> Faction {
    if tick % 2 == 0 {
        Faction::Red
    } else {
        Faction::Blue
    }
}

/// Separate every agent of `faction` using that faction's tick-start grid.
/// Returns how many agents were pushed.
pub fn run(
    world: &mut World,
    populations: &Populations,
    grid: &SpatialGrid,
    faction: Faction,
) -> usize {
    let mut moved = 0;

    for &entity in populations.roster(faction) {
        let Ok(origin) = world.get::<&Position>(entity).map(|p| p.to_vec2()) else {
            continue;
        };

        let neighbors = grid
            .neighbors(Position::from(origin).cell())
            .filter(|&other| other != entity)
            .filter_map(|other| world.get::<&Position>(other).ok().map(|p| p.to_vec2()));

        let Some(push) = repulsion(origin, neighbors) else {
            continue;
        };

        if let Ok(mut pos) = world.get::<&mut Position>(entity) {
            *pos = Position::from(origin + push);
            moved += 1;
        }
    }

    moved
}

/// Sum of unit vectors pointing away from every neighbor within
/// `SEPARATION_DISTANCE`. Not averaged. `None` if no neighbor qualified.
pub fn repulsion(origin: Vec2, neighbors: impl IntoIterator<Item = Vec2>) -> Option<Vec2> {
    let max_sq = SEPARATION_DISTANCE * SEPARATION_DISTANCE;
    let mut push = Vec2::ZERO;
    let mut count = 0;

    for other in neighbors {
        let away = origin - other;
        let dist_sq = away.length_squared();
        if dist_sq < max_sq && dist_sq > SEPARATION_MIN_DIST_SQ {
            push += away / dist_sq.sqrt();
            count += 1;
        }
    }

    (count > 0).then_some(push)
}
