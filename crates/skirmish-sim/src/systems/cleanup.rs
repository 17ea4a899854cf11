//! Cleanup system: removes agents whose health has run out.

use hecs::{Entity, World};

use skirmish_core::components::Health;
use skirmish_core::enums::Faction;

use crate::roster::Populations;

/// Agents removed from each faction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Casualties {
    pub red: u32,
    pub blue: u32,
}

impl Casualties {
    pub fn get(&self, faction: Faction) -> u32 {
        match faction {
            Faction::Red => self.red,
            Faction::Blue => self.blue,
        }
    }

    pub fn total(&self) -> u32 {
        self.red + self.blue
    }

    fn add(&mut self, faction: Faction, count: u32) {
        match faction {
            Faction::Red => self.red += count,
            Faction::Blue => self.blue += count,
        }
    }
}

impl std::ops::AddAssign for Casualties {
    fn add_assign(&mut self, rhs: Self) {
        self.red += rhs.red;
        self.blue += rhs.blue;
    }
}

/// Drop every agent with health at or below zero from its roster and
/// despawn it. Surviving agents keep their relative order.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(
    world: &mut World,
    populations: &mut Populations,
    despawn_buffer: &mut Vec<Entity>,
) -> Casualties {
    despawn_buffer.clear();
    let mut casualties = Casualties::default();

    for faction in Faction::ALL {
        let before = despawn_buffer.len();
        populations.roster_mut(faction).retain(|&entity| {
            let alive = world
                .get::<&Health>(entity)
                .map(|health| health.value > 0)
                .unwrap_or(false);
            if !alive {
                despawn_buffer.push(entity);
            }
            alive
        });
        casualties.add(faction, (despawn_buffer.len() - before) as u32);
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    casualties
}
