//! Snapshot system: reads the ECS world and builds a complete SimSnapshot.
//!
//! This system is read-only. It never modifies the world.

use hecs::World;

use skirmish_core::components::{Body, Health};
use skirmish_core::enums::{Faction, SimPhase};
use skirmish_core::state::{AgentView, FactionView, Outcome, SimSnapshot};
use skirmish_core::types::{Position, SimTime};

use crate::roster::Populations;
use crate::systems::cleanup::Casualties;

/// Build a complete SimSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    populations: &Populations,
    time: &SimTime,
    phase: SimPhase,
    user_faction: Option<Faction>,
    losses: &Casualties,
    outcome: Option<Outcome>,
) -> SimSnapshot {
    let faction_view = |faction: Faction| FactionView {
        alive: populations.len(faction) as u32,
        losses: losses.get(faction),
    };

    SimSnapshot {
        time: *time,
        phase,
        user_faction,
        agents: build_agents(world, populations),
        red: faction_view(Faction::Red),
        blue: faction_view(Faction::Blue),
        outcome,
    }
}

/// AgentView list in roster order, red first.
fn build_agents(world: &World, populations: &Populations) -> Vec<AgentView> {
    let capacity = populations.len(Faction::Red) + populations.len(Faction::Blue);
    let mut agents = Vec::with_capacity(capacity);

    for faction in Faction::ALL {
        for &entity in populations.roster(faction) {
            let Ok(mut query) = world.query_one::<(&Position, &Body, &Health)>(entity) else {
                continue;
            };
            if let Some((pos, body, health)) = query.get() {
                agents.push(AgentView {
                    faction,
                    position: *pos,
                    radius: body.radius,
                    health: health.value,
                });
            }
        }
    }

    agents
}
