//! Faction rosters: the simulation-owned registry agents target into.
//!
//! Each faction keeps an ordered list of entity handles. A `Target` index is
//! a slot in the opposing roster, resolved fresh every time it is read, so
//! removing agents or relocating storage never leaves a dangling reference.

use hecs::Entity;

use skirmish_core::enums::Faction;

#[derive(Debug, Clone, Default)]
pub struct Populations {
    rosters: [Vec<Entity>; 2],
}

impl Populations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Live agents of `faction`, in spawn order.
    pub fn roster(&self, faction: Faction) -> &[Entity] {
        &self.rosters[faction.index()]
    }

    pub fn roster_mut(&mut self, faction: Faction) -> &mut Vec<Entity> {
        &mut self.rosters[faction.index()]
    }

    pub fn len(&self, faction: Faction) -> usize {
        self.rosters[faction.index()].len()
    }

    pub fn is_empty(&self, faction: Faction) -> bool {
        self.rosters[faction.index()].is_empty()
    }

    /// Entity occupying slot `index` of `faction`'s roster, if any.
    pub fn resolve(&self, faction: Faction, index: usize) -> Option<Entity> {
        self.rosters[faction.index()].get(index).copied()
    }

    /// First faction found with no agents left.
    pub fn extinct_faction(&self) -> Option<Faction> {
        Faction::ALL.into_iter().find(|&f| self.is_empty(f))
    }

    pub fn clear(&mut self) {
        for roster in &mut self.rosters {
            roster.clear();
        }
    }
}
