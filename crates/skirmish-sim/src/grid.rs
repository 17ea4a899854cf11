//! Uniform-cell spatial hash for neighborhood queries.
//!
//! Buckets hold entity handles keyed by `CellCoord`. The grid is rebuilt
//! from scratch at the start of every tick and never mutated in between;
//! systems later in the tick read positions live through the handles.

use std::collections::HashMap;

use hecs::{Entity, World};

use skirmish_core::enums::Faction;
use skirmish_core::types::{CellCoord, Position};

use crate::roster::Populations;

#[derive(Debug, Clone, Default)]
pub struct SpatialGrid {
    buckets: HashMap<CellCoord, Vec<Entity>>,
    len: usize,
}

impl SpatialGrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put `entity` in the bucket of the cell containing `position`.
    pub fn insert(&mut self, entity: Entity, position: &Position) {
        self.buckets.entry(position.cell()).or_default().push(entity);
        self.len += 1;
    }

    /// Entities bucketed in exactly `cell`, in insertion order.
    pub fn bucket(&self, cell: CellCoord) -> &[Entity] {
        self.buckets.get(&cell).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Union of the 3x3 block of buckets centered on `cell`.
    pub fn neighbors(&self, cell: CellCoord) -> impl Iterator<Item = Entity> + '_ {
        cell.neighborhood()
            .flat_map(move |c| self.bucket(c).iter().copied())
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Empty every bucket. Buckets occupied last tick keep their allocation;
    /// cells nobody visited are dropped so the map tracks the armies.
    pub fn clear(&mut self) {
        self.buckets.retain(|_, bucket| {
            let occupied = !bucket.is_empty();
            bucket.clear();
            occupied
        });
        self.len = 0;
    }

    /// Rebuild from the current positions of `roster`.
    pub fn rebuild(&mut self, world: &World, roster: &[Entity]) {
        self.clear();
        for &entity in roster {
            if let Ok(pos) = world.get::<&Position>(entity) {
                self.insert(entity, &pos);
            }
        }
    }
}

/// One grid per faction, both built from the same tick-start state.
#[derive(Debug, Clone, Default)]
pub struct FactionGrids {
    grids: [SpatialGrid; 2],
}

impl FactionGrids {
    pub fn grid(&self, faction: Faction) -> &SpatialGrid {
        &self.grids[faction.index()]
    }

    pub fn rebuild(&mut self, world: &World, populations: &Populations) {
        for faction in Faction::ALL {
            self.grids[faction.index()].rebuild(world, populations.roster(faction));
        }
    }

    pub fn clear(&mut self) {
        for grid in &mut self.grids {
            grid.clear();
        }
    }
}
