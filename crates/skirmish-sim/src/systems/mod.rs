//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are plain functions over `&mut World` (or `&World` for read-only)
//! plus the rosters and grids the engine lends them. They own no state.

pub mod cleanup;
pub mod combat;
pub mod seek;
pub mod separation;
pub mod snapshot;
pub mod targeting;
