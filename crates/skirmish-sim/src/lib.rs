//! Simulation engine for Skirmish.
//!
//! Owns the hecs ECS world and the per-faction rosters, runs the systems
//! once per tick, and produces `SimSnapshot`s for the host.

pub mod engine;
pub mod grid;
pub mod roster;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use skirmish_core as core;
