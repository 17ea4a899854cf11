//! Skirmish headless host.
//!
//! Stands in for the windowed front end: drives the simulation at a fixed
//! tick rate, publishes throttled snapshots, and handles the game-over
//! countdown and restart.

pub mod config;
pub mod game_loop;
pub mod state;

pub use skirmish_core as core;
