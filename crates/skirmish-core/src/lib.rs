//! Core types and definitions for the Skirmish simulation.
//!
//! This crate defines the vocabulary shared across the other crates:
//! components, commands, state snapshots, errors, and constants.
//! It has no dependency on the ECS or on any host runtime.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod error;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
