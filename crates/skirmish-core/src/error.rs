//! Error type for the boundary between host and simulation.
//!
//! Nothing inside a tick can fail; these errors only come from validating
//! requests and configuration before they reach the engine.

use thiserror::Error;

use crate::constants::MAX_FACTION_SIZE;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimError {
    #[error("faction size {0} is out of range (expected 1..={})", MAX_FACTION_SIZE)]
    InvalidFactionSize(u32),

    #[error("configuration error: {0}")]
    InvalidConfig(String),
}

pub type SimResult<T> = Result<T, SimError>;
