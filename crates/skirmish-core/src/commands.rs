//! Commands sent from the host to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::constants::MAX_FACTION_SIZE;
use crate::enums::Faction;
use crate::error::{SimError, SimResult};

/// All possible host actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimCommand {
    /// Populate both factions and start running. Only valid during setup.
    Spawn {
        faction_size: u32,
        user_faction: Faction,
    },
    /// Freeze the simulation.
    Pause,
    /// Unfreeze the simulation.
    Resume,
    /// Flip between paused and running.
    TogglePause,
    /// Clear the finished game and return to setup.
    Restart,
}

/// A validated spawn request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnRequest {
    faction_size: u32,
    user_faction: Faction,
}

impl SpawnRequest {
    /// Validate a faction size. Zero-sized armies are rejected here so the
    /// engine never has to handle them.
    pub fn new(faction_size: u32, user_faction: Faction) -> SimResult<Self> {
        if faction_size == 0 || faction_size > MAX_FACTION_SIZE {
            return Err(SimError::InvalidFactionSize(faction_size));
        }
        Ok(Self {
            faction_size,
            user_faction,
        })
    }

    pub fn faction_size(&self) -> u32 {
        self.faction_size
    }

    pub fn user_faction(&self) -> Faction {
        self.user_faction
    }
}

impl From<SpawnRequest> for SimCommand {
    fn from(request: SpawnRequest) -> Self {
        SimCommand::Spawn {
            faction_size: request.faction_size,
            user_faction: request.user_faction,
        }
    }
}
