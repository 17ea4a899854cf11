//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// One of the two opposing populations.
///
/// Also used as an ECS component tagging each agent with its side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    #[default]
    Red,
    Blue,
}

impl Faction {
    /// Both factions, red first. Iteration order of every per-faction pass.
    pub const ALL: [Faction; 2] = [Faction::Red, Faction::Blue];

    /// The faction this one fights.
    pub fn opponent(self) -> Faction {
        match self {
            Faction::Red => Faction::Blue,
            Faction::Blue => Faction::Red,
        }
    }

    /// Stable index for faction-keyed arrays.
    pub fn index(self) -> usize {
        match self {
            Faction::Red => 0,
            Faction::Blue => 1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Faction::Red => "red",
            Faction::Blue => "blue",
        }
    }
}

impl std::fmt::Display for Faction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Faction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "red" => Ok(Faction::Red),
            "blue" => Ok(Faction::Blue),
            other => Err(format!("unknown faction '{other}' (expected red or blue)")),
        }
    }
}

/// Simulation lifecycle phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimPhase {
    /// Waiting for a spawn request (faction size and user faction).
    #[default]
    Setup,
    /// Ticks advance the simulation.
    Running,
    /// Simulation frozen; ticks are no-ops.
    Paused,
    /// One faction has been wiped out. Terminal until restart.
    Over,
}
