//! Simulation snapshot: the complete visible state handed to the host each tick.

use serde::{Deserialize, Serialize};

use crate::enums::{Faction, SimPhase};
use crate::types::{Position, SimTime, ViewRect};

/// Complete simulation state published after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimSnapshot {
    pub time: SimTime,
    pub phase: SimPhase,
    /// Faction the user picked, once a game has been spawned.
    pub user_faction: Option<Faction>,
    /// Every live agent, red roster first, then blue, each in roster order.
    pub agents: Vec<AgentView>,
    pub red: FactionView,
    pub blue: FactionView,
    /// Set once the phase reaches `Over`.
    pub outcome: Option<Outcome>,
}

impl SimSnapshot {
    pub fn faction(&self, faction: Faction) -> &FactionView {
        match faction {
            Faction::Red => &self.red,
            Faction::Blue => &self.blue,
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase == SimPhase::Over
    }

    /// Agents inside the host's view. Off-screen agents are not drawn.
    pub fn visible_agents<'a>(&'a self, view: &'a ViewRect) -> impl Iterator<Item = &'a AgentView> {
        self.agents.iter().filter(move |a| view.contains(&a.position))
    }
}

/// A live agent as the renderer sees it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgentView {
    pub faction: Faction,
    pub position: Position,
    pub radius: f32,
    pub health: i32,
}

/// Per-faction headcount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactionView {
    /// Agents currently alive.
    pub alive: u32,
    /// Agents lost since the game started.
    pub losses: u32,
}

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    /// Faction with agents left standing. `None` if both were wiped out on
    /// the same tick.
    pub winner: Option<Faction>,
    /// Whether the user's faction is the one still populated.
    pub user_won: bool,
    /// Tick on which the game ended.
    pub tick: u64,
}
