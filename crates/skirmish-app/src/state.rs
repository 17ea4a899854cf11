//! State shared between the caller and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use skirmish_core::commands::SimCommand;
use skirmish_core::enums::Faction;
use skirmish_core::state::SimSnapshot;

/// Commands sent to the game loop thread.
#[derive(Debug)]
pub enum HostCommand {
    /// A command to forward to the simulation engine.
    Sim(SimCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Latest published snapshot, shared with the game loop thread.
pub type SharedSnapshot = Arc<Mutex<Option<SimSnapshot>>>;

/// Handle to a running game loop.
pub struct HostHandle {
    /// Channel into the game loop.
    pub command_tx: mpsc::Sender<HostCommand>,
    /// Most recent snapshot the loop published for rendering.
    pub latest_snapshot: SharedSnapshot,
}

impl HostHandle {
    /// Forward a simulation command. Returns false once the loop has exited.
    pub fn send(&self, command: SimCommand) -> bool {
        self.command_tx.send(HostCommand::Sim(command)).is_ok()
    }

    pub fn shutdown(&self) {
        let _ = self.command_tx.send(HostCommand::Shutdown);
    }

    pub fn latest(&self) -> Option<SimSnapshot> {
        self.latest_snapshot.lock().ok().and_then(|s| s.clone())
    }
}

/// How a single game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    /// Ticks the game ran for.
    pub ticks: u64,
    /// Surviving faction. `None` for mutual wipe-out or an abandoned game.
    pub winner: Option<Faction>,
    /// `None` if the game hit the tick limit before anyone was wiped out.
    pub user_won: Option<bool>,
    pub red_alive: u32,
    pub blue_alive: u32,
}

/// Everything the loop played before exiting.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunSummary {
    pub games: Vec<GameResult>,
}

impl RunSummary {
    pub fn wins(&self) -> usize {
        self.games.iter().filter(|g| g.user_won == Some(true)).count()
    }

    pub fn losses(&self) -> usize {
        self.games.iter().filter(|g| g.user_won == Some(false)).count()
    }
}
