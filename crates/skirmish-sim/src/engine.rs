//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world and the faction rosters,
//! processes host commands, runs all systems in a fixed order, and
//! produces `SimSnapshot`s. Completely headless.

use std::collections::VecDeque;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use skirmish_core::commands::{SimCommand, SpawnRequest};
use skirmish_core::enums::{Faction, SimPhase};
use skirmish_core::state::{Outcome, SimSnapshot};
use skirmish_core::types::SimTime;

use crate::grid::FactionGrids;
use crate::roster::Populations;
use crate::systems;
use crate::systems::cleanup::Casualties;
use crate::world_setup;

/// Configuration for creating a simulation engine.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed. `None` draws one from the OS, so runs are not reproducible.
    pub seed: Option<u64>,
    /// Emit a debug summary every N ticks. Zero disables it.
    pub log_interval_ticks: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: None,
            log_interval_ticks: 600,
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    populations: Populations,
    grids: FactionGrids,
    time: SimTime,
    phase: SimPhase,
    rng: ChaCha8Rng,
    user_faction: Option<Faction>,
    outcome: Option<Outcome>,
    losses: Casualties,
    command_queue: VecDeque<SimCommand>,
    despawn_buffer: Vec<Entity>,
    log_interval_ticks: u64,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        Self {
            world: World::new(),
            populations: Populations::new(),
            grids: FactionGrids::default(),
            time: SimTime::default(),
            phase: SimPhase::default(),
            rng,
            user_faction: None,
            outcome: None,
            losses: Casualties::default(),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            log_interval_ticks: config.log_interval_ticks,
        }
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: SimCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = SimCommand>) {
        self.command_queue.extend(commands);
    }

    /// Process queued commands, advance one tick if running, and return the
    /// resulting snapshot. While paused, over, or in setup this only
    /// processes commands.
    pub fn tick(&mut self) -> SimSnapshot {
        self.process_commands();

        if self.phase == SimPhase::Running {
            self.step();
        }

        self.snapshot()
    }

    /// Build a snapshot of the current state without advancing.
    pub fn snapshot(&self) -> SimSnapshot {
        systems::snapshot::build_snapshot(
            &self.world,
            &self.populations,
            &self.time,
            self.phase,
            self.user_faction,
            &self.losses,
            self.outcome,
        )
    }

    pub fn phase(&self) -> SimPhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn is_paused(&self) -> bool {
        self.phase == SimPhase::Paused
    }

    /// Whether one faction has been wiped out.
    pub fn is_over(&self) -> bool {
        self.phase == SimPhase::Over
    }

    /// Whether the user's faction survived. Only meaningful once `is_over()`.
    pub fn did_user_win(&self) -> bool {
        self.outcome.is_some_and(|o| o.user_won)
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn user_faction(&self) -> Option<Faction> {
        self.user_faction
    }

    /// Read-only access to the faction rosters.
    pub fn populations(&self) -> &Populations {
        &self.populations
    }

    /// Read-only access to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Enter `Running` with empty rosters, for tests that place agents by hand.
    #[cfg(test)]
    pub fn start_empty(&mut self, user_faction: Faction) {
        self.user_faction = Some(user_faction);
        self.phase = SimPhase::Running;
    }

    /// Place a single agent and append it to its roster.
    #[cfg(test)]
    pub fn insert_agent(
        &mut self,
        faction: Faction,
        position: skirmish_core::types::Position,
        health: i32,
    ) -> Entity {
        let entity = world_setup::spawn_agent(&mut self.world, faction, position, health, None);
        self.populations.roster_mut(faction).push(entity);
        entity
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single command. Commands that don't apply to the current
    /// phase are ignored.
    fn handle_command(&mut self, command: SimCommand) {
        match command {
            SimCommand::Spawn {
                faction_size,
                user_faction,
            } => {
                if self.phase != SimPhase::Setup {
                    return;
                }
                match SpawnRequest::new(faction_size, user_faction) {
                    Ok(request) => self.start_game(request),
                    Err(err) => warn!(%err, "rejected spawn request"),
                }
            }
            SimCommand::Pause => {
                if self.phase == SimPhase::Running {
                    self.phase = SimPhase::Paused;
                }
            }
            SimCommand::Resume => {
                if self.phase == SimPhase::Paused {
                    self.phase = SimPhase::Running;
                }
            }
            SimCommand::TogglePause => match self.phase {
                SimPhase::Running => self.phase = SimPhase::Paused,
                SimPhase::Paused => self.phase = SimPhase::Running,
                SimPhase::Setup | SimPhase::Over => {}
            },
            SimCommand::Restart => {
                if self.phase == SimPhase::Over {
                    self.reset();
                    info!("returned to setup");
                }
            }
        }
    }

    fn start_game(&mut self, request: SpawnRequest) {
        world_setup::spawn_armies(
            &mut self.world,
            &mut self.populations,
            &mut self.rng,
            request.faction_size(),
        );
        self.user_faction = Some(request.user_faction());
        self.time = SimTime::default();
        self.phase = SimPhase::Running;
        info!(
            faction_size = request.faction_size(),
            user_faction = %request.user_faction(),
            "armies spawned"
        );
    }

    fn reset(&mut self) {
        self.world.clear();
        self.populations.clear();
        self.grids.clear();
        self.time = SimTime::default();
        self.phase = SimPhase::Setup;
        self.user_faction = None;
        self.outcome = None;
        self.losses = Casualties::default();
    }

    /// Run one simulation step. Order matters: every later system relies on
    /// the grids built here and on the rosters left by cleanup.
    fn step(&mut self) {
        self.time.advance();

        // 1. Spatial grids from tick-start positions
        self.grids.rebuild(&self.world, &self.populations);
        // 2. Seek
        systems::seek::run(&mut self.world, &self.populations);
        // 3. Combat
        let contacts =
            systems::combat::run(&mut self.world, &self.populations, &self.grids, &mut self.rng);
        // 4. Cull the dead
        let casualties = systems::cleanup::run(
            &mut self.world,
            &mut self.populations,
            &mut self.despawn_buffer,
        );
        self.losses += casualties;
        // 5. Fresh targets against the culled rosters
        systems::targeting::run(&mut self.world, &self.populations, &mut self.rng);
        // 6. Separation for this tick's faction, on the tick-start grid
        let faction = systems::separation::active_faction(self.time.tick);
        systems::separation::run(
            &mut self.world,
            &self.populations,
            self.grids.grid(faction),
            faction,
        );

        if self.log_interval_ticks > 0 && self.time.tick % self.log_interval_ticks == 0 {
            debug!(
                tick = self.time.tick,
                red = self.populations.len(Faction::Red),
                blue = self.populations.len(Faction::Blue),
                contacts,
                killed = casualties.total(),
                "tick summary"
            );
        }

        if self.populations.extinct_faction().is_some() {
            self.finish_game();
        }
    }

    fn finish_game(&mut self) {
        let winner = Faction::ALL
            .into_iter()
            .find(|&f| !self.populations.is_empty(f));
        let user_won = self
            .user_faction
            .is_some_and(|user| !self.populations.is_empty(user));

        self.outcome = Some(Outcome {
            winner,
            user_won,
            tick: self.time.tick,
        });
        self.phase = SimPhase::Over;

        info!(
            tick = self.time.tick,
            winner = winner.map(Faction::name).unwrap_or("none"),
            user_won,
            "game over"
        );
    }
}
