//! Game loop thread: runs the simulation engine at a fixed rate and publishes
//! snapshots.
//!
//! The engine is created inside the loop because it's cleaner for ownership.
//! Commands arrive via `mpsc` channel. Snapshots are stored in shared state
//! for polling, throttled to every `render_interval` running ticks.

use std::io;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::{debug, error, info, warn};

use skirmish_core::commands::SimCommand;
use skirmish_core::enums::SimPhase;
use skirmish_core::state::SimSnapshot;
use skirmish_sim::engine::SimulationEngine;

use crate::config::HostConfig;
use crate::state::{GameResult, HostCommand, HostHandle, RunSummary};

/// Spawns the game loop in a new thread.
///
/// Returns the handle for sending commands and polling snapshots, plus the
/// join handle yielding the run summary once every game has been played.
pub fn spawn_game_loop(config: HostConfig) -> io::Result<(HostHandle, JoinHandle<RunSummary>)> {
    let (command_tx, command_rx) = mpsc::channel::<HostCommand>();
    let latest_snapshot = Arc::new(Mutex::new(None));
    let shared = Arc::clone(&latest_snapshot);

    let join = std::thread::Builder::new()
        .name("skirmish-game-loop".into())
        .spawn(move || run_game_loop(&config, &command_rx, &shared))?;

    Ok((
        HostHandle {
            command_tx,
            latest_snapshot,
        },
        join,
    ))
}

/// The game loop. Runs until every configured game has been played, a
/// Shutdown command arrives, or the channel disconnects.
pub fn run_game_loop(
    config: &HostConfig,
    command_rx: &mpsc::Receiver<HostCommand>,
    latest_snapshot: &Mutex<Option<SimSnapshot>>,
) -> RunSummary {
    let mut summary = RunSummary::default();

    let spawn = match config.spawn_request() {
        Ok(request) => SimCommand::from(request),
        Err(err) => {
            error!(%err, "cannot start game loop");
            return summary;
        }
    };

    let mut engine = SimulationEngine::new(config.sim_config());
    engine.queue_command(spawn.clone());

    let tick_duration = Duration::from_nanos(1_000_000_000 / config.tick_rate.max(1) as u64);
    let mut next_tick_time = Instant::now();
    let mut countdown: Option<RestartCountdown> = None;
    let mut abandoned = false;

    loop {
        // 1. Drain all pending commands
        loop {
            match command_rx.try_recv() {
                Ok(HostCommand::Sim(cmd)) => engine.queue_command(cmd),
                Ok(HostCommand::Shutdown) => return summary,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return summary,
            }
        }

        // 2. Advance one tick (engine handles pause semantics internally)
        let snapshot = engine.tick();

        // 3. Detect the end of the current game
        if countdown.is_none() {
            let result = if let Some(outcome) = snapshot.outcome {
                info!(
                    game = summary.games.len() + 1,
                    tick = outcome.tick,
                    user_won = outcome.user_won,
                    red = snapshot.red.alive,
                    blue = snapshot.blue.alive,
                    "{}",
                    if outcome.user_won { "You Win!" } else { "You Lose!" }
                );
                Some(GameResult {
                    ticks: outcome.tick,
                    winner: outcome.winner,
                    user_won: Some(outcome.user_won),
                    red_alive: snapshot.red.alive,
                    blue_alive: snapshot.blue.alive,
                })
            } else if exceeded_tick_limit(config, &snapshot) {
                warn!(
                    game = summary.games.len() + 1,
                    tick = snapshot.time.tick,
                    "tick limit reached, abandoning game"
                );
                abandoned = true;
                Some(GameResult {
                    ticks: snapshot.time.tick,
                    winner: None,
                    user_won: None,
                    red_alive: snapshot.red.alive,
                    blue_alive: snapshot.blue.alive,
                })
            } else {
                None
            };

            if let Some(result) = result {
                summary.games.push(result);
                if summary.games.len() >= config.games as usize {
                    publish(latest_snapshot, snapshot);
                    return summary;
                }
                countdown = Some(RestartCountdown::new(
                    config.restart_delay_ticks(),
                    config.tick_rate,
                ));
            }
        }

        // 4. Store the snapshot for rendering
        if should_publish(&snapshot, config.render_interval) {
            publish(latest_snapshot, snapshot);
        }

        // 5. Count down to the next game
        if let Some(timer) = countdown.as_mut() {
            let before = timer.seconds_left();
            let finished = timer.advance();
            if timer.seconds_left() != before {
                debug!(seconds = timer.seconds_left(), "restarting soon");
            }
            if finished {
                countdown = None;
                if abandoned {
                    abandoned = false;
                    let game_index = summary.games.len() as u64;
                    let mut sim_config = config.sim_config();
                    sim_config.seed = sim_config.seed.map(|s| s.wrapping_add(game_index));
                    engine = SimulationEngine::new(sim_config);
                    engine.queue_command(spawn.clone());
                } else {
                    engine.queue_commands([SimCommand::Restart, spawn.clone()]);
                }
            }
        }

        // 6. Sleep until next tick
        if config.headless_fast {
            continue;
        }
        next_tick_time += tick_duration;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > tick_duration * 2 {
            // Too far behind: reset to avoid a catch-up spiral
            next_tick_time = now;
        }
    }
}

/// Whether this snapshot should be handed to the renderer. Running games
/// publish every `render_interval` ticks; any other phase always publishes
/// so pause and game-over screens stay current.
pub fn should_publish(snapshot: &SimSnapshot, render_interval: u64) -> bool {
    snapshot.phase != SimPhase::Running || snapshot.time.tick % render_interval.max(1) == 0
}

fn exceeded_tick_limit(config: &HostConfig, snapshot: &SimSnapshot) -> bool {
    matches!(snapshot.phase, SimPhase::Running | SimPhase::Paused)
        && config.max_ticks.is_some_and(|max| snapshot.time.tick >= max)
}

fn publish(latest_snapshot: &Mutex<Option<SimSnapshot>>, snapshot: SimSnapshot) {
    if let Ok(mut lock) = latest_snapshot.lock() {
        *lock = Some(snapshot);
    }
}

/// Ticks remaining before the next game starts.
#[derive(Debug, Clone, Copy)]
pub struct RestartCountdown {
    remaining_ticks: u64,
    tick_rate: u32,
}

impl RestartCountdown {
    pub fn new(ticks: u64, tick_rate: u32) -> Self {
        Self {
            remaining_ticks: ticks,
            tick_rate: tick_rate.max(1),
        }
    }

    /// Whole seconds left, rounded up ("Restarting in N...").
    pub fn seconds_left(&self) -> u64 {
        self.remaining_ticks.div_ceil(self.tick_rate as u64)
    }

    /// Consume one tick. Returns true once the countdown has run out.
    pub fn advance(&mut self) -> bool {
        self.remaining_ticks = self.remaining_ticks.saturating_sub(1);
        self.remaining_ticks == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skirmish_core::enums::Faction;
    use skirmish_core::types::SimTime;

    fn fast_config() -> HostConfig {
        HostConfig {
            faction_size: 1,
            user_faction: Faction::Red,
            restart_delay_secs: 0.0,
            headless_fast: true,
            seed: Some(17),
            log_interval_ticks: 0,
            ..Default::default()
        }
    }

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<HostCommand>();

        tx.send(HostCommand::Sim(SimCommand::Pause)).unwrap();
        tx.send(HostCommand::Sim(SimCommand::Resume)).unwrap();
        tx.send(HostCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(commands[0], HostCommand::Sim(SimCommand::Pause)));
        assert!(matches!(commands[1], HostCommand::Sim(SimCommand::Resume)));
        assert!(matches!(commands[2], HostCommand::Shutdown));
    }

    #[test]
    fn test_countdown_reports_whole_seconds() {
        let mut timer = RestartCountdown::new(300, 60);
        assert_eq!(timer.seconds_left(), 5);
        for _ in 0..60 {
            assert!(!timer.advance());
        }
        assert_eq!(timer.seconds_left(), 4);
        for _ in 0..239 {
            assert!(!timer.advance());
        }
        assert_eq!(timer.seconds_left(), 1);
        assert!(timer.advance());
        assert_eq!(timer.seconds_left(), 0);
    }

    #[test]
    fn test_zero_countdown_finishes_immediately() {
        let mut timer = RestartCountdown::new(0, 60);
        assert_eq!(timer.seconds_left(), 0);
        assert!(timer.advance());
    }

    #[test]
    fn test_render_throttling() {
        let running = |tick| SimSnapshot {
            phase: SimPhase::Running,
            time: SimTime { tick },
            ..Default::default()
        };
        assert!(should_publish(&running(2), 2));
        assert!(!should_publish(&running(3), 2));
        assert!(should_publish(&running(3), 1));

        let paused = SimSnapshot {
            phase: SimPhase::Paused,
            time: SimTime { tick: 3 },
            ..Default::default()
        };
        assert!(should_publish(&paused, 2), "paused frames always render");
    }

    #[test]
    fn test_shutdown_before_first_tick() {
        let (tx, rx) = mpsc::channel();
        tx.send(HostCommand::Shutdown).unwrap();
        let latest = Mutex::new(None);

        let summary = run_game_loop(&fast_config(), &rx, &latest);

        assert!(summary.games.is_empty());
        assert!(latest.lock().unwrap().is_none());
    }

    #[test]
    fn test_invalid_config_plays_nothing() {
        let (_tx, rx) = mpsc::channel();
        let latest = Mutex::new(None);
        let config = HostConfig {
            faction_size: 0,
            ..fast_config()
        };

        let summary = run_game_loop(&config, &rx, &latest);
        assert!(summary.games.is_empty());
    }

    #[test]
    fn test_tick_limit_abandons_and_restarts() {
        let (_tx, rx) = mpsc::channel();
        let latest = Mutex::new(None);
        let config = HostConfig {
            faction_size: 5,
            games: 2,
            max_ticks: Some(20),
            ..fast_config()
        };

        let summary = run_game_loop(&config, &rx, &latest);

        assert_eq!(summary.games.len(), 2);
        for game in &summary.games {
            assert_eq!(game.ticks, 20);
            assert_eq!(game.user_won, None);
            assert_eq!(game.red_alive, 5);
            assert_eq!(game.blue_alive, 5);
        }
        assert_eq!(summary.wins() + summary.losses(), 0);
        let last = latest.lock().unwrap().clone().unwrap();
        assert_eq!(last.time.tick, 20);
        assert_eq!(last.faction(Faction::Red).alive, 5);
        assert_eq!(last.faction(Faction::Blue).losses, 0);
    }

    #[test]
    fn test_duel_plays_to_completion_twice() {
        // One agent a side: they close the ~600 unit gap in ~300 ticks, then
        // stay in contact losing at least 1 health per tick each.
        let (_tx, rx) = mpsc::channel();
        let latest = Mutex::new(None);
        let config = HostConfig {
            games: 2,
            max_ticks: Some(5_000),
            ..fast_config()
        };

        let summary = run_game_loop(&config, &rx, &latest);

        assert_eq!(summary.games.len(), 2);
        for game in &summary.games {
            assert!(game.user_won.is_some(), "duel should finish: {game:?}");
            assert!(game.ticks < 5_000);
            assert!(game.red_alive + game.blue_alive <= 1);
        }
        let last = latest.lock().unwrap().clone().unwrap();
        assert_eq!(last.phase, SimPhase::Over);
    }

    #[test]
    fn test_spawned_loop_accepts_commands() {
        let config = HostConfig {
            faction_size: 3,
            max_ticks: Some(50),
            ..fast_config()
        };
        let (handle, join) = spawn_game_loop(config).unwrap();
        handle.send(SimCommand::TogglePause);
        handle.send(SimCommand::TogglePause);

        let summary = join.join().unwrap();
        assert_eq!(summary.games.len(), 1);
        assert_eq!(summary.games[0].ticks, 50);
        assert!(handle.latest().is_some());
        assert!(!handle.send(SimCommand::Pause), "loop has exited");
    }

    #[test]
    fn test_handle_shutdown_stops_paced_game() {
        // Paced at 60 Hz, a 200-a-side battle cannot finish before the
        // shutdown is drained.
        let config = HostConfig {
            faction_size: 200,
            headless_fast: false,
            ..fast_config()
        };
        let (handle, join) = spawn_game_loop(config).unwrap();
        handle.shutdown();

        let summary = join.join().unwrap();
        assert!(summary.games.is_empty());
        assert!(!handle.send(SimCommand::Pause), "loop has exited");
    }
}
