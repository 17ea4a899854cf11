use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use skirmish_app::config::HostConfig;
use skirmish_app::game_loop::spawn_game_loop;
use skirmish_core::enums::Faction;

#[derive(Parser, Debug)]
#[command(
    name = "skirmish",
    version,
    about = "Run the red vs blue particle battle headlessly"
)]
struct Cli {
    /// JSON host config. Flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Agents per faction.
    #[arg(long)]
    size: Option<u32>,

    /// Faction you are rooting for (red or blue).
    #[arg(long)]
    team: Option<Faction>,

    /// Number of games to play.
    #[arg(long)]
    games: Option<u32>,

    /// Abandon a game after this many ticks.
    #[arg(long)]
    max_ticks: Option<u64>,

    /// RNG seed for a repeatable run.
    #[arg(long)]
    seed: Option<u64>,

    /// Skip frame pacing and run as fast as possible.
    #[arg(long)]
    headless_fast: bool,

    /// Write the final snapshot as JSON to this file.
    #[arg(long)]
    snapshot_out: Option<PathBuf>,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = build_config(&cli)?;
    config.validate()?;

    info!(
        faction_size = config.faction_size,
        user_faction = %config.user_faction,
        games = config.games,
        "starting skirmish"
    );

    let (handle, join) = spawn_game_loop(config).context("spawning game loop")?;
    let summary = join
        .join()
        .map_err(|_| anyhow::anyhow!("game loop thread panicked"))?;

    info!(
        played = summary.games.len(),
        wins = summary.wins(),
        losses = summary.losses(),
        "run finished"
    );

    if let Some(path) = cli.snapshot_out {
        match handle.latest() {
            Some(snapshot) => {
                let json = serde_json::to_string_pretty(&snapshot)?;
                std::fs::write(&path, json)
                    .with_context(|| format!("writing snapshot to {}", path.display()))?;
                info!(path = %path.display(), "wrote final snapshot");
            }
            None => warn!("no snapshot was published"),
        }
    }

    Ok(())
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn build_config(cli: &Cli) -> Result<HostConfig> {
    let mut config = match &cli.config {
        Some(path) => HostConfig::load(path)?,
        None => HostConfig::default(),
    };

    if let Some(size) = cli.size {
        config.faction_size = size;
    }
    if let Some(team) = cli.team {
        config.user_faction = team;
    }
    if let Some(games) = cli.games {
        config.games = games;
    }
    if cli.max_ticks.is_some() {
        config.max_ticks = cli.max_ticks;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    config.headless_fast |= cli.headless_fast;

    Ok(config)
}
