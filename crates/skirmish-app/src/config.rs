//! Host configuration, loadable from a JSON file.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use skirmish_core::commands::SpawnRequest;
use skirmish_core::constants::{RENDER_INTERVAL_TICKS, RESTART_DELAY_SECS, TICK_RATE};
use skirmish_core::enums::Faction;
use skirmish_core::error::{SimError, SimResult};
use skirmish_sim::SimConfig;

/// Everything the host needs to run one or more games.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// Agents spawned per faction.
    pub faction_size: u32,
    /// Faction the user is rooting for.
    pub user_faction: Faction,
    /// Ticks per second when pacing is enabled.
    pub tick_rate: u32,
    /// Publish a snapshot every N running ticks.
    pub render_interval: u64,
    /// Seconds between game over and the next game.
    pub restart_delay_secs: f64,
    /// Number of games to play before exiting.
    pub games: u32,
    /// Abandon a game that runs longer than this many ticks.
    pub max_ticks: Option<u64>,
    /// Skip frame pacing and run as fast as possible.
    pub headless_fast: bool,
    /// RNG seed. `None` for a fresh random run.
    pub seed: Option<u64>,
    /// Debug summary interval in ticks (0 disables).
    pub log_interval_ticks: u64,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            faction_size: 500,
            user_faction: Faction::Red,
            tick_rate: TICK_RATE,
            render_interval: RENDER_INTERVAL_TICKS,
            restart_delay_secs: RESTART_DELAY_SECS,
            games: 1,
            max_ticks: None,
            headless_fast: false,
            seed: None,
            log_interval_ticks: 600,
        }
    }
}

impl HostConfig {
    /// Read a config file. Missing fields take their defaults.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: HostConfig = serde_json::from_str(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }

    pub fn validate(&self) -> SimResult<()> {
        self.spawn_request()?;
        if self.tick_rate == 0 {
            return Err(SimError::InvalidConfig("tick_rate must be positive".into()));
        }
        if self.render_interval == 0 {
            return Err(SimError::InvalidConfig(
                "render_interval must be positive".into(),
            ));
        }
        if !self.restart_delay_secs.is_finite() || self.restart_delay_secs < 0.0 {
            return Err(SimError::InvalidConfig(
                "restart_delay_secs must be a non-negative number".into(),
            ));
        }
        if self.games == 0 {
            return Err(SimError::InvalidConfig("games must be at least 1".into()));
        }
        Ok(())
    }

    pub fn spawn_request(&self) -> SimResult<SpawnRequest> {
        SpawnRequest::new(self.faction_size, self.user_faction)
    }

    pub fn sim_config(&self) -> SimConfig {
        SimConfig {
            seed: self.seed,
            log_interval_ticks: self.log_interval_ticks,
        }
    }

    /// Game-over countdown length in ticks.
    pub fn restart_delay_ticks(&self) -> u64 {
        (self.restart_delay_secs * self.tick_rate as f64).ceil() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = HostConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.restart_delay_ticks(), 300);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: HostConfig =
            serde_json::from_str(r#"{"faction_size": 40, "user_faction": "Blue"}"#).unwrap();
        assert_eq!(config.faction_size, 40);
        assert_eq!(config.user_faction, Faction::Blue);
        assert_eq!(config.tick_rate, TICK_RATE);
        assert_eq!(config.games, 1);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let zero_size = HostConfig {
            faction_size: 0,
            ..Default::default()
        };
        assert_eq!(zero_size.validate(), Err(SimError::InvalidFactionSize(0)));

        let zero_rate = HostConfig {
            tick_rate: 0,
            ..Default::default()
        };
        assert!(matches!(
            zero_rate.validate(),
            Err(SimError::InvalidConfig(_))
        ));

        let negative_delay = HostConfig {
            restart_delay_secs: -1.0,
            ..Default::default()
        };
        assert!(negative_delay.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("skirmish-config-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"games": 3, "seed": 7}"#).unwrap();
        let config = HostConfig::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.games, 3);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.sim_config().seed, Some(7));
    }

    #[test]
    fn test_load_missing_file_errors() {
        let err = HostConfig::load(Path::new("/nonexistent/skirmish.json")).unwrap_err();
        assert!(err.to_string().contains("reading config"));
    }
}
