//! Assembles a ready-to-run simulation from content files and host config.
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use game_content::{ActorCatalog, ActorLoader, ConfigLoader};
use game_core::{GameConfig, GameState, TickReport};
use runtime::{RuntimeConfig, Simulation};

use crate::config::BootstrapConfig;

/// Builder that loads content, applies overrides, and starts a session.
pub struct SessionBuilder {
    config: BootstrapConfig,
}

impl SessionBuilder {
    pub fn new(config: BootstrapConfig) -> Self {
        Self { config }
    }

    /// Loads the game config and actor catalog, then resets a fresh
    /// simulation with the configured (or clock-derived) seed.
    pub fn build(self) -> Result<SessionSetup> {
        let game_config = self.load_game_config()?;
        let actors = self.load_actors()?;

        let mut runtime_config = RuntimeConfig::default().with_game_config(game_config);
        if let Some(window) = self.config.event_window {
            runtime_config = runtime_config.with_event_window(window);
        }

        let mut simulation = Simulation::builder()
            .config(runtime_config)
            .actors(actors)
            .build()
            .context("Invalid game configuration")?;

        let seed = self.config.seed.unwrap_or_else(clock_seed);
        simulation
            .reset(seed)
            .with_context(|| format!("Failed to start session with seed {}", seed))?;

        tracing::info!(target: "client_bootstrap", seed, "Session ready");

        Ok(SessionSetup {
            config: self.config,
            seed,
            simulation,
        })
    }

    fn load_game_config(&self) -> Result<GameConfig> {
        let mut game_config = match &self.config.config_path {
            Some(path) => ConfigLoader::load(path)?,
            None => ConfigLoader::embedded()?,
        };
        if let Some(count) = self.config.enemy_count {
            game_config = game_config.with_enemy_count(count);
        }
        Ok(game_config)
    }

    fn load_actors(&self) -> Result<ActorCatalog> {
        match &self.config.actors_path {
            Some(path) => ActorLoader::load(path),
            None => ActorLoader::embedded(),
        }
    }
}

pub struct SessionSetup {
    pub config: BootstrapConfig,
    pub seed: u64,
    pub simulation: Simulation,
}

impl SessionSetup {
    pub fn state(&self) -> Result<&GameState> {
        Ok(self.simulation.state()?)
    }

    /// Feeds whitespace-separated intents (`up left none ...`) one tick at a
    /// time, stopping early if the player is defeated.
    pub fn replay(&mut self, script: &str) -> Result<Vec<TickReport>> {
        let mut reports = Vec::new();
        for command in script.split_whitespace() {
            if self.simulation.is_over() {
                break;
            }
            let report = self
                .simulation
                .tick_command(command)
                .with_context(|| format!("Replay stopped at tick {}", reports.len() + 1))?;
            reports.push(report);
        }
        Ok(reports)
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}
