//! The simulation context hosts drive once per turn.
//!
//! A [`Simulation`] is built explicitly, started with [`Simulation::reset`],
//! and advanced with [`Simulation::tick`]. It owns the game state and the
//! random source; hosts only ever see shared references or snapshots.

use tracing::{debug, info, warn};

use game_content::ActorCatalog;
use game_core::{
    ActorOracle, ActorTemplate, Direction, GameEngine, GameState, PLAYER_TEMPLATE, PcgRng,
    RngSource, TickReport,
};

use crate::config::RuntimeConfig;
use crate::error::{Result, RuntimeError};
use crate::snapshot::SessionSnapshot;

/// Explicitly constructed session context. Holds no global state.
pub struct Simulation {
    config: RuntimeConfig,
    actors: Box<dyn ActorOracle>,
    session: Option<Session>,
}

struct Session {
    state: GameState,
    rng: Box<dyn RngSource>,
    seed: Option<u64>,
}

impl Simulation {
    /// Create a new simulation builder.
    pub fn builder() -> SimulationBuilder {
        SimulationBuilder::new()
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Starts a new session from `seed`, discarding any previous one.
    ///
    /// # Errors
    ///
    /// Fails if the configured templates are missing or the map has no room
    /// for every spawn.
    pub fn reset(&mut self, seed: u64) -> Result<&GameState> {
        self.start(Box::new(PcgRng::new(seed)), Some(seed))
    }

    /// Starts a new session drawing from an injected random source.
    pub fn reset_with_rng(&mut self, rng: Box<dyn RngSource>) -> Result<&GameState> {
        self.start(rng, None)
    }

    fn start(&mut self, mut rng: Box<dyn RngSource>, seed: Option<u64>) -> Result<&GameState> {
        self.session = None;

        let game_config = self.config.game_config.clone();
        game_config.validate()?;
        let player = self.template(PLAYER_TEMPLATE)?;
        let enemy = self.template(&game_config.enemy_template)?;

        let state = GameState::generate(game_config, &player, &enemy, &mut *rng)?;
        info!(
            target: "runtime::simulation",
            seed = ?seed,
            width = state.grid().width(),
            height = state.grid().height(),
            enemies = state.npcs().count(),
            "Session reset"
        );

        let session = self.session.insert(Session { state, rng, seed });
        Ok(&session.state)
    }

    fn template(&self, key: &str) -> Result<ActorTemplate> {
        self.actors
            .template(key)
            .ok_or_else(|| RuntimeError::UnknownTemplate {
                key: key.to_owned(),
            })
    }

    /// Resolves one full turn for the player's `intent`.
    ///
    /// # Errors
    ///
    /// [`RuntimeError::NotStarted`] before the first reset and
    /// [`RuntimeError::PlayerDefeated`] once the player has been removed.
    pub fn tick(&mut self, intent: Direction) -> Result<TickReport> {
        let session = self.session.as_mut().ok_or_else(|| {
            warn!(target: "runtime::simulation", "Tick rejected: no session");
            RuntimeError::NotStarted
        })?;
        if session.state.player().is_none() {
            warn!(target: "runtime::simulation", "Tick rejected: player defeated");
            return Err(RuntimeError::PlayerDefeated);
        }

        let report = GameEngine::new(&mut session.state).tick(intent, &mut *session.rng);

        for action in &report.npc_actions {
            debug!(
                target: "runtime::simulation",
                entity = %action.entity,
                direction = ?action.direction,
                result = ?action.result,
                "Enemy acted"
            );
        }
        debug!(
            target: "runtime::simulation",
            tick = %report.tick,
            intent = %report.intent,
            player = ?report.player,
            took_action = report.took_action,
            enemies_acted = report.npc_actions.len(),
            removed = ?report.removed,
            "Tick resolved"
        );
        if report.player_defeated {
            info!(target: "runtime::simulation", tick = %report.tick, "Player defeated");
        }

        Ok(report)
    }

    /// Parses an intent name (`up`, `LEFT`, `none`, ...) and ticks with it.
    pub fn tick_command(&mut self, input: &str) -> Result<TickReport> {
        let intent = input.trim().parse::<Direction>().map_err(|_| {
            warn!(target: "runtime::simulation", input, "Malformed intent");
            RuntimeError::MalformedIntent {
                input: input.to_owned(),
            }
        })?;
        self.tick(intent)
    }

    /// Read-only view of the current session.
    pub fn state(&self) -> Result<&GameState> {
        self.session
            .as_ref()
            .map(|session| &session.state)
            .ok_or(RuntimeError::NotStarted)
    }

    /// Owned copy of what the host needs to render.
    pub fn snapshot(&self) -> Result<SessionSnapshot> {
        let session = self.session.as_ref().ok_or(RuntimeError::NotStarted)?;
        Ok(SessionSnapshot::capture(
            &session.state,
            session.seed,
            self.config.event_window,
        ))
    }

    /// True once the player has been removed from the running session.
    pub fn is_over(&self) -> bool {
        self.state().is_ok_and(|state| state.player().is_none())
    }

    /// Verifies the occupancy invariant of the running session.
    pub fn audit(&self) -> Result<()> {
        Ok(self.state()?.audit()?)
    }
}

/// Builder for [`Simulation`].
pub struct SimulationBuilder {
    config: RuntimeConfig,
    actors: Option<Box<dyn ActorOracle>>,
}

impl SimulationBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            actors: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the actor template source (defaults to the built-in catalog)
    pub fn actors(mut self, actors: impl ActorOracle + 'static) -> Self {
        self.actors = Some(Box::new(actors));
        self
    }

    /// Validates the configuration and builds an idle simulation.
    pub fn build(self) -> Result<Simulation> {
        self.config.game_config.validate()?;
        let actors = self
            .actors
            .unwrap_or_else(|| Box::new(ActorCatalog::builtin()));

        Ok(Simulation {
            config: self.config,
            actors,
            session: None,
        })
    }
}
