//! Host configuration read from the process environment.
use std::env;
use std::path::PathBuf;

/// Settings a host needs before it can assemble a simulation.
///
/// Every field is optional; anything left unset falls back to the embedded
/// content shipped with `game-content`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BootstrapConfig {
    pub seed: Option<u64>,
    pub config_path: Option<PathBuf>,
    pub actors_path: Option<PathBuf>,
    pub enemy_count: Option<u32>,
    pub event_window: Option<usize>,
}

impl BootstrapConfig {
    /// Construct configuration from process environment variables.
    ///
    /// A `.env` file in the working directory is loaded first, if present.
    ///
    /// Environment variables:
    /// - `DUNGEON_SEED` - Seed for the session RNG (default: derived from the clock)
    /// - `DUNGEON_CONFIG` - Path to a TOML game config (default: embedded)
    /// - `DUNGEON_ACTORS` - Path to a RON actor catalog (default: embedded)
    /// - `DUNGEON_ENEMY_COUNT` - Overrides the configured enemy count
    /// - `DUNGEON_EVENT_WINDOW` - Log lines kept in snapshots (default: 21)
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`BootstrapConfig::from_env`] but reads values through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            seed: read_env(&lookup, "DUNGEON_SEED"),
            config_path: lookup("DUNGEON_CONFIG").map(PathBuf::from),
            actors_path: lookup("DUNGEON_ACTORS").map(PathBuf::from),
            enemy_count: read_env(&lookup, "DUNGEON_ENEMY_COUNT"),
            event_window: read_env::<usize>(&lookup, "DUNGEON_EVENT_WINDOW")
                .map(|window| window.max(1)),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

fn read_env<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}
