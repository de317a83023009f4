use game_core::GameConfig;

/// Session-level settings on top of the rules configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub game_config: GameConfig,
    /// Number of most recent log lines included in snapshots.
    pub event_window: usize,
}

impl RuntimeConfig {
    pub const DEFAULT_EVENT_WINDOW: usize = 21;

    pub fn with_game_config(mut self, game_config: GameConfig) -> Self {
        self.game_config = game_config;
        self
    }

    pub fn with_event_window(mut self, event_window: usize) -> Self {
        self.event_window = event_window;
        self
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game_config: GameConfig::default(),
            event_window: Self::DEFAULT_EVENT_WINDOW,
        }
    }
}
