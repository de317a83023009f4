//! Unified error types surfaced by the runtime API.
//!
//! Gameplay never fails; these errors cover calls made in the wrong session
//! state, unparseable input, and setup problems bubbled up from game-core.
use thiserror::Error;

use game_core::{ConfigError, ErrorSeverity, GameError, OccupancyError, SpawnError};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    #[error("no session is running; call reset first")]
    NotStarted,

    #[error("the player has been defeated; call reset to start over")]
    PlayerDefeated,

    #[error("'{input}' is not a direction (expected up, down, left, right, or none)")]
    MalformedIntent { input: String },

    #[error("actor template '{key}' is not in the catalog")]
    UnknownTemplate { key: String },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Spawn(#[from] SpawnError),

    #[error(transparent)]
    Occupancy(#[from] OccupancyError),
}

impl GameError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotStarted | Self::PlayerDefeated => ErrorSeverity::Recoverable,
            Self::MalformedIntent { .. } | Self::UnknownTemplate { .. } => {
                ErrorSeverity::Validation
            }
            Self::Config(err) => err.severity(),
            Self::Spawn(err) => err.severity(),
            Self::Occupancy(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotStarted => "RUNTIME_NOT_STARTED",
            Self::PlayerDefeated => "RUNTIME_PLAYER_DEFEATED",
            Self::MalformedIntent { .. } => "RUNTIME_MALFORMED_INTENT",
            Self::UnknownTemplate { .. } => "RUNTIME_UNKNOWN_TEMPLATE",
            Self::Config(err) => err.error_code(),
            Self::Spawn(err) => err.error_code(),
            Self::Occupancy(err) => err.error_code(),
        }
    }
}
