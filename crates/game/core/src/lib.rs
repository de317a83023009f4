//! Deterministic rules for a turn-gated grid dungeon.
//!
//! `game-core` defines the canonical rules (map, occupancy, combat, movement
//! arbitration, enemy policy, camera) and exposes pure APIs that the runtime
//! and offline tools share. All per-turn mutation flows through
//! [`engine::GameEngine`]; randomness is injected through [`env::RngSource`].
pub mod action;
pub mod ai;
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod map;
pub mod occupancy;
pub mod spawn;
pub mod state;
pub mod viewport;

pub use action::{ActionResult, attempt};
pub use ai::{AiProfile, choose_direction};
pub use combat::{AttackOutcome, apply_damage, resolve_attack, resolve_roll};
pub use config::{ConfigError, GameConfig};
pub use engine::{GameEngine, NpcAction, TickReport};
pub use env::{
    ActorOracle, ActorTemplate, ActorTemplateBuilder, PLAYER_TEMPLATE, PcgRng, RngSource,
    SequenceRng,
};
pub use error::{ErrorSeverity, GameError};
pub use map::{Grid, Occupancy, TerrainKind, Tile};
pub use occupancy::OccupancyError;
pub use spawn::{SpawnError, spawn_near};
pub use state::{
    Capabilities, CombatStats, Direction, Entity, EntityId, EventLog, Faction, GameState,
    Position, Tick, WorldPoint,
};
pub use viewport::Viewport;
