//! Data-driven content definitions and loaders.
//!
//! This crate houses static game content and provides loaders for RON/TOML data files:
//! - Actor templates (player and enemy stat blocks, data-driven via RON)
//! - Game configuration (data-driven via TOML)
//!
//! Content is consumed by the runtime when a session is reset and never
//! appears in game state except as the entities spawned from it.

pub mod catalog;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::ActorCatalog;

#[cfg(feature = "loaders")]
pub use loaders::{ActorLoader, ConfigLoader, LoadResult};
