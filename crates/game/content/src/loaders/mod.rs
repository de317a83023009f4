//! Content loaders for reading game data from files.
//!
//! Actor catalogs are RON, game configuration is TOML. Each loader also has
//! an `embedded()` variant reading the copy shipped under `data/`.

pub mod actors;
pub mod config;

pub use actors::ActorLoader;
pub use config::ConfigLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
