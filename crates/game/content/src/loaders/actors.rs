//! Actor catalog loader.
//!
//! Loads actor templates (player and enemies) from RON files.

use std::path::Path;

use game_core::ActorTemplate;

use crate::catalog::ActorCatalog;
use crate::loaders::{LoadResult, read_file};

/// Loader for actor catalog from RON files.
pub struct ActorLoader;

impl ActorLoader {
    /// Load actor catalog from a RON file.
    ///
    /// RON format: `Vec<(String, ActorTemplate)>`
    ///
    /// Later entries replace earlier ones with the same key.
    pub fn load(path: &Path) -> LoadResult<ActorCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load actors from {}: {}", path.display(), e))
    }

    /// Catalog shipped with the crate (`data/actors.ron`).
    pub fn embedded() -> LoadResult<ActorCatalog> {
        Self::parse(include_str!("../../data/actors.ron"))
    }

    /// Parse a catalog from RON text.
    pub fn parse(content: &str) -> LoadResult<ActorCatalog> {
        let raw_data: Vec<(String, ActorTemplate)> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse actor catalog RON: {}", e))?;

        for (key, template) in &raw_data {
            if !template.is_consistent() {
                anyhow::bail!(
                    "Actor '{}' has attacker or defender capability but no stats",
                    key
                );
            }
        }

        Ok(raw_data.into_iter().collect())
    }
}
