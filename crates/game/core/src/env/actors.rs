//! Actor template definitions and oracle interface.
//!
//! Every entity variant (player, zombie, scenery) is described by an
//! [`ActorTemplate`]. Behavioral differences are data on the template, never
//! separate types. The [`ActorOracle`] trait lets hosts provide templates by
//! key (e.g. "player", "zombie").

use crate::ai::AiProfile;
use crate::state::{Capabilities, CombatStats, Entity, EntityId, Faction, Position};

/// Catalog key of the controllable player template.
pub const PLAYER_TEMPLATE: &str = "player";

/// Data describing an entity variant, minus identity and placement.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorTemplate {
    /// Display name used in event log lines.
    pub name: String,
    pub faction: Faction,
    pub capabilities: Capabilities,
    /// Stats at full health. Required for Attacker or Defender capability.
    #[cfg_attr(feature = "serde", serde(default))]
    pub stats: Option<CombatStats>,
    /// Present for entities driven by the enemy policy.
    #[cfg_attr(feature = "serde", serde(default))]
    pub ai: Option<AiProfile>,
}

impl ActorTemplate {
    /// Create a new, living entity from this template.
    pub fn to_entity(&self, id: EntityId, position: Position) -> Entity {
        Entity {
            id,
            name: self.name.clone(),
            position,
            faction: self.faction,
            capabilities: self.capabilities,
            alive: true,
            stats: self.stats,
            ai: self.ai,
            took_damage: false,
        }
    }

    /// Create a builder for constructing actor templates.
    pub fn builder(name: impl Into<String>) -> ActorTemplateBuilder {
        ActorTemplateBuilder {
            name: name.into(),
            faction: Faction::Neutral,
            capabilities: Capabilities::empty(),
            stats: None,
            ai: None,
        }
    }

    /// True if the capability bits are backed by the data they need.
    pub fn is_consistent(&self) -> bool {
        let needs_stats = self
            .capabilities
            .intersects(Capabilities::ATTACKER | Capabilities::DEFENDER);
        !needs_stats || self.stats.is_some()
    }
}

/// Builder for constructing actor templates.
#[derive(Clone, Debug)]
pub struct ActorTemplateBuilder {
    name: String,
    faction: Faction,
    capabilities: Capabilities,
    stats: Option<CombatStats>,
    ai: Option<AiProfile>,
}

impl ActorTemplateBuilder {
    pub fn faction(mut self, faction: Faction) -> Self {
        self.faction = faction;
        self
    }

    pub fn capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    /// Full-health stats; `hp` starts at `max_hp`.
    pub fn stats(mut self, max_hp: u32, defense: u32, attack: u32, crit_bonus: u32) -> Self {
        self.stats = Some(CombatStats::new(max_hp, defense, attack, crit_bonus));
        self
    }

    pub fn ai(mut self, ai: AiProfile) -> Self {
        self.ai = Some(ai);
        self
    }

    pub fn build(self) -> ActorTemplate {
        ActorTemplate {
            name: self.name,
            faction: self.faction,
            capabilities: self.capabilities,
            stats: self.stats,
            ai: self.ai,
        }
    }
}

/// Oracle providing actor templates by key.
pub trait ActorOracle {
    /// Returns the actor template for a given key, if known.
    fn template(&self, key: &str) -> Option<ActorTemplate>;

    /// Returns all known template keys.
    fn all_keys(&self) -> Vec<String> {
        Vec::new()
    }
}
