//! Entity records and their capability sets.
//!
//! Every entity is a single flat record. What it can do is decided by its
//! [`Capabilities`] bits and the data carried alongside them, never by its
//! concrete kind:
//!
//! - **Occupant**: binds to a floor tile and blocks it
//! - **Attacker**: rolls damage against a target
//! - **Defender**: carries [`CombatStats`], receives damage, can die

use bitflags::bitflags;

use super::{EntityId, Position};
use crate::ai::AiProfile;

bitflags! {
    /// Capability set an entity composes.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct Capabilities: u8 {
        const OCCUPANT = 1 << 0;
        const ATTACKER = 1 << 1;
        const DEFENDER = 1 << 2;
        /// Composition shared by the player and every enemy.
        const COMBATANT = Self::OCCUPANT.bits() | Self::ATTACKER.bits() | Self::DEFENDER.bits();
    }
}

/// Allegiance of an entity. Combat only happens between distinct,
/// non-neutral factions.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Default,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Faction {
    Player,
    Enemy,
    #[default]
    Neutral,
}

impl Faction {
    /// Returns true if an attacker of this faction may strike `other`.
    pub fn is_hostile_to(self, other: Faction) -> bool {
        self != Faction::Neutral && other != Faction::Neutral && self != other
    }
}

/// Combat numbers carried by Defender-capable entities.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatStats {
    pub hp: u32,
    pub max_hp: u32,
    /// Minimum d20 roll an attacker needs to land a non-critical hit.
    pub defense: u32,
    /// Damage dealt on a hit.
    pub attack: u32,
    /// Extra damage added on a natural 20.
    pub crit_bonus: u32,
}

impl CombatStats {
    /// Stats at full health.
    pub const fn new(max_hp: u32, defense: u32, attack: u32, crit_bonus: u32) -> Self {
        Self {
            hp: max_hp,
            max_hp,
            defense,
            attack,
            crit_bonus,
        }
    }
}

/// A player, enemy, or scenery object in the simulation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entity {
    pub id: EntityId,
    /// Display name used in event log lines.
    pub name: String,
    /// Authoritative tile position. For occupants this always matches the
    /// tile that records the entity as its occupant.
    pub position: Position,
    pub faction: Faction,
    pub capabilities: Capabilities,
    pub alive: bool,
    /// Required for Attacker or Defender capability. Ignored without either.
    pub stats: Option<CombatStats>,
    /// Present for entities driven by the enemy policy.
    pub ai: Option<AiProfile>,
    /// Set when the entity was hit during the current tick.
    pub took_damage: bool,
}

impl Entity {
    pub fn can_occupy(&self) -> bool {
        self.capabilities.contains(Capabilities::OCCUPANT)
    }

    pub fn can_attack(&self) -> bool {
        self.capabilities.contains(Capabilities::ATTACKER) && self.stats.is_some()
    }

    pub fn can_defend(&self) -> bool {
        self.capabilities.contains(Capabilities::DEFENDER) && self.stats.is_some()
    }

    /// Occupants block the tile they stand on.
    pub fn is_blocking(&self) -> bool {
        self.can_occupy()
    }

    /// Current hit points, if the entity can be damaged.
    pub fn hp(&self) -> Option<u32> {
        self.defender_stats().map(|stats| stats.hp)
    }

    /// Defender-capable with zero hit points.
    pub fn is_dead(&self) -> bool {
        self.defender_stats().is_some_and(|stats| stats.hp == 0)
    }

    pub fn defender_stats(&self) -> Option<&CombatStats> {
        if self.capabilities.contains(Capabilities::DEFENDER) {
            self.stats.as_ref()
        } else {
            None
        }
    }
}
