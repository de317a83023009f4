pub mod common;
pub mod entity;
pub mod log;

// Re-export common types
pub use common::{Direction, EntityId, Position, Tick, WorldPoint};

// Re-export entity record and capability types
pub use entity::{Capabilities, CombatStats, Entity, Faction};

// Re-export the combat text log
pub use log::EventLog;
