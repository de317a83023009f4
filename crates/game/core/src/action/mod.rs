//! Movement arbitration.
//!
//! The same rule governs the player and every enemy: a step into free floor
//! is a move, a step into a hostile defender is an attack, and anything else
//! is a no-op. See [`attempt`].

mod movement;

pub use movement::attempt;

use crate::combat::AttackOutcome;

/// What one attempted step did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionResult {
    /// The actor moved onto the target tile.
    Moved,
    /// The actor attacked the target tile's occupant.
    Attacked(AttackOutcome),
    /// Nothing happened.
    Blocked,
}

impl ActionResult {
    /// Moves and attacks count as acting; blocked attempts do not.
    pub fn took_action(&self) -> bool {
        !matches!(self, Self::Blocked)
    }
}
