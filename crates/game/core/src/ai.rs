//! One-step direction choice for non-player actors.
//!
//! Enemies within sight of the player step toward it along a randomly chosen
//! axis; enemies out of sight wander in a random cardinal direction. There is
//! no pathfinding: a step into a wall is simply blocked.

use arrayvec::ArrayVec;

use crate::env::{RngSource, pick};
use crate::state::{Direction, Position};

/// Tuning for the seek-or-patrol policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AiProfile {
    /// Sight radius in world units. The player is seen when strictly closer.
    pub visible_range: u32,
}

impl AiProfile {
    pub const DEFAULT_VISIBLE_RANGE: u32 = 300;

    pub const fn new(visible_range: u32) -> Self {
        Self { visible_range }
    }
}

impl Default for AiProfile {
    fn default() -> Self {
        Self::new(Self::DEFAULT_VISIBLE_RANGE)
    }
}

/// Picks the actor's next step.
///
/// Returns `None` when the actor sees the player but shares its tile on both
/// axes, which leaves no direction to seek in.
pub fn choose_direction(
    actor: Position,
    player: Position,
    profile: &AiProfile,
    tile_size: i32,
    rng: &mut dyn RngSource,
) -> Option<Direction> {
    let distance = actor
        .to_world(tile_size)
        .distance_to(player.to_world(tile_size));

    if distance < f64::from(profile.visible_range) {
        let candidates = seek_candidates(actor, player);
        pick(rng, &candidates).copied()
    } else {
        pick(rng, &Direction::CARDINALS).copied()
    }
}

/// Directions that close the gap to `player` along either axis.
fn seek_candidates(actor: Position, player: Position) -> ArrayVec<Direction, 4> {
    let mut candidates = ArrayVec::new();
    if player.x < actor.x {
        candidates.push(Direction::Left);
    }
    if player.x > actor.x {
        candidates.push(Direction::Right);
    }
    if player.y > actor.y {
        candidates.push(Direction::Up);
    }
    if player.y < actor.y {
        candidates.push(Direction::Down);
    }
    candidates
}
