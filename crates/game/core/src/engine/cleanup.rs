//! Removal of dead entities.
//!
//! Death is handled in two steps so the entity list is never mutated while
//! the engine walks it: [`release_dead`] frees the tiles of the dead right
//! after each attempt, and [`sweep`] drops them from the list once the tick's
//! actions are over.

use crate::occupancy;
use crate::state::{EntityId, GameState};

/// Frees the tile of every dead defender. Dead entities stay in the list,
/// flagged not-alive.
pub(crate) fn release_dead(state: &mut GameState) {
    for entity in state.entities.iter_mut().filter(|entity| entity.is_dead()) {
        entity.alive = false;
        occupancy::unbind(&mut state.grid, entity);
    }
}

/// Unbinds and removes every dead defender, returning their ids in list
/// order.
pub(crate) fn sweep(state: &mut GameState) -> Vec<EntityId> {
    release_dead(state);

    let removed: Vec<EntityId> = state
        .entities
        .iter()
        .filter(|entity| entity.is_dead())
        .map(|entity| entity.id)
        .collect();

    if !removed.is_empty() {
        state.entities.retain(|entity| !entity.is_dead());
    }
    removed
}
