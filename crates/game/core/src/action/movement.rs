use crate::combat::resolve_attack;
use crate::env::RngSource;
use crate::occupancy;
use crate::state::{Entity, EntityId, GameState, Position};

use super::ActionResult;

/// Resolves one actor's step toward `target`: move, attack, or nothing.
///
/// 1. Walkable and unoccupied: the actor moves there.
/// 2. Held by a hostile defender and the actor can attack: one attack is
///    resolved, hit or miss.
/// 3. Anything else is blocked and leaves the state untouched.
///
/// Dead, missing, and non-occupant actors are always blocked. An attempt
/// never both moves and attacks.
pub fn attempt(
    state: &mut GameState,
    actor: EntityId,
    target: Position,
    rng: &mut dyn RngSource,
) -> ActionResult {
    let Some(actor_index) = state.index_of(actor) else {
        return ActionResult::Blocked;
    };
    let mover = &state.entities[actor_index];
    if !mover.alive || !mover.can_occupy() {
        return ActionResult::Blocked;
    }

    if !state.grid.blocked(target) {
        return match occupancy::bind(&mut state.grid, &mut state.entities[actor_index], target) {
            Ok(()) => ActionResult::Moved,
            Err(_) => ActionResult::Blocked,
        };
    }

    let Some(defender_index) = occupancy::occupant_at(&state.grid, target)
        .filter(|&id| id != actor)
        .and_then(|id| state.index_of(id))
    else {
        return ActionResult::Blocked;
    };

    let (attacker, defender) = pair_mut(&mut state.entities, actor_index, defender_index);
    if !can_strike(attacker, defender) {
        return ActionResult::Blocked;
    }

    let die_sides = state.config.attack_die_sides;
    match resolve_attack(attacker, defender, die_sides, rng, &mut state.log) {
        Some(outcome) => ActionResult::Attacked(outcome),
        None => ActionResult::Blocked,
    }
}

fn can_strike(attacker: &Entity, defender: &Entity) -> bool {
    attacker.can_attack()
        && defender.alive
        && defender.can_defend()
        && attacker.faction.is_hostile_to(defender.faction)
}

/// Borrows two distinct entities mutably.
fn pair_mut(entities: &mut [Entity], first: usize, second: usize) -> (&mut Entity, &mut Entity) {
    debug_assert_ne!(first, second);
    if first < second {
        let (head, tail) = entities.split_at_mut(second);
        (&mut head[first], &mut tail[0])
    } else {
        let (head, tail) = entities.split_at_mut(first);
        (&mut tail[0], &mut head[second])
    }
}
