//! Damage application.

use crate::state::Entity;

/// Apply damage to current HP.
///
/// # Returns
///
/// New HP value (clamped to 0)
pub fn apply_damage(current_hp: u32, damage: u32) -> u32 {
    current_hp.saturating_sub(damage)
}

/// Lowers the defender's hp, flags it as hit this tick, and marks it dead at
/// zero. Grid release is left to cleanup.
///
/// Returns true if this hit killed the defender.
pub(crate) fn inflict(defender: &mut Entity, damage: u32) -> bool {
    let Some(stats) = defender.stats.as_mut() else {
        return false;
    };
    stats.hp = apply_damage(stats.hp, damage);
    defender.took_damage = true;

    if stats.hp == 0 {
        defender.alive = false;
        true
    } else {
        false
    }
}
