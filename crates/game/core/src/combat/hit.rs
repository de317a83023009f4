//! Hit determination for a single d20 roll.

use crate::state::CombatStats;

use super::result::AttackOutcome;

/// Decides the outcome of one attack roll.
///
/// # Rules
///
/// ```text
/// roll == die_sides        => Hit { attack + crit_bonus, critical }
/// roll >= defender.defense => Hit { attack }
/// otherwise                => Miss
/// ```
///
/// A critical always lands, whatever the defender's defense.
pub fn resolve_roll(
    roll: u32,
    die_sides: u32,
    attacker: &CombatStats,
    defender: &CombatStats,
) -> AttackOutcome {
    if roll == die_sides {
        return AttackOutcome::Hit {
            damage: attacker.attack.saturating_add(attacker.crit_bonus),
            critical: true,
        };
    }

    if roll >= defender.defense {
        AttackOutcome::Hit {
            damage: attacker.attack,
            critical: false,
        }
    } else {
        AttackOutcome::Miss
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAYER: CombatStats = CombatStats::new(50, 10, 3, 1);
    const ZOMBIE: CombatStats = CombatStats::new(10, 4, 1, 1);

    #[test]
    fn natural_twenty_is_critical() {
        assert_eq!(
            resolve_roll(20, 20, &PLAYER, &ZOMBIE),
            AttackOutcome::Hit {
                damage: 4,
                critical: true
            }
        );
    }

    #[test]
    fn critical_ignores_defense() {
        let fortress = CombatStats::new(10, 25, 0, 0);
        assert!(resolve_roll(20, 20, &PLAYER, &fortress).is_hit());
        assert_eq!(resolve_roll(19, 20, &PLAYER, &fortress), AttackOutcome::Miss);
    }

    #[test]
    fn hit_threshold_is_inclusive() {
        assert_eq!(resolve_roll(3, 20, &ZOMBIE, &PLAYER), AttackOutcome::Miss);
        assert_eq!(resolve_roll(9, 20, &ZOMBIE, &PLAYER), AttackOutcome::Miss);
        assert_eq!(
            resolve_roll(10, 20, &ZOMBIE, &PLAYER),
            AttackOutcome::Hit {
                damage: 1,
                critical: false
            }
        );
    }

    #[test]
    fn zero_defense_is_always_hit() {
        let enemy = CombatStats::new(10, 0, 1, 1);
        for roll in 1..20 {
            assert!(resolve_roll(roll, 20, &PLAYER, &enemy).is_hit());
        }
    }
}
