//! Attack outcomes and full attack resolution.

use crate::env::RngSource;
use crate::state::{Entity, EventLog};

use super::damage::inflict;
use super::hit::resolve_roll;

/// Outcome of an attack attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackOutcome {
    /// Attack landed for `damage`. `critical` marks a natural top roll.
    Hit { damage: u32, critical: bool },
    /// Attack missed the target.
    Miss,
}

impl AttackOutcome {
    pub fn is_hit(&self) -> bool {
        matches!(self, Self::Hit { .. })
    }

    pub fn is_critical(&self) -> bool {
        matches!(self, Self::Hit { critical: true, .. })
    }

    pub fn damage(&self) -> u32 {
        match self {
            Self::Hit { damage, .. } => *damage,
            Self::Miss => 0,
        }
    }
}

/// Rolls one attack of `attacker` against `defender` and applies it.
///
/// Appends exactly one line to `log`. Returns `None`, with no roll and no
/// log line, when either side lacks combat stats.
pub fn resolve_attack(
    attacker: &Entity,
    defender: &mut Entity,
    die_sides: u32,
    rng: &mut dyn RngSource,
    log: &mut EventLog,
) -> Option<AttackOutcome> {
    let attacker_stats = attacker.stats?;
    let defender_stats = *defender.defender_stats()?;

    let roll = rng.roll_die(die_sides);
    let outcome = resolve_roll(roll, die_sides, &attacker_stats, &defender_stats);

    match outcome {
        AttackOutcome::Hit { damage, critical } => {
            inflict(defender, damage);
            let prefix = if critical { "CRIT! " } else { "" };
            log.push(format!(
                "{prefix}{} hit {} for {damage} damage",
                attacker.name, defender.name
            ));
        }
        AttackOutcome::Miss => {
            log.push(format!("{} missed {}!", attacker.name, defender.name));
        }
    }

    Some(outcome)
}
