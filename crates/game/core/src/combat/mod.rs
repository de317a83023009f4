//! Combat resolution system.
//!
//! One attack is one die roll. The decision table lives in the pure
//! [`resolve_roll`]; [`resolve_attack`] draws the roll, applies damage, and
//! writes the event line.
//!
//! # Core Functions
//!
//! - `resolve_roll`: roll + stats → hit, critical hit, or miss
//! - `resolve_attack`: complete attack resolution (roll, damage, log)
//! - `apply_damage`: HP reduction (clamped to 0)

pub mod damage;
pub mod hit;
pub mod result;

pub use damage::apply_damage;
pub use hit::resolve_roll;
pub use result::{AttackOutcome, resolve_attack};
