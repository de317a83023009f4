//! Inputs the rules consume but never own.
//!
//! Randomness arrives through [`RngSource`] and entity variants through
//! [`ActorOracle`], so hosts can swap seeded, scripted, or file-backed
//! providers without touching the rules.
mod actors;
mod rng;

pub use actors::{ActorOracle, ActorTemplate, ActorTemplateBuilder, PLAYER_TEMPLATE};
pub use rng::{PcgRng, RngSource, SequenceRng, pick};
