//! Runtime orchestration for the deterministic dungeon simulation.
//!
//! This crate wraps `game-core` in an explicitly constructed session context.
//! Hosts build a [`Simulation`], call [`Simulation::reset`] with a seed, feed
//! one directional intent per turn to [`Simulation::tick`], and render from
//! [`Simulation::state`] or an owned [`SessionSnapshot`].
//!
//! Modules are organized by responsibility:
//! - [`simulation`] hosts the session context and its builder
//! - [`config`] and [`error`] expose the types downstream clients interact with
//! - [`snapshot`] provides serialisable read-only views for rendering
pub mod config;
pub mod error;
pub mod simulation;
pub mod snapshot;

pub use config::RuntimeConfig;
pub use error::{Result, RuntimeError};
pub use simulation::{Simulation, SimulationBuilder};
pub use snapshot::{EntityView, SessionSnapshot};
