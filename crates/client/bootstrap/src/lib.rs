//! Shared bootstrap utilities for dungeon hosts.
//!
//! Provides environment-driven configuration, logging setup, and simulation
//! assembly that any front-end (terminal, windowed, headless) can reuse. The
//! frame loop and input mapping stay with the host.
pub mod builder;
pub mod config;
pub mod logging;

pub use builder::{SessionBuilder, SessionSetup};
pub use config::BootstrapConfig;
pub use logging::init_logging;
