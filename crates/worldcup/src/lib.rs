//! File-facing collaborators around the `cup_core` engine.
//!
//! This crate provides infrastructure for:
//! - Loading group tables from a `group,name,power` CSV file
//! - Tunable simulation settings with a TOML file override
//! - Rendering standings, knockout fields, and the match log
//! - Exporting a finished tournament as JSON
//!
//! The binary in `src/main.rs` wires these around the engine and owns the
//! interactive stage-boundary prompt; the engine itself never blocks on
//! input.

pub mod config;
pub mod display;
pub mod loader;
pub mod report;

pub use config::{ConfigError, SimConfig};
pub use loader::{load_teams, LoadError};
pub use report::{GroupStanding, TournamentReport};
