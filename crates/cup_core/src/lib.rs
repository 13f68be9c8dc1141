//! Tournament-state engine for a group-then-knockout cup.
//!
//! This crate provides the pieces a cup simulation is built from:
//! - Per-group team registries with points/goal-difference standings
//! - Probabilistic match simulation with an injectable random source
//! - A round-robin group-stage driver and qualifier promotion
//! - A single-elimination knockout state machine (ladder or bracket pairing)
//! - An append-only chronological match ledger
//!
//! The crate performs no I/O: callers own the group tables, knockout set,
//! and ledger, and thread them through each stage's entry points. Every
//! simulation function takes `&mut R where R: rand::Rng`, so a seeded
//! generator reproduces a whole tournament exactly.

pub mod error;
pub mod group;
pub mod group_stage;
pub mod knockout;
pub mod ledger;
pub mod promotion;
pub mod sim;
pub mod team;

pub use error::CupError;
pub use group::GroupTable;
pub use group_stage::{play_group_stage, play_matchday};
pub use knockout::{stage_name, KnockoutFormat, KnockoutGoals, KnockoutStage};
pub use ledger::{MatchLedger, MatchRecord};
pub use promotion::promote;
pub use sim::{apply_group_result, group_score, knockout_winner, GoalModel, Side, MAX_REPLAYS};
pub use team::TeamRecord;

#[cfg(test)]
mod group_tests;
