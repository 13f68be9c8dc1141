//! Simulation settings, optionally read from a TOML file.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use cup_core::{GoalModel, KnockoutFormat, KnockoutGoals};

/// Failures while reading the settings file. Fatal: a half-understood
/// configuration is worse than stopping.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Tunable simulation settings.
///
/// `Default` gives two qualifiers per group, power-range scoring, ladder
/// knockout pairing, and goalless knockout rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub qualifiers_per_group: usize,
    pub goal_model: GoalModel,
    pub knockout_format: KnockoutFormat,
    pub knockout_goals: KnockoutGoals,
    /// Fixed RNG seed for reproducible runs; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            qualifiers_per_group: 2,
            goal_model: GoalModel::default(),
            knockout_format: KnockoutFormat::default(),
            knockout_goals: KnockoutGoals::default(),
            seed: None,
        }
    }
}

impl SimConfig {
    /// Load settings from a TOML file. Missing keys fall back to defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }
}
