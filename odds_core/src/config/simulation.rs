//! Simulation tunables

use super::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How the closed-form average treats half points (e.g. 1d6 = 3.5)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingPolicy {
    /// Keep fractional averages: 1d6 = 3.5
    #[default]
    Exact,
    /// Truncate each die expression's average before summing: 1d6 = 3
    FloorPerDie,
}

/// Tunable simulation constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Monte Carlo trials per calculation
    #[serde(default = "default_trials")]
    pub trials: usize,
    /// Kernel bandwidth factor (multiplies the sample standard deviation)
    #[serde(default = "default_bandwidth")]
    pub bandwidth: f64,
    /// Points the density curve is evaluated at
    #[serde(default = "default_grid_points")]
    pub grid_points: usize,
    /// Rounding for the closed-form average
    #[serde(default)]
    pub rounding: RoundingPolicy,
    /// Fixed RNG seed; fresh entropy per calculation when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            trials: default_trials(),
            bandwidth: default_bandwidth(),
            grid_points: default_grid_points(),
            rounding: RoundingPolicy::default(),
            seed: None,
        }
    }
}

fn default_trials() -> usize {
    10_000
}
fn default_bandwidth() -> f64 {
    0.5
}
fn default_grid_points() -> usize {
    500
}

impl SimulationConfig {
    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let config: SimulationConfig = super::load_toml(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a TOML string
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: SimulationConfig = super::parse_toml(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every tunable is usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.trials == 0 {
            return Err(out_of_range("trials", "must be at least 1".to_string()));
        }
        if !(self.bandwidth.is_finite() && self.bandwidth > 0.0) {
            return Err(out_of_range(
                "bandwidth",
                format!("must be positive, got {}", self.bandwidth),
            ));
        }
        if self.grid_points < 2 {
            return Err(out_of_range(
                "grid_points",
                format!("must be at least 2, got {}", self.grid_points),
            ));
        }
        Ok(())
    }
}

fn out_of_range(field: &'static str, reason: String) -> ConfigError {
    ConfigError::OutOfRange { field, reason }
}
