//! Command-line arguments

use clap::{ArgGroup, Parser, ValueEnum};
use odds_core::config::ConfigError;
use odds_core::{ChartMode, CombatInput, HitInput, RoundingPolicy, SimulationConfig};
use std::path::PathBuf;

/// Estimate the chance to hit and the damage of a tabletop attack
#[derive(Parser, Debug)]
#[command(name = "combat-odds")]
#[command(about = "Hit chance and damage distribution for tabletop attacks", long_about = None)]
#[command(version)]
#[command(group(ArgGroup::new("to_hit").required(true).args(["hit_chance", "armor_class"])))]
pub struct Cli {
    /// Chance to hit in percent (e.g. 65 for 65%)
    #[arg(long, allow_hyphen_values = true)]
    pub hit_chance: Option<String>,

    /// Target armor class, rolled against --hit-die
    #[arg(long, allow_hyphen_values = true)]
    pub armor_class: Option<String>,

    /// Die rolled against --armor-class
    #[arg(long, default_value = "1d20")]
    pub hit_die: String,

    /// Roll to hit twice and keep the better result
    #[arg(long)]
    pub advantage: bool,

    /// Chance modifiers, separated by commas (e.g. "1,-2")
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub chance_mods: String,

    /// Damage dice, separated by commas (e.g. "2d6,1d4")
    #[arg(short, long)]
    pub damage: String,

    /// Damage modifiers, separated by commas (e.g. "2,-1")
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub damage_mods: String,

    /// Distribution chart to draw
    #[arg(long, value_enum, default_value_t = Chart::Density)]
    pub chart: Chart,

    /// TOML file with simulation settings
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Monte Carlo trials (overrides config)
    #[arg(long)]
    pub trials: Option<usize>,

    /// Kernel bandwidth factor for the density curve (overrides config)
    #[arg(long)]
    pub bandwidth: Option<f64>,

    /// Points on the density curve (overrides config)
    #[arg(long)]
    pub grid_points: Option<usize>,

    /// Rounding of the closed-form average (overrides config)
    #[arg(long, value_enum)]
    pub rounding: Option<Rounding>,

    /// RNG seed for reproducible results (overrides config)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the full report as JSON
    #[arg(long)]
    pub json: bool,

    /// Log calculation steps to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Chart {
    /// Percentage per damage total, every trial counted
    Histogram,
    /// Smoothed curve over the trials that hit
    Density,
}

impl From<Chart> for ChartMode {
    fn from(chart: Chart) -> Self {
        match chart {
            Chart::Histogram => ChartMode::Histogram,
            Chart::Density => ChartMode::Density,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Rounding {
    /// 1d6 averages 3.5
    Exact,
    /// 1d6 averages 3
    Floor,
}

impl From<Rounding> for RoundingPolicy {
    fn from(rounding: Rounding) -> Self {
        match rounding {
            Rounding::Exact => RoundingPolicy::Exact,
            Rounding::Floor => RoundingPolicy::FloorPerDie,
        }
    }
}

impl Cli {
    /// The text fields, untouched, for the calculator to parse
    pub fn combat_input(&self) -> CombatInput {
        let hit = match (&self.hit_chance, &self.armor_class) {
            (_, Some(armor_class)) => HitInput::ArmorClass {
                armor_class: armor_class.clone(),
                hit_die: self.hit_die.clone(),
            },
            (Some(percent), None) => HitInput::Percent(percent.clone()),
            // clap requires one of the two
            (None, None) => HitInput::Percent(String::new()),
        };

        CombatInput {
            hit,
            advantage: self.advantage,
            chance_modifiers: self.chance_mods.clone(),
            damage_dice: self.damage.clone(),
            damage_modifiers: self.damage_mods.clone(),
        }
    }

    /// Config file (or defaults) with command-line overrides applied
    pub fn simulation_config(&self) -> Result<SimulationConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => SimulationConfig::load(path)?,
            None => SimulationConfig::default(),
        };

        if let Some(trials) = self.trials {
            config.trials = trials;
        }
        if let Some(bandwidth) = self.bandwidth {
            config.bandwidth = bandwidth;
        }
        if let Some(grid_points) = self.grid_points {
            config.grid_points = grid_points;
        }
        if let Some(rounding) = self.rounding {
            config.rounding = rounding.into();
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        config.validate()?;
        Ok(config)
    }
}
