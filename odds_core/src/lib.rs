//! odds_core - Hit chance and damage distribution model for tabletop combat
//!
//! This library provides:
//! - DieExpression / DamageSpec: Parsed `<count>d<sides>` dice with flat modifiers
//! - HitChanceSpec: Flat-percentage or armor-class hit chance, with advantage
//! - Damage simulation: Monte Carlo damage samples and hit filtering
//! - Statistics: Summary, kernel density curve, discrete histogram
//! - CombatOddsCalculator: End-to-end input -> report pipeline

pub mod combat;
pub mod config;
pub mod damage;
pub mod dice;
pub mod error;
pub mod hit;
pub mod prelude;
pub mod stats;

// Re-export core types for convenience
pub use combat::{ChartMode, ChartSeries, CombatInput, CombatOddsCalculator, CombatReport, HitInput};
pub use config::{RoundingPolicy, SimulationConfig};
pub use damage::{
    expected_damage, filter_by_hit, filter_by_hit_with_rng, simulate_damage,
    simulate_damage_with_rng, DamageSample, DamageSpec, HitFilteredSample,
};
pub use dice::{parse_chance_modifiers, parse_damage_modifiers, parse_dice_list, DieExpression};
pub use error::OddsError;
pub use hit::{apply_advantage, compute_hit_chance, HitChanceSpec};
pub use stats::{density_estimate, histogram_estimate, summarize, DensityPoint, HistogramBin, Summary};
