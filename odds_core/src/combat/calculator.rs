//! CombatOddsCalculator - Hit chance, damage simulation and chart in one call

use super::input::CombatInput;
use super::report::{ChartMode, ChartSeries, CombatReport};
use crate::config::SimulationConfig;
use crate::damage::{
    expected_damage, filter_by_hit_with_rng, make_rng, simulate_damage_with_rng, DamageSpec,
};
use crate::error::OddsError;
use crate::hit::{compute_hit_chance, HitChanceSpec};
use crate::stats::{density_estimate, histogram_estimate, summarize};
use rand::Rng;
use tracing::{debug, warn};

/// Stateless calculator; holds only its tunables
#[derive(Debug, Clone, Default)]
pub struct CombatOddsCalculator {
    config: SimulationConfig,
    mode: ChartMode,
}

impl CombatOddsCalculator {
    pub fn new(config: SimulationConfig) -> Self {
        CombatOddsCalculator {
            config,
            mode: ChartMode::default(),
        }
    }

    /// Choose which chart the reports carry
    pub fn with_mode(mut self, mode: ChartMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn mode(&self) -> ChartMode {
        self.mode
    }

    /// Parse the shell's text fields and run a calculation
    pub fn calculate(&self, input: &CombatInput) -> Result<CombatReport, OddsError> {
        let hit = input.hit_spec()?;
        let damage = input.damage_spec()?;
        self.calculate_specs(&hit, &damage)
    }

    /// Run a calculation with a generator owned by this call
    ///
    /// Seeded from the config when it names a seed, from entropy otherwise.
    pub fn calculate_specs(
        &self,
        hit: &HitChanceSpec,
        damage: &DamageSpec,
    ) -> Result<CombatReport, OddsError> {
        let mut rng = make_rng(self.config.seed);
        self.calculate_with_rng(hit, damage, &mut rng)
    }

    /// Run a calculation with a provided RNG (for deterministic testing)
    pub fn calculate_with_rng(
        &self,
        hit: &HitChanceSpec,
        damage: &DamageSpec,
        rng: &mut impl Rng,
    ) -> Result<CombatReport, OddsError> {
        let hit_probability = compute_hit_chance(hit)?;
        let closed_form_average = expected_damage(damage, self.config.rounding);
        debug!(hit_probability, closed_form_average, %damage, "computed closed-form odds");

        let sample = simulate_damage_with_rng(damage, self.config.trials, rng)?;

        let (summary, chart) = match self.mode {
            ChartMode::Histogram => {
                let summary = summarize(sample.values())?;
                let bins = histogram_estimate(sample.values(), damage)?;
                (summary, ChartSeries::Discrete(bins))
            }
            ChartMode::Density => {
                let hits = filter_by_hit_with_rng(&sample, hit_probability, rng).map_err(|err| {
                    if err == OddsError::EmptySample {
                        warn!(hit_probability, trials = sample.len(), "no simulated trial hit");
                    }
                    err
                })?;
                let summary = summarize(hits.values())?;
                let chart = match density_estimate(
                    hits.values(),
                    self.config.bandwidth,
                    self.config.grid_points,
                ) {
                    Ok(curve) => ChartSeries::Density(curve),
                    Err(OddsError::InsufficientSamples) => {
                        debug!("constant damage sample, charting discrete values");
                        ChartSeries::Discrete(histogram_estimate(hits.values(), damage)?)
                    }
                    Err(err) => return Err(err),
                };
                (summary, chart)
            }
        };

        debug!(
            mean = summary.mean,
            std_dev = summary.std_dev,
            hits = summary.count,
            "summarized damage"
        );

        Ok(CombatReport {
            hit_probability,
            damage: damage.to_string(),
            expected_per_attack: hit_probability * summary.mean,
            closed_form_average,
            trials: sample.len(),
            hits: summary.count,
            mode: self.mode,
            chart,
            summary,
        })
    }
}
