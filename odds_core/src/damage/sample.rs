//! Monte Carlo damage samples

use super::DamageSpec;
use crate::error::OddsError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::debug;

/// Simulated total damage of `trials` independent hits
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DamageSample {
    values: Vec<i64>,
}

impl DamageSample {
    /// Wrap already-rolled totals
    pub fn from_values(values: Vec<i64>) -> Self {
        DamageSample { values }
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    /// Number of trials
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn min(&self) -> Option<i64> {
        self.values.iter().copied().min()
    }

    pub fn max(&self) -> Option<i64> {
        self.values.iter().copied().max()
    }
}

/// The trials of a `DamageSample` that landed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HitFilteredSample {
    values: Vec<i64>,
    /// Size of the sample the hits were drawn from
    pub total_trials: usize,
    /// Probability each trial was kept with
    pub hit_probability: f64,
}

impl HitFilteredSample {
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    /// Number of trials that hit
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Observed fraction of trials that hit
    pub fn observed_hit_rate(&self) -> f64 {
        if self.total_trials == 0 {
            return 0.0;
        }
        self.values.len() as f64 / self.total_trials as f64
    }
}

/// Generator for one calculation: seeded when reproducibility is needed
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Roll `spec` `trials` times with a generator of its own
pub fn simulate_damage(
    spec: &DamageSpec,
    trials: usize,
    seed: Option<u64>,
) -> Result<DamageSample, OddsError> {
    let mut rng = make_rng(seed);
    simulate_damage_with_rng(spec, trials, &mut rng)
}

/// Roll `spec` `trials` times with a provided RNG (for deterministic testing)
pub fn simulate_damage_with_rng(
    spec: &DamageSpec,
    trials: usize,
    rng: &mut impl Rng,
) -> Result<DamageSample, OddsError> {
    if trials == 0 {
        return Err(OddsError::invalid("Trial count must be at least 1"));
    }

    let values: Vec<i64> = (0..trials).map(|_| spec.roll(rng)).collect();
    debug!(%spec, trials, "simulated damage sample");

    Ok(DamageSample { values })
}

/// Keep the trials that hit, with a generator of its own
pub fn filter_by_hit(
    sample: &DamageSample,
    hit_probability: f64,
    seed: Option<u64>,
) -> Result<HitFilteredSample, OddsError> {
    let mut rng = make_rng(seed);
    filter_by_hit_with_rng(sample, hit_probability, &mut rng)
}

/// Keep each trial whose independent uniform [0, 1) draw falls below `hit_probability`
///
/// A probability of 1 keeps every trial and 0 keeps none. An empty result is
/// reported as `EmptySample`.
pub fn filter_by_hit_with_rng(
    sample: &DamageSample,
    hit_probability: f64,
    rng: &mut impl Rng,
) -> Result<HitFilteredSample, OddsError> {
    if !(0.0..=1.0).contains(&hit_probability) {
        return Err(OddsError::invalid(format!(
            "Hit probability must be between 0 and 1, got {}",
            hit_probability
        )));
    }

    let values: Vec<i64> = sample
        .values
        .iter()
        .copied()
        .filter(|_| rng.gen::<f64>() < hit_probability)
        .collect();

    debug!(
        kept = values.len(),
        trials = sample.len(),
        hit_probability,
        "filtered damage sample by hit"
    );

    if values.is_empty() {
        return Err(OddsError::EmptySample);
    }

    Ok(HitFilteredSample {
        values,
        total_trials: sample.len(),
        hit_probability,
    })
}
