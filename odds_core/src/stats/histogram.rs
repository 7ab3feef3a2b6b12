//! Histogram - Percentage of trials landing on each damage value

use crate::damage::DamageSpec;
use crate::error::OddsError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Widest reachable range the discrete chart will tabulate
pub const MAX_HISTOGRAM_BINS: u64 = 100_000;

/// One bar of the discrete damage chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub value: i64,
    /// Share of trials with exactly this total, 0-100
    pub percent: f64,
}

/// Tabulate every reachable total of the damage dice, including ones no trial produced
///
/// Percentages are relative to `values.len()`. Ranges wider than
/// [`MAX_HISTOGRAM_BINS`] are rejected with `InvalidInput`.
pub fn histogram_estimate(values: &[i64], spec: &DamageSpec) -> Result<Vec<HistogramBin>, OddsError> {
    if values.is_empty() {
        return Err(OddsError::EmptySample);
    }

    let (low, high) = (spec.min_possible(), spec.max_possible());
    let width = (i128::from(high) - i128::from(low) + 1) as u128;
    if width > u128::from(MAX_HISTOGRAM_BINS) {
        return Err(OddsError::invalid(format!(
            "{} has {} possible totals, more than the {} a discrete chart can show",
            spec, width, MAX_HISTOGRAM_BINS
        )));
    }

    let mut counts: BTreeMap<i64, usize> = BTreeMap::new();
    for &value in values {
        *counts.entry(value).or_insert(0) += 1;
    }

    let trials = values.len() as f64;
    let bins = (low..=high)
        .map(|value| {
            let hits = counts.get(&value).copied().unwrap_or(0);
            HistogramBin {
                value,
                percent: hits as f64 / trials * 100.0,
            }
        })
        .collect();

    Ok(bins)
}
