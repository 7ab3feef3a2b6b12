//! Density - Gaussian kernel density curve for charting
//!
//! The kernel width is `bandwidth * s`, where `s` is the sample standard
//! deviation (N - 1 denominator). The curve is evaluated at evenly spaced
//! points between the smallest and largest observed totals.
//!
//! The curve only smooths the discrete outcome set for display. Its values
//! are densities, not probabilities of individual totals, and must not be
//! used for expected values.

use crate::error::OddsError;
use serde::{Deserialize, Serialize};
use statrs::distribution::{Continuous, Normal};
use statrs::statistics::Statistics;
use std::collections::BTreeMap;

/// One point of the density curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DensityPoint {
    pub x: f64,
    pub density: f64,
}

/// Estimate the density of `values` at `grid_points` evenly spaced locations
pub fn density_estimate(
    values: &[i64],
    bandwidth: f64,
    grid_points: usize,
) -> Result<Vec<DensityPoint>, OddsError> {
    if !(bandwidth.is_finite() && bandwidth > 0.0) {
        return Err(OddsError::invalid(format!("Bandwidth must be positive, got {}", bandwidth)));
    }
    if grid_points < 2 {
        return Err(OddsError::invalid("Density curve needs at least 2 grid points"));
    }

    // Totals are discrete, so evaluate one kernel per distinct value
    let mut counts: BTreeMap<i64, usize> = BTreeMap::new();
    for &value in values {
        *counts.entry(value).or_insert(0) += 1;
    }
    let (Some((&low, _)), Some((&high, _))) = (counts.first_key_value(), counts.last_key_value()) else {
        return Err(OddsError::InsufficientSamples);
    };
    if low == high {
        return Err(OddsError::InsufficientSamples);
    }

    let data: Vec<f64> = values.iter().map(|&v| v as f64).collect();
    let sigma = bandwidth * data.iter().std_dev();
    let kernel = Normal::new(0.0, sigma).map_err(|_| OddsError::InsufficientSamples)?;

    let n = values.len() as f64;
    let (low, high) = (low as f64, high as f64);
    let step = (high - low) / (grid_points - 1) as f64;

    let curve = (0..grid_points)
        .map(|i| {
            let x = low + step * i as f64;
            let density = counts
                .iter()
                .map(|(&value, &count)| count as f64 * kernel.pdf(x - value as f64))
                .sum::<f64>()
                / n;
            DensityPoint { x, density }
        })
        .collect();

    Ok(curve)
}
