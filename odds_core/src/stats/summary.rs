//! Summary - Mean and spread of a damage sample

use crate::error::OddsError;
use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;

/// Mean and population standard deviation of a set of damage totals
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    /// Population standard deviation (divides by N)
    pub std_dev: f64,
    pub min: i64,
    pub max: i64,
}

/// Summarize damage totals; fails with `EmptySample` on an empty slice
pub fn summarize(values: &[i64]) -> Result<Summary, OddsError> {
    let (Some(&min), Some(&max)) = (values.iter().min(), values.iter().max()) else {
        return Err(OddsError::EmptySample);
    };

    let data: Vec<f64> = values.iter().map(|&v| v as f64).collect();
    let mean = data.iter().mean();
    let std_dev = data.iter().population_std_dev();

    Ok(Summary {
        count: values.len(),
        mean,
        std_dev,
        min,
        max,
    })
}
