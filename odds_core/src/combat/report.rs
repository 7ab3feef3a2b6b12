//! CombatReport - Everything the shell needs to display a calculation

use crate::stats::{DensityPoint, HistogramBin, Summary};
use serde::{Deserialize, Serialize};

/// Which distribution chart to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartMode {
    /// Every trial counts; discrete percentage per total
    Histogram,
    /// Only hitting trials count; smoothed density curve
    #[default]
    Density,
}

/// Chart data for an external renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "points", rename_all = "snake_case")]
pub enum ChartSeries {
    Discrete(Vec<HistogramBin>),
    Density(Vec<DensityPoint>),
}

impl ChartSeries {
    pub fn len(&self) -> usize {
        match self {
            ChartSeries::Discrete(bins) => bins.len(),
            ChartSeries::Density(points) => points.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Result of one calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatReport {
    /// Chance to hit, advantage included (0-1)
    pub hit_probability: f64,
    /// Damage dice in notation, e.g. `2d6 + 1d4 + 2`
    pub damage: String,
    /// Simulated damage of a landed hit
    pub summary: Summary,
    /// `hit_probability * summary.mean`: damage per attack including misses
    pub expected_per_attack: f64,
    /// Closed-form damage of a landed hit under the configured rounding
    pub closed_form_average: f64,
    /// Trials rolled
    pub trials: usize,
    /// Trials that counted toward the summary
    pub hits: usize,
    pub mode: ChartMode,
    pub chart: ChartSeries,
}

impl CombatReport {
    /// `Chance to Hit: 44%`
    pub fn hit_chance_text(&self) -> String {
        format!("Chance to Hit: {:.0}%", self.hit_probability * 100.0)
    }

    /// `Average Damage: 10`
    pub fn average_damage_text(&self) -> String {
        format!("Average Damage: {:.0}", self.summary.mean)
    }

    /// Serialize the whole report for another renderer
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> CombatReport {
        CombatReport {
            hit_probability: 0.4375,
            damage: "2d6".to_string(),
            summary: Summary { count: 4, mean: 7.2, std_dev: 2.4, min: 2, max: 12 },
            expected_per_attack: 3.15,
            closed_form_average: 7.0,
            trials: 10,
            hits: 4,
            mode: ChartMode::Histogram,
            chart: ChartSeries::Discrete(vec![HistogramBin { value: 2, percent: 100.0 }]),
        }
    }

    #[test]
    fn test_display_text() {
        let report = report();
        assert_eq!(report.hit_chance_text(), "Chance to Hit: 44%");
        assert_eq!(report.average_damage_text(), "Average Damage: 7");
    }

    #[test]
    fn test_json_shape() {
        let json = report().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["mode"], "histogram");
        assert_eq!(value["chart"]["kind"], "discrete");
        assert_eq!(value["chart"]["points"][0]["value"], 2);
    }
}
