//! Text rendering of reports

use odds_core::{ChartSeries, CombatReport, DensityPoint, HistogramBin, OddsError};
use std::fmt;

/// Percentage covered by one tick of the discrete chart's axis
const TICK_PERCENT: f64 = 2.5;
/// Characters per axis tick
const TICK_WIDTH: usize = 5;
/// Width of the longest density bar
const DENSITY_WIDTH: usize = 48;
/// Rows the density curve is resampled to
const DENSITY_ROWS: usize = 20;

/// A report laid out for the terminal: labels, stats, chart
pub struct TextReport<'a>(pub &'a CombatReport);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        writeln!(f, "Damage: {}", report.damage)?;
        writeln!(f, "{}", report.hit_chance_text())?;
        writeln!(f, "{}", report.average_damage_text())?;
        writeln!(
            f,
            "  std dev {:.2}, {} of {} trials counted, {:.2} per attack, closed form {:.2}",
            report.summary.std_dev,
            report.hits,
            report.trials,
            report.expected_per_attack,
            report.closed_form_average
        )?;
        writeln!(f)?;

        match &report.chart {
            ChartSeries::Discrete(bins) => write_histogram(f, bins, report.summary.mean),
            ChartSeries::Density(points) => write_density(f, points, report.summary.mean),
        }
    }
}

/// Full text report as a string
pub fn render_report(report: &CombatReport) -> String {
    TextReport(report).to_string()
}

/// The line shown instead of results when a calculation fails
pub fn render_error(err: &OddsError) -> String {
    format!("Error: {}", err)
}

fn mean_marker(mean: f64) -> String {
    format!("  <- mean {:.2}", mean)
}

fn write_histogram(f: &mut fmt::Formatter<'_>, bins: &[HistogramBin], mean: f64) -> fmt::Result {
    writeln!(f, "Damage Distribution (%)")?;

    let top = bins.iter().map(|b| b.percent).fold(0.0, f64::max);
    let ticks = ((top / TICK_PERCENT).ceil() as usize).max(1);
    let mean_value = mean.round() as i64;

    for bin in bins {
        let width = (bin.percent / TICK_PERCENT * TICK_WIDTH as f64).round() as usize;
        let marker = if bin.value == mean_value { mean_marker(mean) } else { String::new() };
        writeln!(
            f,
            "{:>5} | {:<bar$} {:>5.2}{}",
            bin.value,
            "█".repeat(width),
            bin.percent,
            marker,
            bar = ticks * TICK_WIDTH
        )?;
    }

    // Percent axis in 2.5 steps
    let mut axis = String::from("      +");
    let mut labels = String::from("      ");
    for tick in 0..=ticks {
        if tick < ticks {
            axis.push_str(&"-".repeat(TICK_WIDTH - 1));
            axis.push('+');
        }
        let label = (tick as f64 * TICK_PERCENT).to_string();
        labels.push_str(&format!("{:<width$}", label, width = TICK_WIDTH));
    }
    writeln!(f, "{}", axis)?;
    writeln!(f, "{}", labels.trim_end())
}

fn write_density(f: &mut fmt::Formatter<'_>, points: &[DensityPoint], mean: f64) -> fmt::Result {
    writeln!(f, "Damage Density")?;
    if points.is_empty() {
        return Ok(());
    }

    let rows = resample(points, DENSITY_ROWS);
    let top = rows.iter().map(|p| p.density).fold(0.0, f64::max);
    let nearest_mean = rows
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| (a.x - mean).abs().total_cmp(&(b.x - mean).abs()))
        .map(|(i, _)| i);

    for (i, point) in rows.iter().enumerate() {
        let width = if top > 0.0 {
            (point.density / top * DENSITY_WIDTH as f64).round() as usize
        } else {
            0
        };
        let marker = if Some(i) == nearest_mean { mean_marker(mean) } else { String::new() };
        writeln!(
            f,
            "{:>7.2} | {:<bar$} {:.4}{}",
            point.x,
            "█".repeat(width),
            point.density,
            marker,
            bar = DENSITY_WIDTH
        )?;
    }
    Ok(())
}

/// Pick `rows` evenly spaced points, keeping both ends
fn resample(points: &[DensityPoint], rows: usize) -> Vec<DensityPoint> {
    if points.len() <= rows || rows < 2 {
        return points.to_vec();
    }
    let last = points.len() - 1;
    (0..rows)
        .map(|i| points[(i * last + (rows - 1) / 2) / (rows - 1)])
        .collect()
}
