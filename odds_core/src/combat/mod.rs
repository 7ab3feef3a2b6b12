//! Combat odds - From shell input to a finished report

mod calculator;
mod input;
mod report;

pub use calculator::CombatOddsCalculator;
pub use input::{CombatInput, HitInput};
pub use report::{ChartMode, ChartSeries, CombatReport};
