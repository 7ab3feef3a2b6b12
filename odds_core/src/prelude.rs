//! Prelude module for convenient imports
//!
//! ```rust
//! use odds_core::prelude::*;
//! ```

// Input types
pub use crate::dice::DieExpression;
pub use crate::damage::DamageSpec;
pub use crate::hit::HitChanceSpec;

// Pipeline
pub use crate::combat::{ChartMode, ChartSeries, CombatInput, CombatOddsCalculator, CombatReport, HitInput};

// Config
pub use crate::config::{RoundingPolicy, SimulationConfig};

// Errors
pub use crate::error::OddsError;
