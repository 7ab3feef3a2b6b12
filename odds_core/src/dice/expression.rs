//! DieExpression - A group of identical dice, e.g. `2d6`

use crate::error::OddsError;
use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// `count` dice with `sides` faces each
///
/// Serialized in dice notation (`"2d6"`) so config and report files stay readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DieExpression {
    /// Number of dice rolled (at least 1)
    pub count: u32,
    /// Faces per die (at least 1)
    pub sides: u32,
}

impl DieExpression {
    /// Create a die expression, rejecting zero counts or sides
    pub fn new(count: u32, sides: u32) -> Result<Self, OddsError> {
        if count == 0 {
            return Err(OddsError::invalid("Dice count must be at least 1"));
        }
        if sides == 0 {
            return Err(OddsError::invalid("Dice must have at least 1 side"));
        }
        Ok(DieExpression { count, sides })
    }

    /// Average of a single die: (sides + 1) / 2
    pub fn die_average(&self) -> f64 {
        (self.sides as f64 + 1.0) / 2.0
    }

    /// Average of the whole expression: count * (sides + 1) / 2
    pub fn average(&self) -> f64 {
        self.count as f64 * self.die_average()
    }

    /// Average with the per-die average truncated toward zero (1d6 -> 3, 2d6 -> 6)
    pub fn floored_average(&self) -> i64 {
        self.count as i64 * ((self.sides as i64 + 1) / 2)
    }

    /// Lowest possible total (every die shows 1)
    pub fn min_total(&self) -> i64 {
        self.count as i64
    }

    /// Highest possible total (every die shows its top face)
    pub fn max_total(&self) -> i64 {
        self.count as i64 * self.sides as i64
    }

    /// Roll every die and return the sum
    pub fn roll(&self, rng: &mut impl Rng) -> i64 {
        let face = Uniform::new_inclusive(1, self.sides as i64);
        face.sample_iter(rng).take(self.count as usize).sum()
    }
}

impl FromStr for DieExpression {
    type Err = OddsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let (count, sides) = text
            .split_once('d')
            .ok_or_else(|| OddsError::invalid(format!("Invalid dice format: '{}'", text)))?;

        let count: u32 = count
            .trim()
            .parse()
            .map_err(|_| OddsError::invalid(format!("Invalid dice count in '{}'", text)))?;
        let sides: u32 = sides
            .trim()
            .parse()
            .map_err(|_| OddsError::invalid(format!("Invalid dice sides in '{}'", text)))?;

        DieExpression::new(count, sides)
    }
}

impl fmt::Display for DieExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)
    }
}

impl TryFrom<String> for DieExpression {
    type Error = OddsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DieExpression> for String {
    fn from(die: DieExpression) -> Self {
        die.to_string()
    }
}

/// Parse a comma-separated list of die expressions, e.g. `2d6, 1d4`
///
/// At least one expression is required.
pub fn parse_dice_list(text: &str) -> Result<Vec<DieExpression>, OddsError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(OddsError::invalid("At least one damage die is required"));
    }
    text.split(',').map(str::parse).collect()
}
