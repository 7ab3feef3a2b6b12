//! DamageSpec - What a hit rolls for damage

use crate::config::RoundingPolicy;
use crate::dice::{parse_damage_modifiers, parse_dice_list, DieExpression};
use crate::error::OddsError;
use serde::Serialize;
use std::fmt;

/// Damage dice plus flat modifiers, e.g. `2d6 + 1d4 + 2 - 1`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DamageSpec {
    /// Die expressions, in input order (never empty)
    dice: Vec<DieExpression>,
    /// Flat modifiers added to every roll
    modifiers: Vec<i64>,
}

impl DamageSpec {
    /// Create a damage spec; at least one die expression is required
    ///
    /// Totals must fit in an `i64`, which keeps `min_possible`, `max_possible`
    /// and `roll` free of overflow.
    pub fn new(dice: Vec<DieExpression>, modifiers: Vec<i64>) -> Result<Self, OddsError> {
        if dice.is_empty() {
            return Err(OddsError::invalid("At least one damage die is required"));
        }
        let too_large = || OddsError::invalid("Damage totals are too large to represent");
        let modifier_total = checked_total(modifiers.iter().copied()).ok_or_else(too_large)?;
        let min_dice = checked_total(dice.iter().map(DieExpression::min_total)).ok_or_else(too_large)?;
        let max_dice = checked_total(dice.iter().map(DieExpression::max_total)).ok_or_else(too_large)?;
        min_dice.checked_add(modifier_total).ok_or_else(too_large)?;
        max_dice.checked_add(modifier_total).ok_or_else(too_large)?;
        Ok(DamageSpec { dice, modifiers })
    }

    /// Build from text fields, e.g. `("2d6,1d4", "2,-1")`
    pub fn parse(dice: &str, modifiers: &str) -> Result<Self, OddsError> {
        DamageSpec::new(parse_dice_list(dice)?, parse_damage_modifiers(modifiers)?)
    }

    pub fn dice(&self) -> &[DieExpression] {
        &self.dice
    }

    pub fn modifiers(&self) -> &[i64] {
        &self.modifiers
    }

    /// Sum of the flat modifiers
    pub fn modifier_total(&self) -> i64 {
        self.modifiers.iter().sum()
    }

    /// Lowest total a roll can produce
    pub fn min_possible(&self) -> i64 {
        self.dice.iter().map(DieExpression::min_total).sum::<i64>() + self.modifier_total()
    }

    /// Highest total a roll can produce
    pub fn max_possible(&self) -> i64 {
        self.dice.iter().map(DieExpression::max_total).sum::<i64>() + self.modifier_total()
    }

    /// Roll every die once and add the modifiers
    pub fn roll(&self, rng: &mut impl rand::Rng) -> i64 {
        let dice: i64 = self.dice.iter().map(|die| die.roll(rng)).sum();
        dice + self.modifier_total()
    }
}

/// Left-to-right sum, `None` if any partial sum overflows
fn checked_total(mut values: impl Iterator<Item = i64>) -> Option<i64> {
    values.try_fold(0i64, i64::checked_add)
}

impl fmt::Display for DamageSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dice: Vec<String> = self.dice.iter().map(ToString::to_string).collect();
        write!(f, "{}", dice.join(" + "))?;
        for modifier in &self.modifiers {
            if *modifier < 0 {
                write!(f, " - {}", -modifier)?;
            } else {
                write!(f, " + {}", modifier)?;
            }
        }
        Ok(())
    }
}

/// Closed-form average damage of one hit
///
/// `Σ count * (sides + 1) / 2 + Σ modifiers`, with the per-expression average
/// truncated first under `RoundingPolicy::FloorPerDie`.
pub fn expected_damage(spec: &DamageSpec, policy: RoundingPolicy) -> f64 {
    let dice: f64 = match policy {
        RoundingPolicy::Exact => spec.dice.iter().map(DieExpression::average).sum(),
        RoundingPolicy::FloorPerDie => {
            spec.dice.iter().map(DieExpression::floored_average).sum::<i64>() as f64
        }
    };
    dice + spec.modifier_total() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_expected_damage_scenario() {
        // 2 * 3.5 + 1 * 2.5 + (2 - 1) = 10.5
        let spec = DamageSpec::parse("2d6,1d4", "2,-1").unwrap();
        assert!((expected_damage(&spec, RoundingPolicy::Exact) - 10.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_expected_damage_floor_policy() {
        // 2d6 -> 2 * 3 = 6, 1d4 -> 2, modifiers +1
        let spec = DamageSpec::parse("2d6,1d4", "2,-1").unwrap();
        assert!((expected_damage(&spec, RoundingPolicy::FloorPerDie) - 9.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_requires_dice() {
        assert!(matches!(DamageSpec::new(vec![], vec![3]), Err(OddsError::InvalidInput(_))));
        assert!(DamageSpec::parse("", "3").is_err());
    }

    #[test]
    fn test_possible_range() {
        let spec = DamageSpec::parse("2d6, 1d4", "3").unwrap();
        assert_eq!(spec.min_possible(), 6);
        assert_eq!(spec.max_possible(), 19);
    }

    #[test]
    fn test_negative_modifiers_can_go_below_zero() {
        let spec = DamageSpec::parse("1d4", "-3").unwrap();
        assert_eq!(spec.min_possible(), -2);
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let roll = spec.roll(&mut rng);
            assert!((-2..=1).contains(&roll));
        }
    }

    #[test]
    fn test_rejects_overflowing_totals() {
        assert!(matches!(
            DamageSpec::parse("1d6", "9223372036854775807,1"),
            Err(OddsError::InvalidInput(_))
        ));
        assert!(DamageSpec::parse("1d6", "-9223372036854775808,-1").is_err());
        // Modifiers alone fit, but the top roll does not
        assert!(DamageSpec::parse("1d6", "9223372036854775802").is_err());

        let spec = DamageSpec::parse("1d6", "9223372036854775801").unwrap();
        assert_eq!(spec.max_possible(), i64::MAX);
    }

    #[test]
    fn test_display() {
        let spec = DamageSpec::parse("2d6,1d4", "2,-1").unwrap();
        assert_eq!(spec.to_string(), "2d6 + 1d4 + 2 - 1");
    }
}
