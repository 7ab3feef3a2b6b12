//! HitChanceSpec - How likely an attack is to land

use super::advantage::apply_advantage;
use crate::dice::{parse_chance_modifiers, DieExpression};
use crate::error::OddsError;
use serde::{Deserialize, Serialize};

/// Percentage points granted per flat-mode chance modifier
const FLAT_PERCENT_PER_MODIFIER: f64 = 5.0;

/// Parameters describing the chance to hit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum HitChanceSpec {
    /// A flat percentage chance (1-100), each modifier worth 5 points
    Flat {
        percent: i32,
        #[serde(default)]
        modifiers: Vec<f64>,
        #[serde(default)]
        advantage: bool,
    },
    /// Roll `hit_die` and meet or beat `armor_class`, each modifier worth one face
    ArmorClass {
        armor_class: i32,
        hit_die: DieExpression,
        #[serde(default)]
        modifiers: Vec<f64>,
        #[serde(default)]
        advantage: bool,
    },
}

impl HitChanceSpec {
    /// Build a flat spec from text fields, e.g. `("65", "1,-1", false)`
    pub fn parse_flat(percent: &str, modifiers: &str, advantage: bool) -> Result<Self, OddsError> {
        let percent = percent.trim();
        let percent: i32 = percent
            .parse()
            .map_err(|_| OddsError::invalid(format!("Invalid hit chance: '{}'", percent)))?;
        Ok(HitChanceSpec::Flat {
            percent,
            modifiers: parse_chance_modifiers(modifiers)?,
            advantage,
        })
    }

    /// Build an armor-class spec from text fields, e.g. `("16", "1d20", "", true)`
    pub fn parse_armor_class(
        armor_class: &str,
        hit_die: &str,
        modifiers: &str,
        advantage: bool,
    ) -> Result<Self, OddsError> {
        let armor_class = armor_class.trim();
        let armor_class: i32 = armor_class
            .parse()
            .map_err(|_| OddsError::invalid(format!("Invalid armor class: '{}'", armor_class)))?;
        Ok(HitChanceSpec::ArmorClass {
            armor_class,
            hit_die: hit_die.parse()?,
            modifiers: parse_chance_modifiers(modifiers)?,
            advantage,
        })
    }

    /// Whether the attack is rolled with advantage
    pub fn has_advantage(&self) -> bool {
        match self {
            HitChanceSpec::Flat { advantage, .. } | HitChanceSpec::ArmorClass { advantage, .. } => {
                *advantage
            }
        }
    }

    /// Probability before advantage, clamped to [0, 1]
    pub fn base_probability(&self) -> Result<f64, OddsError> {
        let probability = match self {
            HitChanceSpec::Flat { percent, modifiers, .. } => {
                if !(1..=100).contains(percent) {
                    return Err(OddsError::invalid(format!(
                        "Hit chance must be between 1 and 100, got {}",
                        percent
                    )));
                }
                let bonus: f64 = modifiers.iter().sum::<f64>() * FLAT_PERCENT_PER_MODIFIER;
                (*percent as f64 + bonus).clamp(0.0, 100.0) / 100.0
            }
            HitChanceSpec::ArmorClass { armor_class, hit_die, modifiers, .. } => {
                let sides = hit_die.sides as f64;
                let faces_that_hit = sides - (*armor_class as f64 - 1.0);
                let bonus: f64 = modifiers.iter().sum();
                (faces_that_hit / sides + bonus / sides).clamp(0.0, 1.0)
            }
        };
        // clamp lets NaN through
        if probability.is_nan() {
            return Err(OddsError::invalid("Hit chance modifiers must be finite numbers"));
        }
        Ok(probability)
    }
}

/// Compute the final probability of hitting, advantage included
pub fn compute_hit_chance(spec: &HitChanceSpec) -> Result<f64, OddsError> {
    let base = spec.base_probability()?;
    if spec.has_advantage() {
        Ok(apply_advantage(base))
    } else {
        Ok(base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn d20() -> DieExpression {
        DieExpression::new(1, 20).unwrap()
    }

    #[test]
    fn test_flat_with_modifiers() {
        // 50 + 5 * (2 - 1) = 55%
        let spec = HitChanceSpec::Flat { percent: 50, modifiers: vec![2.0, -1.0], advantage: false };
        assert!((compute_hit_chance(&spec).unwrap() - 0.55).abs() < 1e-12);
    }

    #[test]
    fn test_flat_clamps_before_advantage() {
        let spec = HitChanceSpec::Flat { percent: 95, modifiers: vec![3.0], advantage: true };
        assert!((compute_hit_chance(&spec).unwrap() - 1.0).abs() < f64::EPSILON);

        let spec = HitChanceSpec::Flat { percent: 10, modifiers: vec![-4.0], advantage: true };
        assert!((compute_hit_chance(&spec).unwrap() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_flat_out_of_range() {
        for percent in [0, 101, -5] {
            let spec = HitChanceSpec::Flat { percent, modifiers: vec![], advantage: false };
            assert!(matches!(compute_hit_chance(&spec), Err(OddsError::InvalidInput(_))));
        }
    }

    #[test]
    fn test_armor_class_scenario() {
        // (20 - 15) / 20 = 0.25
        let spec = HitChanceSpec::ArmorClass {
            armor_class: 16,
            hit_die: d20(),
            modifiers: vec![],
            advantage: false,
        };
        assert!((compute_hit_chance(&spec).unwrap() - 0.25).abs() < f64::EPSILON);

        let with_adv = HitChanceSpec::ArmorClass {
            armor_class: 16,
            hit_die: d20(),
            modifiers: vec![],
            advantage: true,
        };
        assert!((compute_hit_chance(&with_adv).unwrap() - 0.4375).abs() < f64::EPSILON);
    }

    #[test]
    fn test_armor_class_modifiers_are_faces() {
        // +3 on a d20 against AC 16: 0.25 + 3/20 = 0.40
        let spec = HitChanceSpec::ArmorClass {
            armor_class: 16,
            hit_die: d20(),
            modifiers: vec![3.0],
            advantage: false,
        };
        assert!((compute_hit_chance(&spec).unwrap() - 0.40).abs() < 1e-12);
    }

    #[test]
    fn test_armor_class_easy_target_clamps_to_one() {
        let spec = HitChanceSpec::ArmorClass {
            armor_class: -3,
            hit_die: d20(),
            modifiers: vec![],
            advantage: false,
        };
        assert!((compute_hit_chance(&spec).unwrap() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_flat() {
        let spec = HitChanceSpec::parse_flat(" 65 ", "1", true).unwrap();
        assert_eq!(spec, HitChanceSpec::Flat { percent: 65, modifiers: vec![1.0], advantage: true });
        assert!(HitChanceSpec::parse_flat("sixty", "", false).is_err());
        assert!(HitChanceSpec::parse_flat("65.5", "", false).is_err());
    }

    #[test]
    fn test_parse_armor_class() {
        let spec = HitChanceSpec::parse_armor_class("16", "1d20", "", false).unwrap();
        assert!((compute_hit_chance(&spec).unwrap() - 0.25).abs() < f64::EPSILON);

        assert!(matches!(
            HitChanceSpec::parse_armor_class("16", "20", "", false),
            Err(OddsError::InvalidInput(_))
        ));
        assert!(matches!(
            HitChanceSpec::parse_armor_class("AC16", "1d20", "", false),
            Err(OddsError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_non_finite_modifiers_rejected() {
        assert!(HitChanceSpec::parse_flat("50", "NaN", false).is_err());
        assert!(HitChanceSpec::parse_armor_class("16", "1d20", "inf,-inf", true).is_err());

        // Built directly, bypassing the text parser
        let flat = HitChanceSpec::Flat { percent: 50, modifiers: vec![f64::NAN], advantage: false };
        assert!(matches!(compute_hit_chance(&flat), Err(OddsError::InvalidInput(_))));

        let cancelled = HitChanceSpec::ArmorClass {
            armor_class: 16,
            hit_die: d20(),
            modifiers: vec![f64::INFINITY, f64::NEG_INFINITY],
            advantage: true,
        };
        assert!(matches!(compute_hit_chance(&cancelled), Err(OddsError::InvalidInput(_))));
    }

    proptest! {
        #[test]
        fn flat_percent_without_modifiers_is_exact(percent in 1i32..=100) {
            let spec = HitChanceSpec::Flat { percent, modifiers: vec![], advantage: false };
            prop_assert_eq!(compute_hit_chance(&spec).unwrap(), percent as f64 / 100.0);
        }

        #[test]
        fn armor_class_one_past_the_die_never_hits(sides in 1u32..=100) {
            let spec = HitChanceSpec::ArmorClass {
                armor_class: sides as i32 + 1,
                hit_die: DieExpression::new(1, sides).unwrap(),
                modifiers: vec![],
                advantage: false,
            };
            prop_assert_eq!(compute_hit_chance(&spec).unwrap(), 0.0);
        }

        #[test]
        fn hit_chance_is_a_probability(ac in -10i32..40, bonus in -10.0f64..10.0, adv in any::<bool>()) {
            let spec = HitChanceSpec::ArmorClass {
                armor_class: ac,
                hit_die: DieExpression::new(1, 20).unwrap(),
                modifiers: vec![bonus],
                advantage: adv,
            };
            let p = compute_hit_chance(&spec).unwrap();
            prop_assert!((0.0..=1.0).contains(&p));
        }
    }
}
