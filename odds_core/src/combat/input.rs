//! CombatInput - Raw text fields as typed into the shell

use crate::damage::DamageSpec;
use crate::error::OddsError;
use crate::hit::HitChanceSpec;
use serde::{Deserialize, Serialize};

/// How the chance to hit was entered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HitInput {
    /// Flat chance, e.g. `65` for 65%
    Percent(String),
    /// Target armor class and the die rolled against it, e.g. `16` and `1d20`
    ArmorClass { armor_class: String, hit_die: String },
}

/// Every field of one calculation request, unparsed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatInput {
    pub hit: HitInput,
    #[serde(default)]
    pub advantage: bool,
    /// Comma-separated chance modifiers
    #[serde(default)]
    pub chance_modifiers: String,
    /// Comma-separated damage dice, e.g. `2d6,1d4`
    pub damage_dice: String,
    /// Comma-separated flat damage modifiers
    #[serde(default)]
    pub damage_modifiers: String,
}

impl CombatInput {
    /// Parse the hit chance fields
    pub fn hit_spec(&self) -> Result<HitChanceSpec, OddsError> {
        match &self.hit {
            HitInput::Percent(percent) => {
                HitChanceSpec::parse_flat(percent, &self.chance_modifiers, self.advantage)
            }
            HitInput::ArmorClass { armor_class, hit_die } => HitChanceSpec::parse_armor_class(
                armor_class,
                hit_die,
                &self.chance_modifiers,
                self.advantage,
            ),
        }
    }

    /// Parse the damage fields
    pub fn damage_spec(&self) -> Result<DamageSpec, OddsError> {
        DamageSpec::parse(&self.damage_dice, &self.damage_modifiers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_percent_input() {
        let input = CombatInput {
            hit: HitInput::Percent("65".to_string()),
            advantage: false,
            chance_modifiers: "1".to_string(),
            damage_dice: "1d10".to_string(),
            damage_modifiers: "3".to_string(),
        };

        assert_eq!(
            input.hit_spec().unwrap(),
            HitChanceSpec::Flat { percent: 65, modifiers: vec![1.0], advantage: false }
        );
        assert_eq!(input.damage_spec().unwrap().modifier_total(), 3);
    }

    #[test]
    fn test_parse_armor_class_input() {
        let input = CombatInput {
            hit: HitInput::ArmorClass {
                armor_class: "16".to_string(),
                hit_die: "1x20".to_string(),
            },
            advantage: true,
            chance_modifiers: String::new(),
            damage_dice: "2d6".to_string(),
            damage_modifiers: String::new(),
        };

        assert!(matches!(input.hit_spec(), Err(OddsError::InvalidInput(_))));
        assert!(input.damage_spec().is_ok());
    }
}
