//! Comma-separated modifier lists

use crate::error::OddsError;
use std::str::FromStr;

fn parse_list<T: FromStr>(text: &str, what: &str) -> Result<Vec<T>, OddsError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(Vec::new());
    }
    text.split(',')
        .map(|item| {
            let item = item.trim();
            item.parse()
                .map_err(|_| OddsError::invalid(format!("Invalid {} modifier: '{}'", what, item)))
        })
        .collect()
}

/// Parse hit chance modifiers, e.g. `1, -0.5`. Blank input means no modifiers.
///
/// `NaN` and infinities parse as floats but are rejected here.
pub fn parse_chance_modifiers(text: &str) -> Result<Vec<f64>, OddsError> {
    let modifiers: Vec<f64> = parse_list(text, "chance")?;
    match modifiers.iter().find(|m| !m.is_finite()) {
        Some(bad) => Err(OddsError::invalid(format!("Invalid chance modifier: '{}'", bad))),
        None => Ok(modifiers),
    }
}

/// Parse integer damage modifiers, e.g. `2,-1`. Blank input means no modifiers.
pub fn parse_damage_modifiers(text: &str) -> Result<Vec<i64>, OddsError> {
    parse_list(text, "damage")
}
