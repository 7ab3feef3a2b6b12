//! Dice notation - `<count>d<sides>` expressions and modifier lists

mod expression;
mod modifiers;

pub use expression::{parse_dice_list, DieExpression};
pub use modifiers::{parse_chance_modifiers, parse_damage_modifiers};
