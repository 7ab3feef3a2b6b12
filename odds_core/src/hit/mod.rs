//! Hit chance - Flat percentage or armor class, with advantage
//!
//! Two ways to describe the chance to hit:
//!
//! - Flat: `clamp(percent + 5 * Σmodifiers, 0, 100) / 100`
//! - Armor class: `clamp((sides - (ac - 1)) / sides + Σmodifiers / sides, 0, 1)`
//!
//! Each chance modifier is worth one face of the hit die, so on a d20 a +1
//! is the same 5% in both modes.
//!
//! Advantage (roll twice, keep the better) is applied after clamping:
//! `p' = p + (1 - p) * p`, the complement of missing twice.

mod advantage;
mod chance;

pub use advantage::apply_advantage;
pub use chance::{compute_hit_chance, HitChanceSpec};
