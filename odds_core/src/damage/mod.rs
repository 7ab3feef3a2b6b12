//! Damage - Dice pools, closed-form averages and Monte Carlo samples

mod sample;
mod spec;

pub use sample::{
    filter_by_hit, filter_by_hit_with_rng, make_rng, simulate_damage, simulate_damage_with_rng,
    DamageSample, HitFilteredSample,
};
pub use spec::{expected_damage, DamageSpec};
