//! Advantage - Roll twice, take the better result

/// Adjust a hit probability for advantage
///
/// Missing requires both rolls to miss, so `p' = 1 - (1 - p)^2 = p + (1 - p) * p`.
pub fn apply_advantage(probability: f64) -> f64 {
    probability + (1.0 - probability) * probability
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_advantage_fixed_points() {
        assert!((apply_advantage(0.0) - 0.0).abs() < f64::EPSILON);
        assert!((apply_advantage(1.0) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_advantage_quarter() {
        // 0.25 + 0.75 * 0.25 = 0.4375
        assert!((apply_advantage(0.25) - 0.4375).abs() < f64::EPSILON);
    }

    proptest! {
        #[test]
        fn advantage_never_lowers_chance(p in 0.0f64..=1.0) {
            let adjusted = apply_advantage(p);
            prop_assert!(adjusted >= p);
            prop_assert!(adjusted <= 1.0);
        }

        #[test]
        fn advantage_strictly_helps_inside_unit_interval(p in 0.001f64..0.999) {
            prop_assert!(apply_advantage(p) > p);
        }
    }
}
