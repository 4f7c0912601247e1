//! Empirical p-values against a simulated null distribution.

use crate::types::Direction;

/// Fractions of the null distribution at or below, and at or above, the
/// observed statistic.
///
/// Ties count toward both tails, so `frac_le + frac_ge >= 1` always holds.
///
/// # Panics
///
/// Panics if `null` is empty.
pub fn tail_fractions(null: &[f64], observed: f64) -> (f64, f64) {
    assert!(
        !null.is_empty(),
        "Cannot compute tail fractions of empty null distribution"
    );
    let n = null.len() as f64;
    let le = null.iter().filter(|&&v| v <= observed).count() as f64 / n;
    let ge = null.iter().filter(|&&v| v >= observed).count() as f64 / n;
    (le, ge)
}

/// Empirical p-value of `observed` against `null` under `direction`.
///
/// - `Less`: fraction of null values `<=` observed.
/// - `Greater`: fraction of null values `>=` observed.
/// - `TwoSided`: `min(1, 2 * min(frac_le, frac_ge))`.
///
/// # Panics
///
/// Panics if `null` is empty.
pub fn p_value(null: &[f64], observed: f64, direction: Direction) -> f64 {
    let (le, ge) = tail_fractions(null, observed);
    match direction {
        Direction::Less => le,
        Direction::Greater => ge,
        Direction::TwoSided => (2.0 * le.min(ge)).min(1.0),
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn null_strategy() -> impl Strategy<Value = Vec<f64>> {
        prop::collection::vec(-1e6..1e6f64, 1..500)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// Every direction yields a p-value in [0, 1].
        #[test]
        fn prop_p_value_in_unit_interval(
            null in null_strategy(),
            observed in -1e6..1e6f64,
        ) {
            for direction in [Direction::Less, Direction::Greater, Direction::TwoSided] {
                let p = p_value(&null, observed, direction);
                prop_assert!((0.0..=1.0).contains(&p), "p = {} for {:?}", p, direction);
            }
        }

        /// Ties count toward both tails, so the tail fractions overlap.
        #[test]
        fn prop_tails_cover_distribution(
            null in null_strategy(),
            observed in -1e6..1e6f64,
        ) {
            let (le, ge) = tail_fractions(&null, observed);
            prop_assert!(le + ge >= 1.0 - 1e-12);
        }

        /// The two-sided p-value is exactly the capped doubled smaller tail.
        #[test]
        fn prop_two_sided_identity(
            null in null_strategy(),
            observed in -1e6..1e6f64,
        ) {
            let (le, ge) = tail_fractions(&null, observed);
            let expected = (2.0 * le.min(ge)).min(1.0);
            prop_assert_eq!(p_value(&null, observed, Direction::TwoSided), expected);
        }
    }
}
