//! Test results.

use crate::statistics::tail_fractions;
use crate::types::{Direction, ResampleMode, Statistic};

/// Everything a test run produced, plus the configuration that produced it.
///
/// The null distribution is exposed as a plain slice of scalars so any
/// external renderer can consume it (histogram with a shaded extremity
/// region, density plot, dump to disk); this crate itself only formats a
/// terminal summary.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TestResult {
    /// Simulated statistic values, one per replicate, in replicate order.
    pub null_distribution: Vec<f64>,

    /// The statistic computed from the raw, unresampled sample.
    pub observed: f64,

    /// Probability, under the null distribution, of a statistic at least as
    /// extreme as `observed`, per `direction`.
    pub p_value: f64,

    /// Statistic the test was run on.
    pub statistic: Statistic,

    /// Alternative-hypothesis direction.
    pub direction: Direction,

    /// Hypothesized population parameter.
    pub null_value: f64,

    /// Resampling mode that generated the null distribution.
    pub resample_mode: ResampleMode,

    /// Seed the run was generated from.
    pub seed: u64,
}

impl TestResult {
    /// The simulated null distribution, in replicate order.
    pub fn null_distribution(&self) -> &[f64] {
        &self.null_distribution
    }

    /// Number of replicates in the null distribution.
    pub fn replicates(&self) -> usize {
        self.null_distribution.len()
    }

    /// Whether the p-value falls below the significance level `alpha`.
    ///
    /// # Panics
    ///
    /// Panics if `alpha` is outside (0, 1).
    pub fn is_significant(&self, alpha: f64) -> bool {
        assert!(
            alpha > 0.0 && alpha < 1.0,
            "significance level must be in (0, 1)"
        );
        self.p_value < alpha
    }

    /// Monte Carlo standard error of the p-value estimate,
    /// `sqrt(p(1-p)/replicates)`.
    pub fn monte_carlo_se(&self) -> f64 {
        let p = self.p_value;
        (p * (1.0 - p) / self.replicates() as f64).sqrt()
    }

    /// The tail fractions `(frac_le, frac_ge)` the p-value was derived
    /// from.
    pub fn tail_fractions(&self) -> (f64, f64) {
        tail_fractions(&self.null_distribution, self.observed)
    }

    /// Minimum and maximum of the null distribution.
    pub fn null_range(&self) -> (f64, f64) {
        let min = self
            .null_distribution
            .iter()
            .copied()
            .fold(f64::INFINITY, f64::min);
        let max = self
            .null_distribution
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);
        (min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_with(null: Vec<f64>, observed: f64, p: f64) -> TestResult {
        TestResult {
            null_distribution: null,
            observed,
            p_value: p,
            statistic: Statistic::Mean,
            direction: Direction::TwoSided,
            null_value: 0.0,
            resample_mode: ResampleMode::BootstrapRecentered,
            seed: 42,
        }
    }

    #[test]
    fn significance_threshold_is_strict() {
        let result = result_with(vec![0.0; 10], 0.0, 0.05);
        assert!(!result.is_significant(0.05));
        assert!(result.is_significant(0.051));
    }

    #[test]
    #[should_panic]
    fn significance_rejects_bad_alpha() {
        result_with(vec![0.0], 0.0, 0.5).is_significant(1.0);
    }

    #[test]
    fn monte_carlo_se_formula() {
        let result = result_with(vec![0.0; 400], 0.0, 0.5);
        // sqrt(0.25 / 400) = 0.025
        assert!((result.monte_carlo_se() - 0.025).abs() < 1e-12);

        let degenerate = result_with(vec![0.0; 400], 0.0, 0.0);
        assert_eq!(degenerate.monte_carlo_se(), 0.0);
    }

    #[test]
    fn null_range_spans_distribution() {
        let result = result_with(vec![3.0, -1.0, 2.0], 0.0, 1.0);
        assert_eq!(result.null_range(), (-1.0, 3.0));
    }

    #[test]
    fn tail_fractions_recompute_from_stored_distribution() {
        let result = result_with(vec![1.0, 2.0, 3.0, 4.0], 2.0, 1.0);
        assert_eq!(result.tail_fractions(), (0.5, 0.75));
    }
}
