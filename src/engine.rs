//! Test orchestration: validate, simulate, evaluate.

use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::{NumericStatistic, TestConfig, TestPlan};
use crate::error::InvalidInput;
use crate::result::TestResult;
use crate::statistics::{
    bootstrap_resample_into, counter_rng_seed, mean, median, null_model_fraction, p_value,
    recenter, success_fraction,
};
use crate::types::Sample;

/// Run one simulation-based hypothesis test.
///
/// Validates the configuration against the sample, generates
/// `config.replicates` resamples under the null hypothesis, computes the
/// statistic on each to form the null distribution, computes the observed
/// statistic from the raw sample, and evaluates the p-value under the
/// configured direction.
///
/// The run is a pure function of `(sample, config)`: identical inputs and
/// seed produce a bit-identical [`TestResult`], with or without the
/// `parallel` feature.
///
/// # Errors
///
/// Returns [`InvalidInput`] if any parameter is malformed or out of domain;
/// see [`InvalidInput`] for the constraint each variant names.
pub fn run_test(sample: &Sample, config: &TestConfig) -> Result<TestResult, InvalidInput> {
    let plan = config.prepare(sample)?;

    let (observed, null_distribution) = match plan {
        TestPlan::Recentered { values, statistic } => {
            let observed = evaluate_numeric(statistic, values);
            // Shift-then-resample: the shifted sample's statistic equals the
            // null value, so resamples from it simulate the null world. The
            // observed statistic stays tied to the unshifted data.
            let shifted = recenter(values, observed, config.null_value);
            let null = numeric_null_distribution(
                &shifted,
                statistic,
                config.replicates,
                config.seed,
            );
            (observed, null)
        }
        TestPlan::NullModel { flags } => {
            let observed = success_fraction(&flags);
            let null = proportion_null_distribution(
                config.null_value,
                flags.len(),
                config.replicates,
                config.seed,
            );
            (observed, null)
        }
    };

    let p = p_value(&null_distribution, observed, config.direction);

    Ok(TestResult {
        null_distribution,
        observed,
        p_value: p,
        statistic: config.statistic,
        direction: config.direction,
        null_value: config.null_value,
        resample_mode: config.resolved_mode(),
        seed: config.seed,
    })
}

fn evaluate_numeric(statistic: NumericStatistic, values: &[f64]) -> f64 {
    match statistic {
        NumericStatistic::Mean => mean(values),
        NumericStatistic::Median => {
            let mut buffer = values.to_vec();
            median(&mut buffer)
        }
    }
}

/// One recentered-bootstrap replicate: resample the shifted data into the
/// scratch buffer, then evaluate the statistic on it.
fn numeric_replicate(
    shifted: &[f64],
    statistic: NumericStatistic,
    seed: u64,
    replicate: u64,
    buffer: &mut [f64],
) -> f64 {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(counter_rng_seed(seed, replicate));
    bootstrap_resample_into(shifted, &mut rng, buffer);
    match statistic {
        NumericStatistic::Mean => mean(buffer),
        NumericStatistic::Median => median(buffer),
    }
}

fn proportion_replicate(p: f64, n: usize, seed: u64, replicate: u64) -> f64 {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(counter_rng_seed(seed, replicate));
    null_model_fraction(p, n, &mut rng)
}

#[cfg(feature = "parallel")]
fn numeric_null_distribution(
    shifted: &[f64],
    statistic: NumericStatistic,
    replicates: usize,
    seed: u64,
) -> Vec<f64> {
    let n = shifted.len();
    (0..replicates)
        .into_par_iter()
        .map_init(
            || vec![0.0; n],
            |buffer, i| numeric_replicate(shifted, statistic, seed, i as u64, buffer),
        )
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn numeric_null_distribution(
    shifted: &[f64],
    statistic: NumericStatistic,
    replicates: usize,
    seed: u64,
) -> Vec<f64> {
    let mut buffer = vec![0.0; shifted.len()];
    (0..replicates)
        .map(|i| numeric_replicate(shifted, statistic, seed, i as u64, &mut buffer))
        .collect()
}

#[cfg(feature = "parallel")]
fn proportion_null_distribution(p: f64, n: usize, replicates: usize, seed: u64) -> Vec<f64> {
    (0..replicates)
        .into_par_iter()
        .map(|i| proportion_replicate(p, n, seed, i as u64))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn proportion_null_distribution(p: f64, n: usize, replicates: usize, seed: u64) -> Vec<f64> {
    (0..replicates)
        .map(|i| proportion_replicate(p, n, seed, i as u64))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Statistic;

    fn mean_config(null_value: f64, replicates: usize, seed: u64) -> TestConfig {
        let mut config = TestConfig::new(Statistic::Mean, null_value);
        config.replicates = replicates;
        config.seed = seed;
        config
    }

    #[test]
    fn null_distribution_has_exact_length() {
        let sample = Sample::numeric(vec![1.0, 2.0, 3.0, 4.0, 5.0]);
        for replicates in [1, 2, 37, 1000] {
            let result = run_test(&sample, &mean_config(3.0, replicates, 1)).unwrap();
            assert_eq!(result.null_distribution.len(), replicates);
        }
    }

    #[test]
    fn identical_inputs_are_bit_identical() {
        let sample = Sample::numeric(vec![2.0, 4.0, 6.0, 8.0, 10.0, 12.0]);
        let config = mean_config(7.0, 500, 99);
        let a = run_test(&sample, &config).unwrap();
        let b = run_test(&sample, &config).unwrap();
        assert_eq!(a.null_distribution, b.null_distribution);
        assert_eq!(a.observed, b.observed);
        assert_eq!(a.p_value, b.p_value);
    }

    #[test]
    fn different_seeds_differ() {
        let sample = Sample::numeric(vec![2.0, 4.0, 6.0, 8.0, 10.0, 12.0]);
        let a = run_test(&sample, &mean_config(7.0, 500, 1)).unwrap();
        let b = run_test(&sample, &mean_config(7.0, 500, 2)).unwrap();
        assert_ne!(a.null_distribution, b.null_distribution);
    }

    #[test]
    fn recentered_null_is_centered_on_null_value() {
        // Sample mean is 9; null is 3. The null distribution of the mean
        // must center near 3, not near 9.
        let sample = Sample::numeric(vec![7.0, 8.0, 9.0, 10.0, 11.0]);
        let result = run_test(&sample, &mean_config(3.0, 2000, 5)).unwrap();
        let null_mean =
            result.null_distribution.iter().sum::<f64>() / result.null_distribution.len() as f64;
        assert!(
            (null_mean - 3.0).abs() < 0.1,
            "null distribution centered at {}, expected ~3",
            null_mean
        );
        assert_eq!(result.observed, 9.0);
    }

    #[test]
    fn observed_median_comes_from_unshifted_sample() {
        let mut config = TestConfig::new(Statistic::Median, 10.0);
        config.replicates = 50;
        let sample = Sample::numeric(vec![1.0, 2.0, 3.0, 4.0, 100.0]);
        let result = run_test(&sample, &config).unwrap();
        assert_eq!(result.observed, 3.0);
    }

    #[test]
    fn proportion_null_values_are_multiples_of_recip_n() {
        let mut config = TestConfig::new(Statistic::Proportion, 0.25);
        config.success_label = Some("hit".to_string());
        config.replicates = 200;
        let labels: Vec<&str> = (0..8).map(|i| if i < 2 { "hit" } else { "miss" }).collect();
        let sample = Sample::categorical(labels);
        let result = run_test(&sample, &config).unwrap();
        assert_eq!(result.observed, 0.25);
        for &v in &result.null_distribution {
            assert!((v * 8.0).fract().abs() < 1e-9, "fraction {} not k/8", v);
        }
    }
}
