//! `HypothesisTest` entry-point builder.

use crate::config::TestConfig;
use crate::engine::run_test;
use crate::error::InvalidInput;
use crate::result::TestResult;
use crate::types::{Direction, ResampleMode, Sample, Statistic};

/// Builder for a simulation-based hypothesis test.
///
/// Accumulates configuration only; every constraint is validated at the
/// terminal [`run`](HypothesisTest::run) call, never in the setters.
///
/// # Example
///
/// ```
/// use nullsim::{Direction, HypothesisTest, Sample};
///
/// let sample = Sample::numeric(vec![203.0, 211.0, 196.0, 215.0, 208.0, 219.0]);
/// let result = HypothesisTest::mean(200.0)
///     .direction(Direction::Greater)
///     .replicates(1_000)
///     .seed(7)
///     .run(&sample)
///     .unwrap();
///
/// assert_eq!(result.null_distribution().len(), 1_000);
/// assert!((0.0..=1.0).contains(&result.p_value));
/// ```
#[derive(Debug, Clone)]
pub struct HypothesisTest {
    config: TestConfig,
}

impl HypothesisTest {
    /// Test whether the population mean equals `null_value`.
    pub fn mean(null_value: f64) -> Self {
        Self {
            config: TestConfig::new(Statistic::Mean, null_value),
        }
    }

    /// Test whether the population median equals `null_value`.
    pub fn median(null_value: f64) -> Self {
        Self {
            config: TestConfig::new(Statistic::Median, null_value),
        }
    }

    /// Test whether the population proportion of `success_label` equals
    /// `null_value`.
    pub fn proportion(null_value: f64, success_label: impl Into<String>) -> Self {
        let mut config = TestConfig::new(Statistic::Proportion, null_value);
        config.success_label = Some(success_label.into());
        Self { config }
    }

    /// Set the alternative-hypothesis direction.
    pub fn direction(mut self, direction: Direction) -> Self {
        self.config.direction = direction;
        self
    }

    /// Set the number of simulated resamples.
    pub fn replicates(mut self, replicates: usize) -> Self {
        self.config.replicates = replicates;
        self
    }

    /// Set the resampling mode explicitly.
    ///
    /// Each statistic accepts exactly one mode; a mismatched pairing is
    /// rejected at [`run`](HypothesisTest::run).
    pub fn resample_mode(mut self, mode: ResampleMode) -> Self {
        self.config.resample_mode = Some(mode);
        self
    }

    /// Set the RNG seed for reproducible runs.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// The accumulated configuration.
    pub fn config(&self) -> &TestConfig {
        &self.config
    }

    /// Validate the configuration against `sample` and run the test.
    pub fn run(self, sample: &Sample) -> Result<TestResult, InvalidInput> {
        run_test(sample, &self.config)
    }
}
