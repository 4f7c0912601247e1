//! Test configuration and input validation.
//!
//! All validation happens in one place, at the terminal call: a
//! [`TestConfig`] is inert data until [`crate::run_test`] asks it to
//! [`prepare`](TestConfig::prepare) a sample, at which point every
//! constraint is checked before any simulation begins.

use crate::error::InvalidInput;
use crate::types::{Direction, ResampleMode, Sample, Statistic};

/// Default replicate count. Large enough that the Monte Carlo standard
/// error of a p-value near 0.05 is about 0.002.
pub const DEFAULT_REPLICATES: usize = 10_000;

/// Default RNG seed when the caller does not thread one through.
pub const DEFAULT_SEED: u64 = 42;

/// Full configuration of one hypothesis test.
///
/// The seed is an explicit field, never ambient process state, so runs are
/// reproducible and composable.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TestConfig {
    /// Statistic computed on each resample and on the observed sample.
    pub statistic: Statistic,

    /// Hypothesized population parameter.
    pub null_value: f64,

    /// Success category for proportion tests. Ignored by numeric tests.
    pub success_label: Option<String>,

    /// Alternative-hypothesis direction. Default: two-sided.
    pub direction: Direction,

    /// Number of simulated resamples. Default: 10,000. Larger values reduce
    /// the Monte Carlo error of the p-value (se ≈ sqrt(p(1-p)/replicates))
    /// at the cost of computation time.
    pub replicates: usize,

    /// Explicit resampling mode. `None` selects the statistic's default;
    /// configuring the wrong pairing is rejected at validation.
    pub resample_mode: Option<ResampleMode>,

    /// Seed for the deterministic per-replicate RNG streams. Default: 42.
    pub seed: u64,
}

impl TestConfig {
    /// Create a configuration with defaults for everything but the
    /// statistic and null value.
    pub fn new(statistic: Statistic, null_value: f64) -> Self {
        Self {
            statistic,
            null_value,
            success_label: None,
            direction: Direction::TwoSided,
            replicates: DEFAULT_REPLICATES,
            resample_mode: None,
            seed: DEFAULT_SEED,
        }
    }

    /// The resampling mode this configuration will use.
    pub fn resolved_mode(&self) -> ResampleMode {
        self.resample_mode
            .unwrap_or_else(|| self.statistic.default_mode())
    }

    /// Validate this configuration against a sample and prepare the
    /// engine's working data.
    ///
    /// Checks, in order: replicate count, sample non-emptiness, statistic /
    /// sample-kind compatibility, observation finiteness, null-value
    /// domain, success label, and resampling-mode pairing. The first
    /// violated constraint is returned; nothing is simulated on failure.
    pub(crate) fn prepare<'a>(
        &self,
        sample: &'a Sample,
    ) -> Result<TestPlan<'a>, InvalidInput> {
        if self.replicates == 0 {
            return Err(InvalidInput::ZeroReplicates);
        }
        if sample.is_empty() {
            return Err(InvalidInput::EmptySample);
        }
        if let Some(mode) = self.resample_mode {
            if mode != self.statistic.default_mode() {
                return Err(InvalidInput::ModeMismatch {
                    statistic: self.statistic,
                    mode,
                });
            }
        }

        match (sample, self.statistic) {
            (Sample::Numeric(values), Statistic::Mean) => {
                self.check_numeric(values)?;
                Ok(TestPlan::Recentered {
                    values,
                    statistic: NumericStatistic::Mean,
                })
            }
            (Sample::Numeric(values), Statistic::Median) => {
                self.check_numeric(values)?;
                Ok(TestPlan::Recentered {
                    values,
                    statistic: NumericStatistic::Median,
                })
            }
            (Sample::Categorical(labels), Statistic::Proportion) => {
                let flags = self.check_proportion(labels)?;
                Ok(TestPlan::NullModel { flags })
            }
            (sample, statistic) => Err(InvalidInput::StatisticMismatch {
                statistic,
                sample_kind: sample.kind_name(),
            }),
        }
    }

    fn check_numeric(&self, values: &[f64]) -> Result<(), InvalidInput> {
        for (index, &value) in values.iter().enumerate() {
            if !value.is_finite() {
                return Err(InvalidInput::NonFiniteObservation { index, value });
            }
        }
        if !self.null_value.is_finite() {
            return Err(InvalidInput::NullValueOutOfDomain {
                statistic: self.statistic,
                value: self.null_value,
            });
        }
        Ok(())
    }

    fn check_proportion(&self, labels: &[String]) -> Result<Vec<bool>, InvalidInput> {
        let success = self
            .success_label
            .as_deref()
            .ok_or(InvalidInput::MissingSuccessLabel)?;

        // 0 and 1 degenerate the Bernoulli null model to a point mass.
        if !(self.null_value.is_finite() && self.null_value > 0.0 && self.null_value < 1.0) {
            return Err(InvalidInput::NullValueOutOfDomain {
                statistic: self.statistic,
                value: self.null_value,
            });
        }

        let flags: Vec<bool> = labels.iter().map(|l| l == success).collect();
        if !flags.iter().any(|&b| b) {
            let mut observed: Vec<String> = labels.to_vec();
            observed.sort();
            observed.dedup();
            return Err(InvalidInput::UnknownSuccessLabel {
                label: success.to_string(),
                observed,
            });
        }
        Ok(flags)
    }
}

/// Validated working data for one test run.
#[derive(Debug)]
pub(crate) enum TestPlan<'a> {
    /// Numeric point-null test: recenter, then bootstrap.
    Recentered {
        /// The raw observations (unshifted).
        values: &'a [f64],
        /// Which numeric statistic to evaluate.
        statistic: NumericStatistic,
    },
    /// Proportion test: Bernoulli draws from the null model.
    NullModel {
        /// Success indicators recoded from the categorical sample.
        flags: Vec<bool>,
    },
}

/// The two statistics that run through the recentered-bootstrap path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NumericStatistic {
    Mean,
    Median,
}
