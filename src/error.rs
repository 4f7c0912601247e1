//! Engine error type.
//!
//! The engine has a single error kind: malformed or out-of-domain test
//! configuration, detected before any simulation begins. A configuration
//! error is always surfaced to the caller immediately; it is never retried
//! and never degraded into a p-value.

use std::fmt;

use crate::types::{ResampleMode, Statistic};

/// A test configuration that cannot produce a meaningful p-value.
///
/// Each variant names the offending parameter and the constraint it
/// violated.
#[derive(Debug, Clone, PartialEq)]
pub enum InvalidInput {
    /// The sample contains no observations.
    EmptySample,

    /// A numeric observation is NaN or infinite.
    NonFiniteObservation {
        /// Index of the offending observation (0-indexed).
        index: usize,
        /// The offending value.
        value: f64,
    },

    /// The statistic does not apply to the sample's kind.
    StatisticMismatch {
        /// The configured statistic.
        statistic: Statistic,
        /// The sample kind that was provided ("numeric" or "categorical").
        sample_kind: &'static str,
    },

    /// A proportion test was configured without a success label.
    MissingSuccessLabel,

    /// The configured success label does not occur in the sample.
    UnknownSuccessLabel {
        /// The label that was configured.
        label: String,
        /// The distinct labels actually observed.
        observed: Vec<String>,
    },

    /// The hypothesized parameter lies outside the statistic's domain.
    NullValueOutOfDomain {
        /// The configured statistic.
        statistic: Statistic,
        /// The offending null value.
        value: f64,
    },

    /// The replicate count is zero.
    ZeroReplicates,

    /// The resampling mode does not apply to the statistic.
    ModeMismatch {
        /// The configured statistic.
        statistic: Statistic,
        /// The configured resampling mode.
        mode: ResampleMode,
    },
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidInput::EmptySample => {
                write!(f, "sample must contain at least one observation")
            }
            InvalidInput::NonFiniteObservation { index, value } => {
                write!(
                    f,
                    "sample observation {} is not finite: {}",
                    index, value
                )
            }
            InvalidInput::StatisticMismatch {
                statistic,
                sample_kind,
            } => {
                write!(
                    f,
                    "statistic '{}' requires a {} sample, got {}",
                    statistic,
                    if statistic.requires_numeric() {
                        "numeric"
                    } else {
                        "categorical"
                    },
                    sample_kind
                )
            }
            InvalidInput::MissingSuccessLabel => {
                write!(
                    f,
                    "proportion tests require a success_label naming one observed category"
                )
            }
            InvalidInput::UnknownSuccessLabel { label, observed } => {
                write!(
                    f,
                    "success_label '{}' does not occur in the sample; observed labels: {:?}",
                    label, observed
                )
            }
            InvalidInput::NullValueOutOfDomain { statistic, value } => match statistic {
                Statistic::Proportion => write!(
                    f,
                    "null_value for a proportion test must lie strictly inside (0, 1), got {}",
                    value
                ),
                _ => write!(
                    f,
                    "null_value for a {} test must be finite, got {}",
                    statistic, value
                ),
            },
            InvalidInput::ZeroReplicates => {
                write!(f, "replicates must be a positive integer")
            }
            InvalidInput::ModeMismatch { statistic, mode } => {
                write!(
                    f,
                    "resample mode '{}' does not apply to statistic '{}' (expected '{}')",
                    mode,
                    statistic,
                    statistic.default_mode()
                )
            }
        }
    }
}

impl std::error::Error for InvalidInput {}
