//! Statistical kernels for the resampling engine.
//!
//! This module provides the numerical building blocks the engine composes:
//! - Statistic evaluation (mean, proportion-of-success)
//! - Type 2 quantiles and the median built on them
//! - Null-constrained resampling with deterministic, per-replicate RNG streams
//! - Tail fractions and p-value computation

mod describe;
mod pvalue;
mod quantile;
mod resample;

pub use describe::{mean, success_fraction};
pub use pvalue::{p_value, tail_fractions};
pub use quantile::{compute_quantile, median};
pub use resample::{
    bootstrap_resample_into, counter_rng_seed, null_model_fraction, recenter,
};
