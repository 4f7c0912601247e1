//! # nullsim
//!
//! Simulation-based null distributions and p-values for one-sample
//! hypothesis tests on means, medians, and proportions.
//!
//! Given a sample, a hypothesized parameter value, and a direction, the
//! engine simulates the world in which the null hypothesis is true —
//! recentered bootstrap resampling for numeric point nulls, Bernoulli
//! null-model draws for proportions — collects the statistic across
//! replicates into an empirical null distribution, and reports how extreme
//! the observed statistic is against it.
//!
//! Runs are pure functions of their inputs and seed: the same sample,
//! configuration, and seed produce a bit-identical null distribution and
//! p-value, sequentially or in parallel (`parallel` feature).
//!
//! ## Quick Start
//!
//! ```
//! use nullsim::{Direction, HypothesisTest, Sample};
//!
//! // Is the population mean 200?
//! let sample = Sample::numeric(vec![
//!     206.0, 211.0, 198.0, 215.0, 209.0, 204.0, 219.0, 202.0, 213.0, 208.0,
//! ]);
//!
//! let result = HypothesisTest::mean(200.0)
//!     .direction(Direction::TwoSided)
//!     .replicates(5_000)
//!     .seed(42)
//!     .run(&sample)
//!     .unwrap();
//!
//! println!("observed mean {:.1}, p = {:.4}", result.observed, result.p_value);
//! assert_eq!(result.null_distribution().len(), 5_000);
//! ```
//!
//! Proportion tests work on categorical samples with a designated success
//! label; the null model draws Bernoulli outcomes directly rather than
//! bootstrapping the observed labels:
//!
//! ```
//! use nullsim::{Direction, HypothesisTest, Sample};
//!
//! let outcomes = Sample::categorical(
//!     std::iter::repeat("died").take(3)
//!         .chain(std::iter::repeat("survived").take(59)),
//! );
//!
//! let result = HypothesisTest::proportion(0.10, "died")
//!     .direction(Direction::Less)
//!     .replicates(1_000)
//!     .run(&outcomes)
//!     .unwrap();
//!
//! assert!((0.0..=1.0).contains(&result.p_value));
//! ```
//!
//! Configuration errors (empty sample, out-of-domain null value, wrong
//! statistic for the sample kind) surface as [`InvalidInput`] before any
//! simulation runs; a misconfigured test never yields a misleading p-value.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod builder;
mod config;
mod engine;
mod error;
mod result;
mod types;

// Functional modules
pub mod data;
pub mod output;
pub mod statistics;

// Re-exports for the public API
pub use builder::HypothesisTest;
pub use config::{TestConfig, DEFAULT_REPLICATES, DEFAULT_SEED};
pub use engine::run_test;
pub use error::InvalidInput;
pub use result::TestResult;
pub use types::{Direction, ResampleMode, Sample, Statistic};
