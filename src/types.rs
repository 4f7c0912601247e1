//! Vocabulary types for the resampling engine.

/// A sample of observations, loaded once and never mutated by the engine.
///
/// Numeric samples feed mean and median tests; categorical samples feed
/// proportion tests, where one observed category is designated the
/// "success" label in the test configuration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sample {
    /// Ordered numeric observations.
    Numeric(Vec<f64>),
    /// Ordered categorical labels.
    Categorical(Vec<String>),
}

impl Sample {
    /// Create a numeric sample from anything convertible to `Vec<f64>`.
    pub fn numeric(values: impl Into<Vec<f64>>) -> Self {
        Sample::Numeric(values.into())
    }

    /// Create a categorical sample from an iterator of labels.
    pub fn categorical<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Sample::Categorical(labels.into_iter().map(Into::into).collect())
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        match self {
            Sample::Numeric(v) => v.len(),
            Sample::Categorical(v) => v.len(),
        }
    }

    /// Whether the sample contains no observations.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Short kind name used in error messages.
    pub(crate) fn kind_name(&self) -> &'static str {
        match self {
            Sample::Numeric(_) => "numeric",
            Sample::Categorical(_) => "categorical",
        }
    }
}

/// The statistic computed on each resample and on the observed sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Statistic {
    /// Arithmetic mean of a numeric sample.
    Mean,
    /// Median (Type 2 quantile at p = 0.5) of a numeric sample.
    Median,
    /// Fraction of observations matching the success label.
    Proportion,
}

impl Statistic {
    /// The resampling mode this statistic uses when none is configured
    /// explicitly.
    pub fn default_mode(self) -> ResampleMode {
        match self {
            Statistic::Mean | Statistic::Median => ResampleMode::BootstrapRecentered,
            Statistic::Proportion => ResampleMode::NullModelDraw,
        }
    }

    /// Whether this statistic operates on numeric samples.
    pub fn requires_numeric(self) -> bool {
        matches!(self, Statistic::Mean | Statistic::Median)
    }

    pub(crate) fn name(self) -> &'static str {
        match self {
            Statistic::Mean => "mean",
            Statistic::Median => "median",
            Statistic::Proportion => "proportion",
        }
    }
}

impl std::fmt::Display for Statistic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Alternative-hypothesis direction governing the p-value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Fraction of null values at or below the observed statistic.
    Less,
    /// Fraction of null values at or above the observed statistic.
    Greater,
    /// Twice the smaller tail fraction, capped at 1.
    #[default]
    TwoSided,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Direction::Less => "less",
            Direction::Greater => "greater",
            Direction::TwoSided => "two-sided",
        };
        f.write_str(s)
    }
}

/// How resamples are generated under the null hypothesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResampleMode {
    /// Shift the observed sample so its statistic equals the null value,
    /// then draw with-replacement resamples of size n from the shifted
    /// sample. Used for numeric point-null tests (mean, median).
    BootstrapRecentered,
    /// Draw n independent Bernoulli outcomes with success probability equal
    /// to the null value. Used for proportion tests, where it enforces the
    /// null directly instead of bootstrapping the raw categorical sample.
    NullModelDraw,
}

impl std::fmt::Display for ResampleMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ResampleMode::BootstrapRecentered => "recentered bootstrap",
            ResampleMode::NullModelDraw => "null-model draw",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_constructors_and_len() {
        let numeric = Sample::numeric(vec![1.0, 2.0, 3.0]);
        assert_eq!(numeric.len(), 3);
        assert!(!numeric.is_empty());

        let categorical = Sample::categorical(["died", "survived", "survived"]);
        assert_eq!(categorical.len(), 3);
        assert_eq!(categorical.kind_name(), "categorical");

        assert!(Sample::numeric(Vec::new()).is_empty());
    }

    #[test]
    fn default_modes_match_statistic() {
        assert_eq!(
            Statistic::Mean.default_mode(),
            ResampleMode::BootstrapRecentered
        );
        assert_eq!(
            Statistic::Median.default_mode(),
            ResampleMode::BootstrapRecentered
        );
        assert_eq!(
            Statistic::Proportion.default_mode(),
            ResampleMode::NullModelDraw
        );
    }

    #[test]
    fn display_names() {
        assert_eq!(Statistic::Mean.to_string(), "mean");
        assert_eq!(Direction::TwoSided.to_string(), "two-sided");
        assert_eq!(ResampleMode::NullModelDraw.to_string(), "null-model draw");
    }
}
