//! Caller-side recoding of raw columns into test-ready samples.
//!
//! Category shaping happens before the engine sees the data: a proportion
//! test wants labels, but source tables often carry a numeric flag instead.
//! These helpers perform that shaping so the engine never has to.

use crate::types::Sample;

/// Recode a numeric 0/1-style flag column into a two-category sample.
///
/// Values for which `is_success` returns true become `success_label`; all
/// others become `other_label`.
///
/// # Example
///
/// ```
/// use nullsim::data::recode_flags;
///
/// let flags = [1.0, 0.0, 0.0, 1.0];
/// let sample = recode_flags(&flags, |v| v == 1.0, "died", "survived");
/// assert_eq!(sample.len(), 4);
/// ```
pub fn recode_flags<F>(
    values: &[f64],
    is_success: F,
    success_label: &str,
    other_label: &str,
) -> Sample
where
    F: Fn(f64) -> bool,
{
    Sample::Categorical(
        values
            .iter()
            .map(|&v| {
                if is_success(v) {
                    success_label.to_string()
                } else {
                    other_label.to_string()
                }
            })
            .collect(),
    )
}

/// Recode arbitrary values into labels with a caller-supplied mapping.
pub fn recode_with<T, F>(values: &[T], label: F) -> Sample
where
    F: Fn(&T) -> String,
{
    Sample::Categorical(values.iter().map(label).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recode_flags_maps_both_categories() {
        let sample = recode_flags(&[1.0, 0.0, 2.0], |v| v >= 1.0, "yes", "no");
        assert_eq!(sample, Sample::categorical(["yes", "no", "yes"]));
    }

    #[test]
    fn recode_with_custom_mapping() {
        let codes = [0u8, 1, 1, 0];
        let sample = recode_with(&codes, |&c| {
            if c == 1 { "died" } else { "survived" }.to_string()
        });
        assert_eq!(
            sample,
            Sample::categorical(["survived", "died", "died", "survived"])
        );
    }
}
