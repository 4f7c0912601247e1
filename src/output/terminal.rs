//! Terminal output formatting with colors and box drawing.

use colored::Colorize;

use crate::result::TestResult;

const BOX_WIDTH: usize = 58;

/// Format a [`TestResult`] for human-readable terminal output.
///
/// The p-value line is colored by conventional significance thresholds:
/// red below 0.01, yellow below 0.05, green otherwise.
pub fn format_result(result: &TestResult) -> String {
    let mut output = String::new();

    let header = format!(
        "{} test of {} = {} ({})",
        result.statistic, result.statistic, result.null_value, result.direction
    );

    output.push_str(&box_top());
    output.push_str(&box_line(&header.bold().to_string(), header.len()));
    output.push_str(&box_separator());

    let observed = format!("Observed {}: {:.4}", result.statistic, result.observed);
    output.push_str(&box_line(&observed, observed.len()));

    let p_str = format!("P-value: {:.4}", result.p_value);
    let p_colored = if result.p_value < 0.01 {
        p_str.red().bold()
    } else if result.p_value < 0.05 {
        p_str.yellow().bold()
    } else {
        p_str.green()
    };
    output.push_str(&box_line(&p_colored.to_string(), p_str.len()));

    let se = format!("Monte Carlo SE: {:.5}", result.monte_carlo_se());
    output.push_str(&box_line(&se, se.len()));

    let (lo, hi) = result.null_range();
    let null_str = format!(
        "Null distribution: {} replicates in [{:.4}, {:.4}]",
        result.replicates(),
        lo,
        hi
    );
    output.push_str(&box_line(&null_str, null_str.len()));

    let mode = format!("Resampling: {} (seed {})", result.resample_mode, result.seed);
    output.push_str(&box_line(&mode, mode.len()));

    output.push_str(&box_bottom());
    output
}

fn box_top() -> String {
    format!("\u{250c}{}\u{2510}\n", "\u{2500}".repeat(BOX_WIDTH))
}

fn box_bottom() -> String {
    format!("\u{2514}{}\u{2518}\n", "\u{2500}".repeat(BOX_WIDTH))
}

fn box_separator() -> String {
    format!("\u{251c}{}\u{2524}\n", "\u{2500}".repeat(BOX_WIDTH))
}

/// One padded box line. `visible_len` is the width of the content without
/// ANSI escapes, which `String::len` would overcount.
fn box_line(content: &str, visible_len: usize) -> String {
    let padding = BOX_WIDTH.saturating_sub(visible_len + 2);
    format!("\u{2502} {}{} \u{2502}\n", content, " ".repeat(padding))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Direction, ResampleMode, Statistic};

    fn sample_result() -> TestResult {
        TestResult {
            null_distribution: vec![198.0, 199.5, 200.0, 200.5, 202.0],
            observed: 209.0,
            p_value: 0.0012,
            statistic: Statistic::Mean,
            direction: Direction::TwoSided,
            null_value: 200.0,
            resample_mode: ResampleMode::BootstrapRecentered,
            seed: 42,
        }
    }

    #[test]
    fn summary_mentions_key_quantities() {
        colored::control::set_override(false);
        let text = format_result(&sample_result());
        assert!(text.contains("P-value: 0.0012"));
        assert!(text.contains("209.0000"));
        assert!(text.contains("5 replicates"));
        assert!(text.contains("recentered bootstrap"));
        colored::control::unset_override();
    }

    #[test]
    fn summary_lines_share_box_borders() {
        colored::control::set_override(false);
        let text = format_result(&sample_result());
        for line in text.lines() {
            assert!(
                line.starts_with('\u{250c}')
                    || line.starts_with('\u{2502}')
                    || line.starts_with('\u{251c}')
                    || line.starts_with('\u{2514}')
            );
        }
        colored::control::unset_override();
    }
}
