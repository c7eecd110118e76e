//! Terminal output formatting with colors.

use colored::Colorize;

use crate::harness::BenchReport;

/// Format a harness report for human-readable terminal output.
pub fn format_report(report: &BenchReport) -> String {
    let mut output = String::new();
    let sep = "\u{2500}".repeat(48);

    output.push_str("rampfind\n");
    output.push_str(&sep);
    output.push('\n');

    output.push_str(&format!(
        "  Sequence size:  {}  ({})\n",
        report.size,
        if report.duplicates {
            "duplicates allowed"
        } else {
            "distinct values"
        }
    ));
    output.push_str(&format!("  Trials:         {}\n", report.iterations));
    if let Some(seed) = report.seed {
        output.push_str(&format!("  Seed:           {seed}\n"));
    }
    output.push('\n');

    output.push_str(&format!(
        "  TRIES MU:       {}\n",
        format!("{:.4}", report.mean_trials).bold()
    ));
    output.push_str(&format!(
        "  TRIES SIGMA:    {}\n",
        format!("{:.4}", report.sigma_trials).bold()
    ));
    output.push_str(&format!(
        "  TRIES RANGE:    {}..{}\n",
        report.min_trials, report.max_trials
    ));
    output.push('\n');

    if report.mismatches == 0 {
        output.push_str(&format!(
            "  {} all {} reported indexes verified\n",
            "\u{2713}".green().bold(),
            report.iterations
        ));
    } else {
        output.push_str(&format!(
            "  {} {} of {} searches reported a wrong index\n",
            "\u{2717}".red().bold(),
            report.mismatches,
            report.iterations
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_report(mismatches: usize) -> BenchReport {
        BenchReport {
            size: 128,
            iterations: 1_000,
            duplicates: false,
            seed: None,
            mean_trials: 5.5,
            sigma_trials: 0.9,
            min_trials: 0,
            max_trials: 8,
            mismatches,
        }
    }

    #[test]
    fn clean_report_shows_mu_and_sigma() {
        let text = format_report(&make_report(0));
        assert!(text.contains("TRIES MU"));
        assert!(text.contains("TRIES SIGMA"));
        assert!(text.contains("5.5000"));
        assert!(text.contains("verified"));
    }

    #[test]
    fn mismatches_are_called_out() {
        let text = format_report(&make_report(3));
        assert!(text.contains("3 of 1000"));
    }

    #[test]
    fn seed_is_printed_when_fixed() {
        let mut report = make_report(0);
        report.seed = Some(7);
        let text = format_report(&report);
        assert!(text.contains("Seed"));
    }
}
