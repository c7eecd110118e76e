//! JSON serialization for harness reports.

use crate::harness::BenchReport;

/// Serialize a report to a compact JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for
/// `BenchReport`).
pub fn to_json(report: &BenchReport) -> Result<String, serde_json::Error> {
    serde_json::to_string(report)
}

/// Serialize a report to a pretty-printed JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for
/// `BenchReport`).
pub fn to_json_pretty(report: &BenchReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_report() -> BenchReport {
        BenchReport {
            size: 250,
            iterations: 10_000,
            duplicates: true,
            seed: Some(428),
            mean_trials: 6.91,
            sigma_trials: 1.04,
            min_trials: 0,
            max_trials: 12,
            mismatches: 0,
        }
    }

    #[test]
    fn round_trips_through_json() {
        let report = make_report();
        let json = to_json(&report).unwrap();
        let back: BenchReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.size, report.size);
        assert_eq!(back.seed, report.seed);
        assert_eq!(back.mean_trials, report.mean_trials);
        assert_eq!(back.mismatches, report.mismatches);
    }

    #[test]
    fn pretty_output_contains_fields() {
        let json = to_json_pretty(&make_report()).unwrap();
        assert!(json.contains("\"mean_trials\""));
        assert!(json.contains("\"sigma_trials\""));
        assert!(json.contains("\"duplicates\": true"));
    }
}
