//! `rampfind` benchmark driver.
//!
//! Generates randomly rotated ramps, searches each one for its rotation
//! boundary, verifies the answers, and prints the mean and standard
//! deviation of the per-search step counts.

use std::process::ExitCode;

use clap::Parser;

use rampfind::harness::TrialRunner;
use rampfind::output::{json, terminal};
use rampfind::Config;

/// Find the rotation point of circularly shifted sorted sequences and
/// characterize how many steps the search takes.
#[derive(Debug, Parser)]
#[command(name = "rampfind", version, about)]
struct Args {
    /// Elements per generated sequence (1..=10,000,000).
    size: usize,

    /// Number of generate-search-verify trials (1..=10,000,000).
    iterations: usize,

    /// Allow duplicate values in the generated ramps.
    #[arg(short, long)]
    duplicates: bool,

    /// Fix the RNG seed for a reproducible run.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Emit the report as JSON instead of the terminal summary.
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config = Config {
        size: args.size,
        iterations: args.iterations,
        duplicates: args.duplicates,
        seed: args.seed,
    };

    let mut runner = match TrialRunner::new(config) {
        Ok(runner) => runner,
        Err(err) => {
            eprintln!("rampfind: {err}");
            return ExitCode::FAILURE;
        }
    };

    let report = match runner.run() {
        Ok(report) => report,
        Err(err) => {
            eprintln!("rampfind: search failed: {err}");
            return ExitCode::FAILURE;
        }
    };

    if args.json {
        match json::to_json_pretty(&report) {
            Ok(text) => println!("{text}"),
            Err(err) => {
                eprintln!("rampfind: {err}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        print!("{}", terminal::format_report(&report));
    }

    if report.mismatches == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
