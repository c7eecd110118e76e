//! Randomized trial harness.
//!
//! The harness is the core's external collaborator: it builds rotated
//! sequences, hands them to [`find_rotation_boundary`], verifies every
//! reported index against a linear scan, and aggregates the step counts.
//! The core never sees the RNG and the harness never reaches into the
//! search's internals.

mod generator;
mod stats;

pub use generator::{generate_ramp, generate_ramp_into, INCREMENT_BOUND};
pub use stats::{BenchReport, TrialStats};

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::config::{Config, ConfigError};
use crate::search::{find_rotation_boundary, SearchError};

/// Configured generate-search-verify loop.
///
/// ```
/// use rampfind::{Config, harness::TrialRunner};
///
/// let config = Config { size: 64, iterations: 100, seed: Some(42), ..Config::default() };
/// let report = TrialRunner::new(config).unwrap().run().unwrap();
/// assert_eq!(report.mismatches, 0);
/// assert!(report.mean_trials <= 7.0); // ceil(log2(64)) + fast paths
/// ```
#[derive(Debug)]
pub struct TrialRunner {
    config: Config,
    rng: Xoshiro256PlusPlus,
}

impl TrialRunner {
    /// Validate `config` and set up the RNG (seeded when the config fixes a
    /// seed, from the OS otherwise).
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
            None => Xoshiro256PlusPlus::from_os_rng(),
        };
        Ok(Self { config, rng })
    }

    /// Run the configured batch and summarize it.
    ///
    /// # Errors
    ///
    /// Propagates [`SearchError`] from the core. The harness always hands
    /// the core non-empty sequences, so an error here means a core bug, not
    /// a usage problem.
    pub fn run(&mut self) -> Result<BenchReport, SearchError> {
        let mut stats = TrialStats::new();
        let mut buf = Vec::with_capacity(self.config.size);
        let mut mismatches = 0usize;

        for _ in 0..self.config.iterations {
            let rotation = self.rng.random_range(0..self.config.size);
            generate_ramp_into(
                &mut buf,
                self.config.size,
                rotation,
                self.config.duplicates,
                &mut self.rng,
            );

            let outcome = find_rotation_boundary(&buf)?;
            if outcome.index != first_min_index(&buf) {
                mismatches += 1;
            }
            stats.push(outcome.trials);
        }

        Ok(BenchReport {
            size: self.config.size,
            iterations: self.config.iterations,
            duplicates: self.config.duplicates,
            seed: self.config.seed,
            mean_trials: stats.mean(),
            sigma_trials: stats.std_dev(),
            min_trials: stats.min(),
            max_trials: stats.max(),
            mismatches,
        })
    }
}

/// Linear-scan ground truth: index of the first occurrence of the minimum.
fn first_min_index(values: &[u32]) -> usize {
    let mut best = 0;
    for (i, v) in values.iter().enumerate().skip(1) {
        if *v < values[best] {
            best = i;
        }
    }
    best
}
