//! Trial-count statistics.
//!
//! Accumulates the per-search step counts across a batch of trials and
//! reports their mean and population standard deviation — the mu/sigma the
//! benchmark prints. Uses Welford's online update so a 10M-trial run neither
//! stores every sample nor loses precision to naive sum-of-squares.

use serde::{Deserialize, Serialize};

/// Online accumulator for trial counts.
#[derive(Debug, Clone)]
pub struct TrialStats {
    count: u64,
    mean: f64,
    m2: f64,
    min: u32,
    max: u32,
}

impl Default for TrialStats {
    fn default() -> Self {
        Self::new()
    }
}

impl TrialStats {
    /// Empty accumulator.
    pub fn new() -> Self {
        Self {
            count: 0,
            mean: 0.0,
            m2: 0.0,
            min: u32::MAX,
            max: 0,
        }
    }

    /// Record one trial's step count.
    pub fn push(&mut self, trials: u32) {
        self.count += 1;
        let x = f64::from(trials);
        let delta = x - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (x - self.mean);
        self.min = self.min.min(trials);
        self.max = self.max.max(trials);
    }

    /// Number of samples recorded.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Mean step count. Zero when no samples were recorded.
    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.mean
        }
    }

    /// Population standard deviation (divides by N, matching the original
    /// benchmark's sigma). Zero when no samples were recorded.
    pub fn std_dev(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            (self.m2 / self.count as f64).sqrt()
        }
    }

    /// Smallest recorded step count, or 0 when empty.
    pub fn min(&self) -> u32 {
        if self.count == 0 {
            0
        } else {
            self.min
        }
    }

    /// Largest recorded step count.
    pub fn max(&self) -> u32 {
        self.max
    }
}

/// Summary of one harness batch, ready for terminal or JSON output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchReport {
    /// Elements per generated sequence.
    pub size: usize,
    /// Trials run.
    pub iterations: usize,
    /// Whether ramps were generated with duplicate values.
    pub duplicates: bool,
    /// Seed the RNG was started from, when fixed.
    pub seed: Option<u64>,
    /// Mean locator steps per search (mu).
    pub mean_trials: f64,
    /// Population standard deviation of locator steps (sigma).
    pub sigma_trials: f64,
    /// Fewest locator steps seen in one search.
    pub min_trials: u32,
    /// Most locator steps seen in one search.
    pub max_trials: u32,
    /// Searches whose reported index did not hold the first minimum. Always
    /// zero unless the locator has a bug; reported rather than hidden.
    pub mismatches: usize,
}
