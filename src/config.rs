//! Configuration for the trial harness.

/// Largest sequence or iteration count the harness accepts.
///
/// Inherited guard: a single search is expected to finish in bounded, small
/// time for sizes up to this; anything larger is a misconfiguration.
pub const MAX_HARNESS_SIZE: usize = 10_000_000;

/// Configuration for a [`crate::harness::TrialRunner`] batch.
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of elements per generated sequence (default: 250).
    pub size: usize,

    /// Number of generate-search-verify trials to run (default: 10,000).
    pub iterations: usize,

    /// Generate duplicate values by drawing ramp increments from
    /// `0..INCREMENT_BOUND` instead of stepping by exactly 1 (default: off).
    pub duplicates: bool,

    /// Deterministic seed for the harness RNG. `None` seeds from the OS,
    /// matching one-off benchmark runs; tests fix this for reproducibility.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            size: 250,
            iterations: 10_000,
            duplicates: false,
            seed: None,
        }
    }
}

impl Config {
    /// Check the harness guards: both counts nonzero and at most
    /// [`MAX_HARNESS_SIZE`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 || self.size > MAX_HARNESS_SIZE {
            return Err(ConfigError::SizeOutOfRange(self.size));
        }
        if self.iterations == 0 || self.iterations > MAX_HARNESS_SIZE {
            return Err(ConfigError::IterationsOutOfRange(self.iterations));
        }
        Ok(())
    }
}

/// Rejected harness configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Sequence size is zero or above [`MAX_HARNESS_SIZE`].
    SizeOutOfRange(usize),
    /// Iteration count is zero or above [`MAX_HARNESS_SIZE`].
    IterationsOutOfRange(usize),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::SizeOutOfRange(n) => {
                write!(f, "size {n} out of range (1..={MAX_HARNESS_SIZE})")
            }
            ConfigError::IterationsOutOfRange(n) => {
                write!(f, "iterations {n} out of range (1..={MAX_HARNESS_SIZE})")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
