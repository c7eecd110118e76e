//! # rampfind
//!
//! Locate the rotation point ("ramp start") of a sequence that was sorted in
//! ascending order and then circularly shifted by an unknown offset.
//!
//! The search is a duplicate-tolerant binary search: O(log n) on sequences
//! with distinct values, degrading toward O(n) when long duplicate runs mask
//! the boundary. The reported index is always the *first* occurrence of the
//! minimum value, and every search also reports how many locator steps it
//! took, so callers can characterize the complexity empirically.
//!
//! ## Quick start
//!
//! ```
//! use rampfind::find_rotation_boundary;
//!
//! let values = [4u32, 5, 6, 7, 0, 1, 2];
//! let outcome = find_rotation_boundary(&values).unwrap();
//! assert_eq!(outcome.index, 4);
//! ```
//!
//! ## Benchmark harness
//!
//! The crate ships the randomized trial harness the algorithm was originally
//! characterized with: [`harness::TrialRunner`] generates rotated ramps with
//! an injected RNG, verifies every reported index, and accumulates the
//! mean/standard deviation of the per-search step counts.
//!
//! ```
//! use rampfind::{Config, harness::TrialRunner};
//!
//! let config = Config { size: 128, iterations: 50, seed: Some(7), ..Config::default() };
//! let report = TrialRunner::new(config).unwrap().run().unwrap();
//! assert_eq!(report.mismatches, 0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod config;
mod result;
pub mod ring;
pub mod search;

// Harness and reporting
pub mod harness;
pub mod output;

// Re-exports for the public API
pub use config::{Config, ConfigError, MAX_HARNESS_SIZE};
pub use result::{BoundaryClass, SearchOutcome};
pub use search::{find_rotation_boundary, SearchError};
