//! The pivot search: duplicate-run skipper, pivot locator, and boundary
//! normalizer.
//!
//! [`find_rotation_boundary`] is the only entry point the harness (or any
//! other caller) needs; the submodules are exposed for targeted testing and
//! for callers that want to reuse the pieces.

pub mod boundary;
pub mod locator;
pub mod skip;

pub use boundary::find_rotation_boundary;
pub use skip::{Direction, RunSkip};

/// Error type for a single search invocation.
///
/// Failures are typed variants, never an in-band index value: an all-ones
/// "not found" sentinel conflates a valid large index with an error code,
/// and this API refuses to carry that ambiguity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// The sequence is empty; there is no index to report.
    InvalidLength,
    /// The search window arrived with `low > high`. The locator shrinks its
    /// window on every step, so this can only come from a caller handing in
    /// an inverted window.
    WindowInverted,
    /// The locator exceeded its defensive step budget. Unreachable for valid
    /// rotated input; turns a residual termination bug into a detectable
    /// failure instead of a hang.
    DepthExceeded,
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchError::InvalidLength => write!(f, "sequence length must be nonzero"),
            SearchError::WindowInverted => {
                write!(f, "search window inverted (low > high): caller contract violation")
            }
            SearchError::DepthExceeded => {
                write!(f, "locator exceeded its step budget without converging")
            }
        }
    }
}

impl std::error::Error for SearchError {}
