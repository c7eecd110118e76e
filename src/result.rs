//! Search result types.

use serde::{Deserialize, Serialize};

/// Outcome of one rotation-boundary search.
///
/// Replaces the original's pair of mutable output parameters: the index and
/// the step count travel together, and nothing is shared across searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// Index of the first occurrence of the minimum value, in `[0, n)`.
    pub index: usize,

    /// Locator steps taken, one per binary-search window evaluated. Zero for
    /// the fast paths that never enter the locator.
    pub trials: u32,

    /// How the boundary was established. Mostly of interest to tests, which
    /// need to tell the degenerate cases apart from a located seam.
    pub class: BoundaryClass,
}

/// Classification of how the reported boundary came about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoundaryClass {
    /// The first element is already the minimum; nothing was shifted.
    NotRotated,
    /// A seam was located by the binary search.
    Rotated,
    /// Every element holds the same value; the boundary is defined as
    /// index 0. Handled locally, never surfaced as an error.
    AllEqual,
}

impl SearchOutcome {
    pub(crate) fn not_rotated() -> Self {
        Self {
            index: 0,
            trials: 0,
            class: BoundaryClass::NotRotated,
        }
    }

    pub(crate) fn all_equal() -> Self {
        Self {
            index: 0,
            trials: 0,
            class: BoundaryClass::AllEqual,
        }
    }

    pub(crate) fn rotated(index: usize, trials: u32) -> Self {
        Self {
            index,
            trials,
            class: BoundaryClass::Rotated,
        }
    }
}
