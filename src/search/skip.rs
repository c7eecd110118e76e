//! Duplicate-run skipper.
//!
//! Given an index sitting inside a run of equal values, walk in one direction
//! until the value changes. The walk wraps circularly and is bounded by one
//! full traversal: a sequence made of a single value has no differing index,
//! and that case is reported as [`RunSkip::AllEqual`] rather than looping.
//! The loop guard compares the cursor against the starting index.

use crate::ring::{step_backward, step_forward};

/// Walk direction for [`skip_run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Increasing indices, wrapping from `n - 1` to `0`.
    Forward,
    /// Decreasing indices, wrapping from `0` to `n - 1`.
    Backward,
}

/// Outcome of a duplicate-run skip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunSkip {
    /// First index in the requested direction whose value differs from the
    /// value at the starting index.
    Differs(usize),
    /// The walk came back around to the starting index without ever seeing a
    /// different value: the whole sequence is one run. Callers must treat
    /// the boundary as index 0 in this case.
    AllEqual,
}

/// Skip past the run of equal values containing `start`.
///
/// # Panics
///
/// Debug builds assert `start` is in bounds and the slice is non-empty;
/// callers inside this crate only reach the skipper through the normalizer,
/// which has already rejected empty input.
pub fn skip_run<T: Ord>(values: &[T], start: usize, direction: Direction) -> RunSkip {
    let n = values.len();
    debug_assert!(start < n);

    let mut cursor = start;
    loop {
        cursor = match direction {
            Direction::Forward => step_forward(cursor, n),
            Direction::Backward => step_backward(cursor, n),
        };
        // Full lap without a differing value: degenerate all-equal sequence.
        if cursor == start {
            return RunSkip::AllEqual;
        }
        if values[cursor] != values[start] {
            return RunSkip::Differs(cursor);
        }
    }
}
