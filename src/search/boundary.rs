//! Boundary normalizer and the crate's single search entry point.
//!
//! The locator returns the seam — the last index of the pre-rotation
//! maximum's run. The normalizer turns that into the answer callers actually
//! want: the index of the first occurrence of the minimum. It also owns the
//! fast paths that must run before the locator does: empty input, single
//! element, a sequence that was never rotated, and the degenerate all-equal
//! sequence.

use crate::result::SearchOutcome;
use crate::ring::step_forward;

use super::locator::locate;
use super::skip::{skip_run, Direction, RunSkip};
use super::SearchError;

/// Find the rotation boundary of `values`.
///
/// Returns the index of the first occurrence of the minimum value together
/// with the number of locator steps taken. The sequence must be an ascending
/// run rotated by some offset (duplicates allowed); see the crate docs.
///
/// # Errors
///
/// [`SearchError::InvalidLength`] when `values` is empty. The remaining
/// variants exist for defensive surfacing and are unreachable for valid
/// rotated input.
///
/// # Examples
///
/// ```
/// use rampfind::{find_rotation_boundary, BoundaryClass};
///
/// let outcome = find_rotation_boundary(&[2u32, 2, 2, 0, 1, 2, 2]).unwrap();
/// assert_eq!(outcome.index, 3);
///
/// let outcome = find_rotation_boundary(&[7u32; 5]).unwrap();
/// assert_eq!(outcome.index, 0);
/// assert_eq!(outcome.class, BoundaryClass::AllEqual);
/// ```
pub fn find_rotation_boundary<T: Ord>(values: &[T]) -> Result<SearchOutcome, SearchError> {
    let n = values.len();
    if n == 0 {
        return Err(SearchError::InvalidLength);
    }
    if n == 1 {
        return Ok(SearchOutcome::not_rotated());
    }

    // Not-rotated fast path: in a rotated sequence the last element never
    // exceeds the first, so a strictly smaller first element means the
    // minimum is already sitting at index 0. No locator steps spent.
    if values[0] < values[n - 1] {
        return Ok(SearchOutcome::not_rotated());
    }

    // Equal endpoints are ambiguous: either the duplicate run wraps around
    // the seam, or every element is the same value. Settle the degenerate
    // case here so the locator never has to face a seamless sequence.
    if values[0] == values[n - 1] {
        if let RunSkip::AllEqual = skip_run(values, 0, Direction::Forward) {
            return Ok(SearchOutcome::all_equal());
        }
    }

    let mut trials = 0;
    let raw = locate(values, 0, n - 1, &mut trials)?;

    // The seam may sit inside a duplicate run of the maximum; walk to the
    // run's end so the step onto the minimum lands on its first occurrence.
    // Bounded by n, though the all-equal fast path already rules a full lap
    // out.
    let mut pivot = raw;
    for _ in 0..n {
        let next = step_forward(pivot, n);
        if values[next] != values[pivot] {
            break;
        }
        pivot = next;
    }

    // Step off the pre-boundary maximum onto the minimum itself.
    pivot = step_forward(pivot, n);

    // If the minimum's run wraps past the end of the buffer, its first
    // occurrence is the front of the buffer, not the post-seam index.
    if values[pivot] == values[0] {
        pivot = 0;
    }

    Ok(SearchOutcome::rotated(pivot, trials))
}
