//! Pivot locator: duplicate-tolerant binary search for the seam.
//!
//! The locator narrows a `[low, high]` window of plain array positions down
//! to the seam — the index `s` where `values[s] > values[s + 1]` (circularly)
//! marks the drop from the pre-rotation maximum back to the minimum. It
//! returns the *raw* seam candidate; [`super::boundary`] turns that into the
//! first occurrence of the minimum.
//!
//! The search runs as a loop over a mutable window rather than recursing,
//! so pathological duplicate-heavy inputs cannot overflow the stack.
//! Branch order is load-bearing: the O(1) discontinuity
//! checks are conclusive and must run before any duplicate-aware branching,
//! and the strict-order halving must run before the duplicate branch.
//!
//! Complexity: O(log n) when values in the window are distinct. When low,
//! mid, and high all hold the same value the window shrinks by a single
//! element per step, so long duplicate runs degrade the search toward O(n).

use super::skip::{skip_run, Direction, RunSkip};
use super::SearchError;

/// Steps beyond the linear worst case before the defensive guard trips.
const STEP_GUARD_SLACK: u32 = 64;

/// Narrow `[low, high]` to the seam index.
///
/// Preconditions (enforced by the normalizer): `values` is non-empty, the
/// window is in bounds, and the not-rotated and all-equal cases have already
/// been peeled off, so the window contains a seam.
///
/// `trials` is incremented once per locator step, terminal steps included.
///
/// # Errors
///
/// [`SearchError::WindowInverted`] if the window arrives with `low > high`,
/// and [`SearchError::DepthExceeded`] if the step budget runs out. Neither
/// is reachable through [`super::find_rotation_boundary`].
pub(crate) fn locate<T: Ord>(
    values: &[T],
    mut low: usize,
    mut high: usize,
    trials: &mut u32,
) -> Result<usize, SearchError> {
    let budget = values.len() as u32 + STEP_GUARD_SLACK;

    if low > high {
        *trials = trials.saturating_add(1);
        return Err(SearchError::WindowInverted);
    }

    loop {
        *trials = trials.saturating_add(1);
        if *trials > budget {
            return Err(SearchError::DepthExceeded);
        }

        if low == high {
            return Ok(low);
        }

        // low < high, so mid < high and mid + 1 stays inside the window.
        let mid = low + (high - low) / 2;

        // Discontinuity checks: a drop between adjacent positions is the
        // seam (a valid rotation has at most one), conclusively.
        if values[mid] > values[mid + 1] {
            return Ok(mid);
        }
        if mid > low && values[mid] < values[mid - 1] {
            return Ok(mid - 1);
        }

        match values[low].cmp(&values[mid]) {
            // Drop somewhere in [low, mid - 1]. mid > low here, because
            // low == mid makes the comparison equal.
            std::cmp::Ordering::Greater => high = mid - 1,
            // [low, mid] ascends and the mid discontinuity check came up
            // empty, so the seam sits in the upper half.
            std::cmp::Ordering::Less => low = mid + 1,
            std::cmp::Ordering::Equal => {
                if values[high] != values[mid] {
                    // low and mid share a run. The seam cannot hide inside a
                    // flat stretch, so skip forward past the run; the walk
                    // stops at or before high because values[high] differs.
                    let skipped = match skip_run(values, mid, Direction::Forward) {
                        RunSkip::Differs(idx) => idx,
                        // values[high] != values[mid] rules this out.
                        RunSkip::AllEqual => return Err(SearchError::WindowInverted),
                    };
                    if skipped <= mid || skipped > high {
                        // The skip left the window: broken ordering in the
                        // input, surfaced instead of searching on.
                        return Err(SearchError::WindowInverted);
                    }
                    if values[skipped] < values[mid] {
                        // The run ends in the drop itself.
                        return Ok(skipped - 1);
                    }
                    low = skipped;
                } else {
                    // low, mid, and high all equal: the seam can hide on
                    // either side, so nothing larger than a single element
                    // can be discarded. Peel one duplicate off the high end,
                    // keeping the low-half preference deterministic.
                    high -= 1;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run<T: Ord>(values: &[T]) -> (Result<usize, SearchError>, u32) {
        let mut trials = 0;
        let result = locate(values, 0, values.len() - 1, &mut trials);
        (result, trials)
    }

    #[test]
    fn seam_at_mid_is_one_step() {
        let values = [4u32, 5, 6, 7, 0, 1, 2];
        let (result, trials) = run(&values);
        assert_eq!(result, Ok(3));
        assert_eq!(trials, 1);
    }

    #[test]
    fn seam_left_of_mid() {
        let values = [8u32, 1, 2, 3, 4, 5, 6, 7];
        assert_eq!(run(&values).0, Ok(0));
    }

    #[test]
    fn seam_right_of_mid() {
        let values = [5u32, 6, 7, 8, 9, 1, 2];
        assert_eq!(run(&values).0, Ok(4));
    }

    #[test]
    fn duplicates_straddling_the_seam() {
        let values = [2u32, 2, 2, 0, 1, 2, 2];
        assert_eq!(run(&values).0, Ok(2));
    }

    #[test]
    fn all_equal_sentinels_shrink_one_by_one() {
        // low/mid/high are all 5 until the window tightens onto the dip.
        let values = [5u32, 5, 5, 5, 5, 1, 5, 5];
        assert_eq!(run(&values).0, Ok(4));
    }

    #[test]
    fn seam_masked_on_both_sides() {
        // Discarding the whole upper half on equal sentinels would lose the
        // seam here: the 2-run wraps around and flanks the 3.
        let values = [2u32, 2, 2, 3, 0, 2];
        assert_eq!(run(&values).0, Ok(3));
    }

    #[test]
    fn seam_in_low_half_behind_equal_sentinels() {
        let values = [2u32, 3, 1, 2, 2, 2, 2];
        assert_eq!(run(&values).0, Ok(1));
    }

    #[test]
    fn collapsed_window_returns_itself() {
        let values = [3u32, 1, 2];
        let mut trials = 0;
        assert_eq!(locate(&values, 1, 1, &mut trials), Ok(1));
        assert_eq!(trials, 1);
    }

    #[test]
    fn inverted_window_is_a_contract_violation() {
        let values = [3u32, 1, 2];
        let mut trials = 0;
        assert_eq!(
            locate(&values, 2, 1, &mut trials),
            Err(SearchError::WindowInverted)
        );
    }

    #[test]
    fn distinct_values_stay_logarithmic() {
        let n = 4096usize;
        let rotation = 1234;
        let values: Vec<u32> = (0..n).map(|i| ((i + n - rotation) % n) as u32).collect();
        let (result, trials) = run(&values);
        assert!(result.is_ok());
        // ceil(log2(4096)) == 12, plus slack for the discontinuity checks.
        assert!(trials <= 14, "took {trials} steps");
    }
}
