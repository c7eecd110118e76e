//! Circular index arithmetic.
//!
//! Every other component treats the sequence as a ring: logical offsets may
//! run past either end of the buffer and must land back inside `[0, n)`.
//! The mapping uses true Euclidean modulo, so negative offsets behave the
//! same as positive ones (`-1` maps to `n - 1`, not to a truncated remainder).

use crate::search::SearchError;

/// Map a logical offset onto a physical index in `[0, len)`.
///
/// # Errors
///
/// Returns [`SearchError::InvalidLength`] when `len` is zero; there is no
/// valid index into an empty ring.
///
/// # Examples
///
/// ```
/// use rampfind::ring::wrap;
///
/// assert_eq!(wrap(7, 5).unwrap(), 2);
/// assert_eq!(wrap(-1, 5).unwrap(), 4);
/// ```
pub fn wrap(offset: i64, len: usize) -> Result<usize, SearchError> {
    if len == 0 {
        return Err(SearchError::InvalidLength);
    }
    Ok(offset.rem_euclid(len as i64) as usize)
}

/// Step an in-bounds index forward by one, wrapping at `len`.
///
/// Hot-path helper for the skipper and normalizer, which only ever move by
/// single positions from an already-valid index. Debug builds assert the
/// preconditions instead of paying for a checked division.
#[inline]
pub(crate) fn step_forward(index: usize, len: usize) -> usize {
    debug_assert!(len > 0 && index < len);
    if index + 1 == len {
        0
    } else {
        index + 1
    }
}

/// Step an in-bounds index backward by one, wrapping at zero.
#[inline]
pub(crate) fn step_backward(index: usize, len: usize) -> usize {
    debug_assert!(len > 0 && index < len);
    if index == 0 {
        len - 1
    } else {
        index - 1
    }
}
