//! Bridging cost model shared by every solver.
//!
//! A gap of size `d` split by `m` inserted points becomes `m + 1` sub-gaps.
//! All of them fit under threshold `x` iff `(m + 1) * x >= d`, so the least
//! such `m` is `ceil(d / x) - 1`, which for `d > x >= 1` equals
//! `(d - 1) / x` in floor division.

use std::num::NonZeroU64;

use crate::error::{GroupingError, Result};

/// Returns true when a gap of `diff` separates two stable groups.
#[inline]
pub fn is_big_gap(diff: u64, threshold: NonZeroU64) -> bool {
    diff > threshold.get()
}

/// Minimum number of insertions that bring a gap of `diff` down to sub-gaps
/// of at most `threshold`. Zero when the gap is already stable.
#[inline]
pub fn bridge_cost(diff: u64, threshold: NonZeroU64) -> u64 {
    let x = threshold.get();
    if diff <= x {
        0
    } else {
        (diff - 1) / x
    }
}

/// Signed entry point for callers that have not validated their inputs.
///
/// # Errors
/// [`GroupingError::InvalidArgument`] if `threshold <= 0` or `diff < 0`.
pub fn checked_bridge_cost(diff: i64, threshold: i64) -> Result<u64> {
    let threshold = positive_threshold(threshold)?;
    let diff = u64::try_from(diff)
        .map_err(|_| GroupingError::invalid(format!("gap must be non-negative, got {diff}")))?;
    Ok(bridge_cost(diff, threshold))
}

/// Validate a signed threshold.
pub(crate) fn positive_threshold(threshold: i64) -> Result<NonZeroU64> {
    u64::try_from(threshold)
        .ok()
        .and_then(NonZeroU64::new)
        .ok_or_else(|| {
            GroupingError::invalid(format!("threshold must be positive, got {threshold}"))
        })
}
