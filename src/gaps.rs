//! Big-gap profile of a sorted sequence.
//!
//! Each [`Gap`] is an adjacent pair whose difference exceeds the threshold,
//! i.e. a boundary between two stable groups, together with the number of
//! insertions needed to bridge it. A [`GapProfile`] is built once per solve
//! and never mutated.

use std::num::NonZeroU64;

use crate::cost::{bridge_cost, is_big_gap};

/// A candidate group boundary between `sorted[left_index]` and
/// `sorted[left_index + 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gap {
    /// Index of the left element in the sorted sequence.
    pub left_index: usize,
    /// Difference between the two neighbours.
    pub size: u64,
    /// Insertions needed to bridge this gap.
    pub cost: u64,
}

/// All big gaps of a sorted sequence, in left-to-right order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GapProfile {
    gaps: Vec<Gap>,
}

impl GapProfile {
    /// Scan adjacent pairs of `sorted` and keep the ones wider than
    /// `threshold`.
    ///
    /// `sorted` must be ascending; the difference is taken with `abs_diff`
    /// so extreme `i64` values cannot overflow.
    pub fn from_sorted(sorted: &[i64], threshold: NonZeroU64) -> Self {
        debug_assert!(sorted.windows(2).all(|w| w[0] <= w[1]));
        let gaps = sorted
            .windows(2)
            .enumerate()
            .filter_map(|(i, w)| {
                let size = w[1].abs_diff(w[0]);
                is_big_gap(size, threshold).then(|| Gap {
                    left_index: i,
                    size,
                    cost: bridge_cost(size, threshold),
                })
            })
            .collect();
        Self { gaps }
    }

    /// Number of big gaps `g`.
    #[inline]
    pub fn len(&self) -> usize {
        self.gaps.len()
    }

    /// True when the whole sequence is already one stable group.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.gaps.is_empty()
    }

    #[inline]
    pub fn gaps(&self) -> &[Gap] {
        &self.gaps
    }

    /// Per-gap costs, in profile order.
    pub fn costs(&self) -> impl Iterator<Item = u64> + '_ {
        self.gaps.iter().map(|g| g.cost)
    }

    /// Group count when nothing is bridged: every big gap is a boundary.
    #[inline]
    pub fn unbridged_groups(&self) -> usize {
        self.gaps.len() + 1
    }

    /// Total cost of bridging every gap, or `None` on overflow.
    pub fn total_cost(&self) -> Option<u64> {
        self.costs().try_fold(0u64, u64::checked_add)
    }
}
