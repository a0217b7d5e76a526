//! A validated grouping instance: sorted positions, budget and threshold.

use std::num::NonZeroU64;

use crate::cost::positive_threshold;
use crate::error::{GroupingError, Result};
use crate::gaps::GapProfile;

/// One solve's worth of input.
///
/// Construction sorts the positions and checks the scalar arguments, so every
/// solver can rely on ascending order, a positive threshold and a
/// non-negative budget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    positions: Vec<i64>,
    budget: u64,
    threshold: NonZeroU64,
}

impl Instance {
    /// Validate and sort.
    ///
    /// # Errors
    /// [`GroupingError::InvalidArgument`] if `threshold <= 0` or `budget < 0`.
    pub fn new(mut positions: Vec<i64>, budget: i64, threshold: i64) -> Result<Self> {
        let threshold = positive_threshold(threshold)?;
        let budget = u64::try_from(budget).map_err(|_| {
            GroupingError::invalid(format!("budget must be non-negative, got {budget}"))
        })?;
        positions.sort_unstable();
        Ok(Self {
            positions,
            budget,
            threshold,
        })
    }

    /// Sorted positions.
    pub fn positions(&self) -> &[i64] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn budget(&self) -> u64 {
        self.budget
    }

    pub fn threshold(&self) -> NonZeroU64 {
        self.threshold
    }

    /// Big gaps of the sorted positions under this instance's threshold.
    pub fn gap_profile(&self) -> GapProfile {
        GapProfile::from_sorted(&self.positions, self.threshold)
    }
}
