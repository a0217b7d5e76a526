//! Exhaustive reference solver.
//!
//! For `g` big gaps every subset of "gaps that stay as boundaries" is a
//! candidate; its complement is bridged and must fit in the budget. A subset
//! keeping `s` gaps yields `s + 1` groups. The all-kept subset costs nothing,
//! so the search always has a feasible answer of at most `g + 1`.
//!
//! Subsets are visited as `u64` bitmasks (bit `i` set = gap `i` kept), which
//! caps `g` at [`MAX_GAP_CEILING`]. In practice the `2^g` running time makes
//! anything beyond [`DEFAULT_GAP_CEILING`] unreasonable, so that is the
//! default limit.

use crate::error::{GroupingError, Result};
use crate::instance::Instance;
use crate::traits::{GroupSolver, Grouping};

/// Default number of big gaps the exhaustive solver accepts.
pub const DEFAULT_GAP_CEILING: usize = 24;

/// Largest ceiling a `u64` subset mask can represent.
pub const MAX_GAP_CEILING: usize = 63;

/// Ground-truth solver enumerating all `2^g` boundary subsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExhaustiveSolver {
    gap_ceiling: usize,
}

impl Default for ExhaustiveSolver {
    fn default() -> Self {
        Self {
            gap_ceiling: DEFAULT_GAP_CEILING,
        }
    }
}

impl ExhaustiveSolver {
    /// Solver with an explicit ceiling on the number of big gaps, clamped to
    /// [`MAX_GAP_CEILING`].
    pub fn with_gap_ceiling(gap_ceiling: usize) -> Self {
        Self {
            gap_ceiling: gap_ceiling.min(MAX_GAP_CEILING),
        }
    }

    pub fn gap_ceiling(&self) -> usize {
        self.gap_ceiling
    }
}

impl GroupSolver for ExhaustiveSolver {
    fn name(&self) -> &'static str {
        "exhaustive"
    }

    fn solve(&self, instance: &Instance) -> Result<Grouping> {
        if instance.len() <= 1 {
            return Ok(Grouping::single());
        }
        let profile = instance.gap_profile();
        if profile.is_empty() {
            return Ok(Grouping::single());
        }

        let g = profile.len();
        if g > self.gap_ceiling {
            return Err(GroupingError::GapLimitExceeded {
                gaps: g,
                limit: self.gap_ceiling,
            });
        }

        #[cfg(feature = "tracing")]
        let span = tracing::debug_span!("exhaustive_solve", n = instance.len(), gaps = g);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let costs: Vec<u64> = profile.costs().collect();
        let budget = instance.budget();
        let mut best_groups = profile.unbridged_groups();
        let mut best_mask = full_mask(g);
        let mut best_spent = 0u64;

        for keep in 0..=full_mask(g) {
            let groups = keep.count_ones() as usize + 1;
            if let Some(spent) = bridged_cost(keep, &costs, budget) {
                if groups < best_groups {
                    best_groups = groups;
                    best_mask = keep;
                    best_spent = spent;
                }
            }
        }

        let bridged = (0..g).filter(|&i| best_mask & (1u64 << i) == 0).collect();

        #[cfg(feature = "tracing")]
        tracing::debug!(groups = best_groups, spent = best_spent, "exhaustive optimum");

        Ok(Grouping {
            groups: best_groups,
            bridged,
            spent: best_spent,
        })
    }
}

/// Mask with the low `g` bits set (every gap kept).
#[inline]
fn full_mask(g: usize) -> u64 {
    debug_assert!(g <= MAX_GAP_CEILING);
    (1u64 << g) - 1
}

/// Cost of bridging every gap whose bit is clear in `keep`, or `None` once the
/// running sum passes `budget`.
fn bridged_cost(keep: u64, costs: &[u64], budget: u64) -> Option<u64> {
    let mut total = 0u64;
    for (i, &cost) in costs.iter().enumerate() {
        if keep & (1u64 << i) == 0 {
            total = total.checked_add(cost).filter(|&t| t <= budget)?;
        }
    }
    Some(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solve(seq: &[i64], k: i64, x: i64) -> Grouping {
        let inst = Instance::new(seq.to_vec(), k, x).unwrap();
        ExhaustiveSolver::default().solve(&inst).unwrap()
    }

    #[test]
    fn singleton_is_one_group() {
        assert_eq!(solve(&[7], 5, 3), Grouping::single());
        assert_eq!(solve(&[], 0, 1), Grouping::single());
    }

    #[test]
    fn zero_budget_keeps_every_boundary() {
        let out = solve(&[1, 3, 20, 21, 40], 0, 5);
        assert_eq!(out.groups, 3);
        assert!(out.bridged.is_empty());
        assert_eq!(out.spent, 0);
    }

    #[test]
    fn budget_for_one_bridge() {
        let out = solve(&[1, 3, 20, 21, 40], 3, 5);
        assert_eq!(out.groups, 2);
        assert_eq!(out.bridged.len(), 1);
        assert_eq!(out.spent, 3);
    }

    #[test]
    fn budget_for_both_bridges() {
        let out = solve(&[1, 3, 20, 21, 40], 6, 5);
        assert_eq!(out.groups, 1);
        assert_eq!(out.bridged, vec![0, 1]);
        assert_eq!(out.spent, 6);
    }

    #[test]
    fn prefers_two_cheap_bridges_over_one_dear_one() {
        // gaps 4 (cost 1), 4 (cost 1), 30 (cost 9) at x = 3
        let out = solve(&[0, 4, 8, 38], 2, 3);
        assert_eq!(out.groups, 2);
        assert_eq!(out.bridged, vec![0, 1]);
    }

    #[test]
    fn ceiling_is_enforced() {
        let seq: Vec<i64> = (0..8).map(|i| i * 10).collect();
        let inst = Instance::new(seq, 0, 1).unwrap();
        let err = ExhaustiveSolver::with_gap_ceiling(4).solve(&inst).unwrap_err();
        assert_eq!(err, GroupingError::GapLimitExceeded { gaps: 7, limit: 4 });
    }

    #[test]
    fn ceiling_is_clamped() {
        assert_eq!(
            ExhaustiveSolver::with_gap_ceiling(1000).gap_ceiling(),
            MAX_GAP_CEILING
        );
    }

    #[test]
    fn bridged_cost_stops_at_budget() {
        assert_eq!(bridged_cost(0b00, &[2, 3], 5), Some(5));
        assert_eq!(bridged_cost(0b00, &[2, 3], 4), None);
        assert_eq!(bridged_cost(0b10, &[2, 3], 4), Some(2));
        assert_eq!(bridged_cost(0b11, &[2, 3], 0), Some(0));
        assert_eq!(bridged_cost(0b00, &[u64::MAX, 1], u64::MAX), None);
    }
}
