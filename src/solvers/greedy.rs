//! Greedy solver: bridge the cheapest big gaps first.
//!
//! Every bridge merges exactly two neighbouring groups, whatever gap it
//! closes, so all bridges are worth the same and the problem reduces to
//! "pick as many costs as possible under a budget". Taking them in ascending
//! order is optimal by the usual exchange argument: swapping any chosen gap
//! for a cheaper unchosen one never increases the spend.
//!
//! Ties among equal costs are broken by position; the count does not depend
//! on it.

use crate::error::Result;
use crate::instance::Instance;
use crate::traits::{GroupSolver, Grouping};

/// `O(n log n)` solver, equal to [`ExhaustiveSolver`](super::ExhaustiveSolver)
/// on every instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GreedySolver;

impl GroupSolver for GreedySolver {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn solve(&self, instance: &Instance) -> Result<Grouping> {
        if instance.len() <= 1 {
            return Ok(Grouping::single());
        }
        let profile = instance.gap_profile();
        if profile.is_empty() {
            return Ok(Grouping::single());
        }

        #[cfg(feature = "tracing")]
        let span = tracing::debug_span!("greedy_solve", n = instance.len(), gaps = profile.len());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let gaps = profile.gaps();
        let mut order: Vec<usize> = (0..gaps.len()).collect();
        order.sort_by_key(|&i| gaps[i].cost);

        let budget = instance.budget();
        let mut remaining = budget;
        let mut groups = profile.unbridged_groups();
        let mut bridged = Vec::with_capacity(gaps.len());

        for i in order {
            let cost = gaps[i].cost;
            if cost > remaining {
                break;
            }
            remaining -= cost;
            groups -= 1;
            bridged.push(i);
        }
        bridged.sort_unstable();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            groups,
            bridged = bridged.len(),
            remaining,
            "greedy budget exhausted"
        );

        Ok(Grouping {
            groups,
            bridged,
            spent: budget - remaining,
        })
    }
}
