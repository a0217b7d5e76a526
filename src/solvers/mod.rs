//! Solvers for the minimum stable-group problem.
//!
//! Both implement [`GroupSolver`](crate::traits::GroupSolver) and must agree
//! on every valid instance:
//! - [`exhaustive`] : enumerates every subset of big gaps; the ground truth.
//! - [`greedy`]     : bridges the cheapest gaps first in `O(n log n)`.
//!
//! The free functions below take raw `(sequence, budget, threshold)` triples
//! and build the [`Instance`] themselves.

pub mod exhaustive;
pub mod greedy;

use crate::error::Result;
use crate::instance::Instance;
use crate::traits::GroupSolver;

pub use exhaustive::ExhaustiveSolver;
pub use greedy::GreedySolver;

/// Minimum group count by exhaustive subset enumeration.
///
/// # Errors
/// [`InvalidArgument`](crate::GroupingError::InvalidArgument) for a
/// non-positive threshold or a negative budget;
/// [`GapLimitExceeded`](crate::GroupingError::GapLimitExceeded) when the
/// sequence has more big gaps than the default ceiling.
pub fn solve_exhaustive(sequence: &[i64], budget: i64, threshold: i64) -> Result<usize> {
    let instance = Instance::new(sequence.to_vec(), budget, threshold)?;
    ExhaustiveSolver::default().min_groups(&instance)
}

/// Minimum group count by greedy bridging of the cheapest gaps.
///
/// # Errors
/// [`InvalidArgument`](crate::GroupingError::InvalidArgument) for a
/// non-positive threshold or a negative budget.
pub fn solve_greedy(sequence: &[i64], budget: i64, threshold: i64) -> Result<usize> {
    let instance = Instance::new(sequence.to_vec(), budget, threshold)?;
    GreedySolver.min_groups(&instance)
}
