//! Core trait shared by the grouping solvers.
//!
//! Every solver answers the same question: given an [`Instance`], what is the
//! least number of stable groups reachable by bridging big gaps within the
//! budget? Implementations differ only in how they search.
//!
//! The contract a solver must honour:
//! - `n <= 1` yields exactly one group, whatever the budget.
//! - The returned count lies in `[1, g + 1]` where `g` is the number of big
//!   gaps of the instance.
//! - The bridged gaps reported in the [`Grouping`] witness cost at most the
//!   budget, and `groups == g + 1 - bridged.len()`.
//!
//! The stress runner relies only on these points to compare two solvers.

use crate::error::Result;
use crate::instance::Instance;

/// Outcome of a solve.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grouping {
    /// Minimum number of stable groups.
    pub groups: usize,
    /// Indices into the instance's [`GapProfile`](crate::gaps::GapProfile)
    /// of the gaps that were bridged, ascending.
    pub bridged: Vec<usize>,
    /// Insertions spent on the bridged gaps.
    pub spent: u64,
}

impl Grouping {
    /// The trivial outcome: one group, nothing bridged.
    pub fn single() -> Self {
        Self {
            groups: 1,
            bridged: Vec::new(),
            spent: 0,
        }
    }
}

/// A strategy for minimising the group count of an [`Instance`].
pub trait GroupSolver {
    /// Short name used in logs and reports.
    fn name(&self) -> &'static str;

    /// Solve and return the full outcome, including which gaps were bridged.
    fn solve(&self, instance: &Instance) -> Result<Grouping>;

    /// Solve and return only the group count.
    fn min_groups(&self, instance: &Instance) -> Result<usize> {
        self.solve(instance).map(|g| g.groups)
    }
}

impl<S: GroupSolver + ?Sized> GroupSolver for &S {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn solve(&self, instance: &Instance) -> Result<Grouping> {
        (**self).solve(instance)
    }
}

impl<S: GroupSolver + ?Sized> GroupSolver for Box<S> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn solve(&self, instance: &Instance) -> Result<Grouping> {
        (**self).solve(instance)
    }
}
