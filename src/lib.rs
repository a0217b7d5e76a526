//! Minimum stable groups under an insertion budget.
//!
//! Given integer positions, a threshold `x` and a budget `k`, sort the
//! positions and split them wherever two neighbours differ by more than `x`.
//! Each such *big gap* can be bridged by inserting synthetic points, at a cost
//! of `ceil(d / x) - 1` points for a gap of size `d`. The question is the
//! least number of groups reachable without inserting more than `k` points.
//!
//! ## Core idea
//! 1. Build an [`Instance`] (sorting and validating the inputs).
//! 2. Derive its [`GapProfile`]: the big gaps and their bridging costs.
//! 3. Hand it to a [`GroupSolver`]: either the exhaustive oracle or the
//!    greedy solver, which must agree on every input.
//!
//! ## Quick start
//! ```
//! use stable_groups::{solve_exhaustive, solve_greedy};
//!
//! let seq = [1, 3, 20, 21, 40];
//! assert_eq!(solve_greedy(&seq, 0, 5).unwrap(), 3);
//! assert_eq!(solve_greedy(&seq, 3, 5).unwrap(), 2);
//! assert_eq!(solve_exhaustive(&seq, 6, 5).unwrap(), 1);
//! ```
//!
//! ## Around the kernel
//! - [`protocol`]  : the `n k x` / positions text format.
//! - [`generator`] : seeded random instances.
//! - [`stress`]    : differential runner comparing two solvers.
//!
//! With the `tracing` feature enabled, solves and stress runs emit spans and
//! events through the `tracing` crate.

pub mod builder;
pub mod cost;
pub mod error;
pub mod gaps;
pub mod generator;
pub mod instance;
pub mod protocol;
pub mod solvers;
pub mod stress;
pub mod traits;

pub use crate::builder::InstanceBuilder;
pub use crate::cost::{bridge_cost, checked_bridge_cost};
pub use crate::error::{GroupingError, Result};
pub use crate::gaps::{Gap, GapProfile};
pub use crate::instance::Instance;
pub use crate::solvers::{solve_exhaustive, solve_greedy, ExhaustiveSolver, GreedySolver};
pub use crate::traits::{GroupSolver, Grouping};
