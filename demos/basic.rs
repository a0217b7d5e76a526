//! Example: solve one instance with both solvers.
//!
//! Run with:
//! `cargo run --example basic`

use stable_groups::{ExhaustiveSolver, GreedySolver, GroupSolver, InstanceBuilder};

fn main() -> stable_groups::Result<()> {
    let instance = InstanceBuilder::new(vec![40, 1, 21, 3, 20])
        .budget(3)
        .threshold(5)
        .build()?;

    let profile = instance.gap_profile();
    println!("Sorted positions: {:?}", instance.positions());
    for gap in profile.gaps() {
        println!(
            "  big gap after index {}: size {}, bridging cost {}",
            gap.left_index, gap.size, gap.cost
        );
    }

    let greedy = GreedySolver.solve(&instance)?;
    let exhaustive = ExhaustiveSolver::default().solve(&instance)?;
    println!("Greedy:     {} group(s), spent {}", greedy.groups, greedy.spent);
    println!("Exhaustive: {} group(s), spent {}", exhaustive.groups, exhaustive.spent);
    Ok(())
}
