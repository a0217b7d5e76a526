//! Example: cross-check greedy against the exhaustive oracle.
//!
//! Run with:
//! `cargo run --example stress`

use stable_groups::stress::{StressConfig, StressRunner};

fn main() -> stable_groups::Result<()> {
    let mut runner = StressRunner::new(StressConfig {
        seed: 1,
        keep_going: true,
        ..StressConfig::default()
    })?;
    let report = runner.run(1_000);
    println!(
        "{} case(s), {} mismatch(es)",
        report.tests_run,
        report.mismatches.len()
    );
    for m in &report.mismatches {
        println!("test {}: {:?}\n{}", m.test, m.verdict, m.input);
    }
    Ok(())
}
