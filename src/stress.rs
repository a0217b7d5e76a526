//! Differential stress testing of one solver against another.
//!
//! The runner works in two layers:
//! 1. [`CrossCheck`] solves a single instance with a reference and a
//!    candidate solver and classifies the pair of results.
//! 2. [`StressRunner`] feeds generated instances through a `CrossCheck`,
//!    stopping at the first mismatch unless told to keep going, and collects
//!    a [`StressReport`].
//!
//! Every mismatch carries the failing input in protocol format so it can be
//! replayed through the CLI.

use crate::error::Result;
use crate::generator::{GeneratorConfig, InstanceGenerator};
use crate::instance::Instance;
use crate::protocol::{format_input, ProblemInput};
use crate::solvers::{exhaustive::DEFAULT_GAP_CEILING, ExhaustiveSolver, GreedySolver};
use crate::traits::GroupSolver;

/// Result of comparing two solvers on one instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Both returned this group count.
    Agree(usize),
    /// The counts differ.
    Disagree { reference: usize, candidate: usize },
    /// At least one solver failed; the message names which.
    Failed(String),
}

impl Verdict {
    pub fn is_agreement(&self) -> bool {
        matches!(self, Verdict::Agree(_))
    }
}

/// Pair of solvers compared on the same instance.
pub struct CrossCheck<R, C> {
    reference: R,
    candidate: C,
}

impl<R: GroupSolver, C: GroupSolver> CrossCheck<R, C> {
    pub fn new(reference: R, candidate: C) -> Self {
        Self {
            reference,
            candidate,
        }
    }

    pub fn reference(&self) -> &R {
        &self.reference
    }

    pub fn candidate(&self) -> &C {
        &self.candidate
    }

    pub fn check(&self, instance: &Instance) -> Verdict {
        let reference = self.reference.min_groups(instance);
        let candidate = self.candidate.min_groups(instance);
        match (reference, candidate) {
            (Ok(r), Ok(c)) if r == c => Verdict::Agree(r),
            (Ok(r), Ok(c)) => Verdict::Disagree {
                reference: r,
                candidate: c,
            },
            (Err(e), _) => Verdict::Failed(format!("{} failed: {e}", self.reference.name())),
            (_, Err(e)) => Verdict::Failed(format!("{} failed: {e}", self.candidate.name())),
        }
    }
}

/// Knobs for a stress run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StressConfig {
    pub seed: u64,
    pub generator: GeneratorConfig,
    /// Record every mismatch instead of stopping at the first.
    pub keep_going: bool,
    /// Ceiling handed to the exhaustive reference.
    pub gap_ceiling: usize,
}

impl Default for StressConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            generator: GeneratorConfig::default(),
            keep_going: false,
            gap_ceiling: DEFAULT_GAP_CEILING,
        }
    }
}

/// A failing test case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    /// One-based test number.
    pub test: u64,
    /// Failing input in protocol format.
    pub input: String,
    pub verdict: Verdict,
}

/// Summary of a stress run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StressReport {
    pub tests_run: u64,
    pub mismatches: Vec<Mismatch>,
}

impl StressReport {
    pub fn passed(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Generates instances and cross-checks a candidate against a reference.
pub struct StressRunner<R, C> {
    check: CrossCheck<R, C>,
    generator: InstanceGenerator,
    keep_going: bool,
}

impl StressRunner<ExhaustiveSolver, GreedySolver> {
    /// Greedy against the exhaustive oracle.
    ///
    /// # Errors
    /// Fails if the generator ranges are invalid.
    pub fn new(config: StressConfig) -> Result<Self> {
        let reference = ExhaustiveSolver::with_gap_ceiling(config.gap_ceiling);
        Self::with_solvers(config, reference, GreedySolver)
    }
}

impl<R: GroupSolver, C: GroupSolver> StressRunner<R, C> {
    pub fn with_solvers(config: StressConfig, reference: R, candidate: C) -> Result<Self> {
        Ok(Self {
            check: CrossCheck::new(reference, candidate),
            generator: InstanceGenerator::new(config.generator, config.seed)?,
            keep_going: config.keep_going,
        })
    }

    /// Run up to `tests` cases.
    pub fn run(&mut self, tests: u64) -> StressReport {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!(
            "stress_run",
            tests,
            reference = self.check.reference().name(),
            candidate = self.check.candidate().name()
        );
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut report = StressReport::default();
        for test in 1..=tests {
            let instance = self.generator.next_instance();
            let verdict = self.check.check(&instance);
            report.tests_run = test;

            if test % 100 == 0 {
                #[cfg(feature = "tracing")]
                tracing::debug!(test, "stress progress");
            }

            if verdict.is_agreement() {
                continue;
            }

            #[cfg(feature = "tracing")]
            tracing::warn!(test, ?verdict, "solvers disagree");

            report.mismatches.push(Mismatch {
                test,
                input: format_input(&ProblemInput::from(&instance)),
                verdict,
            });
            if !self.keep_going {
                break;
            }
        }

        #[cfg(feature = "tracing")]
        tracing::info!(
            tests_run = report.tests_run,
            mismatches = report.mismatches.len(),
            "stress run finished"
        );

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GroupingError;
    use crate::traits::Grouping;

    /// Reports one group more than greedy does.
    struct OffByOne;

    impl GroupSolver for OffByOne {
        fn name(&self) -> &'static str {
            "off_by_one"
        }

        fn solve(&self, instance: &Instance) -> Result<Grouping> {
            let mut out = GreedySolver.solve(instance)?;
            out.groups += 1;
            Ok(out)
        }
    }

    struct Broken;

    impl GroupSolver for Broken {
        fn name(&self) -> &'static str {
            "broken"
        }

        fn solve(&self, _instance: &Instance) -> Result<Grouping> {
            Err(GroupingError::invalid("nope"))
        }
    }

    #[test]
    fn greedy_and_exhaustive_agree_on_generated_cases() {
        let mut runner = StressRunner::new(StressConfig {
            seed: 2024,
            ..StressConfig::default()
        })
        .unwrap();
        let report = runner.run(2_000);
        assert_eq!(report.tests_run, 2_000);
        assert!(report.passed(), "{:?}", report.mismatches.first());
    }

    #[test]
    fn stops_at_first_mismatch() {
        let mut runner =
            StressRunner::with_solvers(StressConfig::default(), GreedySolver, OffByOne).unwrap();
        let report = runner.run(50);
        assert_eq!(report.tests_run, 1);
        assert_eq!(report.mismatches.len(), 1);
        let m = &report.mismatches[0];
        assert_eq!(m.test, 1);
        match m.verdict {
            Verdict::Disagree {
                reference,
                candidate,
            } => assert_eq!(candidate, reference + 1),
            ref other => panic!("unexpected verdict {other:?}"),
        }
        assert!(crate::protocol::parse_input(&m.input).is_ok());
    }

    #[test]
    fn keep_going_records_everything() {
        let config = StressConfig {
            keep_going: true,
            ..StressConfig::default()
        };
        let mut runner = StressRunner::with_solvers(config, GreedySolver, OffByOne).unwrap();
        let report = runner.run(25);
        assert_eq!(report.tests_run, 25);
        assert_eq!(report.mismatches.len(), 25);
    }

    #[test]
    fn solver_errors_are_failures() {
        let check = CrossCheck::new(Broken, GreedySolver);
        let inst = Instance::new(vec![1, 10], 0, 1).unwrap();
        match check.check(&inst) {
            Verdict::Failed(msg) => assert!(msg.starts_with("broken failed")),
            other => panic!("unexpected verdict {other:?}"),
        }
    }

    #[test]
    fn gap_ceiling_overflow_is_reported() {
        let check = CrossCheck::new(ExhaustiveSolver::with_gap_ceiling(1), GreedySolver);
        let inst = Instance::new(vec![0, 10, 20], 0, 1).unwrap();
        assert!(matches!(check.check(&inst), Verdict::Failed(_)));
    }
}
