use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use stable_groups::generator::{GeneratorConfig, InstanceGenerator};
use stable_groups::protocol::{format_input, format_output, parse_input, ProblemInput};
use stable_groups::solvers::exhaustive::DEFAULT_GAP_CEILING;
use stable_groups::stress::{StressConfig, StressRunner, Verdict};
use stable_groups::{ExhaustiveSolver, GreedySolver, GroupSolver};

/// Minimum stable groups under an insertion budget.
#[derive(Parser, Debug)]
#[command(name = "stable-groups", version, about)]
struct Cli {
    /// Raise log verbosity (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Read `n k x` and `n` positions, print the minimum group count.
    Solve {
        #[arg(short, long, value_enum, default_value_t = Method::Greedy)]
        method: Method,

        /// Input file (reads stdin if omitted).
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Big-gap ceiling for the exhaustive method.
        #[arg(long, default_value_t = DEFAULT_GAP_CEILING)]
        gap_ceiling: usize,
    },

    /// Print one random instance in the input format.
    Gen {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value_t = 20)]
        max_len: usize,
        #[arg(long, default_value_t = 10)]
        max_budget: i64,
        #[arg(long, default_value_t = 10)]
        max_threshold: i64,
        #[arg(long, default_value_t = 50)]
        max_value: i64,
    },

    /// Cross-check the greedy solver against the exhaustive one.
    Stress {
        /// Number of random cases.
        #[arg(short = 'n', long, default_value_t = 1000)]
        tests: u64,

        #[arg(long)]
        seed: Option<u64>,

        /// Continue after a mismatch.
        #[arg(long)]
        keep_going: bool,

        #[arg(long, default_value_t = DEFAULT_GAP_CEILING)]
        gap_ceiling: usize,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Method {
    Greedy,
    Exhaustive,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Solve {
            method,
            input,
            gap_ceiling,
        } => {
            let text = match input {
                Some(path) => fs::read_to_string(&path)
                    .with_context(|| format!("reading {}", path.display()))?,
                None => {
                    let mut buf = String::new();
                    io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };
            let instance = parse_input(&text)?.into_instance()?;
            let groups = match method {
                Method::Greedy => GreedySolver.min_groups(&instance)?,
                Method::Exhaustive => {
                    ExhaustiveSolver::with_gap_ceiling(gap_ceiling).min_groups(&instance)?
                }
            };
            io::stdout().write_all(format_output(groups).as_bytes())?;
        }
        Command::Gen {
            seed,
            max_len,
            max_budget,
            max_threshold,
            max_value,
        } => {
            let config = GeneratorConfig {
                len: 1..=max_len,
                budget: 0..=max_budget,
                threshold: 1..=max_threshold,
                value: 1..=max_value,
            };
            let mut generator = InstanceGenerator::new(config, seed.unwrap_or_else(rand::random))?;
            let instance = generator.next_instance();
            io::stdout().write_all(format_input(&ProblemInput::from(&instance)).as_bytes())?;
        }
        Command::Stress {
            tests,
            seed,
            keep_going,
            gap_ceiling,
        } => {
            let seed = seed.unwrap_or_else(rand::random);
            println!("stable-groups stress");
            println!("  reference : exhaustive (gap ceiling {gap_ceiling})");
            println!("  candidate : greedy");
            println!("  tests     : {tests}");
            println!("  seed      : {seed}");
            println!();

            let mut runner = StressRunner::new(StressConfig {
                seed,
                keep_going,
                gap_ceiling,
                ..StressConfig::default()
            })?;
            let report = runner.run(tests);

            for m in &report.mismatches {
                println!("================= MISMATCH FOUND =================");
                println!("Test #{}", m.test);
                println!("\nInput:\n{}", m.input);
                match &m.verdict {
                    Verdict::Disagree {
                        reference,
                        candidate,
                    } => {
                        println!("Expected (exhaustive): {reference}");
                        println!("Got (greedy):          {candidate}");
                    }
                    Verdict::Failed(msg) => println!("Error: {msg}"),
                    Verdict::Agree(_) => {}
                }
                println!("==================================================");
            }

            println!("\nSummary:");
            println!("  tests run : {}", report.tests_run);
            println!("  failures  : {}", report.mismatches.len());
            if !report.passed() {
                bail!("{} mismatching case(s)", report.mismatches.len());
            }
            println!("\nResult: all tests passed.");
        }
    }
    Ok(())
}

/// Logs go to stderr so stdout carries only protocol output.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,stable_groups={level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
