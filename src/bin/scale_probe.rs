use std::env;
use std::time::Instant;

use stable_groups::solvers::exhaustive::MAX_GAP_CEILING;
use stable_groups::{ExhaustiveSolver, GreedySolver, GroupSolver, Instance};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("scale_probe: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    eprintln!("\n{}", "=".repeat(80));
    eprintln!("stable-groups scaling probe");
    eprintln!("{}", "=".repeat(80));
    eprintln!();
    eprintln!("  • Greedy: wall time across sequence lengths up to 1M positions;");
    eprintln!(
        "    checked against the exhaustive solver while big gaps <= {}",
        options.verify_limit
    );
    eprintln!("  • Exhaustive: wall time as the number of big gaps grows (2^g subsets)");
    eprintln!();

    let mut sys = System::new();
    let mut measurements = Vec::new();

    eprintln!("[1/2] Greedy solver over growing sequences...");
    measurements.extend(run_greedy(&options, &mut sys));
    eprintln!();

    eprintln!("[2/2] Exhaustive solver over growing gap counts...");
    measurements.extend(run_exhaustive(&options, &mut sys));
    eprintln!();

    print_summary(&measurements);

    if let Err(err) = options.format.write(&measurements) {
        eprintln!("scale_probe output error: {err}");
        std::process::exit(1);
    }
}

struct Options {
    format: OutputFormat,
    verify_limit: usize,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut format = OutputFormat::Csv;
        let mut verify_limit = 18usize;

        while let Some(arg) = args.next() {
            let arg = arg.into();
            if arg == "--help" || arg == "-h" {
                Options::print_help();
                std::process::exit(0);
            } else if let Some(value) = arg.strip_prefix("--format=") {
                format = OutputFormat::from_str(value)?;
            } else if arg == "--format" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --format".to_string())?
                    .into();
                format = OutputFormat::from_str(&value)?;
            } else if let Some(value) = arg.strip_prefix("--verify-limit=") {
                verify_limit = parse_limit(value)?;
            } else if arg == "--verify-limit" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --verify-limit".to_string())?
                    .into();
                verify_limit = parse_limit(&value)?;
            } else {
                return Err(format!("unrecognized argument '{arg}'"));
            }
        }

        Ok(Self {
            format,
            verify_limit,
        })
    }

    fn print_help() {
        println!(
            "\
Usage: cargo run --features probe --bin scale_probe [-- <options>]

Options:
  --format <csv|table|json>     Output format (default: csv)
  --verify-limit <N>            Largest big-gap count to verify with the exhaustive solver (default: 18, max: {MAX_GAP_CEILING})
  -h, --help                    Print this help message
"
        );
    }
}

fn parse_limit(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(v) if v <= MAX_GAP_CEILING => Ok(v),
        _ => Err(format!(
            "verify limit must be an integer in 0..={MAX_GAP_CEILING}"
        )),
    }
}

#[derive(Copy, Clone)]
enum OutputFormat {
    Csv,
    Table,
    Json,
}

impl OutputFormat {
    fn from_str(value: &str) -> Result<Self, String> {
        match value {
            "csv" => Ok(Self::Csv),
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format '{other}'")),
        }
    }

    fn write(self, measurements: &[Measurement]) -> Result<(), String> {
        match self {
            OutputFormat::Csv => write_csv(measurements),
            OutputFormat::Table => write_table(measurements),
            OutputFormat::Json => write_json(measurements),
        }
    }
}

struct Measurement {
    scenario: &'static str,
    size_desc: String,
    wall_s: f64,
    rss_delta_kib: u64,
    verification_status: VerificationStatus,
    verification_detail: Option<String>,
}

#[derive(Clone, Copy)]
enum VerificationStatus {
    NotChecked,
    Passed,
    Failed,
}

impl VerificationStatus {
    fn label(&self) -> &'static str {
        match self {
            VerificationStatus::NotChecked => "not_checked",
            VerificationStatus::Passed => "passed",
            VerificationStatus::Failed => "failed",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            VerificationStatus::Passed => "✓",
            VerificationStatus::Failed => "✗",
            VerificationStatus::NotChecked => "○",
        }
    }
}

fn run_greedy(options: &Options, sys: &mut System) -> Vec<Measurement> {
    const LENGTHS: &[usize] = &[8, 16, 20, 1_024, 16_384, 262_144, 1_048_576];
    const THRESHOLD: i64 = 5;
    let total = LENGTHS.len();

    LENGTHS
        .iter()
        .enumerate()
        .map(|(idx, &len)| {
            eprint!("      [{}/{}] n={}... ", idx + 1, total, len);
            let instance = deterministic_instance(len, THRESHOLD);
            let gaps = instance.gap_profile().len();
            let mut groups_result = 0usize;
            let m = measure("greedy", format!("n={len},gaps={gaps}"), sys, || {
                let groups = match GreedySolver.min_groups(&instance) {
                    Ok(g) => g,
                    Err(e) => return (VerificationStatus::Failed, Some(e.to_string())),
                };
                groups_result = groups;
                if gaps > options.verify_limit {
                    return (VerificationStatus::NotChecked, None);
                }
                match ExhaustiveSolver::with_gap_ceiling(options.verify_limit).min_groups(&instance)
                {
                    Ok(expected) if expected == groups => (VerificationStatus::Passed, None),
                    Ok(expected) => (
                        VerificationStatus::Failed,
                        Some(format!("expected {expected}, got {groups}")),
                    ),
                    Err(e) => (VerificationStatus::Failed, Some(e.to_string())),
                }
            });
            eprintln!(
                "{} groups={}, time={:.3}s, status={}",
                m.verification_status.icon(),
                groups_result,
                m.wall_s,
                m.verification_status.label()
            );
            m
        })
        .collect()
}

fn run_exhaustive(options: &Options, sys: &mut System) -> Vec<Measurement> {
    let counts: Vec<usize> = (4..=options.verify_limit).step_by(4).collect();
    let total = counts.len();

    counts
        .iter()
        .enumerate()
        .map(|(idx, &gaps)| {
            eprint!("      [{}/{}] gaps={}... ", idx + 1, total, gaps);
            // Every gap is 10 wide with threshold 1: cost 9 each.
            let positions: Vec<i64> = (0..=gaps as i64).map(|i| i * 10).collect();
            let budget = 9 * (gaps as i64 / 2);
            let expected = gaps + 1 - gaps / 2;
            let m = match Instance::new(positions, budget, 1) {
                Ok(instance) => measure("exhaustive", format!("gaps={gaps}"), sys, || {
                    match ExhaustiveSolver::with_gap_ceiling(gaps).min_groups(&instance) {
                        Ok(groups) if groups == expected => (VerificationStatus::Passed, None),
                        Ok(groups) => (
                            VerificationStatus::Failed,
                            Some(format!("expected {expected}, got {groups}")),
                        ),
                        Err(e) => (VerificationStatus::Failed, Some(e.to_string())),
                    }
                }),
                Err(e) => Measurement {
                    scenario: "exhaustive",
                    size_desc: format!("gaps={gaps}"),
                    wall_s: 0.0,
                    rss_delta_kib: 0,
                    verification_status: VerificationStatus::Failed,
                    verification_detail: Some(e.to_string()),
                },
            };
            eprintln!(
                "{} time={:.3}s, status={}",
                m.verification_status.icon(),
                m.wall_s,
                m.verification_status.label()
            );
            m
        })
        .collect()
}

fn print_summary(measurements: &[Measurement]) {
    let failed = measurements
        .iter()
        .filter(|m| matches!(m.verification_status, VerificationStatus::Failed))
        .count();
    let passed = measurements
        .iter()
        .filter(|m| matches!(m.verification_status, VerificationStatus::Passed))
        .count();

    eprintln!("{}", "=".repeat(80));
    eprintln!(
        "{} measurement(s): {} passed, {} failed, {} not checked",
        measurements.len(),
        passed,
        failed,
        measurements.len() - passed - failed
    );
    for scenario in ["greedy", "exhaustive"] {
        let times: Vec<f64> = measurements
            .iter()
            .filter(|m| m.scenario == scenario)
            .map(|m| m.wall_s)
            .collect();
        if times.is_empty() {
            continue;
        }
        let max_time = times.iter().copied().fold(0.0, f64::max);
        let avg_time = times.iter().sum::<f64>() / times.len() as f64;
        eprintln!("  {scenario}: runs={}, max={max_time:.3}s, avg={avg_time:.3}s", times.len());
    }
    if failed == 0 {
        eprintln!("✓ All verified runs agree with the exhaustive solver.");
    } else {
        eprintln!("✗ {failed} run(s) failed. Please review the errors above.");
    }
    eprintln!("{}", "=".repeat(80));
    eprintln!();
}

fn measure<F>(scenario: &'static str, size_desc: String, sys: &mut System, compute: F) -> Measurement
where
    F: FnOnce() -> (VerificationStatus, Option<String>),
{
    let before = rss_kib(sys);
    let start = Instant::now();
    let (status, detail) = compute();
    let duration = start.elapsed();
    let after = rss_kib(sys);

    Measurement {
        scenario,
        size_desc,
        wall_s: duration.as_secs_f64(),
        rss_delta_kib: after.saturating_sub(before),
        verification_status: status,
        verification_detail: detail,
    }
}

fn write_csv(measurements: &[Measurement]) -> Result<(), String> {
    println!("scenario,size_desc,wall_s,rss_delta_kib,verification_status,verification_detail");
    for m in measurements {
        let detail = m
            .verification_detail
            .as_ref()
            .map(|s| s.replace('"', "'"))
            .unwrap_or_default();
        println!(
            "{},\"{}\",{:.3},{},{},\"{}\"",
            m.scenario,
            m.size_desc,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            detail
        );
    }
    Ok(())
}

fn write_table(measurements: &[Measurement]) -> Result<(), String> {
    let col1 = measurements
        .iter()
        .map(|m| m.scenario.len())
        .fold("scenario".len(), usize::max);
    let col2 = measurements
        .iter()
        .map(|m| m.size_desc.len())
        .fold("size".len(), usize::max);

    println!(
        "{:<col1$}  {:<col2$}  {:>12}  {:>14}  {:>12}  detail",
        "scenario", "size", "wall_s", "rss_delta_kib", "status",
    );
    println!(
        "{:-<col1$}  {:-<col2$}  {:-<12}  {:-<14}  {:-<12}  {:-<12}",
        "", "", "", "", "", "",
    );
    for m in measurements {
        println!(
            "{:<col1$}  {:<col2$}  {:>12.3}  {:>14}  {:>12}  {}",
            m.scenario,
            m.size_desc,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            m.verification_detail.as_deref().unwrap_or(""),
        );
    }
    Ok(())
}

fn write_json(measurements: &[Measurement]) -> Result<(), String> {
    println!("[");
    for (idx, m) in measurements.iter().enumerate() {
        let detail = m.verification_detail.as_ref().map(|s| s.replace('"', "'"));
        println!(
            "  {{\"scenario\":\"{}\",\"size\":\"{}\",\"wall_s\":{:.3},\"rss_delta_kib\":{},\"verification\":{{\"status\":\"{}\",\"detail\":{}}}}}{}",
            m.scenario,
            m.size_desc,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            match detail {
                Some(ref d) => format!("\"{d}\""),
                None => "null".to_string(),
            },
            if idx + 1 == measurements.len() { "" } else { "," }
        );
    }
    println!("]");
    Ok(())
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    if let Some(process) = get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        process.memory() / 1024
    } else {
        0
    }
}

/// Positions with steps cycling through 1..=13, so roughly 8 in 13 gaps
/// exceed a threshold of 5. Budget covers about half of the bridging cost.
fn deterministic_instance(len: usize, threshold: i64) -> Instance {
    let mut positions = Vec::with_capacity(len);
    let mut pos = 0i64;
    for i in 0..len {
        positions.push(pos);
        pos += (i as i64 * 7) % 13 + 1;
    }
    let cost: i64 = positions
        .windows(2)
        .map(|w| w[1] - w[0])
        .filter(|&d| d > threshold)
        .map(|d| (d - 1) / threshold)
        .sum();
    match Instance::new(positions, cost / 2, threshold) {
        Ok(instance) => instance,
        Err(e) => unreachable!("probe instances are valid: {e}"),
    }
}
