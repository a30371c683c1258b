use std::collections::HashMap;
use std::env;
use std::fmt::Debug;
use std::time::Instant;

use contest_kit::graph::{bfs_dense, dijkstra, AdjacencyList, UNREACHABLE};
use contest_kit::problems::{
    coin_change::coin_change, knapsack::knapsack_selection, lcs::lcs_length, lis::lis_length,
};
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
    eprintln!("Contest Kit Scaling Probe");
    eprintln!("{}", "=".repeat(80));
    eprintln!();
    eprintln!("Runs every routine across increasing input sizes and checks results");
    eprintln!(
        "against brute-force baselines for sizes up to {}.",
        options.verify_limit
    );
    eprintln!("  • wall_s: wall-clock time in seconds");
    eprintln!("  • rss_delta_kib: resident memory delta in KiB");
    eprintln!("  • status: 'passed' = matches baseline, 'not_checked' = too large to verify");
    eprintln!("{}", "=".repeat(80));
    eprintln!();

    let mut sys = System::new();
    let mut measurements = Vec::new();

    eprintln!("[1/6] Breadth-first search on grid graphs...");
    measurements.extend(run_bfs(&options, &mut sys));
    eprintln!("[2/6] Dijkstra on weighted grid graphs...");
    measurements.extend(run_dijkstra(&options, &mut sys));
    eprintln!("[3/6] 0/1 knapsack with item selection...");
    measurements.extend(run_knapsack(&options, &mut sys));
    eprintln!("[4/6] Coin change...");
    measurements.extend(run_coin_change(&options, &mut sys));
    eprintln!("[5/6] Longest increasing subsequence...");
    measurements.extend(run_lis(&options, &mut sys));
    eprintln!("[6/6] Longest common subsequence...");
    measurements.extend(run_lcs(&options, &mut sys));
    eprintln!();

    print_summary(&measurements, &options);

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
        let mut verify_limit = 512usize;

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
Usage: cargo run --bin scale_probe [-- <options>]

Options:
  --format <csv|table|json>     Output format (default: csv)
  --verify-limit <N>            Largest input size checked against a baseline (default: 512)
  -h, --help                    Print this help message

Examples:
  cargo run --release --bin scale_probe
  cargo run --bin scale_probe -- --format table --verify-limit 256
"
        );
    }
}

fn parse_limit(value: &str) -> Result<usize, String> {
    value
        .parse::<usize>()
        .map_err(|_| "verify limit must be a positive integer".to_string())
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

fn compare<T: PartialEq + Debug>(expected: T, got: T) -> (VerificationStatus, Option<String>) {
    if expected == got {
        (VerificationStatus::Passed, None)
    } else {
        (
            VerificationStatus::Failed,
            Some(format!("expected {expected:?}, got {got:?}")),
        )
    }
}

/// Time `compute` on each size, checking against the baseline when the size
/// is within the verify limit.
fn sweep<F>(
    scenario: &'static str,
    sizes: &[usize],
    options: &Options,
    sys: &mut System,
    mut compute: F,
) -> Vec<Measurement>
where
    F: FnMut(usize, bool) -> (VerificationStatus, Option<String>),
{
    let total = sizes.len();
    sizes
        .iter()
        .enumerate()
        .map(|(idx, &n)| {
            eprint!("      [{}/{}] size {}... ", idx + 1, total, n);
            let verify = n <= options.verify_limit;
            let m = measure(scenario, format!("n={n}"), sys, || compute(n, verify));
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

fn run_bfs(options: &Options, sys: &mut System) -> Vec<Measurement> {
    const SIDES: &[usize] = &[16, 32, 64, 128, 256, 512, 1024];
    sweep("bfs", SIDES, options, sys, |side, verify| {
        let graph = grid(side, |_, _| ());
        let dist = match bfs_dense(&graph, 0, side * side) {
            Ok(dist) => dist,
            Err(err) => return (VerificationStatus::Failed, Some(err.to_string())),
        };
        if !verify {
            return (VerificationStatus::NotChecked, None);
        }
        // manhattan distance from the corner
        let expected: Vec<usize> = (0..side * side).map(|v| v / side + v % side).collect();
        compare(expected, dist)
    })
}

fn run_dijkstra(options: &Options, sys: &mut System) -> Vec<Measurement> {
    const SIDES: &[usize] = &[8, 16, 32, 64, 128, 256, 512];
    sweep("dijkstra", SIDES, options, sys, |side, verify| {
        let graph = grid(side, |u, v| ((u * 31 + v * 17) % 13 + 1) as i64);
        let n = side * side;
        let dist = match dijkstra(&graph, 0, n) {
            Ok(dist) => dist,
            Err(err) => return (VerificationStatus::Failed, Some(err.to_string())),
        };
        if !verify || n > options.verify_limit {
            return (VerificationStatus::NotChecked, None);
        }
        compare(bellman_ford(graph.as_slice(), 0), dist)
    })
}

fn run_knapsack(options: &Options, sys: &mut System) -> Vec<Measurement> {
    const ITEMS: &[usize] = &[16, 64, 256, 1024, 4096];
    sweep("knapsack", ITEMS, options, sys, |n, verify| {
        let weights: Vec<usize> = (0..n).map(|i| (i * 7919) % 97 + 1).collect();
        let values: Vec<u64> = (0..n).map(|i| ((i * 104_729) % 1000) as u64).collect();
        let capacity = n * 10;
        let (value, chosen) = match knapsack_selection(capacity, &weights, &values) {
            Ok(out) => out,
            Err(err) => return (VerificationStatus::Failed, Some(err.to_string())),
        };
        let picked: u64 = chosen.iter().map(|&i| values[i]).sum();
        if picked != value {
            return (
                VerificationStatus::Failed,
                Some(format!("selection sums to {picked}, optimum {value}")),
            );
        }
        if !verify {
            return (VerificationStatus::NotChecked, None);
        }
        compare(full_knapsack(capacity, &weights, &values), value)
    })
}

fn run_coin_change(options: &Options, sys: &mut System) -> Vec<Measurement> {
    const AMOUNTS: &[usize] = &[100, 1_000, 10_000, 100_000, 1_000_000];
    const COINS: &[usize] = &[7, 13, 29, 31, 97];
    sweep("coin_change", AMOUNTS, options, sys, |amount, verify| {
        let got = match coin_change(COINS, amount) {
            Ok(out) => out,
            Err(err) => return (VerificationStatus::Failed, Some(err.to_string())),
        };
        if !verify {
            return (VerificationStatus::NotChecked, None);
        }
        compare(coin_change_by_coin(COINS, amount), got)
    })
}

fn run_lis(options: &Options, sys: &mut System) -> Vec<Measurement> {
    const SIZES: &[usize] = &[256, 1_024, 16_384, 262_144, 1_048_576];
    sweep("lis", SIZES, options, sys, |n, verify| {
        let values: Vec<u64> = (0..n as u64).map(|i| (i * 2_654_435_761) % 1_000_003).collect();
        let got = lis_length(&values);
        if !verify {
            return (VerificationStatus::NotChecked, None);
        }
        compare(quadratic_lis(&values), got)
    })
}

fn run_lcs(options: &Options, sys: &mut System) -> Vec<Measurement> {
    const SIZES: &[usize] = &[256, 512, 1024, 2048, 4096, 8192];
    sweep("lcs", SIZES, options, sys, |len, verify| {
        let a = deterministic_dna(len, 0);
        let b = deterministic_dna(len, 1);
        let got = lcs_length(&a, &b);
        if !verify {
            return (VerificationStatus::NotChecked, None);
        }
        compare(full_lcs_len(&a, &b), got)
    })
}

fn print_summary(measurements: &[Measurement], options: &Options) {
    eprintln!("{}", "=".repeat(80));
    eprintln!("Summary");
    eprintln!("{}", "=".repeat(80));

    let mut passed = 0;
    let mut failed = 0;
    let mut not_checked = 0;
    for m in measurements {
        match m.verification_status {
            VerificationStatus::Passed => passed += 1,
            VerificationStatus::Failed => failed += 1,
            VerificationStatus::NotChecked => not_checked += 1,
        }
    }

    let total = measurements.len().max(1) as f64;
    eprintln!("  ✓ Passed: {} ({:.1}%)", passed, 100.0 * passed as f64 / total);
    eprintln!("  ✗ Failed: {} ({:.1}%)", failed, 100.0 * failed as f64 / total);
    eprintln!(
        "  ○ Not checked (size > {}): {} ({:.1}%)",
        options.verify_limit,
        not_checked,
        100.0 * not_checked as f64 / total
    );

    if failed > 0 {
        eprintln!();
        eprintln!("Failed runs:");
        for m in measurements {
            if matches!(m.verification_status, VerificationStatus::Failed) {
                eprintln!("  ✗ {} ({})", m.scenario, m.size_desc);
                if let Some(ref detail) = m.verification_detail {
                    eprintln!("     Error: {detail}");
                }
            }
        }
    }

    let mut by_scenario: HashMap<&str, Vec<&Measurement>> = HashMap::new();
    for m in measurements {
        by_scenario.entry(m.scenario).or_default().push(m);
    }
    eprintln!();
    for (scenario, ms) in &by_scenario {
        let max_time = ms.iter().map(|m| m.wall_s).fold(0.0, f64::max);
        let max_mem = ms.iter().map(|m| m.rss_delta_kib).max().unwrap_or(0);
        eprintln!(
            "  {scenario}: runs={}, max_time={max_time:.3}s, max_rss_delta={max_mem} KiB",
            ms.len()
        );
    }
    eprintln!("{}", "=".repeat(80));
    eprintln!();
}

fn measure<F>(
    scenario: &'static str,
    size_desc: String,
    sys: &mut System,
    compute: F,
) -> Measurement
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
            "{},{},{:.3},{},{},\"{}\"",
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
        process.memory()
    } else {
        0
    }
}

/// `side × side` grid, edges to the right and down neighbour, labelled by
/// `weight(u, v)`.
fn grid<W, F>(side: usize, weight: F) -> AdjacencyList<(usize, W)>
where
    F: Fn(usize, usize) -> W,
{
    let mut g = AdjacencyList::new(side * side);
    for r in 0..side {
        for c in 0..side {
            let u = r * side + c;
            if c + 1 < side {
                g.add_edge(u, (u + 1, weight(u, u + 1)));
            }
            if r + 1 < side {
                g.add_edge(u, (u + side, weight(u, u + side)));
            }
        }
    }
    g
}

fn bellman_ford(adj: &[Vec<(usize, i64)>], source: usize) -> Vec<i64> {
    let n = adj.len();
    let mut dist = vec![UNREACHABLE; n];
    dist[source] = 0;
    for _ in 1..n.max(2) {
        let mut changed = false;
        for (u, edges) in adj.iter().enumerate() {
            if dist[u] == UNREACHABLE {
                continue;
            }
            for &(v, w) in edges {
                if dist[u] + w < dist[v] {
                    dist[v] = dist[u] + w;
                    changed = true;
                }
            }
        }
        if !changed {
            break;
        }
    }
    dist
}

fn full_knapsack(capacity: usize, weights: &[usize], values: &[u64]) -> u64 {
    let n = weights.len();
    let mut dp = vec![vec![0u64; capacity + 1]; n + 1];
    for i in 1..=n {
        for w in 0..=capacity {
            dp[i][w] = dp[i - 1][w];
            if weights[i - 1] <= w {
                dp[i][w] = dp[i][w].max(dp[i - 1][w - weights[i - 1]] + values[i - 1]);
            }
        }
    }
    dp[n][capacity]
}

/// Coin-outer formulation of the same recurrence.
fn coin_change_by_coin(coins: &[usize], amount: usize) -> Option<usize> {
    let mut dp = vec![usize::MAX; amount + 1];
    dp[0] = 0;
    for &coin in coins {
        for i in coin..=amount {
            if dp[i - coin] != usize::MAX {
                dp[i] = dp[i].min(dp[i - coin] + 1);
            }
        }
    }
    (dp[amount] != usize::MAX).then_some(dp[amount])
}

fn quadratic_lis(values: &[u64]) -> usize {
    let mut best = vec![1usize; values.len()];
    for i in 0..values.len() {
        for j in 0..i {
            if values[j] < values[i] {
                best[i] = best[i].max(best[j] + 1);
            }
        }
    }
    best.into_iter().max().unwrap_or(0)
}

fn deterministic_dna(len: usize, offset: usize) -> Vec<u8> {
    const ALPHABET: &[u8] = b"ACGT";
    (0..len)
        .map(|i| ALPHABET[(i * i + offset) % ALPHABET.len()])
        .collect()
}

fn full_lcs_len(s: &[u8], t: &[u8]) -> usize {
    let n = s.len();
    let m = t.len();
    let mut dp = vec![vec![0usize; m + 1]; n + 1];
    for i in 1..=n {
        for j in 1..=m {
            let up = dp[i - 1][j];
            let left = dp[i][j - 1];
            let diag = dp[i - 1][j - 1] + usize::from(s[i - 1] == t[j - 1]);
            dp[i][j] = up.max(left).max(diag);
        }
    }
    dp[n][m]
}
