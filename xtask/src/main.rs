use std::path::Path;
use std::process::{exit, Command, ExitStatus};

use clap::{Parser, Subcommand, ValueEnum};

// ── CLI definition ─────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "xtask",
    about = "Task runner for the prime sieve analysis workspace",
    long_about = "A unified CLI for running the sieve analysis, benchmarks,\n\
                  and CI checks in the prime sieve workspace."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the sieve analyzer in release mode
    Analyze {
        /// Maximum number n to find primes up to
        #[arg(long, env = "SIEVE_MAX_N", default_value_t = 1_000_000)]
        max_n: usize,
        /// Number of n values to test
        #[arg(long, env = "SIEVE_STEPS", default_value_t = 10)]
        steps: usize,
        /// Extra arguments forwarded to sieve_analyzer
        #[arg(last = true)]
        extra: Vec<String>,
    },
    /// Run Criterion benchmarks for the sieve kernels
    Bench,
    /// Compare benchmarks: stash changes, create baseline, restore, compare
    BenchCompare,
    /// Run CI checks (fmt, clippy, tests, smoke analysis, benchmarks)
    Ci {
        /// Job to run
        #[arg(value_enum, default_value_t = CiJob::Check)]
        job: CiJob,
    },
}

#[derive(Clone, ValueEnum)]
enum CiJob {
    /// Formatting, clippy, and tests
    Check,
    /// Small end-to-end analysis run into target/
    Smoke,
    /// Run benchmarks
    Bench,
    /// Run check + smoke + bench
    All,
}

// ── helpers ────────────────────────────────────────────────────────

fn step(label: &str) {
    eprintln!("\n=== {label} ===");
}

fn status_of(program: &str, args: &[&str]) -> ExitStatus {
    eprintln!("+ {program} {}", args.join(" "));
    match Command::new(program).args(args).status() {
        Ok(status) => status,
        Err(error) => {
            eprintln!("failed to execute {program}: {error}");
            exit(1);
        }
    }
}

fn run(program: &str, args: &[&str]) {
    let status = status_of(program, args);
    if !status.success() {
        exit(status.code().unwrap_or(1));
    }
}

fn run_cargo(args: &[&str]) {
    run("cargo", args);
}

fn run_git(args: &[&str]) {
    run("git", args);
}

fn run_analyzer(max_n: usize, steps: usize, extra: &[String]) {
    let max_n = max_n.to_string();
    let steps = steps.to_string();
    let mut args = vec![
        "run",
        "-p",
        "sieve_experiments",
        "--bin",
        "sieve_analyzer",
        "--release",
        "--",
        "--max-n",
        max_n.as_str(),
        "--steps",
        steps.as_str(),
    ];
    args.extend(extra.iter().map(String::as_str));
    run_cargo(&args);
}

fn run_bench(extra: &[&str]) {
    let mut args = vec!["bench", "--package", "sieve_core", "--bench", "sieves"];
    if !extra.is_empty() {
        args.push("--");
        args.extend_from_slice(extra);
    }
    run_cargo(&args);
}

// ── CI jobs ────────────────────────────────────────────────────────

fn ci_check() {
    step("Check formatting");
    run_cargo(&["fmt", "--all", "--", "--check"]);

    step("Clippy");
    run_cargo(&[
        "clippy",
        "--all-targets",
        "--all-features",
        "--",
        "-D",
        "warnings",
    ]);

    step("Test sieve_core");
    run_cargo(&["test", "-p", "sieve_core"]);

    step("Test sieve_experiments");
    run_cargo(&["test", "-p", "sieve_experiments"]);
}

fn ci_smoke() {
    step("Run a small analysis (n up to 50 000, 3 steps)");
    run_analyzer(
        50_000,
        3,
        &[
            "--verify".to_string(),
            "--no-progress".to_string(),
            "--csv".to_string(),
            "target/smoke/sieve_results.csv".to_string(),
            "--plots-dir".to_string(),
            "target/smoke/plots".to_string(),
        ],
    );
}

fn ci_bench() {
    step("Run benchmarks");
    run_bench(&[]);
}

// ── main ───────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            max_n,
            steps,
            extra,
        } => run_analyzer(max_n, steps, &extra),
        Commands::Bench => run_bench(&[]),
        Commands::BenchCompare => {
            let baseline_dir = Path::new("target/criterion");
            if baseline_dir.exists() {
                step("Removing existing benchmark data");
                if let Err(error) = std::fs::remove_dir_all(baseline_dir) {
                    eprintln!("failed to remove target/criterion: {error}");
                    exit(1);
                }
            }

            step("Stashing current changes");
            run_git(&[
                "stash",
                "push",
                "-m",
                "Temporary stash for benchmark comparison",
            ]);

            step("Running benchmark to create baseline");
            run_bench(&["--save-baseline", "main"]);

            step("Reapplying changes");
            run_git(&["stash", "pop"]);

            step("Running benchmark comparing against baseline");
            run_bench(&["--baseline", "main"]);

            eprintln!("\nDone! Check the output above to see performance comparison.");
        }
        Commands::Ci { job } => {
            match job {
                CiJob::Check => ci_check(),
                CiJob::Smoke => ci_smoke(),
                CiJob::Bench => ci_bench(),
                CiJob::All => {
                    ci_check();
                    ci_smoke();
                    ci_bench();
                }
            }
            eprintln!("\nCI job passed.");
        }
    }
}
