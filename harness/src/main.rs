use anyhow::Result;
use harness::{cli, logging};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "harness", version, about = "Deterministic micro-benchmark harness")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List benchmarks from the manifest.
    List {
        /// Print full registry descriptors as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Run a benchmark in-process and record results.
    Run {
        bench_id: String,
        #[arg(long, default_value_t = 1)]
        runs: u32,
    },
    /// Capture current output as the reference.
    Record {
        /// Benchmark id; omit to record all.
        bench_id: Option<String>,
        /// Overwrite an existing reference.
        #[arg(short, long)]
        force: bool,
    },
    /// Compare current output against the recorded reference.
    Verify {
        /// Benchmark id; omit to verify all.
        bench_id: Option<String>,
    },
    /// Time the standalone benchmark binary.
    Time {
        bench_id: String,
        #[arg(long, default_value_t = 5)]
        runs: u32,
        #[arg(long, default_value_t = 60)]
        timeout_secs: u64,
    },
    /// Show aggregated results for a benchmark.
    Report { bench_id: String },
    /// Remove recorded results for a benchmark.
    Clean { bench_id: String },
}

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();
    let repo_root = std::env::current_dir()?;
    match cli.command {
        Command::List { json } => cli::list_benchmarks(&repo_root, json),
        Command::Run { bench_id, runs } => cli::run_by_id(&repo_root, &bench_id, runs),
        Command::Record { bench_id, force } => {
            cli::record(&repo_root, bench_id.as_deref(), force)
        }
        Command::Verify { bench_id } => cli::verify(&repo_root, bench_id.as_deref()),
        Command::Time {
            bench_id,
            runs,
            timeout_secs,
        } => cli::time_by_id(&repo_root, &bench_id, runs, timeout_secs),
        Command::Report { bench_id } => cli::report(&repo_root, &bench_id),
        Command::Clean { bench_id } => cli::clean(&repo_root, &bench_id),
    }
}
