//! CLI command implementations.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, anyhow, bail};
use chrono::Utc;
use tracing::{debug, info};

use crate::layout::Layout;
use crate::manifest::{Entry, Manifest};
use crate::process::{build_bench_binary, run_bench_binary};
use crate::report::aggregate;
use crate::results::{RunMeta, RunMode, capture, generate_run_id, join_lines, output_sha256};
use crate::run::{resolve, run_benchmark};
use crate::verify::{VerifyOutcome, compare, load_expected};

/// List benchmark ids from the manifest.
///
/// With `json`, print the full registry descriptors instead.
pub fn list_benchmarks(repo_root: &Path, json: bool) -> Result<()> {
    let layout = Layout::at(repo_root);
    let manifest = Manifest::load(&layout.manifest_path)?;
    if json {
        let descriptors: Vec<&suite::Benchmark> = manifest
            .benchmarks
            .iter()
            .filter_map(|entry| suite::find(&entry.id))
            .collect();
        let payload =
            serde_json::to_string_pretty(&descriptors).context("serialize descriptors")?;
        println!("{payload}");
        return Ok(());
    }
    for entry in &manifest.benchmarks {
        println!("{}", entry.id);
    }
    Ok(())
}

/// Run a benchmark in-process (optionally multiple times).
pub fn run_by_id(repo_root: &Path, id: &str, runs: u32) -> Result<()> {
    let layout = Layout::at(repo_root);
    let manifest = Manifest::load(&layout.manifest_path)?;
    let (bench, entry) = resolve(&manifest, id)?;

    info!(bench_id = id, runs, "starting runs");
    for run_num in 1..=runs {
        debug!(bench_id = id, run_num, runs, "starting run");
        let outcome = run_benchmark(&layout, bench, entry).context("run benchmark")?;
        println!(
            "run: bench={} run_id={} lines={} duration_secs={:.3} matched={}",
            id,
            outcome.run_id,
            outcome.lines.len(),
            outcome.duration_secs,
            match &outcome.verify {
                Some(verify) => verify.is_match().to_string(),
                None => "unchecked".to_string(),
            }
        );
    }
    Ok(())
}

/// Capture current output as the reference for one or all benchmarks.
pub fn record(repo_root: &Path, id: Option<&str>, force: bool) -> Result<()> {
    let layout = Layout::at(repo_root);
    let manifest = Manifest::load(&layout.manifest_path)?;

    match id {
        Some(id) => {
            let (bench, entry) = resolve(&manifest, id)?;
            if !record_entry(&layout, bench, entry, force)? {
                bail!(
                    "reference for {} already exists; pass --force to overwrite",
                    id
                );
            }
            Ok(())
        }
        None => {
            for entry in &manifest.benchmarks {
                let bench = suite::find(&entry.id)
                    .ok_or_else(|| anyhow!("benchmark {} not registered", entry.id))?;
                if !record_entry(&layout, bench, entry, force)? {
                    println!("record: bench={} skipped (reference exists)", entry.id);
                }
            }
            Ok(())
        }
    }
}

fn record_entry(
    layout: &Layout,
    bench: &'static suite::Benchmark,
    entry: &Entry,
    force: bool,
) -> Result<bool> {
    let path = entry.expected_path(&layout.harness_dir);
    if path.exists() && !force {
        return Ok(false);
    }
    let lines = (bench.run)();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create {}", parent.display()))?;
    }
    std::fs::write(&path, join_lines(&lines))
        .with_context(|| format!("write reference {}", path.display()))?;
    println!(
        "record: bench={} lines={} path={}",
        bench.id,
        lines.len(),
        path.display()
    );
    Ok(true)
}

/// Verify one or all benchmarks against their recorded references.
pub fn verify(repo_root: &Path, id: Option<&str>) -> Result<()> {
    let layout = Layout::at(repo_root);
    let manifest = Manifest::load(&layout.manifest_path)?;

    let ids: Vec<String> = match id {
        Some(id) => vec![id.to_string()],
        None => manifest
            .benchmarks
            .iter()
            .map(|entry| entry.id.clone())
            .collect(),
    };

    let mut failures = Vec::new();
    for id in &ids {
        let (bench, entry) = resolve(&manifest, id)?;
        match verify_entry(&layout, bench, entry)? {
            VerifyOutcome::Match => {
                println!("verify: bench={} ok", id);
            }
            mismatch => {
                println!("verify: bench={} MISMATCH ({mismatch})", id);
                failures.push(format!("{id}: {mismatch}"));
            }
        }
    }

    if !failures.is_empty() {
        bail!("verification failed:\n- {}", failures.join("\n- "));
    }
    Ok(())
}

fn verify_entry(
    layout: &Layout,
    bench: &'static suite::Benchmark,
    entry: &Entry,
) -> Result<VerifyOutcome> {
    let path = entry.expected_path(&layout.harness_dir);
    if !path.exists() {
        bail!(
            "no reference output for {}; run `harness record {}` first",
            bench.id,
            bench.id
        );
    }
    let expected = load_expected(&path)?;
    let actual = (bench.run)();
    Ok(compare(&expected, &actual))
}

/// Time the standalone benchmark binary over several runs.
pub fn time_by_id(repo_root: &Path, id: &str, runs: u32, timeout_secs: u64) -> Result<()> {
    let layout = Layout::at(repo_root);
    let manifest = Manifest::load(&layout.manifest_path)?;
    let (bench, entry) = resolve(&manifest, id)?;

    let binary = build_bench_binary(repo_root, bench.id).context("build benchmark binary")?;
    if !binary.exists() {
        bail!("benchmark binary not found at {}", binary.display());
    }
    let timeout = Duration::from_secs(timeout_secs);
    let expected_path = entry.expected_path(&layout.harness_dir);
    let expected = expected_path
        .exists()
        .then(|| load_expected(&expected_path))
        .transpose()?;

    let mut durations = Vec::new();
    for run_num in 1..=runs {
        let started_at = Utc::now();
        let timed = run_bench_binary(&binary, timeout).context("run benchmark binary")?;
        let finished_at = Utc::now();

        let verify = expected
            .as_deref()
            .map(|expected| compare(expected, &timed.stdout_lines));
        let meta = RunMeta {
            bench_id: bench.id.to_string(),
            run_id: generate_run_id(),
            mode: RunMode::Binary,
            output_sha256: output_sha256(&timed.stdout_lines),
            output_lines: timed.stdout_lines.len(),
            matched: verify.as_ref().map(VerifyOutcome::is_match),
            start_time: started_at.to_rfc3339(),
            end_time: finished_at.to_rfc3339(),
            duration_secs: timed.duration.as_secs_f64(),
            exit_code: timed.exit_code,
        };
        capture(&layout.results_dir, &meta, &timed.stdout_lines).context("capture timed run")?;

        if let Some(outcome @ VerifyOutcome::Mismatch { .. }) = &verify {
            bail!(
                "timed run {} of {} diverged from the reference: {}",
                run_num,
                id,
                outcome
            );
        }
        println!(
            "time: bench={} run={}/{} duration_secs={:.3} exit_code={:?}",
            id, run_num, runs, meta.duration_secs, timed.exit_code
        );
        durations.push(timed.duration.as_secs_f64());
    }

    if durations.is_empty() {
        return Ok(());
    }
    let min = durations.iter().copied().fold(f64::INFINITY, f64::min);
    let max = durations.iter().copied().fold(0.0f64, f64::max);
    let avg = durations.iter().sum::<f64>() / durations.len() as f64;
    println!(
        "time: bench={} runs={} min={:.3} avg={:.3} max={:.3}",
        id, runs, min, avg, max
    );
    Ok(())
}

/// Show aggregated results for a benchmark.
pub fn report(repo_root: &Path, id: &str) -> Result<()> {
    let layout = Layout::at(repo_root);
    let (summary, warnings) = aggregate(&layout.results_dir.join(id))?;
    println!("report: bench={} runs={}", id, summary.runs);
    println!(
        "report: matched={} mismatched={} unchecked={}",
        summary.matched, summary.mismatched, summary.unchecked
    );
    if let Some(avg) = summary.avg_duration_secs {
        println!("report: avg_duration_secs={:.3}", avg);
    }
    for (mode, count) in summary.runs_by_mode {
        println!("report: mode {} {}", mode, count);
    }
    for warning in warnings {
        eprintln!("warning: {}", warning);
    }
    Ok(())
}

/// Remove recorded results for a benchmark.
pub fn clean(repo_root: &Path, id: &str) -> Result<()> {
    let layout = Layout::at(repo_root);
    let bench_results = layout.results_dir.join(id);
    if bench_results.exists() {
        std::fs::remove_dir_all(&bench_results)
            .with_context(|| format!("remove {}", bench_results.display()))?;
    }
    println!("clean: bench={} results={}", id, bench_results.display());
    Ok(())
}
