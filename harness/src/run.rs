//! In-process benchmark execution and result capture.

use std::time::Instant;

use anyhow::{Context, Result};
use chrono::Utc;
use suite::Benchmark;
use tracing::{debug, info};

use crate::layout::Layout;
use crate::manifest::Entry;
use crate::results::{RunMeta, RunMode, capture, generate_run_id, output_sha256};
use crate::verify::{VerifyOutcome, compare, load_expected};

/// Result of one in-process run.
#[derive(Debug)]
pub struct RunOutcome {
    pub run_id: String,
    pub lines: Vec<String>,
    pub duration_secs: f64,
    /// `None` when no reference output has been recorded yet.
    pub verify: Option<VerifyOutcome>,
}

/// Run a benchmark in-process, compare against the recorded reference
/// when one exists, and persist `output.txt` + `meta.json`.
pub fn run_benchmark(layout: &Layout, bench: &Benchmark, entry: &Entry) -> Result<RunOutcome> {
    info!(bench_id = bench.id, "benchmark run started");

    let run_id = generate_run_id();
    let started_at = Utc::now();
    let started = Instant::now();
    let lines = (bench.run)();
    let duration = started.elapsed();
    let finished_at = Utc::now();

    let expected_path = entry.expected_path(&layout.harness_dir);
    let verify = if expected_path.exists() {
        let expected = load_expected(&expected_path)?;
        Some(compare(&expected, &lines))
    } else {
        debug!(bench_id = bench.id, "no reference output recorded yet");
        None
    };

    let meta = RunMeta {
        bench_id: bench.id.to_string(),
        run_id: run_id.clone(),
        mode: RunMode::InProcess,
        output_sha256: output_sha256(&lines),
        output_lines: lines.len(),
        matched: verify.as_ref().map(VerifyOutcome::is_match),
        start_time: started_at.to_rfc3339(),
        end_time: finished_at.to_rfc3339(),
        duration_secs: duration.as_secs_f64(),
        exit_code: None,
    };
    capture(&layout.results_dir, &meta, &lines).context("capture run")?;

    info!(
        bench_id = bench.id,
        run_id,
        duration_secs = meta.duration_secs,
        matched = ?meta.matched,
        "benchmark run complete"
    );

    Ok(RunOutcome {
        run_id,
        lines,
        duration_secs: duration.as_secs_f64(),
        verify,
    })
}

/// Resolve the manifest entry and registered benchmark for an id.
pub fn resolve<'m>(
    manifest: &'m crate::manifest::Manifest,
    id: &str,
) -> Result<(&'static Benchmark, &'m Entry)> {
    let entry = manifest
        .find(id)
        .ok_or_else(|| anyhow::anyhow!("benchmark {} not in manifest", id))?;
    let bench = suite::find(id).ok_or_else(|| anyhow::anyhow!("benchmark {} not registered", id))?;
    Ok((bench, entry))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::Manifest;
    use std::path::Path;
    use tempfile::tempdir;

    fn test_layout(root: &Path) -> Layout {
        Layout {
            harness_dir: root.join("harness"),
            results_dir: root.join("harness/results"),
            manifest_path: root.join("harness/benchmarks.toml"),
        }
    }

    #[test]
    fn run_without_reference_is_unchecked() {
        let temp = tempdir().expect("tempdir");
        let layout = test_layout(temp.path());
        let manifest = Manifest::parse_str(
            "[[benchmark]]\nid = \"ref_ops\"\nexpected = \"expected/ref_ops.txt\"\n",
        )
        .expect("manifest");
        let (bench, entry) = resolve(&manifest, "ref_ops").expect("resolve");

        let outcome = run_benchmark(&layout, bench, entry).expect("run");
        assert!(outcome.verify.is_none());
        assert_eq!(outcome.lines, vec!["100000".to_string()]);

        let run_dir = layout.results_dir.join("ref_ops").join(&outcome.run_id);
        assert!(run_dir.join("output.txt").exists());
        assert!(run_dir.join("meta.json").exists());
    }

    #[test]
    fn run_against_matching_reference() {
        let temp = tempdir().expect("tempdir");
        let layout = test_layout(temp.path());
        std::fs::create_dir_all(layout.harness_dir.join("expected")).expect("expected dir");
        std::fs::write(
            layout.harness_dir.join("expected/ref_ops.txt"),
            "100000\n",
        )
        .expect("reference");

        let manifest = Manifest::parse_str(
            "[[benchmark]]\nid = \"ref_ops\"\nexpected = \"expected/ref_ops.txt\"\n",
        )
        .expect("manifest");
        let (bench, entry) = resolve(&manifest, "ref_ops").expect("resolve");

        let outcome = run_benchmark(&layout, bench, entry).expect("run");
        assert_eq!(outcome.verify, Some(VerifyOutcome::Match));
    }

    #[test]
    fn resolve_rejects_unlisted_id() {
        let manifest = Manifest::parse_str(
            "[[benchmark]]\nid = \"ref_ops\"\nexpected = \"expected/ref_ops.txt\"\n",
        )
        .expect("manifest");
        let err = resolve(&manifest, "arithmetic").expect_err("not in manifest");
        assert!(err.to_string().contains("not in manifest"));
    }
}
