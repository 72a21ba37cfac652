//! Aggregation of recorded run metadata.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::results::{RunMeta, RunMode};

/// Aggregated view of all recorded runs for one benchmark.
#[derive(Debug, Default)]
pub struct ReportSummary {
    pub runs: usize,
    pub matched: usize,
    pub mismatched: usize,
    /// Runs with no reference output to compare against.
    pub unchecked: usize,
    pub avg_duration_secs: Option<f64>,
    pub runs_by_mode: BTreeMap<String, usize>,
}

pub fn load_run_dirs(bench_results_dir: &Path) -> Result<Vec<PathBuf>> {
    if !bench_results_dir.exists() {
        return Ok(Vec::new());
    }
    let mut dirs = Vec::new();
    for entry in fs::read_dir(bench_results_dir)
        .with_context(|| format!("read {}", bench_results_dir.display()))?
    {
        let entry = entry.context("read entry")?;
        if entry.path().is_dir() {
            dirs.push(entry.path());
        }
    }
    dirs.sort();
    Ok(dirs)
}

/// Aggregate all runs under a benchmark's results directory.
///
/// Invalid `meta.json` files are skipped and reported as warnings.
pub fn aggregate(bench_results_dir: &Path) -> Result<(ReportSummary, Vec<String>)> {
    let mut summary = ReportSummary::default();
    let mut warnings = Vec::new();

    for run_dir in load_run_dirs(bench_results_dir)? {
        let meta_path = run_dir.join("meta.json");
        let meta: RunMeta = match fs::read_to_string(&meta_path)
            .with_context(|| format!("read {}", meta_path.display()))
            .and_then(|contents| serde_json::from_str(&contents).context("parse meta"))
        {
            Ok(meta) => meta,
            Err(err) => {
                warnings.push(format!(
                    "skip {}: meta.json invalid ({err})",
                    run_dir.display()
                ));
                continue;
            }
        };

        summary.runs += 1;
        match meta.matched {
            Some(true) => summary.matched += 1,
            Some(false) => summary.mismatched += 1,
            None => summary.unchecked += 1,
        }

        summary.avg_duration_secs = Some(match summary.avg_duration_secs {
            None => meta.duration_secs,
            Some(avg) => {
                let total = avg * (summary.runs as f64 - 1.0) + meta.duration_secs;
                total / summary.runs as f64
            }
        });

        let mode = match meta.mode {
            RunMode::InProcess => "in_process",
            RunMode::Binary => "binary",
        };
        *summary.runs_by_mode.entry(mode.to_string()).or_insert(0) += 1;
    }

    Ok((summary, warnings))
}
