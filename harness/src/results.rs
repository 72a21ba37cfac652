//! Result capture and persistence.
//!
//! Each run writes its output lines and a `meta.json` under
//! `harness/results/<bench_id>/<run_id>/` for later aggregation.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use rand::{Rng, distributions::Alphanumeric};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::debug;

/// How a run was executed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RunMode {
    /// Benchmark function called directly in the harness process.
    InProcess,
    /// Standalone benchmark binary spawned as a subprocess.
    Binary,
}

/// Metadata for one run, persisted to `meta.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunMeta {
    pub bench_id: String,
    pub run_id: String,
    pub mode: RunMode,
    /// SHA-256 of the newline-joined output.
    pub output_sha256: String,
    pub output_lines: usize,
    /// Whether the output matched the reference, when one was available.
    pub matched: Option<bool>,
    pub start_time: String,
    pub end_time: String,
    pub duration_secs: f64,
    /// Exit code of the benchmark binary; `None` for in-process runs.
    pub exit_code: Option<i32>,
}

/// Unique id for a run: timestamp plus a random suffix.
pub fn generate_run_id() -> String {
    let timestamp = Utc::now().format("%Y%m%d_%H%M%S");
    let mut rng = rand::thread_rng();
    let suffix: String = std::iter::repeat_with(|| rng.sample(Alphanumeric))
        .map(char::from)
        .take(6)
        .collect::<String>()
        .to_lowercase();
    format!("run-{timestamp}-{suffix}")
}

pub fn results_dir(base_dir: &Path, bench_id: &str, run_id: &str) -> PathBuf {
    base_dir.join(bench_id).join(run_id)
}

/// SHA-256 digest of the newline-joined (and newline-terminated) lines.
pub fn output_sha256(lines: &[String]) -> String {
    let mut hasher = Sha256::new();
    for line in lines {
        hasher.update(line.as_bytes());
        hasher.update(b"\n");
    }
    hex::encode(hasher.finalize())
}

/// Persist a run: `output.txt` plus `meta.json`. Returns the run directory.
pub fn capture(base_dir: &Path, meta: &RunMeta, lines: &[String]) -> Result<PathBuf> {
    let dir = results_dir(base_dir, &meta.bench_id, &meta.run_id);
    fs::create_dir_all(&dir).with_context(|| format!("create results dir {}", dir.display()))?;

    let output = join_lines(lines);
    fs::write(dir.join("output.txt"), output)
        .with_context(|| format!("write output {}", dir.display()))?;
    write_meta(&dir.join("meta.json"), meta)?;

    debug!(results_dir = %dir.display(), "run captured");
    Ok(dir)
}

pub fn write_meta(path: &Path, meta: &RunMeta) -> Result<()> {
    let contents = serde_json::to_string_pretty(meta).context("serialize meta")?;
    fs::write(path, format!("{contents}\n"))
        .with_context(|| format!("write meta {}", path.display()))?;
    Ok(())
}

/// Join output lines with a trailing newline, the format the standalone
/// binaries produce and the reference files store.
pub fn join_lines(lines: &[String]) -> String {
    let mut joined = lines.join("\n");
    joined.push('\n');
    joined
}
