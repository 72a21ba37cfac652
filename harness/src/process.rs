//! Spawning the standalone benchmark binaries with a timeout.
//!
//! Timing runs execute the real binaries rather than calling the
//! benchmark functions in-process, so the measured wall clock includes
//! process startup, the way these benchmarks are compared across
//! language implementations.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result, anyhow, bail};
use tracing::{debug, warn};
use wait_timeout::ChildExt;

/// Outcome of one timed binary run.
#[derive(Debug)]
pub struct TimedRun {
    pub exit_code: Option<i32>,
    pub stdout_lines: Vec<String>,
    pub duration: Duration,
}

/// Build the benchmark binary via cargo and return its path.
pub fn build_bench_binary(repo_root: &Path, bench_id: &str) -> Result<PathBuf> {
    debug!(bench_id, "building benchmark binary");
    let output = Command::new("cargo")
        .args(["build", "--release", "-p", "suite", "--bin", bench_id])
        .current_dir(repo_root)
        .output()
        .context("build benchmark binary")?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!("benchmark build failed: {}", stderr.trim());
    }
    Ok(bench_binary_path(repo_root, bench_id))
}

pub fn bench_binary_path(repo_root: &Path, bench_id: &str) -> PathBuf {
    let binary = format!("{bench_id}{}", std::env::consts::EXE_SUFFIX);
    repo_root.join("target").join("release").join(binary)
}

/// Run a benchmark binary once, bounded by `timeout`.
///
/// Stdout is drained on a separate thread while the child runs, so a
/// benchmark that prints more than the pipe buffer cannot deadlock.
pub fn run_bench_binary(binary: &Path, timeout: Duration) -> Result<TimedRun> {
    let mut cmd = Command::new(binary);
    cmd.stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null());

    let started = Instant::now();
    let mut child = cmd
        .spawn()
        .with_context(|| format!("spawn {}", binary.display()))?;

    let stdout = child
        .stdout
        .take()
        .ok_or_else(|| anyhow!("stdout was not piped"))?;
    let reader = thread::spawn(move || read_all(stdout));

    let status = match child.wait_timeout(timeout).context("wait for benchmark")? {
        Some(status) => status,
        None => {
            warn!(
                timeout_secs = timeout.as_secs(),
                "benchmark timed out, killing"
            );
            child.kill().context("kill benchmark")?;
            child.wait().context("wait benchmark after kill")?;
            bail!(
                "benchmark {} exceeded timeout of {}s",
                binary.display(),
                timeout.as_secs()
            );
        }
    };
    let duration = started.elapsed();

    let stdout = reader
        .join()
        .map_err(|_| anyhow!("stdout reader thread panicked"))?
        .context("read benchmark stdout")?;
    let stdout_lines = String::from_utf8(stdout)
        .context("benchmark stdout was not utf-8")?
        .lines()
        .map(str::to_string)
        .collect();

    debug!(exit_code = ?status.code(), duration_ms = duration.as_millis() as u64, "benchmark finished");
    Ok(TimedRun {
        exit_code: status.code(),
        stdout_lines,
        duration,
    })
}

fn read_all<R: Read>(mut reader: R) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf).context("read output")?;
    Ok(buf)
}
