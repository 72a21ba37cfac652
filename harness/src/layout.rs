//! On-disk layout of harness files relative to the repository root.

use std::path::{Path, PathBuf};

/// Resolved locations of the manifest, reference outputs, and results.
#[derive(Debug, Clone)]
pub struct Layout {
    /// `harness/` directory; reference paths in the manifest are
    /// relative to this.
    pub harness_dir: PathBuf,
    /// `harness/results/`.
    pub results_dir: PathBuf,
    /// `harness/benchmarks.toml`.
    pub manifest_path: PathBuf,
}

impl Layout {
    pub fn at(repo_root: &Path) -> Self {
        let harness_dir = repo_root.join("harness");
        Self {
            results_dir: harness_dir.join("results"),
            manifest_path: harness_dir.join("benchmarks.toml"),
            harness_dir,
        }
    }
}
