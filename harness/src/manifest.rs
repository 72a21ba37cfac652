//! Benchmark manifest parsing and validation.
//!
//! The manifest (`harness/benchmarks.toml`) lists every benchmark under
//! verification together with its reference-output file. Ids must name
//! benchmarks registered in the suite.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use serde::Deserialize;

/// Parsed manifest: one entry per benchmark, sorted by id.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Manifest {
    #[serde(rename = "benchmark")]
    pub benchmarks: Vec<Entry>,
}

/// One manifest entry.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Entry {
    /// Benchmark id (slug format: `[a-z0-9_]+`), must be registered.
    pub id: String,
    /// Reference-output path, relative to the manifest's directory.
    pub expected: PathBuf,
}

impl Manifest {
    /// Load and validate the manifest at the given path.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("read manifest {}", path.display()))?;
        Self::parse_str(&contents).with_context(|| format!("parse manifest {}", path.display()))
    }

    pub fn parse_str(contents: &str) -> Result<Self> {
        let mut manifest: Manifest = toml::from_str(contents).context("parse manifest toml")?;
        manifest
            .benchmarks
            .sort_by(|left, right| left.id.cmp(&right.id));
        manifest.validate()?;
        Ok(manifest)
    }

    /// Find an entry by benchmark id.
    pub fn find(&self, id: &str) -> Option<&Entry> {
        self.benchmarks.iter().find(|entry| entry.id == id)
    }

    fn validate(&self) -> Result<()> {
        if self.benchmarks.is_empty() {
            bail!("manifest must list at least one benchmark");
        }
        for entry in &self.benchmarks {
            validate_id(&entry.id)?;
            if suite::find(&entry.id).is_none() {
                bail!("unknown benchmark id {}", entry.id);
            }
            if entry.expected.as_os_str().is_empty() {
                bail!("benchmark {} has an empty expected path", entry.id);
            }
            if entry.expected.is_absolute() {
                bail!("benchmark {} expected path must be relative", entry.id);
            }
        }
        for pair in self.benchmarks.windows(2) {
            if pair[0].id == pair[1].id {
                return Err(anyhow!("duplicate benchmark id {}", pair[0].id));
            }
        }
        Ok(())
    }
}

impl Entry {
    /// Absolute path of the reference-output file.
    pub fn expected_path(&self, manifest_dir: &Path) -> PathBuf {
        manifest_dir.join(&self.expected)
    }
}

fn validate_id(id: &str) -> Result<()> {
    if id.trim().is_empty() {
        bail!("benchmark id must be non-empty");
    }
    if !id
        .chars()
        .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '_')
    {
        bail!("benchmark id {} must use [a-z0-9_] only", id);
    }
    Ok(())
}
