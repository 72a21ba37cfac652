//! Evaluation harness for the deterministic benchmark suite.
//!
//! Drives the benchmarks in the `suite` crate: runs them in-process,
//! records and verifies reference outputs (the suite's one testable
//! property is exact output reproducibility), times the standalone
//! binaries, and aggregates per-benchmark results.
//!
//! - **[`manifest`]**: `benchmarks.toml` parsing and validation.
//! - **[`run`] / [`process`]**: in-process and subprocess execution.
//! - **[`verify`]**: line-by-line comparison against references.
//! - **[`results`] / [`report`]**: persistence and aggregation.

pub mod cli;
pub mod layout;
pub mod logging;
pub mod manifest;
pub mod process;
pub mod report;
pub mod results;
pub mod run;
pub mod verify;
