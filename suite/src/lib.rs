//! Deterministic micro-benchmark suite.
//!
//! Eleven isolated benchmarks, each exercising one language-feature
//! category. A benchmark is a pure function: it seeds its own generator
//! (when it draws random inputs at all), loops a fixed number of times,
//! and returns its output lines. The standalone binaries under
//! `src/bin/` print those lines and nothing else, so a benchmark's
//! stdout is exactly reproducible for a given seed and iteration count.
//!
//! - **[`benches`]**: the benchmark implementations. Pure, infallible,
//!   no I/O.
//! - **[`rng`]**: the shared xorshift64* generator.
//!
//! The `harness` crate drives these through the [`BENCHMARKS`] registry.

pub mod benches;
pub mod rng;

use serde::Serialize;

/// Static descriptor for one benchmark.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Benchmark {
    /// Slug identifier; also the name of the standalone binary.
    pub id: &'static str,
    /// One-line description of what the benchmark exercises.
    pub summary: &'static str,
    /// RNG seed, for benchmarks that draw random inputs.
    pub seed: Option<u64>,
    /// Main loop iteration count.
    pub iterations: u64,
    /// The benchmark body; returns the exact stdout lines.
    #[serde(skip)]
    pub run: fn() -> Vec<String>,
}

/// All benchmarks, sorted by id.
pub const BENCHMARKS: &[Benchmark] = &[
    Benchmark {
        id: "arithmetic",
        summary: "mixed integer arithmetic on random operand pairs",
        seed: Some(rng::DEFAULT_SEED),
        iterations: 100_000,
        run: benches::arithmetic::run,
    },
    Benchmark {
        id: "array_ops",
        summary: "random indexed reads and writes against a ten-slot array",
        seed: Some(rng::DEFAULT_SEED),
        iterations: 50_000,
        run: benches::array_ops::run,
    },
    Benchmark {
        id: "function_calls",
        summary: "call overhead: helpers, array passing, bounded recursion",
        seed: Some(rng::DEFAULT_SEED),
        iterations: 10_000,
        run: benches::function_calls::run,
    },
    Benchmark {
        id: "math_intensive",
        summary: "trial-division primality, Euclidean gcd, modular arithmetic",
        seed: Some(rng::DEFAULT_SEED),
        iterations: 4_999,
        run: benches::math_intensive::run,
    },
    Benchmark {
        id: "memory_alloc",
        summary: "vector allocation and concatenation of random sizes",
        seed: Some(rng::DEFAULT_SEED),
        iterations: 1_000,
        run: benches::memory_alloc::run,
    },
    Benchmark {
        id: "nested_loops",
        summary: "two-level loop overhead with a modulo-bounded accumulator",
        seed: None,
        iterations: 1_000,
        run: benches::nested_loops::run,
    },
    Benchmark {
        id: "option_ops",
        summary: "Option construction and matching on random values",
        seed: Some(rng::DEFAULT_SEED),
        iterations: 50_000,
        run: benches::option_ops::run,
    },
    Benchmark {
        id: "ref_ops",
        summary: "record mutation through a mutable reference",
        seed: None,
        iterations: 10_000,
        run: benches::ref_ops::run,
    },
    Benchmark {
        id: "result_ops",
        summary: "guarded division returning Result, matched per iteration",
        seed: Some(rng::DEFAULT_SEED),
        iterations: 50_000,
        run: benches::result_ops::run,
    },
    Benchmark {
        id: "string_ops",
        summary: "string concatenation and length tracking",
        seed: Some(rng::DEFAULT_SEED),
        iterations: 5_000,
        run: benches::string_ops::run,
    },
    Benchmark {
        id: "tuple_ops",
        summary: "tuple creation/access plus array slicing and concatenation",
        seed: None,
        iterations: 10_000,
        run: benches::tuple_ops::run,
    },
];

/// Look up a benchmark by id.
pub fn find(id: &str) -> Option<&'static Benchmark> {
    BENCHMARKS.iter().find(|bench| bench.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_is_sorted_by_unique_id() {
        for pair in BENCHMARKS.windows(2) {
            assert!(pair[0].id < pair[1].id, "{} >= {}", pair[0].id, pair[1].id);
        }
    }

    #[test]
    fn find_known_and_unknown() {
        assert!(find("arithmetic").is_some());
        assert!(find("no_such_bench").is_none());
    }

    #[test]
    fn ids_are_slugs() {
        for bench in BENCHMARKS {
            assert!(
                bench
                    .id
                    .chars()
                    .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '_'),
                "bad id {}",
                bench.id
            );
        }
    }
}
