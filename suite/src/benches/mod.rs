//! Benchmark implementations.
//!
//! Each module exposes `run() -> Vec<String>`: the exact lines the
//! benchmark's standalone binary prints. Accumulators are `i64` and
//! stay far from overflow by construction (operands are small and the
//! hot accumulators are rebounded by modulo where the totals could
//! otherwise grow).

pub mod array_ops;
pub mod function_calls;
pub mod nested_loops;
