//! Benchmark harness for colour-rs. See `benches/colour_bench.rs`.
