//! Benchmarks for the full event-driven voice.

mod voice;

pub use voice::bench_voice;
