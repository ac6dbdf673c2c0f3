//! Benchmarks for the one-pole low-pass filter.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use monovox::dsp::filter::OnePole;
use monovox::dsp::oscillator::Oscillator;

use crate::BLOCK_SIZES;

pub fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/filter");
    let sample_rate = 48_000.0;

    for &size in BLOCK_SIZES {
        let mut osc = Oscillator::sine(sample_rate);
        osc.set_frequency(440.0);
        let input: Vec<f32> = (0..size).map(|_| osc.tick()).collect();
        let mut output = vec![0.0f32; size];

        let mut filter = OnePole::lowpass(1_000.0, sample_rate);
        group.bench_with_input(BenchmarkId::new("lowpass", size), &size, |b, _| {
            b.iter(|| {
                for (out, &x) in output.iter_mut().zip(&input) {
                    *out = filter.tick(black_box(x));
                }
                black_box(&mut output);
            })
        });
    }

    group.finish();
}
