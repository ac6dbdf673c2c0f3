//! Benchmarks for the oscillator waveforms.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use monovox::dsp::oscillator::{Oscillator, Waveform};

use crate::BLOCK_SIZES;

pub fn bench_oscillator(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/oscillator");

    for waveform in [
        Waveform::Sine,
        Waveform::Saw,
        Waveform::Square,
        Waveform::Triangle,
    ] {
        for &size in BLOCK_SIZES {
            let mut osc = Oscillator::new(waveform, 48_000.0);
            osc.set_frequency(440.0);
            let mut buffer = vec![0.0f32; size];

            let name = format!("{waveform:?}").to_lowercase();
            group.bench_with_input(BenchmarkId::new(name, size), &size, |b, _| {
                b.iter(|| {
                    for sample in buffer.iter_mut() {
                        *sample = osc.tick();
                    }
                    black_box(&mut buffer);
                })
            });
        }
    }

    group.finish();
}
