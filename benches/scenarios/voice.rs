//! Whole-engine benchmark: event drain plus block render, the exact work
//! one audio callback performs.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use monovox::synth::{Event, Synthesizer};

use crate::BLOCK_SIZES;

pub fn bench_voice(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/voice");

    for &size in BLOCK_SIZES {
        let (mut synth, mut tx) = Synthesizer::new(48_000);
        tx.push(Event::NoteOn {
            frequency: 440.0,
            amplitude: 1.0,
        });
        let mut out = vec![0.0f32; size];

        // Sustained note, no pending events: the steady-state callback.
        group.bench_with_input(BenchmarkId::new("sustained", size), &size, |b, _| {
            b.iter(|| {
                synth.process(black_box(&mut out), &[]).unwrap();
            })
        });

        // One retrigger per block: drain cost on top of rendering.
        group.bench_with_input(BenchmarkId::new("retriggered", size), &size, |b, _| {
            b.iter(|| {
                tx.push(Event::NoteOn {
                    frequency: 440.0,
                    amplitude: 1.0,
                });
                synth.process(black_box(&mut out), &[]).unwrap();
            })
        });
    }

    group.finish();
}
