//! Benchmarks for the ADSR and the envelope follower.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use modsynth::dsp::envelope::{Adsr, AdsrInputs, EnvelopeFollower};

use crate::{BLOCK_SIZES, SAMPLE_RATE};

pub fn bench_envelope(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/envelope");
    let inputs = AdsrInputs {
        attack: 1.0 / (0.01 * SAMPLE_RATE),
        decay: 1.0 / (0.1 * SAMPLE_RATE),
        sustain: 0.6,
        release: 1.0 / (0.2 * SAMPLE_RATE),
    };

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        // Gate held: attack into decay into sustain
        let mut adsr = Adsr::new();
        group.bench_with_input(BenchmarkId::new("adsr_gate_on", size), &size, |b, _| {
            b.iter(|| {
                for sample in buffer.iter_mut() {
                    *sample = adsr.next_sample(black_box(true), inputs);
                }
            })
        });

        let mut adsr = Adsr::new();
        group.bench_with_input(BenchmarkId::new("adsr_release", size), &size, |b, _| {
            b.iter(|| {
                for sample in buffer.iter_mut() {
                    *sample = adsr.next_sample(black_box(false), inputs);
                }
            })
        });

        let input: Vec<f32> = (0..size).map(|i| ((i % 32) as f32 / 16.0) - 1.0).collect();
        // durations in samples, the follower derives its own coefficients
        let attack = 0.005 * SAMPLE_RATE;
        let release = 0.1 * SAMPLE_RATE;
        let mut follower = EnvelopeFollower::new();
        group.bench_with_input(BenchmarkId::new("follower", size), &size, |b, _| {
            b.iter(|| {
                for (out, &x) in buffer.iter_mut().zip(&input) {
                    *out = follower.next_sample(black_box(x), attack, release);
                }
            })
        });
    }

    group.finish();
}
