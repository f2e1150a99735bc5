//! Benchmarks for the state-variable, ladder and slew filters.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use modsynth::dsp::filter::{FilterMode, LadderFilter, SlewLimiter, SlewMode, StateVariableFilter};

use crate::BLOCK_SIZES;

pub fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/filter");

    for &size in BLOCK_SIZES {
        // Generate a test signal (sawtooth-like ramp)
        let input: Vec<f32> = (0..size)
            .map(|i| (i as f32 / size as f32) * 2.0 - 1.0)
            .collect();
        let mut buffer = vec![0.0f32; size];

        for mode in [FilterMode::Lowpass, FilterMode::Highpass, FilterMode::Bandpass] {
            let mut filter = StateVariableFilter::new();
            let id = BenchmarkId::new(format!("vcf_{mode}").to_lowercase(), size);
            group.bench_with_input(id, &size, |b, _| {
                b.iter(|| {
                    for (out, &x) in buffer.iter_mut().zip(&input) {
                        *out = filter.next_sample(black_box(x), 0.1, 0.5, Some(mode));
                    }
                })
            });
        }

        // 24 dB ladder, computed in f64
        let mut ladder = LadderFilter::new();
        group.bench_with_input(BenchmarkId::new("lpf24", size), &size, |b, _| {
            b.iter(|| {
                for (out, &x) in buffer.iter_mut().zip(&input) {
                    *out = ladder.next_sample(black_box(x), 0.2, 0.6);
                }
            })
        });

        let mut slew = SlewLimiter::new();
        group.bench_with_input(BenchmarkId::new("slew_log", size), &size, |b, _| {
            b.iter(|| {
                for (out, &x) in buffer.iter_mut().zip(&input) {
                    *out = slew.next_sample(black_box(x), 0.05, SlewMode::Logarithmic);
                }
            })
        });
    }

    group.finish();
}
