//! Benchmarks for distortion and bitcrushing.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use modsynth::dsp::distortion::{bitcrush, distort};

use crate::BLOCK_SIZES;

pub fn bench_distortion(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/distortion");

    for &size in BLOCK_SIZES {
        let input: Vec<f32> = (0..size)
            .map(|i| (i as f32 / size as f32 * std::f32::consts::TAU).sin())
            .collect();
        let mut buffer = vec![0.0f32; size];

        group.bench_with_input(BenchmarkId::new("clip", size), &size, |b, _| {
            b.iter(|| {
                for (out, &x) in buffer.iter_mut().zip(&input) {
                    *out = distort(black_box(x), 4.0);
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("bitcrush", size), &size, |b, _| {
            b.iter(|| {
                for (out, &x) in buffer.iter_mut().zip(&input) {
                    *out = bitcrush(black_box(x), 0.9);
                }
            })
        });
    }

    group.finish();
}
