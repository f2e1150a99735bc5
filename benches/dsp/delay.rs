//! Benchmarks for the fractional delay line.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use modsynth::dsp::delay::{DelayInputs, DelayLine, DelayMode};

use crate::{BLOCK_SIZES, SAMPLE_RATE};

pub fn bench_delay(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/delay");
    let capacity = (5.0 * SAMPLE_RATE) as usize;
    let default_loop = (3.0 * SAMPLE_RATE) as usize;
    let inputs = DelayInputs {
        time: 0.25 * SAMPLE_RATE + 0.5,
        loop_length: 0.0,
        feedback: 0.4,
    };

    for &size in BLOCK_SIZES {
        let input: Vec<f32> = (0..size).map(|i| if i == 0 { 1.0 } else { 0.0 }).collect();
        let mut buffer = vec![0.0f32; size];

        for mode in [DelayMode::Comb, DelayMode::Allpass] {
            let mut line = DelayLine::new(vec![0.0; capacity].into_boxed_slice(), default_loop);
            let id = BenchmarkId::new(format!("{mode:?}").to_lowercase(), size);
            group.bench_with_input(id, &size, |b, _| {
                b.iter(|| {
                    for (out, &x) in buffer.iter_mut().zip(&input) {
                        *out = line.next_sample(black_box(x), inputs, mode);
                    }
                })
            });
        }
    }

    group.finish();
}
