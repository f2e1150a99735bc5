//! Benchmarks for VCO, LFO and supersaw generation.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use modsynth::dsp::{
    noise::NoiseGenerator,
    oscillator::{Lfo, LfoWaveform, Vco, VcoInputs, VcoWaveform},
    supersaw::{Supersaw, SupersawTables},
};

use crate::{BLOCK_SIZES, SAMPLE_RATE};

pub fn bench_oscillator(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/oscillator");
    let inputs = VcoInputs {
        frequency: 440.0 / SAMPLE_RATE,
        pulse_width: 0.5,
        sub_level: 0.0,
        noise_level: 0.0,
    };

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        for waveform in [
            VcoWaveform::Sine,
            VcoWaveform::Saw,
            VcoWaveform::Pulse,
            VcoWaveform::Triangle,
        ] {
            let mut vco = Vco::new();
            let mut noise = NoiseGenerator::new();
            let id = BenchmarkId::new(format!("vco_{waveform}").to_lowercase(), size);
            group.bench_with_input(id, &size, |b, _| {
                b.iter(|| {
                    for sample in buffer.iter_mut() {
                        *sample = vco.next_sample(black_box(inputs), Some(waveform), &mut noise);
                    }
                })
            });
        }

        // Sub and noise on: the full VCO path
        let mut vco = Vco::new();
        let mut noise = NoiseGenerator::new();
        let full = VcoInputs {
            sub_level: 0.5,
            noise_level: 0.1,
            ..inputs
        };
        group.bench_with_input(BenchmarkId::new("vco_sub_noise", size), &size, |b, _| {
            b.iter(|| {
                for sample in buffer.iter_mut() {
                    *sample = vco.next_sample(black_box(full), Some(VcoWaveform::Saw), &mut noise);
                }
            })
        });

        let mut lfo = Lfo::new();
        group.bench_with_input(BenchmarkId::new("lfo_sine", size), &size, |b, _| {
            b.iter(|| {
                for sample in buffer.iter_mut() {
                    *sample = lfo.next_sample(
                        black_box(2.0 / SAMPLE_RATE),
                        1.0,
                        0.0,
                        Some(LfoWaveform::Sine),
                    );
                }
            })
        });

        // Seven voices, sqrt per voice and a highpass
        let tables = SupersawTables::shared();
        let mut saw = Supersaw::new();
        group.bench_with_input(BenchmarkId::new("supersaw", size), &size, |b, _| {
            b.iter(|| {
                for sample in buffer.iter_mut() {
                    *sample = saw.next_sample(tables, black_box(110.0 / SAMPLE_RATE), 0.5, 0.7);
                }
            })
        });
    }

    group.finish();
}
