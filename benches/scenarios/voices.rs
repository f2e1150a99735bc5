//! Benchmarks for complete patches run through the kernel.
//!
//! Each patch is a list of module instances with fixed wiring, evaluated in
//! order once per sample the way a graph evaluator would.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use modsynth::{
    module::ModuleKind, ChannelCommand, Inputs, Kernel, KernelConfig, ModuleInstance,
    RestartFlags,
};

use crate::{BLOCK_SIZES, SAMPLE_RATE};

/// Input wiring: `Some(i)` reads node `i`, `None` reads the constant.
type Wire = (Option<usize>, f32);

const OPEN: Wire = (None, 0.0);

struct BenchPatch {
    nodes: Vec<(ModuleInstance, [Wire; 4])>,
    outputs: Vec<f32>,
}

impl BenchPatch {
    fn new(kernel: &Kernel, layout: &[(ModuleKind, f32, [Wire; 4])]) -> Self {
        Self {
            nodes: layout
                .iter()
                .map(|&(kind, modulator, wires)| (kernel.create_instance(kind, modulator), wires))
                .collect(),
            outputs: vec![0.0; layout.len()],
        }
    }

    fn render(&mut self, kernel: &mut Kernel, buffer: &mut [f32]) {
        for sample in buffer.iter_mut() {
            for (index, (instance, wires)) in self.nodes.iter_mut().enumerate() {
                let mut inputs: Inputs = [0.0; 4];
                for (input, &(from, value)) in inputs.iter_mut().zip(wires.iter()) {
                    *input = from.map_or(value, |i| self.outputs[i]);
                }
                self.outputs[index] = kernel.evaluate(0, black_box(&inputs), instance);
            }
            *sample = self.outputs[self.outputs.len() - 1];
        }
    }
}

fn kernel_with_note() -> Kernel {
    let mut kernel = Kernel::new(KernelConfig::new(SAMPLE_RATE, 4)).expect("valid config");
    kernel
        .channels_mut()
        .apply(ChannelCommand::NoteOn {
            channel: 0,
            pitch: 110.0, // A2, typical bass note
            accent: false,
            restart: RestartFlags::NONE,
        })
        .expect("channel 0 exists");
    kernel
}

pub fn bench_voices(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/voices");
    let ramp = |seconds: f32| 1.0 / (seconds * SAMPLE_RATE);

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        // === SIMPLE VOICE ===
        // kbd -> saw VCO -> VCF lowpass, amp by ENV, output
        let mut kernel = kernel_with_note();
        let mut lead = BenchPatch::new(
            &kernel,
            &[
                (ModuleKind::Keyboard, 0.0, [OPEN; 4]),
                (ModuleKind::Vco, 1.0, [(Some(0), 0.0), (None, 0.5), OPEN, OPEN]),
                (ModuleKind::Vcf, 1.0, [(Some(1), 0.0), (None, 0.1), (None, 0.5), OPEN]),
                (
                    ModuleKind::Envelope,
                    0.0,
                    [(None, ramp(0.01)), (None, ramp(0.1)), (None, 0.6), (None, ramp(0.2))],
                ),
                (ModuleKind::AmpMod, 0.0, [(Some(2), 0.0), (Some(3), 0.0), OPEN, OPEN]),
                (ModuleKind::Output, 0.5, [(Some(4), 0.0), OPEN, OPEN, OPEN]),
            ],
        );
        group.bench_with_input(BenchmarkId::new("lead", size), &size, |b, _| {
            b.iter(|| lead.render(&mut kernel, black_box(&mut buffer)))
        });

        // === SUPERSAW PAD ===
        // supersaw -> LPF24 with LFO sweep -> slew smoothed output
        let mut kernel = kernel_with_note();
        let mut pad = BenchPatch::new(
            &kernel,
            &[
                (ModuleKind::Keyboard, 0.0, [OPEN; 4]),
                (ModuleKind::Supersaw, 0.0, [(Some(0), 0.0), (None, 0.6), (None, 0.8), OPEN]),
                (ModuleKind::Lfo, 3.0, [(None, 0.3 / SAMPLE_RATE), (None, 0.2), (None, 0.1), OPEN]),
                (ModuleKind::Lpf, 0.0, [(Some(1), 0.0), (Some(2), 0.0), (None, 0.4), OPEN]),
                (ModuleKind::Output, 0.5, [(Some(3), 0.0), OPEN, OPEN, OPEN]),
            ],
        );
        group.bench_with_input(BenchmarkId::new("supersaw_pad", size), &size, |b, _| {
            b.iter(|| pad.render(&mut kernel, black_box(&mut buffer)))
        });

        // === DELAY CHAIN ===
        // noisy pulse -> bitcrush -> distortion -> allpass delay
        let mut kernel = kernel_with_note();
        let mut fx = BenchPatch::new(
            &kernel,
            &[
                (ModuleKind::Keyboard, 0.0, [OPEN; 4]),
                (ModuleKind::Vco, 0.0, [(Some(0), 0.0), (None, 0.3), (None, 0.5), (None, 0.2)]),
                (ModuleKind::Bitcrusher, 0.0, [(Some(1), 0.0), (None, 0.95), OPEN, OPEN]),
                (ModuleKind::Distortion, 0.0, [(Some(2), 0.0), (None, 3.0), OPEN, OPEN]),
                (
                    ModuleKind::Delay,
                    1.0,
                    [(Some(3), 0.0), (None, 0.2 * SAMPLE_RATE), OPEN, (None, 0.5)],
                ),
                (ModuleKind::Output, 0.5, [(Some(4), 0.0), OPEN, OPEN, OPEN]),
            ],
        );
        group.bench_with_input(BenchmarkId::new("fx_chain", size), &size, |b, _| {
            b.iter(|| fx.render(&mut kernel, black_box(&mut buffer)))
        });
    }

    group.finish();
}
