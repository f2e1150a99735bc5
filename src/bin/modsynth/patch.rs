//! Patch - a fixed, hard-wired demo patch
//!
//! Stands in for the patch graph engine: nodes are listed in evaluation
//! order and every input is either a constant or an earlier node's output.

use modsynth::{
    dsp::oscillator::{LfoWaveform, VcoWaveform},
    dsp::{delay::DelayMode, filter::FilterMode},
    Inputs, Kernel, ModuleInstance, ModuleKind,
};

/// Where one input of a node reads from
#[derive(Debug, Clone, Copy)]
pub enum Source {
    Unpatched,
    Constant(f32),
    /// Output of an earlier node
    Node(usize),
}

struct Node {
    instance: ModuleInstance,
    sources: [Source; 4],
}

/// Monophonic subtractive voice on one sequencer channel
pub struct Patch {
    channel: usize,
    nodes: Vec<Node>,
    outputs: Vec<f32>,
}

impl Patch {
    /// kbd -> VCO -> VCF (LFO on cutoff) -> amp (ENV) -> delay -> mixer -> output
    pub fn subtractive_voice(kernel: &Kernel, channel: usize) -> Self {
        let sr = kernel.config().sample_rate;
        let per_second = |seconds: f32| 1.0 / (seconds * sr);

        use Source::{Constant, Node as N, Unpatched};
        let layout: [(ModuleKind, f32, [Source; 4]); 9] = [
            (ModuleKind::Keyboard, 0.0, [Unpatched; 4]),
            (
                ModuleKind::Vco,
                VcoWaveform::Saw as u8 as f32,
                [N(0), Constant(0.5), Constant(0.3), Constant(0.02)],
            ),
            (
                ModuleKind::Lfo,
                LfoWaveform::Triangle as u8 as f32,
                [Constant(0.25 / sr), Constant(0.08), Constant(0.04), Unpatched],
            ),
            (
                ModuleKind::Vcf,
                FilterMode::Lowpass as u8 as f32,
                [N(1), N(2), Constant(0.6), Unpatched],
            ),
            (
                ModuleKind::Envelope,
                0.0,
                [
                    Constant(per_second(0.01)),
                    Constant(per_second(0.4)),
                    Constant(0.4),
                    Constant(per_second(0.3)),
                ],
            ),
            (ModuleKind::AmpMod, 0.0, [N(3), N(4), Unpatched, Unpatched]),
            (
                ModuleKind::Delay,
                DelayMode::Comb as u8 as f32,
                [N(5), Constant(0.375 * sr), Unpatched, Constant(0.35)],
            ),
            (ModuleKind::Mixer, 0.0, [N(5), N(6), Unpatched, Unpatched]),
            (ModuleKind::Output, 0.3, [N(7), Unpatched, Unpatched, Unpatched]),
        ];

        let nodes: Vec<Node> = layout
            .into_iter()
            .map(|(kind, modulator, sources)| Node {
                instance: kernel.create_instance(kind, modulator),
                sources,
            })
            .collect();

        Self {
            channel,
            outputs: vec![0.0; nodes.len()],
            nodes,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// One tick through every node; returns the last node's output
    pub fn tick(&mut self, kernel: &mut Kernel) -> f32 {
        for (index, node) in self.nodes.iter_mut().enumerate() {
            let mut inputs: Inputs = [0.0; 4];
            for (input, source) in inputs.iter_mut().zip(node.sources) {
                *input = match source {
                    Source::Unpatched => 0.0,
                    Source::Constant(value) => value,
                    Source::Node(from) => self.outputs[from],
                };
            }
            self.outputs[index] = kernel.evaluate(self.channel, &inputs, &mut node.instance);
        }
        self.outputs.last().copied().unwrap_or(0.0)
    }
}
