//! Seven-oscillator detuned saw stack with its coefficient tables.
//!
//! The detune curve is a 12th order polynomial fit of a well-known hardware
//! supersaw's detune knob response, spread over seven fixed per-oscillator
//! offsets. The mix curves balance the centre oscillator against the six
//! side oscillators. Both are tabulated for the 128 knob positions once per
//! process.

use once_cell::sync::Lazy;

use std::f32::consts::PI;

use super::{clamp_unit, filter::StateVariableFilter, oscillator::wrap_phase};

pub const VOICES: usize = 7;
pub const TABLE_SIZE: usize = 128;

const OFFSETS: [f64; VOICES] = [
    0.0,
    0.01991221,
    -0.01952356,
    0.06216538,
    -0.06288439,
    0.10745242,
    -0.11002313,
];

const DETUNE_CURVE: [f64; 12] = [
    0.0030115596,
    0.6717417634,
    -24.1878824391,
    404.2703938388,
    -3425.0836591318,
    17019.9518580080,
    -53046.9642751875,
    106649.6679158292,
    -138150.6761080548,
    111363.4808729368,
    -50818.8652045924,
    10028.7312891634,
];

/// Damping of the output highpass (resonance 0.2).
const HIGHPASS_Q: f32 = 1.0 - 0.2;

static SHARED: Lazy<SupersawTables> = Lazy::new(|| {
    log::debug!("Building supersaw detune and mix tables");
    SupersawTables::build()
});

#[derive(Debug, Clone, PartialEq)]
pub struct SupersawTables {
    detune: [[f32; VOICES]; TABLE_SIZE],
    mix: [[f32; VOICES]; TABLE_SIZE],
}

impl SupersawTables {
    pub fn build() -> Self {
        let mut detune = [[0.0; VOICES]; TABLE_SIZE];
        let mut mix = [[0.0; VOICES]; TABLE_SIZE];

        for index in 0..TABLE_SIZE {
            let x = index as f64 / 127.0;
            let amount: f64 = DETUNE_CURVE
                .iter()
                .enumerate()
                .map(|(e, c)| c * x.powi(e as i32))
                .sum();

            mix[index][0] = (-0.55366 * x + 0.99785) as f32;
            for voice in 0..VOICES {
                detune[index][voice] = (1.0 + OFFSETS[voice] * amount) as f32;
                if voice > 0 {
                    mix[index][voice] = (-0.73764 * x * x + 1.2841 * x + 0.044372) as f32;
                }
            }
        }

        Self { detune, mix }
    }

    /// Tables shared by every session, built on first access.
    pub fn shared() -> &'static Self {
        &SHARED
    }

    #[inline]
    pub fn detune(&self, index: usize) -> &[f32; VOICES] {
        &self.detune[index]
    }

    #[inline]
    pub fn mix(&self, index: usize) -> &[f32; VOICES] {
        &self.mix[index]
    }
}

#[inline]
fn table_index(control: f32) -> usize {
    (127.0 * clamp_unit(control)) as usize
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Supersaw {
    phases: [f32; VOICES],
    highpass: StateVariableFilter,
}

impl Supersaw {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phases(&self) -> &[f32; VOICES] {
        &self.phases
    }

    /// `pitch` is a phase increment per sample; `detune` and `mix` are knob
    /// positions in `[0, 1]`.
    pub fn next_sample(
        &mut self,
        tables: &SupersawTables,
        pitch: f32,
        detune: f32,
        mix: f32,
    ) -> f32 {
        let detune = tables.detune(table_index(detune));
        let mix = tables.mix(table_index(mix));

        let mut sum = 0.0;
        for ((phase, ratio), weight) in self.phases.iter_mut().zip(detune).zip(mix) {
            sum += (1.0 + 2.0 * phase.sqrt()) * weight;
            *phase = wrap_phase(*phase + ratio * pitch);
        }

        let f = 2.0 * (PI * pitch).sin();
        self.highpass.step(sum, f, HIGHPASS_Q).highpass
    }
}
