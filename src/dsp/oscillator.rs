//! Phase-accumulating oscillators: the audio-rate VCO and the LFO.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use std::f32::consts::TAU;

use super::{noise::NoiseGenerator, selector};

/*
Phase Accumulators
==================

Every oscillator here is built on the same primitive: a phase value in
[0, 1) that grows by a fixed increment per sample and wraps around.

  increment   Frequency as a fraction of the sample rate. The keyboard CV
              module already outputs pitch / sample_rate, so a VCO patched
              straight from it advances by exactly one cycle per period.

  wrap        phase -= floor(phase). Works for negative increments too, so
              "through-zero" modulation never leaves the [0, 1) range.

The VCO evaluates its waveform from the current phase and only then
advances, so a freshly created (or hard-synced) oscillator starts every
note exactly at phase 0:

    tick 1:  out = f(0.0)          phase -> inc
    tick 2:  out = f(inc)          phase -> 2 * inc
    ...

Sub-oscillator
--------------

A second accumulator runs at half the increment and produces a pulse one
octave down. It shares the pulse-width input with the main pulse shape:

    sub = (pw < sub_phase) ? -1 : +1

Noise
-----

Noise does not come from the oscillator itself but from the session noise
generator, which every VCO tick advances once. See `dsp/noise.rs`.
*/

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum::Display,
    strum::EnumIter,
    strum::EnumCount,
    strum::FromRepr,
    strum::VariantNames,
)]
#[repr(u8)]
pub enum VcoWaveform {
    Pulse,
    Saw,
    Triangle,
    Sine,
}

impl VcoWaveform {
    pub fn from_modulator(value: f32) -> Option<Self> {
        selector(value).and_then(Self::from_repr)
    }

    /// Shape value for `phase` in `[0, 1)`, with `pulse_width` used by the
    /// pulse shape only.
    #[inline]
    pub fn shape(self, phase: f32, pulse_width: f32) -> f32 {
        match self {
            Self::Pulse => {
                if phase < pulse_width {
                    -1.0
                } else {
                    1.0
                }
            }
            Self::Saw => phase * 2.0 - 1.0,
            Self::Triangle => {
                if phase < 0.75 {
                    1.0 - (phase * 4.0 - 1.0).abs()
                } else {
                    1.0 - (phase * 4.0 - 5.0).abs()
                }
            }
            Self::Sine => (TAU * phase).sin(),
        }
    }
}

/// LFO shapes. All of them are unipolar (0..1) before amplitude and bias.
///
/// `Square` and `Saw` produce real waveforms. Older patches that selected
/// them only ever got the bias input back, so those patches now modulate.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum::Display,
    strum::EnumIter,
    strum::EnumCount,
    strum::FromRepr,
    strum::VariantNames,
)]
#[repr(u8)]
pub enum LfoWaveform {
    Square,
    Saw,
    Triangle,
    Sine,
}

impl LfoWaveform {
    pub fn from_modulator(value: f32) -> Option<Self> {
        selector(value).and_then(Self::from_repr)
    }

    #[inline]
    pub fn shape(self, phase: f32) -> f32 {
        match self {
            Self::Square => {
                if phase < 0.5 {
                    1.0
                } else {
                    0.0
                }
            }
            Self::Saw => phase,
            Self::Triangle => {
                let out = 2.0 * phase;
                if out > 1.0 {
                    2.0 - out
                } else {
                    out
                }
            }
            // inverted cosine, starts at 0 like the other shapes
            Self::Sine => -0.5 * ((TAU * phase).cos() - 1.0),
        }
    }
}

#[inline]
pub(crate) fn wrap_phase(phase: f32) -> f32 {
    let wrapped = phase - phase.floor();
    // tiny negative phases round up to exactly 1.0
    if wrapped >= 1.0 {
        0.0
    } else {
        wrapped
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VcoInputs {
    /// Phase increment per sample (frequency / sample rate).
    pub frequency: f32,
    pub pulse_width: f32,
    pub sub_level: f32,
    pub noise_level: f32,
}

/// Audio-rate oscillator with a -1 octave pulse sub-oscillator and noise.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vco {
    phase: f32,
    sub_phase: f32,
}

impl Vco {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> f32 {
        self.phase
    }

    pub fn sub_phase(&self) -> f32 {
        self.sub_phase
    }

    /// Hard sync: both accumulators back to zero.
    pub fn restart(&mut self) {
        self.phase = 0.0;
        self.sub_phase = 0.0;
    }

    pub fn next_sample(
        &mut self,
        inputs: VcoInputs,
        waveform: Option<VcoWaveform>,
        noise: &mut NoiseGenerator,
    ) -> f32 {
        let mut out = waveform.map_or(0.0, |w| w.shape(self.phase, inputs.pulse_width));

        out += inputs.sub_level
            * if inputs.pulse_width < self.sub_phase {
                -1.0
            } else {
                1.0
            };
        out += inputs.noise_level * noise.next_sample();

        self.phase = wrap_phase(self.phase + inputs.frequency);
        self.sub_phase = wrap_phase(self.sub_phase + inputs.frequency / 2.0);

        out
    }
}

/// Control-rate oscillator. Output is `shape(phase) * amplitude + bias`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Lfo {
    phase: f32,
}

impl Lfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> f32 {
        self.phase
    }

    pub fn restart(&mut self) {
        self.phase = 0.0;
    }

    pub fn next_sample(
        &mut self,
        frequency: f32,
        amplitude: f32,
        bias: f32,
        waveform: Option<LfoWaveform>,
    ) -> f32 {
        self.phase = wrap_phase(self.phase + frequency);
        let out = waveform.map_or(0.0, |w| w.shape(self.phase));
        out * amplitude + bias
    }
}
