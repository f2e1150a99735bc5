use std::f32::consts::PI;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{clamp_unit, selector};

/*
| module | topology                    | slope     | taps                   |
| ------ | --------------------------- | --------- | ---------------------- |
| VCF    | two-integrator loop (Chamb.)| 12 dB/oct | low, high, band        |
| LPF    | 4 cascaded one-poles + fb   | 24 dB/oct | fourth pole only       |
| Slew   | single one-pole smoother    |  6 dB/oct | smoothed value         |

Cutoff and resonance on both resonant filters are normalised to [0, 1] and
clamped before use. Outside that range either topology can blow up, and once
a state word is NaN the instance never recovers.
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
pub enum FilterMode {
    Off,
    Lowpass,
    Highpass,
    Bandpass,
}

impl FilterMode {
    pub fn from_modulator(value: f32) -> Option<Self> {
        selector(value).and_then(Self::from_repr)
    }
}

pub struct FilterOutputs {
    pub lowpass: f32,
    pub highpass: f32,
    pub bandpass: f32,
}

/// 12 dB/oct state-variable filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StateVariableFilter {
    low: f32,
    high: f32,
    band: f32,
}

impl StateVariableFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the filter with an already computed frequency coefficient
    /// `f` and damping `q`.
    #[inline]
    pub fn step(&mut self, input: f32, f: f32, q: f32) -> FilterOutputs {
        let r = q.sqrt();
        self.low += f * self.band;
        self.high = r * input - self.low - q * self.band;
        self.band += f * self.high;

        FilterOutputs {
            lowpass: self.low,
            highpass: self.high,
            bandpass: self.band,
        }
    }

    pub fn next_sample(
        &mut self,
        input: f32,
        cutoff: f32,
        resonance: f32,
        mode: Option<FilterMode>,
    ) -> f32 {
        let cutoff = clamp_unit(cutoff);
        let resonance = clamp_unit(resonance);

        let f = 2.0 * (PI * cutoff).sin();
        let q = 1.0 - resonance;
        let outputs = self.step(input, f, q);

        match mode {
            Some(FilterMode::Off) => input,
            Some(FilterMode::Lowpass) => outputs.lowpass,
            Some(FilterMode::Highpass) => outputs.highpass,
            Some(FilterMode::Bandpass) => outputs.bandpass,
            None => 0.0,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Four-pole resonant lowpass in double precision.
///
/// Each pole keeps its own output and the previous value of its input.
/// Full resonance self-oscillates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LadderFilter {
    poles: [f64; 4],
    previous: [f64; 4],
}

impl LadderFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_sample(&mut self, input: f32, cutoff: f32, resonance: f32) -> f32 {
        let cutoff = clamp_unit(cutoff) as f64;
        let resonance = clamp_unit(resonance) as f64;

        let f = cutoff * 1.16 * 3.0;
        let feedback = resonance * 4.0 * (1.0 - 0.15 * f * f);
        let mut x = input as f64 - self.poles[3] * feedback;
        x *= 0.35013 * (f * f) * (f * f);

        for (pole, previous) in self.poles.iter_mut().zip(self.previous.iter_mut()) {
            let y = x + 0.3 * *previous + (1.0 - f) * *pole;
            *previous = x;
            *pole = y;
            x = y;
        }

        self.poles[3] as f32
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

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
pub enum SlewMode {
    Linear,
    Logarithmic,
}

impl SlewMode {
    /// Any non-zero selector picks the logarithmic mapping.
    pub fn from_modulator(value: f32) -> Self {
        if value as i32 != 0 {
            Self::Logarithmic
        } else {
            Self::Linear
        }
    }

    #[inline]
    pub fn coefficient(self, rate: f32) -> f32 {
        match self {
            Self::Linear => rate,
            Self::Logarithmic => -(1.0 - rate).log2(),
        }
    }
}

/// One-pole smoother used for glide/portamento.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlewLimiter {
    state: f64,
}

impl SlewLimiter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> f32 {
        self.state as f32
    }

    pub fn next_sample(&mut self, input: f32, rate: f32, mode: SlewMode) -> f32 {
        // log mode diverges as rate approaches 1; left unclamped
        let k = mode.coefficient(rate);
        let out = input * k + self.state as f32 * (1.0 - k);
        self.state = out as f64;
        out
    }

    pub fn reset(&mut self) {
        self.state = 0.0;
    }
}
