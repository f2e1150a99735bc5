//! Per-sample transfer functions behind every module kind.
//!
//! These components are allocation-free and realtime-safe: each one owns only
//! the persistent state its module kind needs and does its work in a single
//! `next_sample` call. Dispatch from module kinds to these routines lives in
//! `engine::dispatch`.
//!
//! Behaviour change: the LFO square and saw shapes now generate waveforms.
//! They used to output just the bias, so patches relying on that sound
//! different.

/// Multiplication based modules (amp mod, scaler, output).
pub mod amplify;
/// Keyboard, modulator tap, knob and accent sources.
pub mod cv;
/// Fractional delay line with comb and allpass modes.
pub mod delay;
/// Clipping distortion and bitcrusher.
pub mod distortion;
/// Linear gate-driven ADSR and the envelope follower.
pub mod envelope;
/// State-variable, ladder and slew filters.
pub mod filter;
pub mod mix;
pub mod noise;
/// VCO and LFO.
pub mod oscillator;
pub mod sample_hold;
/// Seven-voice supersaw and its coefficient tables.
pub mod supersaw;

pub use envelope::{Adsr, EnvelopeFollower};
pub use noise::NoiseGenerator;
pub use supersaw::SupersawTables;

/// Clamp to `[0, 1]`. NaN maps to 1.
#[inline]
pub(crate) fn clamp_unit(value: f32) -> f32 {
    value.min(1.0).max(0.0)
}

/// Truncates a modulator value to an option index.
#[inline]
pub(crate) fn selector(value: f32) -> Option<u8> {
    u8::try_from(value as i32).ok()
}
