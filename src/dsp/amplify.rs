//! Multiplication-based modules: amplitude modulator, scaler and output.

/*
Signal Multiplication
=====================

Three catalogue entries are the same operation with a different second
operand:

    amp mod   out = in × control          (two patched signals)
    scale     out = in × modulator        (fixed knob value)
    output    out = in × modulator        (fixed output level)

Amplitude modulation by an envelope (0 to 1) shapes loudness over time.
By a slow LFO it becomes tremolo. By another audio-rate oscillator it
becomes a ring modulator: the result contains the sum and difference
frequencies of the two inputs instead of either original.

The output module is the only place a signal leaves the patch towards the
master mixer; it is a scaler whose modulator is the channel output level.
*/

/// Product of two signals. Doubles as a ring modulator.
#[inline]
pub fn amp_mod(input: f32, control: f32) -> f32 {
    input * control
}

/// Attenuate or amplify by a fixed modulator value.
#[inline]
pub fn scale(input: f32, level: f32) -> f32 {
    input * level
}

/// Final output stage towards the external mixer.
#[inline]
pub fn output(input: f32, level: f32) -> f32 {
    input * level
}
