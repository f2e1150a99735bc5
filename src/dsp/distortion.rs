//! Distortion and bit reduction.
//!
//! # Clipping distortion
//!
//! The input is multiplied by the drive amount and anything beyond unit
//! amplitude is hard-clipped by dividing by its own magnitude, which leaves
//! only the sign:
//!
//!   x = input * drive
//!   out = x            if |x| <= 1
//!   out = x / |x|      otherwise
//!
//! # Bitcrusher
//!
//! The input is scaled to the nearest 16-bit integer and then snapped to a
//! multiple of a step size. The depth control picks the resolution:
//!
//!   depth 1.0  step 1      full 16-bit resolution, input unchanged
//!   depth 0.5  step 16384  roughly 2 bits
//!   depth 0.0  step 32768  every input collapses to 0
//!
//! Snapping subtracts the remainder, so it truncates towards zero. The scaled
//! input is held to `[-32767, 32767]`, so the coarsest step is always larger
//! than any value it divides.

use super::clamp_unit;

const FULL_SCALE: f32 = 32767.0;

/// Drive the signal and hard-clip to `[-1, 1]`.
#[inline]
pub fn distort(sample: f32, drive: f32) -> f32 {
    let x = sample * drive;
    if x.abs() > 1.0 {
        x / x.abs()
    } else {
        x
    }
}

/// Quantisation step in 16-bit units for a depth in `[0, 1]`.
#[inline]
pub fn crush_step(depth: f32) -> i32 {
    ((1.0 - clamp_unit(depth)) * FULL_SCALE + 1.0) as i32
}

/// Reduce resolution with a depth-controlled step size.
#[inline]
pub fn bitcrush(sample: f32, depth: f32) -> f32 {
    let step = crush_step(depth);
    let value = (sample * FULL_SCALE).round().clamp(-FULL_SCALE, FULL_SCALE) as i32;
    let snapped = value - value % step;
    snapped as f32 / FULL_SCALE
}
