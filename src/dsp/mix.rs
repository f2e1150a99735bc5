//! Four-input summing mixer.

/// Sum of all four inputs.
///
/// Patching one source into several inputs turns the mixer into a fixed
/// gain stage, or a frequency multiplier when the source is a pitch CV.
#[inline]
pub fn mix4(inputs: &[f32; 4]) -> f32 {
    inputs[0] + inputs[1] + inputs[2] + inputs[3]
}
