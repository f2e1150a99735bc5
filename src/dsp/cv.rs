//! Control-voltage sources read from the shared channel state.

use crate::channel::ChannelState;

/// Keyboard CV: channel pitch as a phase increment per sample.
#[inline]
pub fn keyboard(channels: &ChannelState, channel: usize, sample_rate: f32) -> f32 {
    channels.pitch(channel) / sample_rate
}

/// Keyboard CV tapped from another channel. The modulator picks the source
/// channel; anything outside the channel range falls back to `channel`.
#[inline]
pub fn modulator_tap(
    channels: &ChannelState,
    channel: usize,
    selector: f32,
    sample_rate: f32,
) -> f32 {
    let source = selector as i64;
    let source = if source < 0 || source >= channels.len() as i64 {
        channel
    } else {
        source as usize
    };
    keyboard(channels, source, sample_rate)
}

/// Constant voltage from the modulator value (the knob module).
#[inline]
pub fn knob(value: f32) -> f32 {
    value
}

/// Outputs `level` while the channel's current note carries an accent.
#[inline]
pub fn accent(channels: &ChannelState, channel: usize, level: f32) -> f32 {
    if channels.accent(channel) {
        level
    } else {
        0.0
    }
}
