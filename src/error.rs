use thiserror::Error;

/// Errors reported while setting up a kernel session or feeding it channel
/// updates. The per-sample path never fails; see the module routines for
/// their clamping and fallback rules.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KernelError {
    #[error("sample rate must be a positive finite number of Hz, got {0}")]
    InvalidSampleRate(f32),
    #[error("a kernel needs at least one sequencer channel")]
    NoChannels,
    #[error("invalid delay lengths: default {default}s, maximum {max}s")]
    InvalidDelayLength { default: f32, max: f32 },
    #[error("channel {channel} is out of range (channel count {count})")]
    ChannelOutOfRange { channel: usize, count: usize },
}
