//! Session configuration supplied by the hosting environment.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::KernelError;

pub const DEFAULT_SAMPLE_RATE: f32 = 44_100.0;
pub const DEFAULT_CHANNEL_COUNT: usize = 16;
/// Loop length used by a delay whose loop input is not connected.
pub const DEFAULT_DELAY_SECONDS: f32 = 3.0;
/// Ring buffer size allocated for every delay instance.
pub const MAX_DELAY_SECONDS: f32 = 5.0;

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KernelConfig {
    /// Output sample rate in Hz.
    pub sample_rate: f32,
    /// Number of sequencer channels the channel state is sized for.
    pub channel_count: usize,
    pub default_delay_seconds: f32,
    pub max_delay_seconds: f32,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            channel_count: DEFAULT_CHANNEL_COUNT,
            default_delay_seconds: DEFAULT_DELAY_SECONDS,
            max_delay_seconds: MAX_DELAY_SECONDS,
        }
    }
}

impl KernelConfig {
    pub fn new(sample_rate: f32, channel_count: usize) -> Self {
        Self {
            sample_rate,
            channel_count,
            ..Self::default()
        }
    }

    pub fn sample_rate(mut self, sample_rate: f32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    pub fn channel_count(mut self, channel_count: usize) -> Self {
        self.channel_count = channel_count;
        self
    }

    pub fn delay_seconds(mut self, default: f32, max: f32) -> Self {
        self.default_delay_seconds = default;
        self.max_delay_seconds = max;
        self
    }

    pub fn validate(&self) -> Result<(), KernelError> {
        if !self.sample_rate.is_finite() || self.sample_rate <= 0.0 {
            return Err(KernelError::InvalidSampleRate(self.sample_rate));
        }
        if self.channel_count == 0 {
            return Err(KernelError::NoChannels);
        }
        let default = self.default_delay_seconds;
        let max = self.max_delay_seconds;
        if !(default > 0.0 && max.is_finite() && default <= max) {
            return Err(KernelError::InvalidDelayLength { default, max });
        }
        Ok(())
    }

    /// Loop length in samples for a delay without a loop input.
    pub fn default_delay_samples(&self) -> usize {
        ((self.default_delay_seconds * self.sample_rate) as usize).max(1)
    }

    /// Ring buffer length in samples allocated per delay instance.
    pub fn max_delay_samples(&self) -> usize {
        ((self.max_delay_seconds * self.sample_rate) as usize).max(1)
    }
}
