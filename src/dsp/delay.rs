#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::selector;

/*
Fractional Delay Line
=====================

The delay owns a ring buffer allocated once when the module is created.
The buffer length is the *maximum* loop; the loop actually used each tick
comes from the loop input:

    loop = loop_input        if loop_input > 1 sample
         = default_loop      otherwise (3 seconds)
    loop = min(loop, buffer length)

Reading
-------

Delay time is split into whole samples `d` and a fraction `frac`. The read
happens before this tick's write, so the slot `write - d` holds the sample
written exactly `d` ticks ago and `write - d - 1` the one before it:

    out = buf[write - d] * (1 - frac) + buf[write - d - 1] * frac

An impulse written at tick T therefore comes back at T + d, or split
between T + d and T + d + 1 when the delay is fractional.

Comb vs allpass
---------------

    comb:     out = delayed
    allpass:  out = delayed - feedback * input

and in both cases the buffer receives  input + feedback * out.
With feedback 0 both collapse to a plain variable delay.
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
pub enum DelayMode {
    #[strum(serialize = "Comb filter")]
    Comb,
    #[strum(serialize = "Allpass filter")]
    Allpass,
}

impl DelayMode {
    /// Only an exact allpass selector enables the feedforward path.
    pub fn from_modulator(value: f32) -> Self {
        match selector(value).and_then(Self::from_repr) {
            Some(Self::Allpass) => Self::Allpass,
            _ => Self::Comb,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DelayInputs {
    /// Delay time in samples, may be fractional.
    pub time: f32,
    /// Loop length in samples; values of 1 or less select the default loop.
    pub loop_length: f32,
    pub feedback: f32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DelayLine {
    buffer: Option<Box<[f32]>>,
    write_pos: usize,
    default_loop: usize,
}

impl DelayLine {
    pub fn new(buffer: Box<[f32]>, default_loop: usize) -> Self {
        Self {
            buffer: Some(buffer),
            write_pos: 0,
            default_loop,
        }
    }

    /// A delay without storage. It passes its input through unchanged.
    pub fn unallocated() -> Self {
        Self::default()
    }

    pub fn is_allocated(&self) -> bool {
        self.buffer.is_some()
    }

    pub fn capacity(&self) -> usize {
        self.buffer.as_ref().map_or(0, |b| b.len())
    }

    pub fn write_pos(&self) -> usize {
        self.write_pos
    }

    fn loop_length(&self, loop_input: f32, capacity: usize) -> usize {
        let requested = if loop_input > 1.0 {
            loop_input as usize
        } else {
            self.default_loop
        };
        requested.clamp(1, capacity)
    }

    pub fn next_sample(&mut self, input: f32, inputs: DelayInputs, mode: DelayMode) -> f32 {
        let capacity = self.capacity();
        if capacity == 0 {
            return input;
        }
        let loop_len = self.loop_length(inputs.loop_length, capacity);
        let Some(buffer) = self.buffer.as_deref_mut() else {
            return input;
        };

        // the loop may have shrunk since the last tick
        let write = self.write_pos % loop_len;
        let whole = inputs.time.trunc();
        let frac = inputs.time - whole;
        let delay = whole as i64;

        let len = loop_len as i64;
        let read = (write as i64 - delay).rem_euclid(len) as usize;
        let older = (read as i64 - 1).rem_euclid(len) as usize;

        let mut out = buffer[read] * (1.0 - frac) + buffer[older] * frac;
        if mode == DelayMode::Allpass {
            out += input * -inputs.feedback;
        }
        buffer[write] = input + out * inputs.feedback;

        self.write_pos = (write + 1) % loop_len;
        out
    }

    pub fn reset(&mut self) {
        if let Some(buffer) = self.buffer.as_deref_mut() {
            buffer.fill(0.0);
        }
        self.write_pos = 0;
    }
}
