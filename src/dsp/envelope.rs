/*
Gate-Driven Linear ADSR
=======================

The envelope module reads the channel gate every tick and moves its level
by fixed per-sample increments. The four inputs are *rates*, not times:
the ramp-scale knobs upstream already convert seconds into "level change
per sample", so the envelope itself never needs the sample rate.

Vocabulary
----------

  level       Output value, 0.0 to 1.0.

  gate        The channel's note-on flag, written by the sequencer.

  triggered   Set on a 0 -> 1 gate edge, cleared once the attack ramp lands
              on exactly 1.0. While set, the envelope is in its attack ramp.

  previous    The gate value seen on the previous tick. This is the only
  gate        piece of gate history kept per instance; the channel state
              itself only knows the current gate.


Per-tick behaviour
------------------

    gate high, triggered    level += attack     (stop at 1.0, clear trigger)
    gate high, not trig.    level -= decay      (floor at sustain)
    gate low                level -= release    (floor at 0.0)

Note that a retrigger (gate dropping and rising again) starts the attack
ramp from the current level, not from zero. A restart request on the
channel is what forces a hard reset to zero.

An attack rate of 0 never reaches 1.0, so the envelope then stays in its
attack ramp for as long as the gate is held. That is kept as-is.
*/

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AdsrInputs {
    pub attack: f32,
    pub decay: f32,
    pub sustain: f32,
    pub release: f32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Adsr {
    level: f32,
    previous_gate: bool,
    triggered: bool,
}

impl Adsr {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn level(&self) -> f32 {
        self.level
    }

    pub fn is_attacking(&self) -> bool {
        self.triggered
    }

    /// Hard reset of level and gate history. The attack flag is left alone.
    pub fn restart(&mut self) {
        self.level = 0.0;
        self.previous_gate = false;
    }

    pub fn next_sample(&mut self, gate: bool, inputs: AdsrInputs) -> f32 {
        if gate {
            if !self.previous_gate {
                self.triggered = true;
            }
            if self.triggered {
                self.level += inputs.attack;
                if self.level >= 1.0 {
                    self.level = 1.0;
                    self.triggered = false;
                }
            } else {
                self.level -= inputs.decay;
                if self.level < inputs.sustain {
                    self.level = inputs.sustain;
                }
            }
        } else {
            self.level -= inputs.release;
            if self.level < 0.0 {
                self.level = 0.0;
            }
        }

        self.previous_gate = gate;
        self.level
    }
}

/// Peak follower with separate exponential attack and release smoothing.
///
/// Durations are in samples, as delivered by duration-scaled inputs. After
/// `duration` samples of a constant input the follower has closed 99% of the
/// gap to it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnvelopeFollower {
    level: f32,
}

impl EnvelopeFollower {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn level(&self) -> f32 {
        self.level
    }

    /// Per-sample smoothing coefficient, `exp(ln(0.01) / duration)`.
    /// Non-positive durations track instantly.
    #[inline]
    pub fn coefficient(duration: f32) -> f32 {
        if duration > 0.0 {
            (0.01_f32.ln() / duration).exp()
        } else {
            0.0
        }
    }

    pub fn coefficient_from_seconds(seconds: f32, sample_rate: f32) -> f32 {
        Self::coefficient(seconds * sample_rate)
    }

    /// `attack` and `release` are durations in samples, not coefficients.
    pub fn next_sample(&mut self, input: f32, attack: f32, release: f32) -> f32 {
        let target = input.abs();
        let coef = if target > self.level {
            Self::coefficient(attack)
        } else {
            Self::coefficient(release)
        };
        self.level = coef * (self.level - target) + target;
        self.level
    }

    pub fn reset(&mut self) {
        self.level = 0.0;
    }
}
