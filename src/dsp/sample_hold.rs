/// Sample-and-hold driven by a countdown accumulator.
///
/// Each tick the countdown drops by `rate`; when it goes negative the input
/// is latched and the countdown restarts at 1.0. A rate of `hz / sample_rate`
/// therefore samples roughly `hz` times per second.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleHold {
    countdown: f32,
    held: f32,
}

impl SampleHold {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn held(&self) -> f32 {
        self.held
    }

    pub fn next_sample(&mut self, input: f32, rate: f32) -> f32 {
        self.countdown -= rate;
        if self.countdown < 0.0 {
            self.held = input;
            self.countdown = 1.0;
        }
        self.held
    }
}
