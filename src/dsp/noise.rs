//! Session-wide noise source shared by every VCO.

const SEED_X1: i32 = 0x6745_2301;
const SEED_X2: i32 = 0xefcd_ab89_u32 as i32;
const SCALE: f32 = 2.0 / u32::MAX as f32;

/// Two-word xor-and-add generator.
///
/// There is exactly one per kernel session and every VCO tick advances it,
/// whether or not that VCO mixes any noise in. The sequence a given VCO sees
/// therefore depends on how many VCO ticks ran before it; golden-output tests
/// rely on this being reproduced exactly for a fixed evaluation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoiseGenerator {
    x1: i32,
    x2: i32,
}

impl NoiseGenerator {
    pub fn new() -> Self {
        Self {
            x1: SEED_X1,
            x2: SEED_X2,
        }
    }

    /// Next noise sample in `[-1, 1]`.
    #[inline]
    pub fn next_sample(&mut self) -> f32 {
        self.x1 ^= self.x2;
        let sample = self.x2 as f32 * SCALE;
        self.x2 = self.x2.wrapping_add(self.x1);
        sample
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn words(&self) -> (u32, u32) {
        (self.x1 as u32, self.x2 as u32)
    }
}

impl Default for NoiseGenerator {
    fn default() -> Self {
        Self::new()
    }
}
