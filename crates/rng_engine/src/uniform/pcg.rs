//! PCG32 (XSH-RR output over a 64-bit LCG).

use super::{join_u32, UniformSource};

/// LCG multiplier shared by the PCG family.
const MULTIPLIER: u64 = 6_364_136_223_846_793_005;

/// PCG32 generator: period 2^64 per stream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pcg32 {
    state: u64,
    inc: u64,
}

impl Pcg32 {
    /// Seeds with `state = seed` and stream increment `(seed << 1) | 1`.
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            state: seed,
            inc: (seed << 1) | 1,
        }
    }

    /// Current `(state, increment)` pair. The increment is always odd.
    #[inline]
    pub fn state(&self) -> (u64, u64) {
        (self.state, self.inc)
    }

    /// Output function applied to the pre-advance state.
    #[inline]
    fn output(old: u64) -> u32 {
        let xorshifted = (((old >> 18) ^ old) >> 27) as u32;
        let rot = (old >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl UniformSource for Pcg32 {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        let old = self.state;
        self.state = old.wrapping_mul(MULTIPLIER).wrapping_add(self.inc);
        Self::output(old)
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        let hi = self.next_u32();
        let lo = self.next_u32();
        join_u32(hi, lo)
    }
}
