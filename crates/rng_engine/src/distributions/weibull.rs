//! Weibull deviates by inverse transform.

use crate::uniform::{UniformSource, Xoshiro256PlusPlus};

/// Weibull sampler: `scale * (-ln(1 - u))^(1/shape)`, one uniform per value.
#[derive(Clone, Debug, PartialEq)]
pub struct WeibullSampler {
    shape: f64,
    scale: f64,
    base: Xoshiro256PlusPlus,
}

impl WeibullSampler {
    /// Creates a sampler whose private generator is seeded with `seed`.
    pub fn new(shape: f64, scale: f64, seed: u64) -> Self {
        Self {
            shape,
            scale,
            base: Xoshiro256PlusPlus::from_seed(seed),
        }
    }

    /// Returns `(shape, scale)`.
    #[inline]
    pub fn params(&self) -> (f64, f64) {
        (self.shape, self.scale)
    }

    /// The private uniform generator.
    #[inline]
    pub fn base_mut(&mut self) -> &mut Xoshiro256PlusPlus {
        &mut self.base
    }

    /// Next Weibull deviate.
    #[inline]
    pub fn sample(&mut self) -> f64 {
        // u < 1, so 1 - u > 0 and the log is finite.
        let u = self.base.next_f64();
        self.scale * (-(1.0 - u).ln()).powf(1.0 / self.shape)
    }
}
