//! Poisson deviates by Knuth's multiplication method.

use crate::uniform::{UniformSource, Xoshiro256PlusPlus};

/// Poisson sampler.
///
/// Multiplies uniforms until the running product drops to `exp(-lambda)` or
/// below and returns the number of factors minus one. Expected cost is
/// `lambda + 1` uniforms per value with no upper bound.
///
/// Above [`PoissonSampler::MAX_EXACT_LAMBDA`] the product underflows before
/// reaching `exp(-lambda)` often enough to cap counts near 745, so draws no
/// longer follow Poisson(lambda).
#[derive(Clone, Debug, PartialEq)]
pub struct PoissonSampler {
    lambda: f64,
    threshold: f64,
    base: Xoshiro256PlusPlus,
}

impl PoissonSampler {
    /// Largest rate for which `exp(-lambda)` and the running product stay
    /// well inside the normal `f64` range.
    pub const MAX_EXACT_LAMBDA: f64 = 700.0;

    /// Creates a sampler whose private generator is seeded with `seed`.
    pub fn new(lambda: f64, seed: u64) -> Self {
        Self {
            lambda,
            threshold: (-lambda).exp(),
            base: Xoshiro256PlusPlus::from_seed(seed),
        }
    }

    /// Rate parameter.
    #[inline]
    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    /// Whether `lambda` is above [`Self::MAX_EXACT_LAMBDA`], where counts
    /// are truncated by floating-point underflow.
    #[inline]
    pub fn is_truncated(&self) -> bool {
        self.lambda > Self::MAX_EXACT_LAMBDA
    }

    /// The private uniform generator.
    #[inline]
    pub fn base_mut(&mut self) -> &mut Xoshiro256PlusPlus {
        &mut self.base
    }

    /// Next Poisson count, as a float.
    pub fn sample(&mut self) -> f64 {
        let mut k: u64 = 0;
        let mut p = 1.0;
        while p > self.threshold {
            k += 1;
            p *= self.base.next_f64();
        }
        (k - 1) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_are_non_negative_integers() {
        let mut sampler = PoissonSampler::new(3.5, 42);
        for _ in 0..10_000 {
            let k = sampler.sample();
            assert!(k >= 0.0);
            assert_eq!(k.fract(), 0.0);
        }
    }

    #[test]
    fn test_mean_tracks_rate() {
        let mut sampler = PoissonSampler::new(4.0, 42);
        let n = 100_000;
        let mean = (0..n).map(|_| sampler.sample()).sum::<f64>() / n as f64;
        assert!((mean - 4.0).abs() < 0.05, "mean {}", mean);
    }

    #[test]
    fn test_large_rate_flagged_as_truncated() {
        assert!(!PoissonSampler::new(30.0, 1).is_truncated());
        assert!(!PoissonSampler::new(PoissonSampler::MAX_EXACT_LAMBDA, 1).is_truncated());

        let mut sampler = PoissonSampler::new(800.0, 42);
        assert!(sampler.is_truncated());
        // exp(-800) underflows to zero, so counts stop near 745
        let n = 2_000;
        let mean = (0..n).map(|_| sampler.sample()).sum::<f64>() / n as f64;
        assert!(mean < 760.0, "mean {}", mean);
    }
}
