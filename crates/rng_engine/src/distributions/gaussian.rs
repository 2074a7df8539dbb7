//! Normal deviates via the Marsaglia polar method.

use crate::uniform::{UniformSource, Xoshiro256PlusPlus};

/// Draws a pair of independent standard normal deviates.
///
/// Rejection-samples a point uniformly in `[-1, 1]^2` until it lies inside
/// the open unit disk with non-zero radius (acceptance rate `pi/4`), then
/// maps both coordinates through `sqrt(-2 ln r2 / r2)`.
pub fn standard_normal_pair<R: UniformSource>(rng: &mut R) -> (f64, f64) {
    loop {
        let u1 = 2.0 * rng.next_f64() - 1.0;
        let u2 = 2.0 * rng.next_f64() - 1.0;
        let r2 = u1 * u1 + u2 * u2;
        if r2 < 1.0 && r2 != 0.0 {
            let factor = (-2.0 * r2.ln() / r2).sqrt();
            return (u1 * factor, u2 * factor);
        }
    }
}

/// Gaussian sampler with a one-value cache.
///
/// Each polar pair yields two deviates: the first is returned immediately,
/// the second is held and returned by the next call.
///
/// # Examples
///
/// ```rust
/// use rng_engine::distributions::GaussianSampler;
///
/// let mut a = GaussianSampler::new(10.0, 2.0, 42);
/// let mut b = GaussianSampler::new(10.0, 2.0, 42);
/// assert_eq!(a.sample(), b.sample());
/// assert!(a.has_cached());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct GaussianSampler {
    mean: f64,
    stddev: f64,
    cached: Option<f64>,
    base: Xoshiro256PlusPlus,
}

impl GaussianSampler {
    /// Creates a sampler whose private generator is seeded with `seed`.
    pub fn new(mean: f64, stddev: f64, seed: u64) -> Self {
        Self {
            mean,
            stddev,
            cached: None,
            base: Xoshiro256PlusPlus::from_seed(seed),
        }
    }

    /// Returns `(mean, stddev)`.
    #[inline]
    pub fn params(&self) -> (f64, f64) {
        (self.mean, self.stddev)
    }

    /// Whether a deviate is waiting in the cache.
    #[inline]
    pub fn has_cached(&self) -> bool {
        self.cached.is_some()
    }

    /// The private uniform generator.
    #[inline]
    pub fn base_mut(&mut self) -> &mut Xoshiro256PlusPlus {
        &mut self.base
    }

    /// Next normal deviate with the configured mean and deviation.
    pub fn sample(&mut self) -> f64 {
        if let Some(value) = self.cached.take() {
            return value;
        }
        let (z0, z1) = standard_normal_pair(&mut self.base);
        self.cached = Some(self.mean + self.stddev * z1);
        self.mean + self.stddev * z0
    }
}
