//! Gamma deviates.
//!
//! Shape below one uses the Ahrens-Dieter GS acceptance-rejection scheme on
//! two uniforms, splitting the proposal at `p = b u <= 1` with
//! `b = (e + shape) / e`. Output for shape below one is therefore not
//! stream-compatible with samplers that split at `u <= 1 - shape`; that
//! threshold form is biased low (mean near 0.46 at shape 0.5).
//!
//! Shape of one or more uses Marsaglia-Tsang: a standard normal deviate is
//! cubed through `d (1 + c x)^3` and accepted by a cheap squeeze or the exact
//! log test. Both loops retry without a cap; Marsaglia-Tsang accepts more
//! than 95% of candidates for every shape >= 1.

use std::f64::consts::E;

use crate::distributions::gaussian::standard_normal_pair;
use crate::uniform::{UniformSource, Xoshiro256PlusPlus};

/// Gamma sampler with shape/scale parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct GammaSampler {
    shape: f64,
    scale: f64,
    base: Xoshiro256PlusPlus,
}

impl GammaSampler {
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

    /// Next gamma deviate.
    pub fn sample(&mut self) -> f64 {
        if self.shape < 1.0 {
            self.sample_small_shape() * self.scale
        } else {
            self.sample_marsaglia_tsang() * self.scale
        }
    }

    fn sample_small_shape(&mut self) -> f64 {
        let shape = self.shape;
        let b = (E + shape) / E;
        loop {
            let p = b * self.base.next_f64();
            let v = self.base.next_f64();
            if p <= 1.0 {
                let x = p.powf(1.0 / shape);
                if v <= (-x).exp() {
                    return x;
                }
            } else {
                let x = -((b - p) / shape).ln();
                if v <= x.powf(shape - 1.0) {
                    return x;
                }
            }
        }
    }

    fn sample_marsaglia_tsang(&mut self) -> f64 {
        let d = self.shape - 1.0 / 3.0;
        let c = 1.0 / (9.0 * d).sqrt();
        loop {
            let (x, v) = loop {
                // Only the first deviate of each pair is used.
                let (x, _) = standard_normal_pair(&mut self.base);
                let v = 1.0 + c * x;
                if v > 0.0 {
                    break (x, v);
                }
            };
            let v = v * v * v;
            let u = self.base.next_f64();
            let x2 = x * x;
            if u < 1.0 - 0.0331 * x2 * x2 {
                return d * v;
            }
            if u.ln() < 0.5 * x2 + d * (1.0 - v + v.ln()) {
                return d * v;
            }
        }
    }
}
