//! # Distribution Samplers
//!
//! Non-uniform samplers layered over a private [`Xoshiro256PlusPlus`]:
//!
//! - [`GaussianSampler`]: Marsaglia polar method with a one-deviate cache
//! - [`GammaSampler`]: Ahrens-Dieter (shape < 1) / Marsaglia-Tsang (shape >= 1)
//! - [`WeibullSampler`]: closed-form inverse CDF
//! - [`PoissonSampler`]: Knuth's multiplication method
//!
//! Each sampler owns its uniform generator by value; it is created with the
//! sampler, reseeded with it and dropped with it.
//!
//! ## Rejection loops
//!
//! The Gaussian, Gamma and Poisson samplers retry until acceptance with no
//! iteration cap. A cap would truncate the output distribution, so the
//! expected cost is documented instead (see
//! [`DistributionParams::expected_uniform_draws`]). Poisson cost grows
//! linearly with the rate and `exp(-lambda)` underflows for rates above
//! roughly 745, so very large rates are slow and lose accuracy.
//!
//! [`Xoshiro256PlusPlus`]: crate::uniform::Xoshiro256PlusPlus

mod gamma;
mod gaussian;
mod poisson;
mod weibull;

pub use gamma::GammaSampler;
pub use gaussian::{standard_normal_pair, GaussianSampler};
pub use poisson::PoissonSampler;
pub use weibull::WeibullSampler;

use std::f64::consts::PI;

use crate::error::{Result, RngError};
use crate::kind::GeneratorKind;

/// Parameters of a distribution kind.
///
/// # Examples
///
/// ```rust
/// use rng_engine::{DistributionParams, GeneratorKind};
///
/// let params = DistributionParams::Gaussian { mean: 0.0, stddev: 1.0 };
/// assert_eq!(params.kind(), GeneratorKind::Gaussian);
/// assert!(params.validate().is_ok());
///
/// let bad = DistributionParams::Poisson { lambda: -2.0 };
/// assert!(bad.validate().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DistributionParams {
    /// Normal distribution.
    Gaussian {
        /// Location.
        mean: f64,
        /// Standard deviation, > 0.
        stddev: f64,
    },
    /// Gamma distribution (shape/scale parameterisation).
    Gamma {
        /// Shape k, > 0.
        shape: f64,
        /// Scale theta, > 0.
        scale: f64,
    },
    /// Weibull distribution.
    Weibull {
        /// Shape k, > 0.
        shape: f64,
        /// Scale lambda, > 0.
        scale: f64,
    },
    /// Poisson distribution.
    Poisson {
        /// Rate, > 0.
        lambda: f64,
    },
}

impl DistributionParams {
    /// Default parameters for a distribution kind, `None` for uniform kinds.
    ///
    /// Gaussian(0, 1), Gamma(1, 1), Weibull(1, 1), Poisson(1).
    pub fn default_for(kind: GeneratorKind) -> Option<Self> {
        match kind {
            GeneratorKind::Gaussian => Some(DistributionParams::Gaussian {
                mean: 0.0,
                stddev: 1.0,
            }),
            GeneratorKind::Gamma => Some(DistributionParams::Gamma {
                shape: 1.0,
                scale: 1.0,
            }),
            GeneratorKind::Weibull => Some(DistributionParams::Weibull {
                shape: 1.0,
                scale: 1.0,
            }),
            GeneratorKind::Poisson => Some(DistributionParams::Poisson { lambda: 1.0 }),
            GeneratorKind::FastXor256
            | GeneratorKind::SmallLcg32
            | GeneratorKind::StreamCipher20
            | GeneratorKind::Classic624 => None,
        }
    }

    /// Kind these parameters configure.
    pub fn kind(&self) -> GeneratorKind {
        match self {
            DistributionParams::Gaussian { .. } => GeneratorKind::Gaussian,
            DistributionParams::Gamma { .. } => GeneratorKind::Gamma,
            DistributionParams::Weibull { .. } => GeneratorKind::Weibull,
            DistributionParams::Poisson { .. } => GeneratorKind::Poisson,
        }
    }

    /// Checks every parameter against its domain.
    ///
    /// # Errors
    ///
    /// [`RngError::InvalidParameter`] when a mean is not finite or a
    /// standard deviation, shape, scale or rate is not positive and finite.
    pub fn validate(&self) -> Result<()> {
        match *self {
            DistributionParams::Gaussian { mean, stddev } => {
                if !mean.is_finite() {
                    return Err(RngError::InvalidParameter {
                        name: "mean",
                        value: format!("must be finite, got {}", mean),
                    });
                }
                positive("stddev", stddev)
            }
            DistributionParams::Gamma { shape, scale }
            | DistributionParams::Weibull { shape, scale } => {
                positive("shape", shape)?;
                positive("scale", scale)
            }
            DistributionParams::Poisson { lambda } => positive("lambda", lambda),
        }
    }

    /// Mean number of uniform draws consumed per sample, where a closed
    /// form exists.
    ///
    /// - Gaussian: `4/pi` (one accepted pair of `8/pi` draws yields two values)
    /// - Weibull: exactly 1
    /// - Poisson: `lambda + 1`
    /// - Gamma: `None`; both branches retry with an acceptance rate that
    ///   depends on the shape and is not tracked in closed form here.
    pub fn expected_uniform_draws(&self) -> Option<f64> {
        match *self {
            DistributionParams::Gaussian { .. } => Some(4.0 / PI),
            DistributionParams::Gamma { .. } => None,
            DistributionParams::Weibull { .. } => Some(1.0),
            DistributionParams::Poisson { lambda } => Some(lambda + 1.0),
        }
    }
}

fn positive(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(RngError::InvalidParameter {
            name,
            value: format!("must be positive and finite, got {}", value),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_defaults_match_kind() {
        for kind in GeneratorKind::ALL {
            match DistributionParams::default_for(kind) {
                Some(params) => {
                    assert!(kind.is_distribution());
                    assert_eq!(params.kind(), kind);
                    assert!(params.validate().is_ok());
                }
                None => assert!(!kind.is_distribution()),
            }
        }
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let cases = [
            DistributionParams::Gaussian {
                mean: f64::NAN,
                stddev: 1.0,
            },
            DistributionParams::Gaussian {
                mean: 0.0,
                stddev: 0.0,
            },
            DistributionParams::Gamma {
                shape: -1.0,
                scale: 1.0,
            },
            DistributionParams::Weibull {
                shape: 2.0,
                scale: f64::INFINITY,
            },
            DistributionParams::Poisson { lambda: 0.0 },
        ];
        for params in cases {
            assert!(
                matches!(params.validate(), Err(RngError::InvalidParameter { .. })),
                "{:?} should be rejected",
                params
            );
        }
    }

    #[test]
    fn test_expected_uniform_draws() {
        let gaussian = DistributionParams::Gaussian {
            mean: 0.0,
            stddev: 1.0,
        };
        assert_relative_eq!(gaussian.expected_uniform_draws().unwrap(), 1.2732, epsilon = 1e-4);

        let poisson = DistributionParams::Poisson { lambda: 4.0 };
        assert_eq!(poisson.expected_uniform_draws(), Some(5.0));

        let gamma = DistributionParams::Gamma {
            shape: 0.5,
            scale: 1.0,
        };
        assert_eq!(gamma.expected_uniform_draws(), None);
    }
}
