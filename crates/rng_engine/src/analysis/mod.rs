//! # Sample Analysis
//!
//! Summary statistics and a goodness-of-fit check for any [`Generator`].
//!
//! [`analyze`] draws exactly `sample_size` values through
//! [`Generator::next_distribution`] (uniform kinds therefore contribute
//! `next_f64` draws) and reports:
//!
//! - sample mean, unbiased variance, min and max
//! - the theoretical mean and variance of the kind's distribution
//! - Pearson's chi-square statistic and its degrees of freedom
//!
//! Continuous kinds are binned into [`GOODNESS_OF_FIT_BINS`] equiprobable
//! cells through the probability integral transform `F(x)`. Poisson counts
//! are binned by value, merging cells until each expects at least
//! [`MIN_EXPECTED_COUNT`] observations; the last cell absorbs the upper tail.
//!
//! The only side effect on the generator is consuming those draws.

mod special;

pub use special::{gamma_fn, gamma_p, ln_gamma, norm_cdf, normal_upper_quantile};

use tracing::trace;

use crate::distributions::DistributionParams;
use crate::error::{Result, RngError};
use crate::generator::Generator;
use crate::kind::GeneratorKind;

/// Number of equiprobable cells for continuous distributions.
pub const GOODNESS_OF_FIT_BINS: usize = 20;

/// Minimum expected count per Poisson cell.
pub const MIN_EXPECTED_COUNT: f64 = 5.0;

/// Summary of a drawn sample.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SampleStatistics {
    /// Kind of the analysed generator.
    pub kind: GeneratorKind,
    /// Number of values drawn.
    pub sample_size: usize,
    /// Sample mean.
    pub mean: f64,
    /// Unbiased sample variance (0 for a single draw).
    pub variance: f64,
    /// Smallest value drawn.
    pub min: f64,
    /// Largest value drawn.
    pub max: f64,
    /// Theoretical mean.
    pub expected_mean: f64,
    /// Theoretical variance.
    pub expected_variance: f64,
    /// Pearson chi-square statistic.
    pub chi_square: f64,
    /// Cells minus one.
    pub degrees_of_freedom: usize,
}

impl SampleStatistics {
    /// Sample standard deviation.
    #[inline]
    pub fn stddev(&self) -> f64 {
        self.variance.sqrt()
    }

    /// Chi-square critical value at upper-tail `significance`, using the
    /// Wilson-Hilferty cube approximation.
    ///
    /// # Errors
    ///
    /// [`RngError::InvalidParameter`] unless `0 < significance < 1`.
    pub fn critical_value(&self, significance: f64) -> Result<f64> {
        if !(significance > 0.0 && significance < 1.0) {
            return Err(RngError::InvalidParameter {
                name: "significance",
                value: format!("must lie in (0, 1), got {}", significance),
            });
        }
        if self.degrees_of_freedom == 0 {
            return Ok(0.0);
        }
        let k = self.degrees_of_freedom as f64;
        let z = normal_upper_quantile(significance);
        let h = 2.0 / (9.0 * k);
        Ok(k * (1.0 - h + z * h.sqrt()).powi(3))
    }

    /// Whether the sample is consistent with the theoretical distribution
    /// at upper-tail `significance` (e.g. `0.01`).
    ///
    /// # Errors
    ///
    /// As [`critical_value`](Self::critical_value).
    pub fn passes(&self, significance: f64) -> Result<bool> {
        Ok(self.chi_square <= self.critical_value(significance)?)
    }
}

/// Theoretical distribution a generator's `next_distribution` targets.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Reference {
    /// Binned through the probability integral transform.
    Continuous(Continuous),
    /// Binned by value.
    Poisson(f64),
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Continuous {
    Uniform,
    Gaussian { mean: f64, stddev: f64 },
    Gamma { shape: f64, scale: f64 },
    Weibull { shape: f64, scale: f64 },
}

impl Reference {
    fn of(generator: &Generator) -> Self {
        match generator.params() {
            None => Reference::Continuous(Continuous::Uniform),
            Some(DistributionParams::Gaussian { mean, stddev }) => {
                Reference::Continuous(Continuous::Gaussian { mean, stddev })
            }
            Some(DistributionParams::Gamma { shape, scale }) => {
                Reference::Continuous(Continuous::Gamma { shape, scale })
            }
            Some(DistributionParams::Weibull { shape, scale }) => {
                Reference::Continuous(Continuous::Weibull { shape, scale })
            }
            Some(DistributionParams::Poisson { lambda }) => Reference::Poisson(lambda),
        }
    }

    fn moments(&self) -> (f64, f64) {
        match *self {
            Reference::Poisson(lambda) => (lambda, lambda),
            Reference::Continuous(Continuous::Uniform) => (0.5, 1.0 / 12.0),
            Reference::Continuous(Continuous::Gaussian { mean, stddev }) => {
                (mean, stddev * stddev)
            }
            Reference::Continuous(Continuous::Gamma { shape, scale }) => {
                (shape * scale, shape * scale * scale)
            }
            Reference::Continuous(Continuous::Weibull { shape, scale }) => {
                let g1 = gamma_fn(1.0 + 1.0 / shape);
                let g2 = gamma_fn(1.0 + 2.0 / shape);
                (scale * g1, scale * scale * (g2 - g1 * g1))
            }
        }
    }
}

impl Continuous {
    fn cdf(&self, x: f64) -> f64 {
        match *self {
            Continuous::Uniform => x,
            Continuous::Gaussian { mean, stddev } => norm_cdf((x - mean) / stddev),
            Continuous::Gamma { shape, scale } => gamma_p(shape, x / scale),
            Continuous::Weibull { shape, scale } => {
                if x <= 0.0 {
                    0.0
                } else {
                    1.0 - (-(x / scale).powf(shape)).exp()
                }
            }
        }
    }
}

/// Poisson cells as `(largest count in cell, probability)`; the last cell is
/// open-ended.
fn poisson_cells(lambda: f64, sample_size: usize) -> Vec<(u64, f64)> {
    let min_prob = MIN_EXPECTED_COUNT / sample_size as f64;
    let limit = (lambda + 50.0 * lambda.sqrt() + 50.0) as u64;
    let mut cells: Vec<(u64, f64)> = Vec::new();
    let mut closed = 0.0;
    let mut open = 0.0;
    for k in 0..=limit {
        let pmf = (k as f64 * lambda.ln() - lambda - ln_gamma(k as f64 + 1.0)).exp();
        open += pmf;
        if 1.0 - closed - open < min_prob {
            break;
        }
        if open >= min_prob {
            cells.push((k, open));
            closed += open;
            open = 0.0;
        }
    }
    let tail = 1.0 - closed;
    match cells.last_mut() {
        Some(last) if tail < min_prob => {
            last.0 = u64::MAX;
            last.1 += tail;
        }
        _ => cells.push((u64::MAX, tail)),
    }
    cells
}

/// Draws `sample_size` values and summarises them. See the module docs.
///
/// # Errors
///
/// [`RngError::EmptySample`] when `sample_size` is zero.
///
/// # Examples
///
/// ```rust
/// use rng_engine::{Generator, GeneratorKind};
///
/// let mut rng = Generator::new(GeneratorKind::FastXor256, 42, None).unwrap();
/// let stats = rng.analyze(10_000).unwrap();
/// assert!((stats.mean - 0.5).abs() < 0.02);
/// assert_eq!(stats.degrees_of_freedom, 19);
/// ```
pub fn analyze(generator: &mut Generator, sample_size: usize) -> Result<SampleStatistics> {
    if sample_size == 0 {
        return Err(RngError::EmptySample);
    }

    let reference = Reference::of(generator);
    let cells: Vec<(u64, f64)> = match reference {
        Reference::Poisson(lambda) => poisson_cells(lambda, sample_size),
        Reference::Continuous(_) => {
            let p = 1.0 / GOODNESS_OF_FIT_BINS as f64;
            vec![(0, p); GOODNESS_OF_FIT_BINS]
        }
    };
    let mut counts = vec![0u64; cells.len()];

    let mut mean = 0.0;
    let mut m2 = 0.0;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    for i in 0..sample_size {
        let x = generator.next_distribution();

        // Welford update
        let delta = x - mean;
        mean += delta / (i + 1) as f64;
        m2 += delta * (x - mean);
        min = min.min(x);
        max = max.max(x);

        let cell = match reference {
            Reference::Poisson(_) => {
                let k = x as u64;
                cells
                    .iter()
                    .position(|&(upper, _)| k <= upper)
                    .unwrap_or(cells.len() - 1)
            }
            Reference::Continuous(continuous) => {
                let u = continuous.cdf(x);
                ((u * GOODNESS_OF_FIT_BINS as f64) as usize).min(GOODNESS_OF_FIT_BINS - 1)
            }
        };
        counts[cell] += 1;
    }

    let n = sample_size as f64;
    let chi_square = counts
        .iter()
        .zip(&cells)
        .filter(|(_, &(_, p))| p > 0.0)
        .map(|(&observed, &(_, p))| {
            let expected = n * p;
            let diff = observed as f64 - expected;
            diff * diff / expected
        })
        .sum();

    let (expected_mean, expected_variance) = reference.moments();
    let stats = SampleStatistics {
        kind: generator.kind(),
        sample_size,
        mean,
        variance: if sample_size > 1 { m2 / (n - 1.0) } else { 0.0 },
        min,
        max,
        expected_mean,
        expected_variance,
        chi_square,
        degrees_of_freedom: cells.len() - 1,
    };
    trace!(
        kind = %stats.kind,
        sample_size,
        mean = stats.mean,
        variance = stats.variance,
        chi_square = stats.chi_square,
        dof = stats.degrees_of_freedom,
        "sample analysed"
    );
    Ok(stats)
}
