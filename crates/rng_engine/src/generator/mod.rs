//! # Generator Handle
//!
//! [`Generator`] is the engine's single polymorphic handle. Its state is a
//! sum type with one payload per [`GeneratorKind`], so every operation is an
//! exhaustive `match` and a payload can never be read as the wrong shape.
//!
//! ## Lifecycle
//!
//! - **Create**: [`Generator::new`] resolves the seed (`0` means "ask the
//!   clock"), validates distribution parameters and seeds the payload.
//!   Distribution kinds build a private xoshiro256++ from the same seed.
//! - **Draw**: `next_u32`, `next_u64`, `next_f64`, `next_distribution` all
//!   mutate the state in place.
//! - **Reseed / jump**: either succeed completely or leave the state as it
//!   was.
//! - **Teardown**: dropping the handle drops the nested generator with it.
//!
//! ## Thread Safety
//!
//! A `Generator` is `Send` but every draw takes `&mut self`; share work by
//! giving each worker its own generator, e.g. from [`Generator::streams`].
//!
//! ## Usage Example
//!
//! ```rust
//! use rng_engine::{DistributionParams, Generator, GeneratorKind};
//!
//! let mut uniform = Generator::new(GeneratorKind::FastXor256, 42, None).unwrap();
//! let u = uniform.next_f64();
//! assert!((0.0..1.0).contains(&u));
//!
//! let params = DistributionParams::Gaussian { mean: 0.0, stddev: 1.0 };
//! let mut normal = Generator::new(GeneratorKind::Gaussian, 42, Some(params)).unwrap();
//! let z = normal.next_distribution();
//! assert!(z.is_finite());
//!
//! let mut buffer = [0u8; 11];
//! uniform.fill_bytes(&mut buffer).unwrap();
//! ```

mod interop;

use tracing::{debug, warn};

use crate::analysis::{self, SampleStatistics};
use crate::distributions::{
    DistributionParams, GammaSampler, GaussianSampler, PoissonSampler, WeibullSampler,
};
use crate::entropy::{resolve_seed, SeedSource, SystemClock};
use crate::error::{Result, RngError};
use crate::kind::GeneratorKind;
use crate::uniform::{
    u64_to_unit_f64, Mt19937, Pcg32, StreamCipherStub, UniformSource, Xoshiro256PlusPlus,
};

/// Per-kind algorithm state.
#[derive(Clone, Debug, PartialEq)]
enum GeneratorState {
    FastXor256(Xoshiro256PlusPlus),
    SmallLcg32(Pcg32),
    StreamCipher20(StreamCipherStub),
    Classic624(Box<Mt19937>),
    Gaussian(GaussianSampler),
    Gamma(GammaSampler),
    Weibull(WeibullSampler),
    Poisson(PoissonSampler),
}

impl GeneratorState {
    fn seeded(kind: GeneratorKind, seed: u64, params: Option<DistributionParams>) -> Self {
        match (kind, params) {
            (GeneratorKind::FastXor256, _) => {
                GeneratorState::FastXor256(Xoshiro256PlusPlus::from_seed(seed))
            }
            (GeneratorKind::SmallLcg32, _) => GeneratorState::SmallLcg32(Pcg32::from_seed(seed)),
            (GeneratorKind::StreamCipher20, _) => {
                GeneratorState::StreamCipher20(StreamCipherStub::from_seed(seed))
            }
            (GeneratorKind::Classic624, _) => {
                GeneratorState::Classic624(Box::new(Mt19937::from_seed(seed)))
            }
            (_, Some(DistributionParams::Gaussian { mean, stddev })) => {
                GeneratorState::Gaussian(GaussianSampler::new(mean, stddev, seed))
            }
            (_, Some(DistributionParams::Gamma { shape, scale })) => {
                GeneratorState::Gamma(GammaSampler::new(shape, scale, seed))
            }
            (_, Some(DistributionParams::Weibull { shape, scale })) => {
                GeneratorState::Weibull(WeibullSampler::new(shape, scale, seed))
            }
            (_, Some(DistributionParams::Poisson { lambda })) => {
                GeneratorState::Poisson(PoissonSampler::new(lambda, seed))
            }
            (kind, None) => Self::seeded(kind, seed, DistributionParams::default_for(kind)),
        }
    }
}

/// Seedable random-number generator handle.
///
/// Two generators created with the same kind, the same non-zero seed and the
/// same parameters produce identical draw sequences.
#[derive(Clone, Debug, PartialEq)]
pub struct Generator {
    state: GeneratorState,
    seed: u64,
}

impl Generator {
    /// Creates a generator, resolving a zero seed from the system clock.
    ///
    /// Distribution kinds created without parameters use
    /// [`DistributionParams::default_for`]. Parameters passed to a uniform
    /// kind are ignored.
    ///
    /// # Errors
    ///
    /// - [`RngError::ParameterMismatch`] if the parameters belong to another
    ///   distribution kind
    /// - [`RngError::InvalidParameter`] if a parameter is out of its domain
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rng_engine::{Generator, GeneratorKind};
    ///
    /// let mut a = Generator::new(GeneratorKind::Classic624, 5489, None).unwrap();
    /// assert_eq!(a.next_u32(), 3_499_211_612);
    /// ```
    pub fn new(
        kind: GeneratorKind,
        seed: u64,
        params: Option<DistributionParams>,
    ) -> Result<Self> {
        Self::with_seed_source(kind, seed, params, &SystemClock)
    }

    /// Creates a generator, resolving a zero seed from `source`.
    ///
    /// # Errors
    ///
    /// Same as [`Generator::new`].
    pub fn with_seed_source(
        kind: GeneratorKind,
        seed: u64,
        params: Option<DistributionParams>,
        source: &dyn SeedSource,
    ) -> Result<Self> {
        let params = Self::checked_params(kind, params)?;
        let resolved = resolve_seed(seed, source);
        if kind == GeneratorKind::StreamCipher20 {
            warn!(
                seed = resolved,
                "stream-cipher20 replays a fixed 16-word block and is not cryptographic"
            );
        }
        if let Some(DistributionParams::Poisson { lambda }) = params {
            if lambda > PoissonSampler::MAX_EXACT_LAMBDA {
                warn!(
                    lambda,
                    max = PoissonSampler::MAX_EXACT_LAMBDA,
                    "poisson rate underflows exp(-lambda); counts are truncated near 745"
                );
            }
        }
        debug!(%kind, seed = resolved, from_sentinel = seed == 0, "generator created");
        Ok(Self {
            state: GeneratorState::seeded(kind, resolved, params),
            seed: resolved,
        })
    }

    /// Returns `n` xoshiro256++ generators whose streams are 2^128 draws
    /// apart, for handing one to each parallel worker.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rng_engine::Generator;
    ///
    /// let mut streams = Generator::streams(42, 4);
    /// assert_eq!(streams.len(), 4);
    /// assert_ne!(streams[0].next_u64(), streams[1].next_u64());
    /// ```
    pub fn streams(seed: u64, n: usize) -> Vec<Generator> {
        let resolved = resolve_seed(seed, &SystemClock);
        let mut current = Xoshiro256PlusPlus::from_seed(resolved);
        let mut streams = Vec::with_capacity(n);
        for _ in 0..n {
            streams.push(Generator {
                state: GeneratorState::FastXor256(current.clone()),
                seed: resolved,
            });
            current.jump();
        }
        debug!(seed = resolved, count = n, "jump-separated streams created");
        streams
    }

    fn checked_params(
        kind: GeneratorKind,
        params: Option<DistributionParams>,
    ) -> Result<Option<DistributionParams>> {
        if !kind.is_distribution() {
            if params.is_some() {
                debug!(%kind, "distribution parameters ignored for uniform kind");
            }
            return Ok(None);
        }
        let params = match params {
            Some(p) if p.kind() != kind => {
                return Err(RngError::ParameterMismatch {
                    kind,
                    params: p.kind(),
                })
            }
            Some(p) => p,
            None => match DistributionParams::default_for(kind) {
                Some(p) => p,
                None => return Ok(None),
            },
        };
        params.validate()?;
        Ok(Some(params))
    }

    /// Kind tag; fixed for the generator's lifetime.
    pub fn kind(&self) -> GeneratorKind {
        match self.state {
            GeneratorState::FastXor256(_) => GeneratorKind::FastXor256,
            GeneratorState::SmallLcg32(_) => GeneratorKind::SmallLcg32,
            GeneratorState::StreamCipher20(_) => GeneratorKind::StreamCipher20,
            GeneratorState::Classic624(_) => GeneratorKind::Classic624,
            GeneratorState::Gaussian(_) => GeneratorKind::Gaussian,
            GeneratorState::Gamma(_) => GeneratorKind::Gamma,
            GeneratorState::Weibull(_) => GeneratorKind::Weibull,
            GeneratorState::Poisson(_) => GeneratorKind::Poisson,
        }
    }

    /// Distribution parameters, `None` for uniform kinds.
    pub fn params(&self) -> Option<DistributionParams> {
        match &self.state {
            GeneratorState::Gaussian(s) => {
                let (mean, stddev) = s.params();
                Some(DistributionParams::Gaussian { mean, stddev })
            }
            GeneratorState::Gamma(s) => {
                let (shape, scale) = s.params();
                Some(DistributionParams::Gamma { shape, scale })
            }
            GeneratorState::Weibull(s) => {
                let (shape, scale) = s.params();
                Some(DistributionParams::Weibull { shape, scale })
            }
            GeneratorState::Poisson(s) => Some(DistributionParams::Poisson {
                lambda: s.lambda(),
            }),
            GeneratorState::FastXor256(_)
            | GeneratorState::SmallLcg32(_)
            | GeneratorState::StreamCipher20(_)
            | GeneratorState::Classic624(_) => None,
        }
    }

    /// Seed last applied (after resolving the zero sentinel).
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Whether a Gaussian generator holds a cached deviate.
    pub fn has_cached_deviate(&self) -> bool {
        match &self.state {
            GeneratorState::Gaussian(s) => s.has_cached(),
            _ => false,
        }
    }

    /// Next 32-bit value.
    ///
    /// xoshiro256++ returns the low half of its 64-bit output; distribution
    /// kinds draw from their private generator.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        match &mut self.state {
            GeneratorState::FastXor256(g) => g.next_u32(),
            GeneratorState::SmallLcg32(g) => g.next_u32(),
            GeneratorState::StreamCipher20(g) => g.next_u32(),
            GeneratorState::Classic624(g) => g.next_u32(),
            GeneratorState::Gaussian(s) => s.base_mut().next_u32(),
            GeneratorState::Gamma(s) => s.base_mut().next_u32(),
            GeneratorState::Weibull(s) => s.base_mut().next_u32(),
            GeneratorState::Poisson(s) => s.base_mut().next_u32(),
        }
    }

    /// Next 64-bit value.
    ///
    /// 32-bit algorithms join two draws, the first as the high half.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        match &mut self.state {
            GeneratorState::FastXor256(g) => g.next_u64(),
            GeneratorState::SmallLcg32(g) => g.next_u64(),
            GeneratorState::StreamCipher20(g) => g.next_u64(),
            GeneratorState::Classic624(g) => g.next_u64(),
            GeneratorState::Gaussian(s) => s.base_mut().next_u64(),
            GeneratorState::Gamma(s) => s.base_mut().next_u64(),
            GeneratorState::Weibull(s) => s.base_mut().next_u64(),
            GeneratorState::Poisson(s) => s.base_mut().next_u64(),
        }
    }

    /// Next double in `[0, 1)` from the top 53 bits of [`next_u64`](Self::next_u64).
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        u64_to_unit_f64(self.next_u64())
    }

    /// Next sample of the configured distribution.
    ///
    /// Uniform kinds fall back to [`next_f64`](Self::next_f64).
    pub fn next_distribution(&mut self) -> f64 {
        match &mut self.state {
            GeneratorState::Gaussian(s) => s.sample(),
            GeneratorState::Gamma(s) => s.sample(),
            GeneratorState::Weibull(s) => s.sample(),
            GeneratorState::Poisson(s) => s.sample(),
            GeneratorState::FastXor256(g) => g.next_f64(),
            GeneratorState::SmallLcg32(g) => g.next_f64(),
            GeneratorState::StreamCipher20(g) => g.next_f64(),
            GeneratorState::Classic624(g) => g.next_f64(),
        }
    }

    /// Fills `buffer` with generator output.
    ///
    /// Whole 8-byte chunks take one 64-bit draw each in little-endian order;
    /// a 1-7 byte tail takes one more draw and keeps only its leading bytes.
    /// Nothing past `buffer.len()` is written.
    ///
    /// # Errors
    ///
    /// [`RngError::EmptyBuffer`] for a zero-length buffer; no draw happens.
    pub fn fill_bytes(&mut self, buffer: &mut [u8]) -> Result<()> {
        if buffer.is_empty() {
            return Err(RngError::EmptyBuffer);
        }
        self.fill_le_bytes(buffer);
        Ok(())
    }

    fn fill_le_bytes(&mut self, buffer: &mut [u8]) {
        let mut chunks = buffer.chunks_exact_mut(8);
        for chunk in &mut chunks {
            chunk.copy_from_slice(&self.next_u64().to_le_bytes());
        }
        let tail = chunks.into_remainder();
        if !tail.is_empty() {
            let bytes = self.next_u64().to_le_bytes();
            tail.copy_from_slice(&bytes[..tail.len()]);
        }
    }

    /// Reseeds in place, resolving a zero seed from the system clock.
    ///
    /// Kind and parameters are kept; distribution kinds reseed their private
    /// generator and drop any cached Gaussian deviate.
    ///
    /// # Errors
    ///
    /// Never fails for a generator built by [`Generator::new`]; the `Result`
    /// carries parameter validation from the rebuild.
    pub fn reseed(&mut self, seed: u64) -> Result<()> {
        self.reseed_with_source(seed, &SystemClock)
    }

    /// Reseeds in place, resolving a zero seed from `source`.
    ///
    /// A fresh generator is built first and moved in only on success, so a
    /// failure leaves `self` untouched.
    ///
    /// # Errors
    ///
    /// Same as [`Generator::reseed`].
    pub fn reseed_with_source(&mut self, seed: u64, source: &dyn SeedSource) -> Result<()> {
        let fresh = Self::with_seed_source(self.kind(), seed, self.params(), source)?;
        debug!(kind = %self.kind(), old_seed = self.seed, new_seed = fresh.seed, "generator reseeded");
        *self = fresh;
        Ok(())
    }

    /// Advances a xoshiro256++ generator by 2^128 draws.
    ///
    /// # Errors
    ///
    /// [`RngError::UnsupportedOperation`] for every other kind; the state is
    /// not touched.
    pub fn jump(&mut self) -> Result<()> {
        let kind = self.kind();
        match &mut self.state {
            GeneratorState::FastXor256(g) => {
                g.jump();
                debug!(seed = self.seed, "generator jumped 2^128 draws");
                Ok(())
            }
            _ => Err(RngError::UnsupportedOperation {
                operation: "jump",
                kind,
            }),
        }
    }

    /// Draws `sample_size` values with [`next_distribution`](Self::next_distribution)
    /// and summarises them against the kind's theoretical distribution.
    ///
    /// # Errors
    ///
    /// [`RngError::EmptySample`] when `sample_size` is zero; no draw happens.
    pub fn analyze(&mut self, sample_size: usize) -> Result<SampleStatistics> {
        analysis::analyze(self, sample_size)
    }
}
