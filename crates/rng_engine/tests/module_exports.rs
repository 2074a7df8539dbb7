//! Integration tests for the public surface.
//!
//! Verifies that the crate-root re-exports and public modules are reachable
//! by absolute path and behave consistently with each other.

use rng_engine::{DistributionParams, Generator, GeneratorKind, RngError};

/// Uniform algorithms are usable without the handle.
#[test]
fn test_uniform_module_exports() {
    use rng_engine::uniform::{Mt19937, Pcg32, StreamCipherStub, Xoshiro256PlusPlus, JUMP};
    use rng_engine::UniformSource;

    assert_eq!(JUMP[0], 0x180e_c6d3_3cfd_0aba);
    let mut mt = Mt19937::from_seed(5489);
    assert_eq!(mt.next_u32(), 3_499_211_612);

    let mut direct = Xoshiro256PlusPlus::from_seed(9);
    let mut handle = Generator::new(GeneratorKind::FastXor256, 9, None).unwrap();
    assert_eq!(direct.next_u64(), handle.next_u64());

    let mut pcg = Pcg32::from_seed(42);
    assert_eq!(pcg.next_u32(), 0);

    let stub = StreamCipherStub::from_seed(1);
    assert_eq!(stub.position(), 16);
}

/// Distribution samplers are usable without the handle.
#[test]
fn test_distribution_module_exports() {
    use rng_engine::distributions::{GammaSampler, GaussianSampler, PoissonSampler, WeibullSampler};

    let mut handle = Generator::new(GeneratorKind::Weibull, 4, None).unwrap();
    let mut direct = WeibullSampler::new(1.0, 1.0, 4);
    assert_eq!(handle.next_distribution(), direct.sample());

    assert!(GammaSampler::new(3.0, 1.0, 4).sample() > 0.0);
    assert!(GaussianSampler::new(0.0, 1.0, 4).sample().is_finite());
    assert!(PoissonSampler::new(2.0, 4).sample() >= 0.0);
}

/// Special functions used by the analysis are public.
#[test]
fn test_analysis_module_exports() {
    use rng_engine::analysis::{gamma_p, norm_cdf, GOODNESS_OF_FIT_BINS};

    assert_eq!(GOODNESS_OF_FIT_BINS, 20);
    assert!((norm_cdf(0.0_f64) - 0.5).abs() < 1e-7);
    assert!((gamma_p(1.0, 1.0) - (1.0 - (-1.0_f64).exp())).abs() < 1e-12);
}

/// Kind names round-trip through the string form used by the CLI.
#[test]
fn test_kind_names() {
    let kind: GeneratorKind = "xoshiro256++".parse().unwrap();
    assert_eq!(kind, GeneratorKind::FastXor256);
    assert_eq!(
        "lcg128".parse::<GeneratorKind>(),
        Err(RngError::UnknownKind("lcg128".to_string()))
    );
}

/// The handle wrappers and the methods agree.
#[test]
fn test_handle_matches_methods() {
    use rng_engine::handle;

    let params = DistributionParams::Poisson { lambda: 6.0 };
    let mut wrapped = handle::create(GeneratorKind::Poisson, 21, Some(params));
    let mut direct = Generator::new(GeneratorKind::Poisson, 21, Some(params)).unwrap();
    for _ in 0..50 {
        assert_eq!(
            handle::draw_distribution(wrapped.as_mut()),
            direct.next_distribution()
        );
    }
    handle::destroy(wrapped);
}
