//! Absent-handle wrappers.
//!
//! Free functions over `Option<&mut Generator>` for callers that hold an
//! optional handle. An absent handle, or an operation that fails, yields
//! the neutral value: `0`, `0.0`, `false` or `None`. Use the [`Generator`]
//! methods directly when the error matters.
//!
//! ```rust
//! use rng_engine::handle;
//! use rng_engine::GeneratorKind;
//!
//! let mut missing = None;
//! assert_eq!(handle::draw_u64(missing.as_mut()), 0);
//! assert!(!handle::jump(missing.as_mut()));
//!
//! let mut rng = handle::create(GeneratorKind::FastXor256, 42, None);
//! assert!(handle::jump(rng.as_mut()));
//! handle::destroy(rng);
//! ```

use tracing::debug;

use crate::analysis::SampleStatistics;
use crate::distributions::DistributionParams;
use crate::generator::Generator;
use crate::kind::GeneratorKind;

/// Creates a generator, or `None` if the parameters are rejected.
pub fn create(
    kind: GeneratorKind,
    seed: u64,
    params: Option<DistributionParams>,
) -> Option<Generator> {
    Generator::new(kind, seed, params)
        .map_err(|e| debug!(%kind, error = %e, "generator creation rejected"))
        .ok()
}

/// Drops the generator together with any nested state. `None` is a no-op.
#[inline]
pub fn destroy(generator: Option<Generator>) {
    drop(generator);
}

/// Next 32-bit value, `0` for an absent handle.
#[inline]
pub fn draw_u32(generator: Option<&mut Generator>) -> u32 {
    generator.map_or(0, Generator::next_u32)
}

/// Next 64-bit value, `0` for an absent handle.
#[inline]
pub fn draw_u64(generator: Option<&mut Generator>) -> u64 {
    generator.map_or(0, Generator::next_u64)
}

/// Next double in `[0, 1)`, `0.0` for an absent handle.
#[inline]
pub fn draw_f64(generator: Option<&mut Generator>) -> f64 {
    generator.map_or(0.0, Generator::next_f64)
}

/// Next distribution sample, `0.0` for an absent handle.
#[inline]
pub fn draw_distribution(generator: Option<&mut Generator>) -> f64 {
    generator.map_or(0.0, Generator::next_distribution)
}

/// Fills `buffer`; `false` if either argument is absent or the buffer is
/// empty.
pub fn fill_bytes(generator: Option<&mut Generator>, buffer: Option<&mut [u8]>) -> bool {
    match (generator, buffer) {
        (Some(generator), Some(buffer)) => generator.fill_bytes(buffer).is_ok(),
        _ => false,
    }
}

/// Reseeds in place; `false` for an absent handle.
pub fn reseed(generator: Option<&mut Generator>, seed: u64) -> bool {
    generator.is_some_and(|g| g.reseed(seed).is_ok())
}

/// Jumps ahead; `false` for an absent handle or a kind without jump.
pub fn jump(generator: Option<&mut Generator>) -> bool {
    generator.is_some_and(|g| g.jump().is_ok())
}

/// Sample summary; `None` for an absent handle or an empty sample.
pub fn analyze(generator: Option<&mut Generator>, sample_size: usize) -> Option<SampleStatistics> {
    generator.and_then(|g| g.analyze(sample_size).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_handle_neutral_values() {
        assert_eq!(draw_u32(None), 0);
        assert_eq!(draw_u64(None), 0);
        assert_eq!(draw_f64(None), 0.0);
        assert_eq!(draw_distribution(None), 0.0);
        let mut buffer = [0u8; 4];
        assert!(!fill_bytes(None, Some(&mut buffer[..])));
        assert!(!reseed(None, 1));
        assert!(!jump(None));
        assert!(analyze(None, 10).is_none());
        destroy(None);
    }

    #[test]
    fn test_present_handle_delegates() {
        let mut rng = create(GeneratorKind::FastXor256, 42, None);
        assert_eq!(draw_u64(rng.as_mut()), 0x5e1c_fe86_afbe_df2f);
        assert!(reseed(rng.as_mut(), 42));
        assert_eq!(draw_u32(rng.as_mut()), 0xafbe_df2f);
        assert!(jump(rng.as_mut()));
    }

    #[test]
    fn test_fill_requires_buffer() {
        let mut rng = create(GeneratorKind::SmallLcg32, 1, None);
        assert!(!fill_bytes(rng.as_mut(), None));
        assert!(!fill_bytes(rng.as_mut(), Some(&mut [0u8; 0][..])));

        let mut buffer = [0u8; 5];
        assert!(fill_bytes(rng.as_mut(), Some(&mut buffer[..])));
    }

    #[test]
    fn test_failures_collapse_to_neutral() {
        let mut pcg = create(GeneratorKind::SmallLcg32, 1, None);
        assert!(!jump(pcg.as_mut()));
        assert!(analyze(pcg.as_mut(), 0).is_none());

        let bad = DistributionParams::Poisson { lambda: -1.0 };
        assert!(create(GeneratorKind::Poisson, 1, Some(bad)).is_none());
    }

    #[test]
    fn test_analyze_present() {
        let mut rng = create(GeneratorKind::Gaussian, 42, None);
        let stats = analyze(rng.as_mut(), 1_000).unwrap();
        assert_eq!(stats.sample_size, 1_000);
    }
}
