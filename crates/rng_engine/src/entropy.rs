//! Seed resolution for the zero-seed sentinel.
//!
//! A seed of `0` asks the engine to derive one from outside the program.
//! That lookup goes through a [`SeedSource`], so the deterministic path
//! (any non-zero seed) never touches the clock and tests can inject a
//! [`FixedSeed`] to exercise the sentinel path reproducibly.

use std::time::{SystemTime, UNIX_EPOCH};

/// Seed used when a source itself yields `0`.
///
/// The SplitMix stretch maps `0` to an all-zero xoshiro state, which is a
/// fixed point of the generator.
pub const FALLBACK_SEED: u64 = 0x853c_49e6_748f_ea9b;

/// External entropy consulted only for the zero-seed sentinel.
pub trait SeedSource {
    /// Produces a seed. May return `0`; callers remap it via [`resolve_seed`].
    fn next_seed(&self) -> u64;
}

/// Seeds from the wall clock (nanoseconds since the Unix epoch).
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl SeedSource for SystemClock {
    fn next_seed(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(FALLBACK_SEED)
    }
}

/// Always returns the same seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedSeed(pub u64);

impl SeedSource for FixedSeed {
    fn next_seed(&self) -> u64 {
        self.0
    }
}

/// Resolves a caller seed: non-zero seeds pass through untouched, `0` is
/// replaced by the source's seed (and a zero from the source by
/// [`FALLBACK_SEED`]).
///
/// # Examples
///
/// ```rust
/// use rng_engine::entropy::{resolve_seed, FixedSeed, FALLBACK_SEED};
///
/// assert_eq!(resolve_seed(42, &FixedSeed(7)), 42);
/// assert_eq!(resolve_seed(0, &FixedSeed(7)), 7);
/// assert_eq!(resolve_seed(0, &FixedSeed(0)), FALLBACK_SEED);
/// ```
#[inline]
pub fn resolve_seed(seed: u64, source: &dyn SeedSource) -> u64 {
    if seed != 0 {
        return seed;
    }
    match source.next_seed() {
        0 => FALLBACK_SEED,
        derived => derived,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_is_nonzero() {
        assert_ne!(resolve_seed(0, &SystemClock), 0);
    }

    #[test]
    fn test_nonzero_seed_ignores_source() {
        struct Panicking;
        impl SeedSource for Panicking {
            fn next_seed(&self) -> u64 {
                panic!("source consulted for a non-zero seed")
            }
        }
        assert_eq!(resolve_seed(99, &Panicking), 99);
    }
}
