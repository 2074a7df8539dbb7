//! # Uniform Bit Generators
//!
//! The four uniform algorithms behind the engine's non-distribution kinds:
//!
//! - [`Xoshiro256PlusPlus`]: fast 256-bit state, native 64-bit output, jump-ahead
//! - [`Pcg32`]: 64-bit LCG state with a permuted 32-bit output
//! - [`StreamCipherStub`]: ChaCha-shaped block replay, **not** a cipher
//! - [`Mt19937`]: the classic 624-word Mersenne Twister
//!
//! All of them implement [`UniformSource`]. Generators with a 32-bit native
//! word build 64-bit values from two draws, high half first; doubles always
//! come from the top 53 bits of a 64-bit draw.

mod chacha_stub;
mod mt;
mod pcg;
mod xoshiro;

pub use chacha_stub::StreamCipherStub;
pub use mt::Mt19937;
pub use pcg::Pcg32;
pub use xoshiro::{Xoshiro256PlusPlus, JUMP};

/// 2^-53, the spacing of doubles produced by [`u64_to_unit_f64`].
pub const F64_UNIT: f64 = 1.0 / (1u64 << 53) as f64;

/// Converts a 64-bit draw to a double in `[0, 1)` using its top 53 bits.
#[inline]
pub fn u64_to_unit_f64(x: u64) -> f64 {
    (x >> 11) as f64 * F64_UNIT
}

/// Joins two 32-bit draws, the first becoming the high half.
#[inline]
pub(crate) fn join_u32(hi: u32, lo: u32) -> u64 {
    ((hi as u64) << 32) | lo as u64
}

/// Common interface of the uniform algorithms.
///
/// Static dispatch only: the engine's handle matches on its state enum and
/// calls these methods on concrete types.
pub trait UniformSource {
    /// Next 32-bit output.
    fn next_u32(&mut self) -> u32;

    /// Next 64-bit output.
    fn next_u64(&mut self) -> u64;

    /// Next double in `[0, 1)`.
    #[inline]
    fn next_f64(&mut self) -> f64 {
        u64_to_unit_f64(self.next_u64())
    }
}

#[cfg(test)]
mod tests;
