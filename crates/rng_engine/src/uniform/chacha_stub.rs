//! ChaCha-shaped block replay.
//!
//! **Not cryptographic.** This generator keeps the layout of a ChaCha20
//! keystream block (sixteen 32-bit words and a cursor) but applies no
//! round function: it replays the seeded block forever. It exists for
//! output compatibility with streams recorded from earlier versions of the
//! engine. Use [`Xoshiro256PlusPlus`](super::Xoshiro256PlusPlus) or an
//! audited cipher crate for anything that needs unpredictability.

use super::{join_u32, UniformSource};

const BLOCK_WORDS: usize = 16;

/// Sixteen-word block replayed with period 16.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StreamCipherStub {
    block: [u32; BLOCK_WORDS],
    pos: usize,
}

impl StreamCipherStub {
    /// Splats the seed across the block: even words take its low half, odd
    /// words its high half. The cursor starts past the end, so the first
    /// draw wraps to word 0.
    pub fn from_seed(seed: u64) -> Self {
        let mut block = [0u32; BLOCK_WORDS];
        for (i, word) in block.iter_mut().enumerate() {
            *word = (seed >> ((i % 2) * 32)) as u32;
        }
        Self {
            block,
            pos: BLOCK_WORDS,
        }
    }

    /// Current block words.
    #[inline]
    pub fn block(&self) -> &[u32; BLOCK_WORDS] {
        &self.block
    }

    /// Current cursor, in `0..=16`.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }
}

impl UniformSource for StreamCipherStub {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        // The block is not regenerated on wrap.
        if self.pos >= BLOCK_WORDS {
            self.pos = 0;
        }
        let word = self.block[self.pos];
        self.pos += 1;
        word
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        let hi = self.next_u32();
        let lo = self.next_u32();
        join_u32(hi, lo)
    }
}
