//! `rand` interop: a [`Generator`] is a [`RngCore`], so `rand` and
//! `rand_distr` samplers can draw from any engine kind.

use rand::RngCore;

use super::Generator;

impl RngCore for Generator {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        Generator::next_u32(self)
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        Generator::next_u64(self)
    }

    /// Same byte layout as [`Generator::fill_bytes`]; an empty slice is a no-op.
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.fill_le_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_le_bytes(dest);
        Ok(())
    }
}
