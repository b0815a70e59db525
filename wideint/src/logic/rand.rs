use wideint_internals::Word;

use crate::BigInt;

/// `rand_support` functions
impl<const BITS: usize, const SIGNED: bool, W: Word, const LEN: usize>
    BigInt<BITS, SIGNED, W, LEN>
{
    // this is tested by `testcrate/tests/rand.rs`

    /// Randomly-assigns `self` using a `rand_core::RngCore` random number
    /// generator. This draws the bytes of each word in little endian order
    /// and then clears the unused bits.
    ///
    /// ```
    /// // Example using the `rand_xoshiro` crate.
    /// use rand_xoshiro::{rand_core::SeedableRng, Xoshiro128StarStar};
    /// use wideint::UInt;
    ///
    /// let mut rng = Xoshiro128StarStar::seed_from_u64(0);
    /// let mut x = UInt::<100, 2>::zero();
    /// x.rand_using(&mut rng).unwrap();
    /// let mut y = UInt::<100, 2>::zero();
    /// y.rand_using(&mut rng).unwrap();
    /// assert_ne!(x, y);
    /// ```
    pub fn rand_using<R>(&mut self, rng: &mut R) -> Result<(), rand_core::Error>
    where
        R: rand_core::RngCore,
    {
        let mut buf = [0u8; 16];
        for i in 0..LEN {
            rng.try_fill_bytes(&mut buf[..(W::BITS / 8)])?;
            self.words[i] = W::from_u128(u128::from_le_bytes(buf));
        }
        self.clear_unused_bits();
        Ok(())
    }
}
