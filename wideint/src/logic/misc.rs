use wideint_internals::Word;

use crate::BigInt;

/// # Bit counting and masks
impl<const BITS: usize, const SIGNED: bool, W: Word, const LEN: usize>
    BigInt<BITS, SIGNED, W, LEN>
{
    /// Returns the least significant bit
    #[inline]
    pub fn lsb(&self) -> bool {
        (self.words[0] & W::ONE) != W::ZERO
    }

    /// Returns the number of leading zero bits
    pub fn leading_zeros(&self) -> usize {
        for i in (0..LEN).rev() {
            let x = self.words[i];
            if x != W::ZERO {
                return ((LEN - 1 - i) * W::BITS) + x.leading_zeros() - (LEN * W::BITS - BITS)
            }
        }
        BITS
    }

    /// Returns the number of trailing zero bits
    pub fn trailing_zeros(&self) -> usize {
        for i in 0..LEN {
            let x = self.words[i];
            if x != W::ZERO {
                return (i * W::BITS) + x.trailing_zeros()
            }
        }
        BITS
    }

    /// Returns the number of leading one bits
    pub fn leading_ones(&self) -> usize {
        (!*self).leading_zeros()
    }

    /// Returns the number of trailing one bits
    pub fn trailing_ones(&self) -> usize {
        (!*self).trailing_zeros()
    }

    /// Returns the number of set ones
    pub fn count_ones(&self) -> usize {
        let mut ones = 0;
        for i in 0..LEN {
            ones += self.words[i].count_ones();
        }
        ones
    }

    /// Returns a value with the lowest `n` bits set and the rest cleared.
    /// `n` saturates at the bitwidth, so `mask_trailing_ones(BITS)` is the
    /// all ones value.
    pub fn mask_trailing_ones(n: usize) -> Self {
        let n = if n > BITS { BITS } else { n };
        let mut res = Self::zero();
        for i in 0..(n / W::BITS) {
            res.words[i] = W::MAX;
        }
        let part = n % W::BITS;
        if part != 0 {
            res.words[n / W::BITS] = W::MAX >> (W::BITS - part);
        }
        res
    }

    /// Returns a value with the lowest `n` bits cleared and the rest set
    pub fn mask_trailing_zeros(n: usize) -> Self {
        !Self::mask_trailing_ones(n)
    }

    /// Returns a value with the highest `n` bits set and the rest cleared
    pub fn mask_leading_ones(n: usize) -> Self {
        let n = if n > BITS { BITS } else { n };
        Self::mask_trailing_zeros(BITS - n)
    }

    /// Returns a value with the highest `n` bits cleared and the rest set
    pub fn mask_leading_zeros(n: usize) -> Self {
        let n = if n > BITS { BITS } else { n };
        Self::mask_trailing_ones(BITS - n)
    }
}
