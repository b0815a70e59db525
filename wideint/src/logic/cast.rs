use wideint_internals::Word;

use crate::BigInt;

/// # Casting between `BigInt`s of arbitrary sizes
impl<const BITS: usize, const SIGNED: bool, W: Word, const LEN: usize>
    BigInt<BITS, SIGNED, W, LEN>
{
    /// The word of the infinite extension of `self` at index `i`. The uneven
    /// last word is patched up so that indexing beyond it sees only the
    /// extension bits.
    #[inline]
    fn extended_word(&self, i: usize, ext: bool) -> W {
        if i < LEN {
            let mut w = self.words[i];
            if ext && (i == LEN - 1) && (Self::EXTRA != 0) {
                w |= W::MAX << Self::EXTRA;
            }
            w
        } else {
            W::fill(ext)
        }
    }

    /// Gathers the word of type `W2` at bit offset `off` of the extension of
    /// `self`, going through the `u128` carrier so that the two word sizes do
    /// not need to divide each other
    fn gather_word<W2: Word>(&self, off: usize, ext: bool) -> W2 {
        let digits = off / W::BITS;
        let bits = off % W::BITS;
        let mut acc = self.extended_word(digits, ext).to_u128() >> bits;
        let mut got = W::BITS - bits;
        let mut i = digits + 1;
        while got < W2::BITS {
            acc |= self.extended_word(i, ext).to_u128() << got;
            got += W::BITS;
            i += 1;
        }
        W2::from_u128(acc)
    }

    /// Resize-copies `self` into a `BigInt` of any other bitwidth,
    /// signedness, and word type. If the value does not fit in the output
    /// bitwidth it is truncated. If the output is wider, the copied value is
    /// extended with the sign of `self` when the source type is signed and
    /// with zeros otherwise. The output type usually follows from the
    /// binding:
    ///
    /// ```
    /// use wideint::{BigInt, I128, U256};
    ///
    /// let x = I128::from_i64(-5);
    /// let y: U256 = x.resize();
    /// assert_eq!(y, U256::max().wrapping_sub(U256::from_u8(4)));
    ///
    /// // the word type may change as part of a resize
    /// let z: BigInt<96, false, u32, 3> = y.resize();
    /// assert_eq!(z.to_i32(), -5);
    /// ```
    #[must_use]
    pub fn resize<const OUT_BITS: usize, const OUT_SIGNED: bool, W2: Word, const OUT_LEN: usize>(
        &self,
    ) -> BigInt<OUT_BITS, OUT_SIGNED, W2, OUT_LEN> {
        let ext = self.is_neg();
        let mut res = BigInt::<OUT_BITS, OUT_SIGNED, W2, OUT_LEN>::zero();
        for i in 0..OUT_LEN {
            res.words[i] = self.gather_word::<W2>(i * W2::BITS, ext);
        }
        res.clear_unused_bits();
        res
    }

    /// Reinterprets the bits of `x` as a 32 bit integer. Only usable when
    /// `BITS == 32`.
    pub fn from_f32_bits(x: f32) -> Self {
        const {
            assert!(BITS == 32, "`from_f32_bits` requires a 32 bit integer");
        }
        Self::from_u32(x.to_bits())
    }

    /// Reinterprets the bits of `self` as an `f32`. Only usable when
    /// `BITS == 32`.
    #[must_use]
    pub fn to_f32_bits(&self) -> f32 {
        const {
            assert!(BITS == 32, "`to_f32_bits` requires a 32 bit integer");
        }
        f32::from_bits(self.to_u32())
    }

    /// Reinterprets the bits of `x` as a 64 bit integer. Only usable when
    /// `BITS == 64`.
    pub fn from_f64_bits(x: f64) -> Self {
        const {
            assert!(BITS == 64, "`from_f64_bits` requires a 64 bit integer");
        }
        Self::from_u64(x.to_bits())
    }

    /// Reinterprets the bits of `self` as an `f64`. Only usable when
    /// `BITS == 64`.
    #[must_use]
    pub fn to_f64_bits(&self) -> f64 {
        const {
            assert!(BITS == 64, "`to_f64_bits` requires a 64 bit integer");
        }
        f64::from_bits(self.to_u64())
    }
}
