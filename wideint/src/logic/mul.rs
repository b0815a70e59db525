use wideint_internals::Word;

use crate::BigInt;

/// Unsigned-multiplies `lhs` by `rhs` and add-assigns the product to `out`,
/// truncating at `out.len()` words. The inner loop runs two carry chains at
/// once, one for the short multiplication and one for the accumulation.
pub(crate) fn umul_add_words<W: Word>(out: &mut [W], lhs: &[W], rhs: &[W]) {
    // swap so that `x0.len() <= x1.len()`
    let (x0, x1) = if lhs.len() <= rhs.len() {
        (lhs, rhs)
    } else {
        (rhs, lhs)
    };
    let x0_upper_bound = if out.len() < x0.len() {
        out.len()
    } else {
        x0.len()
    };
    for x0_i in 0..x0_upper_bound {
        // carry from the short multiplication
        let mut carry0 = W::ZERO;
        let mut carry1 = W::ZERO;
        let mut x1_i = 0;
        let mut out_i = x0_i;
        loop {
            if (x1_i >= x1.len()) || (out_i >= out.len()) {
                break
            }
            let tmp0 = x0[x0_i].widen_mul_add(x1[x1_i], carry0);
            carry0 = tmp0.1;
            let tmp1 = out[out_i].widen_add(tmp0.0, carry1);
            carry1 = tmp1.1;
            out[out_i] = tmp1.0;
            x1_i += 1;
            out_i += 1;
        }
        // handle the last short multiplication carry if `out` continues
        if out_i < out.len() {
            let tmp = out[out_i].widen_add(carry0, carry1);
            out[out_i] = tmp.0;
            carry1 = tmp.1;
            out_i += 1;
            // handle arbitrarily many addition carries
            while (out_i < out.len()) && (carry1 != W::ZERO) {
                let tmp = out[out_i].widen_add(carry1, W::ZERO);
                out[out_i] = tmp.0;
                carry1 = tmp.1;
                out_i += 1;
            }
        }
    }
}

/// # Multiplication
impl<const BITS: usize, const SIGNED: bool, W: Word, const LEN: usize>
    BigInt<BITS, SIGNED, W, LEN>
{
    /// Wrapping multiplication. The low `BITS` bits of a product do not
    /// depend on signedness, so this is shared by both interpretations.
    #[must_use]
    pub fn wrapping_mul(self, rhs: Self) -> Self {
        let mut res = Self::zero();
        umul_add_words(&mut res.words, &self.words, &rhs.words);
        res.clear_unused_bits();
        res
    }

    /// Full multiplication. Returns the entire product of `self` and `rhs`,
    /// which never overflows because the output bitwidth is the sum of the
    /// input bitwidths. The output type usually follows from the binding,
    /// for example:
    ///
    /// ```
    /// use wideint::{U128, U256};
    ///
    /// let x = U128::max();
    /// let square: U256 = x.ful_mul(x);
    /// assert_eq!(square, U256::max().wrapping_sub(U256::from_u8(1) << 129).wrapping_add(U256::from_u8(2)));
    /// ```
    #[must_use]
    pub fn ful_mul<
        const RHS_BITS: usize,
        const RHS_LEN: usize,
        const OUT_BITS: usize,
        const OUT_LEN: usize,
    >(
        self,
        rhs: BigInt<RHS_BITS, SIGNED, W, RHS_LEN>,
    ) -> BigInt<OUT_BITS, SIGNED, W, OUT_LEN> {
        const {
            assert!(
                OUT_BITS == BITS + RHS_BITS,
                "`ful_mul` output bitwidth must be the sum of the input bitwidths"
            );
        }
        let lhs_neg = self.is_neg();
        let rhs_neg = rhs.is_neg();
        // note: the magnitude of the signed minimum value survives
        // `wrapping_abs` when reinterpreted as unsigned
        let lhs_mag = self.wrapping_abs();
        let rhs_mag = rhs.wrapping_abs();
        let mut res = BigInt::<OUT_BITS, SIGNED, W, OUT_LEN>::zero();
        umul_add_words(&mut res.words, &lhs_mag.words, &rhs_mag.words);
        res.clear_unused_bits();
        res.neg_if(lhs_neg != rhs_neg)
    }

    /// Approximates the high `BITS` bits of the `2 * BITS` bit product of
    /// `self` and `rhs`, treated as unsigned. The schoolbook columns that
    /// only influence the result through their carries are skipped, except
    /// for the topmost one, which keeps the error one-sided and less than
    /// the number of words: `exact - LEN < quick_mul_hi <= exact`. Only
    /// usable when the bitwidth is a multiple of the word size.
    #[must_use]
    pub fn quick_mul_hi(self, rhs: Self) -> Self {
        const {
            assert!(
                BITS % W::BITS == 0,
                "`quick_mul_hi` requires the bitwidth to be a multiple of the word size"
            );
        }
        let mut res = Self::zero();
        // Column `LEN - 1` of the full product is made of the lo halves of
        // the diagonal `i + j == LEN - 1`. The column itself is discarded,
        // but its carry lands at column `LEN`, which is word 0 of the
        // result, together with the hi halves of the diagonal.
        let mut col = W::ZERO;
        for i in 0..LEN {
            let tmp = self.words[i].widen_mul_add(rhs.words[LEN - 1 - i], W::ZERO);
            res.add_word_at(tmp.1, 0);
            let sum = col.widen_add(tmp.0, W::ZERO);
            col = sum.0;
            res.add_word_at(sum.1, 0);
        }
        // The products entirely within the high half are accumulated in full,
        // with the same dual carry chains as the truncating kernel.
        for lhs_i in 1..LEN {
            let mut carry0 = W::ZERO;
            let mut carry1 = W::ZERO;
            for rhs_i in (LEN - lhs_i)..LEN {
                let to = lhs_i + rhs_i - LEN;
                let tmp0 = self.words[lhs_i].widen_mul_add(rhs.words[rhs_i], carry0);
                carry0 = tmp0.1;
                let tmp1 = res.words[to].widen_add(tmp0.0, carry1);
                carry1 = tmp1.1;
                res.words[to] = tmp1.0;
            }
            let tmp = res.words[lhs_i].widen_add(carry0, carry1);
            res.words[lhs_i] = tmp.0;
            carry1 = tmp.1;
            let mut i = lhs_i + 1;
            while (i < LEN) && (carry1 != W::ZERO) {
                let tmp = res.words[i].widen_add(carry1, W::ZERO);
                res.words[i] = tmp.0;
                carry1 = tmp.1;
                i += 1;
            }
        }
        res
    }

    /// Ripple-adds the single word `w` into `self` starting at word `from`.
    /// Any carry out of the most significant word is discarded.
    #[inline]
    pub(crate) fn add_word_at(&mut self, w: W, from: usize) {
        let mut carry = w;
        let mut i = from;
        while (i < LEN) && (carry != W::ZERO) {
            let tmp = self.words[i].widen_add(carry, W::ZERO);
            self.words[i] = tmp.0;
            carry = tmp.1;
            i += 1;
        }
    }

    /// Raises `self` to the power `exp` by binary exponentiation, wrapping
    /// on overflow. `pow_n(0)` is one for every input including zero.
    #[must_use]
    pub fn pow_n(self, mut exp: u64) -> Self {
        let mut acc = Self::one();
        let mut base = self;
        while exp != 0 {
            if (exp & 1) != 0 {
                acc = acc.wrapping_mul(base);
            }
            exp >>= 1;
            if exp != 0 {
                base = base.wrapping_mul(base);
            }
        }
        acc
    }
}
