use wideint_internals::Word;

use crate::BigInt;

/// # Division
///
/// Note that signed division overflows when the dividend is the minimum value
/// and the divisor is negative one. The overflow results in the quotient being
/// the minimum value again and the remainder being zero, which keeps
/// `duo == quo * div + rem` true modulo `2^BITS`.
///
/// Note about terminology: we like short three letter shorthands, but run into
/// a problem where the first three letters of "divide", "dividend", and
/// "divisor" all clash with each other. We use "quo" for quotient and "rem"
/// for remainder. We use "div" for divisor. That still leaves a name clash
/// with dividend, so we choose to use the shorthand "duo", from the fact that
/// in the internal algorithms the dividend is subtracted from until it
/// becomes the remainder, so that it serves two purposes.
impl<const BITS: usize, const SIGNED: bool, W: Word, const LEN: usize>
    BigInt<BITS, SIGNED, W, LEN>
{
    /// The number of words up to and including the most significant nonzero
    /// word, zero if `self.is_zero()`
    fn sig_words(&self) -> usize {
        for i in (0..LEN).rev() {
            if self.words[i] != W::ZERO {
                return i + 1
            }
        }
        0
    }

    /// Unsigned-divides `self` by the single word `div`, returning the
    /// quotient and remainder. Returns `None` if `div == 0`.
    pub(crate) fn short_udivide(self, div: W) -> Option<(Self, W)> {
        if div == W::ZERO {
            return None
        }
        let mut quo = Self::zero();
        let mut rem = W::ZERO;
        for i in (0..LEN).rev() {
            let tmp = W::dd_div(self.words[i], rem, div);
            quo.words[i] = tmp.0;
            rem = tmp.1;
        }
        Some((quo, rem))
    }

    /// Unsigned-divides `duo` by `div` and returns the quotient and
    /// remainder. `div` must be nonzero.
    fn udivide(duo: Self, div: Self) -> (Self, Self) {
        let m = duo.sig_words();
        let n = div.sig_words();
        debug_assert!(n != 0);

        // quotient is 0 branch
        if (m < n) || duo.ult(&div) {
            return (Self::zero(), duo)
        }

        // all the significant bits fit in the native carrier
        if m * W::BITS <= 128 {
            let tmp_duo = duo.to_u128();
            let tmp_div = div.to_u128();
            return (
                Self::from_u128(tmp_duo.wrapping_div(tmp_div)),
                Self::from_u128(tmp_duo.wrapping_rem(tmp_div)),
            )
        }

        // short division branch
        if n == 1 {
            let (quo, rem) = duo.short_udivide(div.words[0]).unwrap();
            let mut rem_big = Self::zero();
            rem_big.words[0] = rem;
            return (quo, rem_big)
        }

        // Knuth Algorithm D. The dividend is normalized into `u` with one
        // virtual extra word `u_hi` at index `LEN`, the divisor into `v` so
        // that its most significant word has its top bit set.
        let shift = div.words[n - 1].leading_zeros();
        let mut u = [W::ZERO; LEN];
        let mut u_hi = W::ZERO;
        let mut v = [W::ZERO; LEN];
        if shift == 0 {
            u = duo.words;
            v = div.words;
        } else {
            let mut carry = W::ZERO;
            for i in 0..LEN {
                u[i] = (duo.words[i] << shift) | carry;
                carry = duo.words[i] >> (W::BITS - shift);
            }
            u_hi = carry;
            carry = W::ZERO;
            for i in 0..LEN {
                v[i] = (div.words[i] << shift) | carry;
                carry = div.words[i] >> (W::BITS - shift);
            }
        }
        let u_get = |u: &[W; LEN], u_hi: W, i: usize| if i == LEN { u_hi } else { u[i] };

        let mut quo = Self::zero();
        let vtop = v[n - 1];
        let vnext = v[n - 2];
        for j in (0..=(m - n)).rev() {
            let uj2 = u_get(&u, u_hi, j + n);
            let uj1 = u[j + n - 1];
            let uj0 = u[j + n - 2];

            // estimate the quotient word from the top three dividend words
            // and the top two divisor words
            let (mut qhat, mut rhat, mut rhat_oflow) = if uj2 == vtop {
                let tmp = uj1.overflowing_add(vtop);
                (W::MAX, tmp.0, tmp.1)
            } else {
                let tmp = W::dd_div(uj1, uj2, vtop);
                (tmp.0, tmp.1, false)
            };
            while !rhat_oflow {
                let tmp = qhat.widen_mul_add(vnext, W::ZERO);
                if (tmp.1 > rhat) || ((tmp.1 == rhat) && (tmp.0 > uj0)) {
                    qhat = qhat.wrapping_sub(W::ONE);
                    let sum = rhat.overflowing_add(vtop);
                    rhat = sum.0;
                    rhat_oflow = sum.1;
                } else {
                    break
                }
            }

            // subtract `qhat * v` from the `n + 1` word window at `j`. The
            // multiplication words are inverted so the subtraction becomes an
            // addition with a carry-in of one.
            let mut mul_carry = W::ZERO;
            let mut add_carry = W::ONE;
            for i in 0..n {
                let tmp0 = v[i].widen_mul_add(qhat, mul_carry);
                mul_carry = tmp0.1;
                let tmp1 = (!tmp0.0).widen_add(u[j + i], add_carry);
                add_carry = tmp1.1;
                u[j + i] = tmp1.0;
            }
            let tmp = (!mul_carry).widen_add(u_get(&u, u_hi, j + n), add_carry);
            if j + n == LEN {
                u_hi = tmp.0;
            } else {
                u[j + n] = tmp.0;
            }

            if tmp.1 == W::ZERO {
                // rare case where `qhat` was one too large, add one divisor back
                qhat = qhat.wrapping_sub(W::ONE);
                let mut carry = W::ZERO;
                for i in 0..n {
                    let sum = u[j + i].widen_add(v[i], carry);
                    u[j + i] = sum.0;
                    carry = sum.1;
                }
                // the carry out cancels the borrow in the top window word
                if j + n == LEN {
                    u_hi = u_hi.wrapping_add(carry);
                } else {
                    u[j + n] = u[j + n].wrapping_add(carry);
                }
            }
            quo.words[j] = qhat;
        }

        // denormalize the remainder
        let mut rem = Self::zero();
        if shift == 0 {
            for i in 0..n {
                rem.words[i] = u[i];
            }
        } else {
            for i in 0..n {
                let hi = if (i + 1) < n { u[i + 1] } else { W::ZERO };
                rem.words[i] = (u[i] >> shift) | (hi << (W::BITS - shift));
            }
        }
        (quo, rem)
    }

    /// Divides `self` by `rhs` and returns the quotient and remainder, signed
    /// when the type is signed. The remainder takes the sign of the dividend.
    /// Returns `None` if `rhs.is_zero()`.
    #[must_use]
    pub fn div_rem(self, rhs: Self) -> Option<(Self, Self)> {
        if rhs.is_zero() {
            return None
        }
        if SIGNED {
            let duo_neg = self.is_neg();
            let div_neg = rhs.is_neg();
            let (quo, rem) = Self::udivide(self.wrapping_abs(), rhs.wrapping_abs());
            Some((quo.neg_if(duo_neg != div_neg), rem.neg_if(duo_neg)))
        } else {
            Some(Self::udivide(self, rhs))
        }
    }

    /// Checked division, `None` if `rhs.is_zero()`
    #[must_use]
    pub fn checked_div(self, rhs: Self) -> Option<Self> {
        Some(self.div_rem(rhs)?.0)
    }

    /// Checked remainder, `None` if `rhs.is_zero()`
    #[must_use]
    pub fn checked_rem(self, rhs: Self) -> Option<Self> {
        Some(self.div_rem(rhs)?.1)
    }

    /// Unsigned-divides `self` by `x * 2^e`, where `x` is a half word,
    /// assigns the quotient to `self`, and returns the remainder. Returns
    /// `None` and leaves `self` unchanged if `x == 0`. Divisors of this form
    /// cover the bases and scale factors used in decimal float printing, and
    /// only need a shift and a short division instead of the full algorithm.
    #[must_use]
    pub fn div_half_times_pow2(&mut self, x: W::Half, e: usize) -> Option<Self> {
        if x == W::Half::ZERO {
            return None
        }
        if e >= BITS {
            let rem = *self;
            *self = Self::zero();
            return Some(rem)
        }
        let low = *self & Self::mask_trailing_ones(e);
        let (quo, r) = self
            .shr_inner(e, false)
            .short_udivide(W::from_half(x))
            .unwrap();
        *self = quo;
        let mut rem = Self::zero();
        rem.words[0] = r;
        Some((rem << e) | low)
    }
}
