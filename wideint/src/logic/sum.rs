use wideint_internals::Word;

use crate::BigInt;

/// # Summation
impl<const BITS: usize, const SIGNED: bool, W: Word, const LEN: usize>
    BigInt<BITS, SIGNED, W, LEN>
{
    /// A general summation with carry-in `cin`. Returns the sum, the unsigned
    /// overflow (equivalent to the carry-out bit), and the signed overflow.
    pub(crate) fn cin_sum(self, rhs: Self, cin: bool) -> (Self, bool, bool) {
        let mut res = Self::zero();
        let mut carry = if cin { W::ONE } else { W::ZERO };
        for i in 0..(LEN - 1) {
            let tmp = self.words[i].widen_add(rhs.words[i], carry);
            res.words[i] = tmp.0;
            carry = tmp.1;
        }
        let tmp = self.words[LEN - 1].widen_add(rhs.words[LEN - 1], carry);
        let sign_bit = W::ONE << ((BITS - 1) % W::BITS);
        let lhs_sign = (self.words[LEN - 1] & sign_bit) != W::ZERO;
        let rhs_sign = (rhs.words[LEN - 1] & sign_bit) != W::ZERO;
        let out_sign = (tmp.0 & sign_bit) != W::ZERO;
        // Signed overflow only happens if the two input signs are the same and
        // the output sign is different
        let sflow = (lhs_sign == rhs_sign) && (out_sign != lhs_sign);
        if Self::EXTRA == 0 {
            res.words[LEN - 1] = tmp.0;
            (res, tmp.1 != W::ZERO, sflow)
        } else {
            let mask = W::MAX << Self::EXTRA;
            // handle clearing of unused bits
            res.words[LEN - 1] = tmp.0 & !mask;
            (res, (tmp.0 & mask) != W::ZERO, sflow)
        }
    }

    /// Subtraction as addition of `!rhs` with a carry-in. The words of `rhs`
    /// are complemented without clearing the unused bits, which makes the
    /// word-level carry-out equal the carry-out at bit `BITS` even for
    /// bitwidths that do not fill the last word. Returns the difference, the
    /// carry-out bit (set exactly when no borrow happened), and the signed
    /// overflow.
    pub(crate) fn cin_diff(self, rhs: Self, cin: bool) -> (Self, bool, bool) {
        let mut res = Self::zero();
        let mut carry = if cin { W::ONE } else { W::ZERO };
        for i in 0..LEN {
            let tmp = self.words[i].widen_add(!rhs.words[i], carry);
            res.words[i] = tmp.0;
            carry = tmp.1;
        }
        let sign_bit = W::ONE << ((BITS - 1) % W::BITS);
        let lhs_sign = (self.words[LEN - 1] & sign_bit) != W::ZERO;
        let rhs_sign = (rhs.words[LEN - 1] & sign_bit) != W::ZERO;
        let out_sign = (res.words[LEN - 1] & sign_bit) != W::ZERO;
        let sflow = (lhs_sign != rhs_sign) && (out_sign != lhs_sign);
        res.clear_unused_bits();
        (res, carry != W::ZERO, sflow)
    }

    /// Wrapping addition
    #[must_use]
    pub fn wrapping_add(self, rhs: Self) -> Self {
        self.cin_sum(rhs, false).0
    }

    /// Wrapping subtraction
    #[must_use]
    pub fn wrapping_sub(self, rhs: Self) -> Self {
        self.cin_diff(rhs, true).0
    }

    /// Addition that additionally returns whether overflow happened. The flag
    /// is the carry-out bit for unsigned types and two's complement overflow
    /// for signed types.
    #[must_use]
    pub fn overflowing_add(self, rhs: Self) -> (Self, bool) {
        let (res, uflow, sflow) = self.cin_sum(rhs, false);
        (res, if SIGNED { sflow } else { uflow })
    }

    /// Subtraction that additionally returns whether overflow happened. The
    /// flag is the borrow bit for unsigned types and two's complement
    /// overflow for signed types.
    #[must_use]
    pub fn overflowing_sub(self, rhs: Self) -> (Self, bool) {
        let (res, carry, sflow) = self.cin_diff(rhs, true);
        (res, if SIGNED { sflow } else { !carry })
    }

    /// Checked addition, `None` on overflow
    #[must_use]
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        match self.overflowing_add(rhs) {
            (res, false) => Some(res),
            _ => None,
        }
    }

    /// Checked subtraction, `None` on overflow
    #[must_use]
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        match self.overflowing_sub(rhs) {
            (res, false) => Some(res),
            _ => None,
        }
    }

    /// Wrapping two's complement negation. Note that negating the signed
    /// minimum value returns it unchanged.
    #[must_use]
    pub fn wrapping_neg(self) -> Self {
        Self::zero().wrapping_sub(self)
    }

    /// Negates if `neg` is true
    #[must_use]
    pub(crate) fn neg_if(self, neg: bool) -> Self {
        if neg {
            self.wrapping_neg()
        } else {
            self
        }
    }

    /// Wrapping absolute value. The result of this is always interpretable as
    /// an unsigned magnitude, even for the signed minimum value.
    #[must_use]
    pub fn wrapping_abs(self) -> Self {
        self.neg_if(self.is_neg())
    }
}
