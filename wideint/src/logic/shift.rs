use wideint_internals::Word;

use crate::BigInt;

/// # Shifts
///
/// Shift amounts of `BITS` or more do not panic, they saturate: a left shift
/// or an unsigned right shift returns zero, a signed right shift returns the
/// sign fill.
impl<const BITS: usize, const SIGNED: bool, W: Word, const LEN: usize>
    BigInt<BITS, SIGNED, W, LEN>
{
    pub(crate) fn shl_inner(self, s: usize) -> Self {
        if s == 0 {
            return self
        }
        if s >= BITS {
            return Self::zero()
        }
        let digits = s / W::BITS;
        let bits = s % W::BITS;
        let mut res = Self::zero();
        if bits == 0 {
            // digit aligned, words only move
            for i in digits..LEN {
                res.words[i] = self.words[i - digits];
            }
        } else {
            res.words[digits] = self.words[0] << bits;
            for i in (digits + 1)..LEN {
                res.words[i] = (self.words[i - digits] << bits)
                    | (self.words[i - digits - 1] >> (W::BITS - bits));
            }
        }
        res.clear_unused_bits();
        res
    }

    /// Right shift with an extension bit, which makes it arithmetic when
    /// `ext` is the sign and logical when `ext` is false
    pub(crate) fn shr_inner(mut self, s: usize, ext: bool) -> Self {
        if s == 0 {
            return self
        }
        let fill = W::fill(ext);
        if s >= BITS {
            let mut res = Self { words: [fill; LEN] };
            res.clear_unused_bits();
            return res
        }
        // materialize the extension into the unused bits so that the word
        // moves below need no special case for the last word
        if ext && (Self::EXTRA != 0) {
            self.words[LEN - 1] |= W::MAX << Self::EXTRA;
        }
        let digits = s / W::BITS;
        let bits = s % W::BITS;
        let mut res = Self::zero();
        if bits == 0 {
            for i in 0..(LEN - digits) {
                res.words[i] = self.words[i + digits];
            }
            for i in (LEN - digits)..LEN {
                res.words[i] = fill;
            }
        } else {
            for i in 0..(LEN - digits - 1) {
                res.words[i] = (self.words[i + digits] >> bits)
                    | (self.words[i + digits + 1] << (W::BITS - bits));
            }
            res.words[LEN - digits - 1] = (self.words[LEN - 1] >> bits) | (fill << (W::BITS - bits));
            for i in (LEN - digits)..LEN {
                res.words[i] = fill;
            }
        }
        res.clear_unused_bits();
        res
    }
}
