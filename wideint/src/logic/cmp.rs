use core::cmp::Ordering;

use wideint_internals::Word;

use crate::BigInt;

/// # Comparison
impl<const BITS: usize, const SIGNED: bool, W: Word, const LEN: usize>
    BigInt<BITS, SIGNED, W, LEN>
{
    /// Lexicographic comparison of the raw words, most significant first.
    /// This is the value comparison for the unsigned interpretation.
    pub(crate) fn ucmp(&self, rhs: &Self) -> Ordering {
        for i in (0..LEN).rev() {
            match self.words[i].cmp(&rhs.words[i]) {
                Ordering::Equal => (),
                ord => return ord,
            }
        }
        Ordering::Equal
    }

    /// Unsigned less-than, used internally where the interpretation must be
    /// unsigned regardless of `SIGNED`
    pub(crate) fn ult(&self, rhs: &Self) -> bool {
        matches!(self.ucmp(rhs), Ordering::Less)
    }
}

impl<const BITS: usize, const SIGNED: bool, W: Word, const LEN: usize> PartialOrd
    for BigInt<BITS, SIGNED, W, LEN>
{
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}

impl<const BITS: usize, const SIGNED: bool, W: Word, const LEN: usize> Ord
    for BigInt<BITS, SIGNED, W, LEN>
{
    /// Value comparison under the signedness of the type. A negative and a
    /// nonnegative value order by sign alone, two values of the same sign
    /// order like their raw words because two's complement is lexicographic
    /// within one sign.
    fn cmp(&self, rhs: &Self) -> Ordering {
        if SIGNED {
            match (self.msb(), rhs.msb()) {
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                _ => self.ucmp(rhs),
            }
        } else {
            self.ucmp(rhs)
        }
    }
}
