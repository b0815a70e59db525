use core::fmt::{self, Write};

use wideint_internals::Word;

// `BigInt` has a redundant `LEN` parameter, because we absolutely have to
// have a parameter that directly specifies the raw array length, and because
// we also want Rust's typechecking to distinguish between different bitwidth
// `BigInt`s. `LEN` is checked against `BITS` and `W` at monomorphization
// time, so an inconsistent instantiation cannot compile.

/// An integer with const generic bitwidth and signedness that is stored
/// inline on the stack as an array of machine words.
///
/// The parameters are the total bitwidth `BITS`, the signedness `SIGNED`
/// (two's complement when `true`), the storage word type `W`, and the raw
/// array length `LEN`, which must equal the number of `W`s needed to hold
/// `BITS` bits. `BITS` does not need to be a multiple of the word size; any
/// unused bits in the most significant word are kept zeroed by every
/// operation.
///
/// ```
/// use wideint::{BigInt, U256};
///
/// // `U256` is an alias for `BigInt<256, false, u64, 4>`
/// let x = U256::from_u64(3);
/// let y = U256::from_u64(4);
/// assert_eq!((x.wrapping_mul(y)).to_u64(), 12);
///
/// // a 96 bit unsigned integer stored as three `u32`s
/// let z = BigInt::<96, false, u32, 3>::max();
/// assert_eq!(z.wrapping_add(BigInt::one()), BigInt::zero());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BigInt<const BITS: usize, const SIGNED: bool, W: Word, const LEN: usize> {
    pub(crate) words: [W; LEN],
}

impl<const BITS: usize, const SIGNED: bool, W: Word, const LEN: usize>
    BigInt<BITS, SIGNED, W, LEN>
{
    // Evaluated when any constructor is monomorphized, which turns an
    // inconsistent instantiation into a compile error.
    const ASSERT: () = {
        assert!(BITS != 0, "`BigInt` must have a nonzero bitwidth");
        assert!(
            LEN == (BITS + W::BITS - 1) / W::BITS,
            "`LEN` must be the number of words needed to store `BITS` bits"
        );
    };

    /// The number of bits in use in the most significant word, when that word
    /// is not whole. Zero when `BITS` is a multiple of the word size.
    pub(crate) const EXTRA: usize = BITS % W::BITS;

    /// Returns the bitwidth as a `usize`
    #[inline]
    pub const fn bw() -> usize {
        BITS
    }

    /// Returns `true` if this type is interpreted as a signed two's
    /// complement integer
    #[inline]
    pub const fn signed() -> bool {
        SIGNED
    }

    /// Zeroes any unused bits in the most significant word
    #[inline]
    pub(crate) fn clear_unused_bits(&mut self) {
        if Self::EXTRA != 0 {
            self.words[LEN - 1] &= W::MAX >> (W::BITS - Self::EXTRA);
        }
    }

    /// Returns the zero value
    #[inline]
    pub fn zero() -> Self {
        let _ = Self::ASSERT;
        Self {
            words: [W::ZERO; LEN],
        }
    }

    /// Returns the value one
    #[inline]
    pub fn one() -> Self {
        let mut res = Self::zero();
        res.words[0] = W::ONE;
        res
    }

    /// Returns the value with every bit set, which is negative one for
    /// signed types
    pub fn all_ones() -> Self {
        let _ = Self::ASSERT;
        let mut res = Self { words: [W::MAX; LEN] };
        res.clear_unused_bits();
        res
    }

    /// Returns the most positive representable value. This is all ones for
    /// unsigned types, and all ones except the sign bit for signed types.
    pub fn max() -> Self {
        let mut res = Self::all_ones();
        if SIGNED {
            res.words[LEN - 1] ^= W::ONE << ((BITS - 1) % W::BITS);
        }
        res
    }

    /// Returns the most negative representable value. This is zero for
    /// unsigned types, and the sign bit alone for signed types.
    pub fn min() -> Self {
        let mut res = Self::zero();
        if SIGNED {
            res.words[LEN - 1] = W::ONE << ((BITS - 1) % W::BITS);
        }
        res
    }

    /// Constructs from a raw array of words, least significant word first.
    /// Bits in the array beyond `BITS` are ignored.
    #[inline]
    pub fn from_words(words: [W; LEN]) -> Self {
        let _ = Self::ASSERT;
        let mut res = Self { words };
        res.clear_unused_bits();
        res
    }

    /// The underlying storage words, least significant first
    #[inline]
    pub fn as_words(&self) -> &[W; LEN] {
        &self.words
    }

    /// Returns the underlying storage words by value
    #[inline]
    pub fn to_words(self) -> [W; LEN] {
        self.words
    }

    /// Returns the most significant bit
    #[inline]
    pub fn msb(&self) -> bool {
        (self.words[LEN - 1] >> ((BITS - 1) % W::BITS)) != W::ZERO
    }

    /// Returns `true` if the value is negative, which can only happen for
    /// signed types
    #[inline]
    pub fn is_neg(&self) -> bool {
        SIGNED && self.msb()
    }

    /// Returns `true` if every bit is zero
    #[inline]
    pub fn is_zero(&self) -> bool {
        for i in 0..LEN {
            if self.words[i] != W::ZERO {
                return false
            }
        }
        true
    }

    #[inline]
    pub(crate) fn nibble(&self, i: usize) -> u8 {
        ((self.words[(i * 4) / W::BITS] >> ((i * 4) % W::BITS)).to_u128() & 0xf) as u8
    }

    /// Writes the contents as hexadecimal to `f`, with underscores every 8
    /// digits. The "0x" prefix and signedness-bitwidth suffix are always
    /// included, because it is confusing in `assert_` debugging otherwise.
    fn format_hexadecimal(&self, f: &mut fmt::Formatter, upper: bool) -> fmt::Result {
        f.write_str("0x")?;
        let mut started = false;
        for i in (0..((BITS + 3) / 4)).rev() {
            let digit = self.nibble(i);
            if !started {
                if (digit == 0) && (i != 0) {
                    continue
                }
                // we have reached the first nonzero digit, or the last digit
                started = true;
            }
            let c = if digit < 10 {
                b'0' + digit
            } else if upper {
                b'A' + (digit - 10)
            } else {
                b'a' + (digit - 10)
            };
            f.write_char(c as char)?;
            if ((i % 8) == 0) && (i != 0) {
                f.write_char('_')?;
            }
        }
        write!(f, "_{}{}", if SIGNED { 'i' } else { 'u' }, BITS)
    }

    fn format_binary(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("0b")?;
        let mut started = false;
        for i in (0..BITS).rev() {
            let bit = (self.words[i / W::BITS] >> (i % W::BITS)).to_u128() & 1;
            if !started {
                if (bit == 0) && (i != 0) {
                    continue
                }
                started = true;
            }
            f.write_char(if bit != 0 { '1' } else { '0' })?;
            if ((i % 8) == 0) && (i != 0) {
                f.write_char('_')?;
            }
        }
        write!(f, "_{}{}", if SIGNED { 'i' } else { 'u' }, BITS)
    }
}

impl<const BITS: usize, const SIGNED: bool, W: Word, const LEN: usize> Default
    for BigInt<BITS, SIGNED, W, LEN>
{
    /// The zero value
    fn default() -> Self {
        Self::zero()
    }
}

impl<const BITS: usize, const SIGNED: bool, W: Word, const LEN: usize> fmt::Debug
    for BigInt<BITS, SIGNED, W, LEN>
{
    /// Forwards to the `LowerHex` impl. We cannot use decimal because it
    /// would require allocation.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl<const BITS: usize, const SIGNED: bool, W: Word, const LEN: usize> fmt::Display
    for BigInt<BITS, SIGNED, W, LEN>
{
    /// Forwards to the `Debug` impl
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl<const BITS: usize, const SIGNED: bool, W: Word, const LEN: usize> fmt::LowerHex
    for BigInt<BITS, SIGNED, W, LEN>
{
    /// Lowercase hexadecimal formatting.
    ///
    /// ```
    /// use wideint::UInt;
    /// let x = UInt::<100, 2>::from_u64(0xfedcba9876543210);
    /// assert_eq!(format!("{:x}", x), "0xfedcba98_76543210_u100");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.format_hexadecimal(f, false)
    }
}

impl<const BITS: usize, const SIGNED: bool, W: Word, const LEN: usize> fmt::UpperHex
    for BigInt<BITS, SIGNED, W, LEN>
{
    /// Uppercase hexadecimal formatting.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.format_hexadecimal(f, true)
    }
}

impl<const BITS: usize, const SIGNED: bool, W: Word, const LEN: usize> fmt::Binary
    for BigInt<BITS, SIGNED, W, LEN>
{
    /// Binary formatting.
    ///
    /// ```
    /// use wideint::BigInt;
    /// let x = BigInt::<8, false, u8, 1>::from_u8(0b11000101);
    /// assert_eq!(format!("{:b}", x), "0b11000101_u8");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.format_binary(f)
    }
}

#[cfg(feature = "zeroize_support")]
impl<const BITS: usize, const SIGNED: bool, W: Word, const LEN: usize> zeroize::Zeroize
    for BigInt<BITS, SIGNED, W, LEN>
where
    W: zeroize::Zeroize,
{
    fn zeroize(&mut self) {
        self.words.zeroize()
    }
}
