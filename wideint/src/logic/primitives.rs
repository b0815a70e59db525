use wideint_internals::Word;

use crate::BigInt;

/// # Primitive conversion
///
/// `u128` is wide enough to carry every supported word type, so all of the
/// primitive conversions funnel through the `u128` and `i128` pair.
///
/// If `BITS` is smaller than the primitive bitwidth, truncation is used when
/// copying bits from the primitive to `self`. Unsigned primitives are zero
/// extended and signed primitives are sign extended if `BITS` is larger than
/// the primitive bitwidth.
///
/// In the `to_*` direction, truncation is used if `BITS` is larger than the
/// primitive bitwidth, and otherwise the extension follows the signedness of
/// the type: `to_u*` zero extends, `to_i*` sign extends negative values.
impl<const BITS: usize, const SIGNED: bool, W: Word, const LEN: usize>
    BigInt<BITS, SIGNED, W, LEN>
{
    pub fn from_u128(x: u128) -> Self {
        let mut res = Self::zero();
        let mut x = x;
        for i in 0..LEN {
            res.words[i] = W::from_u128(x);
            x = x.wrapping_shr(W::BITS as u32);
        }
        res.clear_unused_bits();
        res
    }

    pub fn from_i128(x: i128) -> Self {
        let mut res = Self::zero();
        // the arithmetic shift saturates to the sign fill, which extends the
        // sign through all remaining words
        let mut x = x;
        for i in 0..LEN {
            res.words[i] = W::from_u128(x as u128);
            x = x.wrapping_shr(W::BITS as u32);
        }
        res.clear_unused_bits();
        res
    }

    #[must_use]
    pub fn to_u128(&self) -> u128 {
        let mut tmp = 0u128;
        for i in 0..LEN {
            if (i * W::BITS) >= 128 {
                break
            }
            tmp |= self.words[i].to_u128() << (i * W::BITS);
        }
        tmp
    }

    #[must_use]
    pub fn to_i128(&self) -> i128 {
        let mut tmp = self.to_u128();
        if (BITS < 128) && self.is_neg() {
            tmp |= u128::MAX << BITS;
        }
        tmp as i128
    }

    pub fn from_bool(x: bool) -> Self {
        let mut res = Self::zero();
        if x {
            res.words[0] = W::ONE;
        }
        res
    }

    /// Returns the least significant bit
    #[must_use]
    pub fn to_bool(&self) -> bool {
        self.lsb()
    }
}

macro_rules! big_int_convert {
    ($($from_u:ident, $to_u:ident, $uX:ident, $from_i:ident, $to_i:ident, $iX:ident);*;) => {
        impl<const BITS: usize, const SIGNED: bool, W: Word, const LEN: usize>
            BigInt<BITS, SIGNED, W, LEN>
        {
            $(
                pub fn $from_u(x: $uX) -> Self {
                    Self::from_u128(x as u128)
                }

                #[must_use]
                pub fn $to_u(&self) -> $uX {
                    self.to_u128() as $uX
                }

                pub fn $from_i(x: $iX) -> Self {
                    Self::from_i128(x as i128)
                }

                #[must_use]
                pub fn $to_i(&self) -> $iX {
                    self.to_i128() as $iX
                }
            )*
        }

        $(
            impl<const BITS: usize, const SIGNED: bool, W: Word, const LEN: usize> From<$uX>
                for BigInt<BITS, SIGNED, W, LEN>
            {
                /// Zero-resizes the integer into the `BigInt`
                fn from(x: $uX) -> Self {
                    Self::$from_u(x)
                }
            }

            impl<const BITS: usize, const SIGNED: bool, W: Word, const LEN: usize> From<$iX>
                for BigInt<BITS, SIGNED, W, LEN>
            {
                /// Sign-resizes the integer into the `BigInt`
                fn from(x: $iX) -> Self {
                    Self::$from_i(x)
                }
            }

            impl<const BITS: usize, const SIGNED: bool, W: Word, const LEN: usize>
                From<BigInt<BITS, SIGNED, W, LEN>> for $uX
            {
                fn from(x: BigInt<BITS, SIGNED, W, LEN>) -> Self {
                    x.$to_u()
                }
            }

            impl<const BITS: usize, const SIGNED: bool, W: Word, const LEN: usize>
                From<BigInt<BITS, SIGNED, W, LEN>> for $iX
            {
                fn from(x: BigInt<BITS, SIGNED, W, LEN>) -> Self {
                    x.$to_i()
                }
            }
        )*
    };
}

big_int_convert!(
    from_u8, to_u8, u8, from_i8, to_i8, i8;
    from_u16, to_u16, u16, from_i16, to_i16, i16;
    from_u32, to_u32, u32, from_i32, to_i32, i32;
    from_u64, to_u64, u64, from_i64, to_i64, i64;
    from_usize, to_usize, usize, from_isize, to_isize, isize;
);

impl<const BITS: usize, const SIGNED: bool, W: Word, const LEN: usize> From<u128>
    for BigInt<BITS, SIGNED, W, LEN>
{
    /// Zero-resizes the integer into the `BigInt`
    fn from(x: u128) -> Self {
        Self::from_u128(x)
    }
}

impl<const BITS: usize, const SIGNED: bool, W: Word, const LEN: usize> From<i128>
    for BigInt<BITS, SIGNED, W, LEN>
{
    /// Sign-resizes the integer into the `BigInt`
    fn from(x: i128) -> Self {
        Self::from_i128(x)
    }
}

impl<const BITS: usize, const SIGNED: bool, W: Word, const LEN: usize>
    From<BigInt<BITS, SIGNED, W, LEN>> for u128
{
    fn from(x: BigInt<BITS, SIGNED, W, LEN>) -> Self {
        x.to_u128()
    }
}

impl<const BITS: usize, const SIGNED: bool, W: Word, const LEN: usize>
    From<BigInt<BITS, SIGNED, W, LEN>> for i128
{
    fn from(x: BigInt<BITS, SIGNED, W, LEN>) -> Self {
        x.to_i128()
    }
}

impl<const BITS: usize, const SIGNED: bool, W: Word, const LEN: usize> From<bool>
    for BigInt<BITS, SIGNED, W, LEN>
{
    fn from(x: bool) -> Self {
        Self::from_bool(x)
    }
}
