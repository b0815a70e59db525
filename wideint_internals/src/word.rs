use core::{
    fmt::Debug,
    hash::Hash,
    ops::{
        BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, Shr,
    },
};

/// An unsigned machine integer usable as the storage word of a `BigInt`.
///
/// The supported words are `u8`, `u16`, `u32`, and `u64`. Every word has a
/// native double-width type, which is what the widening primitives are
/// implemented through; `u128` is intentionally not a word because it has no
/// such type.
pub trait Word:
    Copy
    + Debug
    + Eq
    + Ord
    + Hash
    + Not<Output = Self>
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + BitAndAssign
    + BitOrAssign
    + BitXorAssign
    + Shl<usize, Output = Self>
    + Shr<usize, Output = Self>
    + 'static
{
    /// Bitwidth of the word
    const BITS: usize;
    const ZERO: Self;
    const ONE: Self;
    const MAX: Self;

    /// The half-width word used by specialized half-word division. `u8` is
    /// its own half word.
    type Half: Word;

    /// Computes `self + y + z` and returns the widened result as a tuple
    /// with the least significant word first.
    fn widen_add(self, y: Self, z: Self) -> (Self, Self);

    /// Computes `(self * y) + z`. This cannot overflow, because it returns
    /// the value widened into a tuple with the least significant word first.
    fn widen_mul_add(self, y: Self, z: Self) -> (Self, Self);

    /// Divides the double-word value `(lo, hi)` by `div` and returns the
    /// quotient and remainder. `hi < div` must hold so that the quotient
    /// fits in one word.
    fn dd_div(lo: Self, hi: Self, div: Self) -> (Self, Self);

    fn wrapping_add(self, rhs: Self) -> Self;
    fn wrapping_sub(self, rhs: Self) -> Self;
    fn overflowing_add(self, rhs: Self) -> (Self, bool);
    fn overflowing_sub(self, rhs: Self) -> (Self, bool);

    fn leading_zeros(self) -> usize;
    fn trailing_zeros(self) -> usize;
    fn count_ones(self) -> usize;

    /// Truncating conversion from the universal `u128` carrier
    fn from_u128(x: u128) -> Self;
    /// Zero-extending conversion to the universal `u128` carrier
    fn to_u128(self) -> u128;

    /// Widening conversion of a half word
    fn from_half(x: Self::Half) -> Self;

    /// All-zeros or all-ones, the extension word for the given sign
    #[inline]
    fn fill(extension: bool) -> Self {
        if extension {
            Self::MAX
        } else {
            Self::ZERO
        }
    }
}

macro_rules! impl_word {
    ($($w:ident, $dbl:ident, $half:ident);*;) => {
        $(
            impl Word for $w {
                const BITS: usize = $w::BITS as usize;
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const MAX: Self = $w::MAX;

                type Half = $half;

                #[inline]
                fn widen_add(self, y: Self, z: Self) -> (Self, Self) {
                    let tmp = (self as $dbl)
                        .wrapping_add(y as $dbl)
                        .wrapping_add(z as $dbl);
                    (tmp as $w, tmp.wrapping_shr($w::BITS) as $w)
                }

                #[inline]
                fn widen_mul_add(self, y: Self, z: Self) -> (Self, Self) {
                    let tmp = (self as $dbl)
                        .wrapping_mul(y as $dbl)
                        .wrapping_add(z as $dbl);
                    (tmp as $w, tmp.wrapping_shr($w::BITS) as $w)
                }

                #[inline]
                fn dd_div(lo: Self, hi: Self, div: Self) -> (Self, Self) {
                    debug_assert!(hi < div);
                    let duo = (lo as $dbl) | ((hi as $dbl) << $w::BITS);
                    ((duo / (div as $dbl)) as $w, (duo % (div as $dbl)) as $w)
                }

                #[inline]
                fn wrapping_add(self, rhs: Self) -> Self {
                    $w::wrapping_add(self, rhs)
                }

                #[inline]
                fn wrapping_sub(self, rhs: Self) -> Self {
                    $w::wrapping_sub(self, rhs)
                }

                #[inline]
                fn overflowing_add(self, rhs: Self) -> (Self, bool) {
                    $w::overflowing_add(self, rhs)
                }

                #[inline]
                fn overflowing_sub(self, rhs: Self) -> (Self, bool) {
                    $w::overflowing_sub(self, rhs)
                }

                #[inline]
                fn leading_zeros(self) -> usize {
                    $w::leading_zeros(self) as usize
                }

                #[inline]
                fn trailing_zeros(self) -> usize {
                    $w::trailing_zeros(self) as usize
                }

                #[inline]
                fn count_ones(self) -> usize {
                    $w::count_ones(self) as usize
                }

                #[inline]
                fn from_u128(x: u128) -> Self {
                    x as $w
                }

                #[inline]
                fn to_u128(self) -> u128 {
                    self as u128
                }

                #[inline]
                fn from_half(x: Self::Half) -> Self {
                    x as $w
                }
            }
        )*
    };
}

impl_word!(
    u8, u16, u8;
    u16, u32, u8;
    u32, u64, u16;
    u64, u128, u32;
);
