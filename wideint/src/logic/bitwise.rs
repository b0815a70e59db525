use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

use wideint_internals::Word;

use crate::BigInt;

impl<const BITS: usize, const SIGNED: bool, W: Word, const LEN: usize> Not
    for BigInt<BITS, SIGNED, W, LEN>
{
    type Output = Self;

    fn not(mut self) -> Self {
        for i in 0..LEN {
            self.words[i] = !self.words[i];
        }
        self.clear_unused_bits();
        self
    }
}

macro_rules! impl_bitwise {
    ($($op:ident $fn:ident $op_assign:ident $fn_assign:ident),*,) => {
        $(
            impl<const BITS: usize, const SIGNED: bool, W: Word, const LEN: usize> $op_assign
                for BigInt<BITS, SIGNED, W, LEN>
            {
                fn $fn_assign(&mut self, rhs: Self) {
                    for i in 0..LEN {
                        $op_assign::$fn_assign(&mut self.words[i], rhs.words[i]);
                    }
                }
            }

            impl<const BITS: usize, const SIGNED: bool, W: Word, const LEN: usize> $op
                for BigInt<BITS, SIGNED, W, LEN>
            {
                type Output = Self;

                fn $fn(mut self, rhs: Self) -> Self {
                    $op_assign::$fn_assign(&mut self, rhs);
                    self
                }
            }

            /// The bare word is zero extended to the full bitwidth
            impl<const BITS: usize, const SIGNED: bool, W: Word, const LEN: usize> $op_assign<W>
                for BigInt<BITS, SIGNED, W, LEN>
            {
                fn $fn_assign(&mut self, rhs: W) {
                    let mut ext = Self::zero();
                    ext.words[0] = rhs;
                    ext.clear_unused_bits();
                    $op_assign::$fn_assign(self, ext);
                }
            }

            /// The bare word is zero extended to the full bitwidth
            impl<const BITS: usize, const SIGNED: bool, W: Word, const LEN: usize> $op<W>
                for BigInt<BITS, SIGNED, W, LEN>
            {
                type Output = Self;

                fn $fn(mut self, rhs: W) -> Self {
                    $op_assign::$fn_assign(&mut self, rhs);
                    self
                }
            }
        )*
    };
}

impl_bitwise!(
    BitAnd bitand BitAndAssign bitand_assign,
    BitOr bitor BitOrAssign bitor_assign,
    BitXor bitxor BitXorAssign bitxor_assign,
);
