use core::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Shl, ShlAssign, Shr,
    ShrAssign, Sub, SubAssign,
};

use wideint_internals::Word;

use crate::BigInt;

// `Add`, `Sub`, and `Mul` wrap like the word level operations they are built
// from. `Div` and `Rem` panic on a zero divisor like the standard integers,
// `checked_div` and `checked_rem` are the nonpanicking versions.

macro_rules! impl_binop {
    ($($op:ident $fn:ident $op_assign:ident $fn_assign:ident $method:ident),*,) => {
        $(
            impl<const BITS: usize, const SIGNED: bool, W: Word, const LEN: usize> $op
                for BigInt<BITS, SIGNED, W, LEN>
            {
                type Output = Self;

                fn $fn(self, rhs: Self) -> Self {
                    self.$method(rhs)
                }
            }

            impl<const BITS: usize, const SIGNED: bool, W: Word, const LEN: usize> $op_assign
                for BigInt<BITS, SIGNED, W, LEN>
            {
                fn $fn_assign(&mut self, rhs: Self) {
                    *self = self.$method(rhs);
                }
            }
        )*
    };
}

impl_binop!(
    Add add AddAssign add_assign wrapping_add,
    Sub sub SubAssign sub_assign wrapping_sub,
    Mul mul MulAssign mul_assign wrapping_mul,
);

impl<const BITS: usize, const SIGNED: bool, W: Word, const LEN: usize> Div
    for BigInt<BITS, SIGNED, W, LEN>
{
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        self.checked_div(rhs).unwrap()
    }
}

impl<const BITS: usize, const SIGNED: bool, W: Word, const LEN: usize> DivAssign
    for BigInt<BITS, SIGNED, W, LEN>
{
    fn div_assign(&mut self, rhs: Self) {
        *self = self.checked_div(rhs).unwrap();
    }
}

impl<const BITS: usize, const SIGNED: bool, W: Word, const LEN: usize> Rem
    for BigInt<BITS, SIGNED, W, LEN>
{
    type Output = Self;

    fn rem(self, rhs: Self) -> Self {
        self.checked_rem(rhs).unwrap()
    }
}

impl<const BITS: usize, const SIGNED: bool, W: Word, const LEN: usize> RemAssign
    for BigInt<BITS, SIGNED, W, LEN>
{
    fn rem_assign(&mut self, rhs: Self) {
        *self = self.checked_rem(rhs).unwrap();
    }
}

impl<const BITS: usize, const SIGNED: bool, W: Word, const LEN: usize> Neg
    for BigInt<BITS, SIGNED, W, LEN>
{
    type Output = Self;

    fn neg(self) -> Self {
        self.wrapping_neg()
    }
}

impl<const BITS: usize, const SIGNED: bool, W: Word, const LEN: usize> Shl<usize>
    for BigInt<BITS, SIGNED, W, LEN>
{
    type Output = Self;

    fn shl(self, s: usize) -> Self {
        self.shl_inner(s)
    }
}

impl<const BITS: usize, const SIGNED: bool, W: Word, const LEN: usize> ShlAssign<usize>
    for BigInt<BITS, SIGNED, W, LEN>
{
    fn shl_assign(&mut self, s: usize) {
        *self = self.shl_inner(s);
    }
}

impl<const BITS: usize, const SIGNED: bool, W: Word, const LEN: usize> Shr<usize>
    for BigInt<BITS, SIGNED, W, LEN>
{
    type Output = Self;

    /// Arithmetic when the type is signed, logical otherwise
    fn shr(self, s: usize) -> Self {
        let ext = self.is_neg();
        self.shr_inner(s, ext)
    }
}

impl<const BITS: usize, const SIGNED: bool, W: Word, const LEN: usize> ShrAssign<usize>
    for BigInt<BITS, SIGNED, W, LEN>
{
    fn shr_assign(&mut self, s: usize) {
        *self = *self >> s;
    }
}
