//! Fixed width multi-word integers
//!
//! This is the core library of the `wideint` system of crates. This crate is
//! strictly `no-std` and `no-alloc`, not even requiring an allocator to be
//! compiled. This crate supplies the [`BigInt`] storage type, an integer with
//! const generic bitwidth and signedness that is stored inline on the stack
//! as an array of machine words.
//!
//! Almost all fallible functions in this crate return a handleable `Option`.
//! The only arithmetic that can fail at runtime is division by zero.

#![no_std]
// We are using special indexing everywhere
#![allow(clippy::needless_range_loop)]
// we need certain hot loops to stay separate
#![allow(clippy::branches_sharing_code)]
#![deny(unsafe_op_in_unsafe_fn)]

pub use wideint_internals::Word;

pub(crate) mod data;
pub use data::BigInt;

mod logic;

/// A [`BigInt`] interpreted as an unsigned integer, stored as `u64` words
pub type UInt<const BITS: usize, const LEN: usize> = BigInt<BITS, false, u64, LEN>;

/// A [`BigInt`] interpreted as a signed two's complement integer, stored as
/// `u64` words
pub type Int<const BITS: usize, const LEN: usize> = BigInt<BITS, true, u64, LEN>;

pub type U64 = UInt<64, 1>;
pub type U128 = UInt<128, 2>;
pub type U192 = UInt<192, 3>;
pub type U256 = UInt<256, 4>;
pub type U320 = UInt<320, 5>;
pub type U512 = UInt<512, 8>;
pub type U1024 = UInt<1024, 16>;

pub type I128 = Int<128, 2>;
pub type I192 = Int<192, 3>;
pub type I256 = Int<256, 4>;

pub mod prelude {
    pub use crate::{BigInt, Int, UInt, Word};
}
