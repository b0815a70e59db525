//! Does not export anything of usefulness, see the `tests` directory

pub use wideint::{BigInt, Int, UInt, Word, I128, I192, U1024, U128, U192, U256, U320, U512, U64};

/// A bitwidth that does not fill its last word, for exercising the unused bit
/// handling
pub type U100 = BigInt<100, false, u64, 2>;

/// The nontrivial word types from the cast and word size tests
pub type U96x32 = BigInt<96, false, u32, 3>;
pub type U96x8 = BigInt<96, false, u8, 12>;
pub type U64x16 = BigInt<64, false, u16, 4>;
pub type I64x16 = BigInt<64, true, u16, 4>;
