mod big_int;
#[cfg(feature = "serde_support")]
mod serde;

pub use big_int::BigInt;
