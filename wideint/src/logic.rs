mod bitwise;
mod cast;
mod cmp;
mod div;
mod misc;
mod mul;
mod primitives;
#[cfg(feature = "rand_support")]
mod rand;
mod shift;
mod std_ops;
mod sum;
