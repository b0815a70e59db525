//! This crate contains the word-level layer shared by the `wideint` system of
//! crates: the [`Word`] trait abstracting over the unsigned machine integers
//! usable as storage words, and the widening arithmetic primitives every
//! multi-word algorithm is built from. Most users should never have to
//! interact with this directly and should use the `wideint` crate instead.

#![no_std]
#![allow(clippy::needless_range_loop)]

mod word;

pub use word::Word;
