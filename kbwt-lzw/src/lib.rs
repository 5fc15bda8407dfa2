//! # kbwt-lzw
//!
//! Adaptive variable-width LZW coding, 9-16 bit codes with reset-on-full,
//! and no clear/EOI control codes: the core format carries codes as a
//! plain list of integers rather than a bit-packed stream.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod decoder;
mod dictionary;
mod encoder;

pub use decoder::decode;
pub use encoder::encode;
