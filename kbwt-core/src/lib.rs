//! # kbwt-core
//!
//! Shared primitives for the kbwt block-parallel keyed compressor:
//!
//! - [`error`]: the single error type used by every downstream crate.
//! - [`key`]: master key validation and per-block sub-key derivation.
//! - [`mode`]: the four selectable back-end coding modes.
//! - [`bitstream`]: MSB-first bit I/O shared by the Huffman and arithmetic
//!   back-ends.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bitstream;
pub mod error;
pub mod key;
pub mod mode;

pub use bitstream::{BitSink, BitSource};
pub use error::{KbwtError, Result};
pub use key::MasterKey;
pub use mode::Mode;
