//! # kbwt-container
//!
//! The block container format and the block-parallel driver that sits on
//! top of it:
//!
//! - [`record`]: the self-describing per-block record.
//! - [`frame`]: length-prefixed framing around records.
//! - [`pipeline`]: per-block encode/decode, dispatching across the four
//!   back-end modes.
//! - [`driver`]: splits input into blocks, fans out to a bounded `rayon`
//!   pool, and reassembles in block order.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod driver;
pub mod frame;
pub mod pipeline;
pub mod record;

pub use driver::{BLOCK_SIZE, compress, decompress, worker_count};
pub use record::{BlockRecord, Metadata, PayloadData};
