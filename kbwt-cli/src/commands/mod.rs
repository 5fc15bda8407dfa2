//! Command implementations for the kbwt CLI.

mod compress;
mod decompress;

pub use compress::cmd_compress;
pub use decompress::cmd_decompress;
