//! The four back-end coding modes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Selects which entropy/dictionary back-end a block (or an entire run) uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Real bzip2, bypassing the SBWT/MTF/RLE stages entirely.
    Bzip2,
    /// Static per-block Huffman coding.
    Huffman,
    /// Adaptive variable-width LZW.
    Lzw,
    /// Adaptive order-0 arithmetic coding.
    Arithmetic,
}

impl Mode {
    /// All modes, in a stable order.
    pub const ALL: [Mode; 4] = [Mode::Bzip2, Mode::Huffman, Mode::Lzw, Mode::Arithmetic];

    /// Whether this mode bypasses the SBWT/MTF/RLE stages.
    pub fn bypasses_transform(self) -> bool {
        matches!(self, Mode::Bzip2)
    }

    /// The lowercase name used on the wire and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Bzip2 => "bzip2",
            Mode::Huffman => "huffman",
            Mode::Lzw => "lzw",
            Mode::Arithmetic => "arithmetic",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bzip2" => Ok(Mode::Bzip2),
            "huffman" => Ok(Mode::Huffman),
            "lzw" => Ok(Mode::Lzw),
            "arithmetic" => Ok(Mode::Arithmetic),
            other => Err(format!(
                "unknown mode '{other}' (expected one of: bzip2, huffman, lzw, arithmetic)"
            )),
        }
    }
}
