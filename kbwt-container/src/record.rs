//! The self-describing per-block record carried inside each container
//! frame (see [`crate::frame`] for the length-prefixed framing around it).

use std::collections::BTreeMap;

use kbwt_core::mode::Mode;
use serde::{Deserialize, Serialize};
use serde_bytes::ByteBuf;

/// Fields common to every block, regardless of mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    /// Which back-end coder produced `data`.
    pub mode: Mode,
    /// Monotone block index, starting at 0.
    pub block_number: u64,
    /// The original file's extension (e.g. `.txt`), carried to help
    /// reconstruct output file names. Absent in archives written by a
    /// reader that doesn't track it; readers must tolerate its absence.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub extension: Option<String>,
    /// MTF's initial front-list, in first-appearance order. Present for
    /// every mode except `bzip2`, which bypasses SBWT/MTF/RLE.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub symbols: Option<ByteBuf>,
    /// SBWT's original-row pointer. Present for every mode except `bzip2`.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub orig_ptr: Option<u64>,
}

/// Mode-specific payload: a byte blob for bzip2/huffman/arithmetic, or a
/// plain list of dictionary codes for LZW.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PayloadData {
    /// Byte payload (bzip2, huffman, arithmetic).
    Bytes(ByteBuf),
    /// Integer code payload (LZW); the framing layer does no bit-packing
    /// of its own here, per the format's division of labor.
    Codes(Vec<u32>),
}

/// One compressed block, as carried inside a single container frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockRecord {
    /// Block identity and (for non-bzip2 modes) SBWT/MTF carry-forward
    /// fields.
    pub metadata: Metadata,
    /// The back-end's compressed payload.
    pub data: PayloadData,
    /// Huffman-only: symbol to bit-string code table.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub huffman_codes: Option<BTreeMap<u8, String>>,
    /// Huffman-only: number of zero padding bits in the final body byte.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub padding_length: Option<u8>,
}
