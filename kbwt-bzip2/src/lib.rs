//! # kbwt-bzip2
//!
//! The `bzip2` back-end mode: unlike the other three modes, it bypasses
//! this workspace's own SBWT/MTF/RLE stack entirely and delegates straight
//! to a real bzip2 implementation. The core treats it as an opaque
//! byte-in/byte-out compressor.

#![warn(missing_docs)]
#![warn(clippy::all)]

use std::io::{Read, Write};

use bzip2::Compression;
use bzip2::read::BzDecoder;
use bzip2::write::BzEncoder;
use kbwt_core::error::{KbwtError, Result};

/// Compress `data` with bzip2 at the default compression level.
pub fn encode(data: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = BzEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(data)
        .map_err(|e| KbwtError::backend_failure("bzip2", e.to_string()))?;
    encoder
        .finish()
        .map_err(|e| KbwtError::backend_failure("bzip2", e.to_string()))
}

/// Invert [`encode`].
pub fn decode(data: &[u8]) -> Result<Vec<u8>> {
    let mut decoder = BzDecoder::new(data);
    let mut out = Vec::new();
    decoder
        .read_to_end(&mut out)
        .map_err(|e| KbwtError::backend_failure("bzip2", e.to_string()))?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roundtrip(data: &[u8]) {
        let compressed = encode(data).unwrap();
        let decompressed = decode(&compressed).unwrap();
        assert_eq!(decompressed, data);
    }

    #[test]
    fn test_roundtrip_empty() {
        roundtrip(b"");
    }

    #[test]
    fn test_roundtrip_single_byte() {
        roundtrip(b"a");
    }

    #[test]
    fn test_roundtrip_repeated_text() {
        roundtrip(&b"The quick brown fox jumps over the lazy dog. ".repeat(200));
    }

    #[test]
    fn test_roundtrip_all_byte_values() {
        let data: Vec<u8> = (0u16..256).map(|b| b as u8).collect();
        roundtrip(&data);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let err = decode(b"not a bzip2 stream").unwrap_err();
        assert!(matches!(err, KbwtError::BackendFailure { .. }));
    }
}
