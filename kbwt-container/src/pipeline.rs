//! Per-block encode/decode, dispatching across the four back-end modes.
//!
//! `Mode::Bzip2` bypasses SBWT/MTF/RLE and delegates straight to
//! [`kbwt_bzip2`]; the other three modes share the
//! SBWT -> MTF -> RLE -> back-end pipeline from §4.7 of the block-container
//! format this crate implements.

use kbwt_core::error::{KbwtError, Result};
use kbwt_core::mode::Mode;
use serde_bytes::ByteBuf;

use crate::record::{BlockRecord, Metadata, PayloadData};

/// Run the encode-side pipeline for one block and wrap the result in a
/// [`BlockRecord`] ready to be framed.
pub fn encode_block(
    data: &[u8],
    mode: Mode,
    subkey: &[u8; 32],
    block_number: u64,
    extension: Option<&str>,
) -> Result<BlockRecord> {
    if mode == Mode::Bzip2 {
        let payload = kbwt_bzip2::encode(data)?;
        return Ok(BlockRecord {
            metadata: Metadata {
                mode,
                block_number,
                extension: extension.map(String::from),
                symbols: None,
                orig_ptr: None,
            },
            data: PayloadData::Bytes(ByteBuf::from(payload)),
            huffman_codes: None,
            padding_length: None,
        });
    }

    let mut input = data.to_vec();
    if input.last() != Some(&kbwt_transform::TERMINATOR) {
        input.push(kbwt_transform::TERMINATOR);
    }
    let (last_column, orig_ptr) = kbwt_transform::sbwt_encode(&input, subkey);
    let mtf = kbwt_transform::mtf_encode(&last_column);
    let rle_encoded = kbwt_transform::rle_encode(&mtf.indices);

    let (payload, huffman_codes, padding_length) = match mode {
        Mode::Huffman => {
            let encoded = kbwt_huffman::encode(&rle_encoded);
            (
                PayloadData::Bytes(ByteBuf::from(encoded.data)),
                Some(encoded.huffman_codes),
                Some(encoded.padding_length),
            )
        }
        Mode::Lzw => (PayloadData::Codes(kbwt_lzw::encode(&rle_encoded)), None, None),
        Mode::Arithmetic => (
            PayloadData::Bytes(ByteBuf::from(kbwt_arithmetic::encode(&rle_encoded))),
            None,
            None,
        ),
        Mode::Bzip2 => unreachable!("handled above"),
    };

    Ok(BlockRecord {
        metadata: Metadata {
            mode,
            block_number,
            extension: extension.map(String::from),
            symbols: Some(ByteBuf::from(mtf.symbols)),
            orig_ptr: Some(orig_ptr as u64),
        },
        data: payload,
        huffman_codes,
        padding_length,
    })
}

/// Invert [`encode_block`], given the same sub-key used to encode it.
pub fn decode_block(record: &BlockRecord, subkey: &[u8; 32]) -> Result<Vec<u8>> {
    if record.metadata.mode == Mode::Bzip2 {
        let payload = expect_bytes(&record.data, "bzip2")?;
        return kbwt_bzip2::decode(payload);
    }

    let symbols = record.metadata.symbols.as_ref().ok_or_else(|| {
        KbwtError::invalid_input("block metadata is missing MTF symbols for a non-bzip2 mode")
    })?;
    let orig_ptr = record.metadata.orig_ptr.ok_or_else(|| {
        KbwtError::invalid_input("block metadata is missing SBWT orig_ptr for a non-bzip2 mode")
    })? as usize;

    let rle_encoded = match record.metadata.mode {
        Mode::Huffman => {
            let payload = expect_bytes(&record.data, "huffman")?;
            let codes = record.huffman_codes.as_ref().ok_or_else(|| {
                KbwtError::invalid_input("huffman block is missing its code table")
            })?;
            let padding = record.padding_length.ok_or_else(|| {
                KbwtError::invalid_input("huffman block is missing its padding length")
            })?;
            kbwt_huffman::decode(payload, codes, padding)?
        }
        Mode::Lzw => {
            let codes = match &record.data {
                PayloadData::Codes(codes) => codes,
                PayloadData::Bytes(_) => {
                    return Err(KbwtError::invalid_input(
                        "lzw block carries a byte payload instead of a code list",
                    ));
                }
            };
            kbwt_lzw::decode(codes)?
        }
        Mode::Arithmetic => {
            let payload = expect_bytes(&record.data, "arithmetic")?;
            kbwt_arithmetic::decode(payload)?
        }
        Mode::Bzip2 => unreachable!("handled above"),
    };

    let indices = kbwt_transform::rle_decode(&rle_encoded)?;
    let last_column = kbwt_transform::mtf_decode(&indices, symbols);
    kbwt_transform::sbwt_decode(&last_column, orig_ptr, subkey)
}

fn expect_bytes<'a>(data: &'a PayloadData, mode_name: &str) -> Result<&'a [u8]> {
    match data {
        PayloadData::Bytes(bytes) => Ok(bytes.as_ref()),
        PayloadData::Codes(_) => Err(KbwtError::invalid_input(format!(
            "{mode_name} block carries a code-list payload instead of bytes"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roundtrip(data: &[u8], mode: Mode) {
        let key = [5u8; 32];
        let record = encode_block(data, mode, &key, 0, Some(".txt")).unwrap();
        let decoded = decode_block(&record, &key).unwrap();
        assert_eq!(decoded, data);
    }

    #[test]
    fn test_roundtrip_all_modes() {
        let data = b"the quick brown fox jumps over the lazy dog";
        for &mode in &[Mode::Bzip2, Mode::Huffman, Mode::Lzw, Mode::Arithmetic] {
            roundtrip(data, mode);
        }
    }

    #[test]
    fn test_roundtrip_empty_block_all_modes() {
        for &mode in &[Mode::Bzip2, Mode::Huffman, Mode::Lzw, Mode::Arithmetic] {
            roundtrip(b"", mode);
        }
    }

    #[test]
    fn test_non_bzip2_record_carries_extension_and_pointer() {
        let record = encode_block(b"hello", Mode::Huffman, &[1u8; 32], 2, Some(".md")).unwrap();
        assert_eq!(record.metadata.block_number, 2);
        assert_eq!(record.metadata.extension.as_deref(), Some(".md"));
        assert!(record.metadata.orig_ptr.is_some());
        assert!(record.metadata.symbols.is_some());
    }

    #[test]
    fn test_bzip2_record_has_no_sbwt_metadata() {
        let record = encode_block(b"hello", Mode::Bzip2, &[1u8; 32], 0, None).unwrap();
        assert!(record.metadata.orig_ptr.is_none());
        assert!(record.metadata.symbols.is_none());
    }

    #[test]
    fn test_wrong_key_does_not_silently_succeed() {
        let record = encode_block(
            b"The quick brown fox",
            Mode::Huffman,
            &[1u8; 32],
            0,
            None,
        )
        .unwrap();
        let wrong_key = [2u8; 32];
        match decode_block(&record, &wrong_key) {
            Err(_) => {}
            Ok(decoded) => assert_ne!(decoded, b"The quick brown fox"),
        }
    }
}
