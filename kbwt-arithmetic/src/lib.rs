//! # kbwt-arithmetic
//!
//! Adaptive order-0 arithmetic coding with a 32-bit range coder, an EOF
//! sentinel symbol, and the classic E1/E2/E3 renormalization (two matching
//! high bits shift out; straddling second-highest bits defer via an
//! underflow counter).

#![warn(missing_docs)]
#![warn(clippy::all)]

mod coder;
mod model;

use kbwt_core::bitstream::{BitSink, BitSource};
use kbwt_core::error::{KbwtError, Result};

use coder::{ArithmeticDecoder, ArithmeticEncoder};
use model::FrequencyTable;

/// Arithmetic-encode a byte sequence.
///
/// The alphabet is `0..M` where `M = max(input) + 2` (the data values plus
/// one EOF symbol); an empty input uses `M = 1` (the EOF symbol alone).
/// Returns the wire format: `M` as 4 bytes big-endian, followed by the
/// MSB-first bit-packed, zero-padded coded stream.
pub fn encode(data: &[u8]) -> Vec<u8> {
    let num_symbols = alphabet_size(data);
    let mut freqs = FrequencyTable::flat(num_symbols);
    let eof = num_symbols - 1;

    let mut sink = BitSink::new();
    {
        let mut encoder = ArithmeticEncoder::new(&mut sink);
        for &b in data {
            encoder.write(&freqs, b as usize);
            freqs.increment(b as usize);
        }
        encoder.write(&freqs, eof);
        encoder.finish();
    }
    let (body, _padding) = sink.finish();

    let mut out = Vec::with_capacity(4 + body.len());
    out.extend_from_slice(&(num_symbols as u32).to_be_bytes());
    out.extend_from_slice(&body);
    out
}

/// Invert [`encode`].
pub fn decode(encoded: &[u8]) -> Result<Vec<u8>> {
    if encoded.len() < 4 {
        return Err(KbwtError::invalid_input(
            "arithmetic stream too short to contain its header",
        ));
    }
    let num_symbols = u32::from_be_bytes(encoded[0..4].try_into().unwrap()) as usize;
    if num_symbols == 0 {
        return Err(KbwtError::invalid_input(
            "arithmetic alphabet size M must be at least 1",
        ));
    }
    let eof = num_symbols - 1;

    let mut freqs = FrequencyTable::flat(num_symbols);
    let mut source = BitSource::new(&encoded[4..]);
    let mut decoder = ArithmeticDecoder::new(&mut source);

    let mut output = Vec::new();
    loop {
        let symbol = decoder.read(&freqs);
        if symbol == eof {
            break;
        }
        output.push(symbol as u8);
        freqs.increment(symbol);
    }
    Ok(output)
}

fn alphabet_size(data: &[u8]) -> usize {
    match data.iter().max() {
        Some(&max_byte) => max_byte as usize + 2,
        None => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roundtrip(data: &[u8]) {
        let encoded = encode(data);
        let decoded = decode(&encoded).unwrap();
        assert_eq!(decoded, data);
    }

    #[test]
    fn test_roundtrip_typical_text() {
        roundtrip(b"the quick brown fox jumps over the lazy dog");
    }

    #[test]
    fn test_roundtrip_empty() {
        roundtrip(b"");
    }

    #[test]
    fn test_roundtrip_single_zero_byte() {
        roundtrip(&[0u8]);
    }

    #[test]
    fn test_single_zero_byte_has_m_equal_two() {
        let encoded = encode(&[0u8]);
        let m = u32::from_be_bytes(encoded[0..4].try_into().unwrap());
        assert_eq!(m, 2);
    }

    #[test]
    fn test_roundtrip_all_byte_values() {
        let data: Vec<u8> = (0u16..256).map(|b| b as u8).collect();
        roundtrip(&data);
    }

    #[test]
    fn test_roundtrip_repeated_byte() {
        roundtrip(&[7u8; 2000]);
    }

    #[test]
    fn test_decode_rejects_short_header() {
        let err = decode(&[0, 1]).unwrap_err();
        assert!(matches!(err, KbwtError::InvalidInput { .. }));
    }

    #[test]
    fn test_decode_rejects_zero_alphabet() {
        let err = decode(&[0, 0, 0, 0]).unwrap_err();
        assert!(matches!(err, KbwtError::InvalidInput { .. }));
    }
}
