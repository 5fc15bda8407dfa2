//! LZW decoding: a list of codes in, bytes out.

use crate::dictionary::DecodeDictionary;
use kbwt_core::error::{KbwtError, Result};

/// Decode a list of LZW codes back into bytes.
pub fn decode(codes: &[u32]) -> Result<Vec<u8>> {
    let mut dictionary = DecodeDictionary::new();
    let mut output = Vec::new();

    let Some(&first) = codes.first() else {
        return Ok(output);
    };

    let mut previous = dictionary
        .get(first)
        .ok_or_else(|| KbwtError::invalid_input("first LZW code is out of range"))?
        .to_vec();
    output.extend_from_slice(&previous);

    for &code in &codes[1..] {
        let current = if let Some(seq) = dictionary.get(code) {
            seq.to_vec()
        } else if code == dictionary.next_code() {
            // KwKwK case: the code refers to the entry about to be
            // created, which is always `previous + previous[0]`.
            let mut seq = previous.clone();
            seq.push(previous[0]);
            seq
        } else {
            return Err(KbwtError::invalid_input("invalid LZW code"));
        };

        output.extend_from_slice(&current);

        let mut new_entry = previous.clone();
        new_entry.push(current[0]);
        dictionary.insert(new_entry);

        previous = current;
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::encode;

    fn roundtrip(data: &[u8]) {
        let codes = encode(data);
        let decoded = decode(&codes).unwrap();
        assert_eq!(decoded, data);
    }

    #[test]
    fn test_roundtrip_simple() {
        roundtrip(b"TOBEORNOTTOBEORTOBEORNOT");
    }

    #[test]
    fn test_roundtrip_repeated_byte() {
        roundtrip(&[0u8; 1000]);
    }

    #[test]
    fn test_roundtrip_empty() {
        roundtrip(b"");
    }

    #[test]
    fn test_roundtrip_single_byte() {
        roundtrip(b"A");
    }

    #[test]
    fn test_roundtrip_all_byte_values() {
        let data: Vec<u8> = (0u16..256).map(|b| b as u8).collect();
        roundtrip(&data);
    }

    #[test]
    fn test_decode_rejects_invalid_code() {
        let err = decode(&[1_000_000]).unwrap_err();
        assert!(matches!(err, KbwtError::InvalidInput { .. }));
    }

    #[test]
    fn test_kwkwk_case() {
        // "ABABAB...": after the dictionary learns "AB", the encoder emits
        // a code for "ABA" before the decoder has independently learned
        // it, exercising the KwKwK special case.
        roundtrip(&b"AB".repeat(50));
    }
}
