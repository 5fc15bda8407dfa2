//! LZW encoding: bytes in, a plain list of dictionary codes out.

use crate::dictionary::EncodeDictionary;

/// Encode a byte sequence into LZW codes.
pub fn encode(data: &[u8]) -> Vec<u32> {
    let mut dictionary = EncodeDictionary::new();
    let mut output = Vec::new();
    let mut current: Vec<u8> = Vec::new();

    for &byte in data {
        let mut combined = current.clone();
        combined.push(byte);
        if dictionary.find(&combined).is_some() {
            current = combined;
        } else {
            let code = dictionary
                .find(&current)
                .expect("current sequence must already be in the dictionary");
            output.push(code);
            dictionary.insert(combined);
            current = vec![byte];
        }
    }

    if !current.is_empty() {
        let code = dictionary
            .find(&current)
            .expect("final sequence must already be in the dictionary");
        output.push(code);
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_bytes_map_to_themselves() {
        let codes = encode(b"AB");
        assert_eq!(codes, vec![65, 66]);
    }

    #[test]
    fn test_empty_input() {
        assert!(encode(b"").is_empty());
    }
}
