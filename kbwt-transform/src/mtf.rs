//! Move-to-Front coding over the dynamic alphabet observed in a byte
//! sequence.

/// Result of MTF-encoding a byte sequence: the index stream plus the
/// front-list's initial state (the "symbols" header needed to decode).
pub struct MtfEncoded {
    /// Index into the (evolving) front-list for each input byte.
    pub indices: Vec<u8>,
    /// Distinct bytes of the input, in first-appearance order.
    pub symbols: Vec<u8>,
}

/// Move-to-front encode `data`.
///
/// The front-list starts as the distinct bytes of `data` in first-appearance
/// order. Each byte is replaced by its current position in the front-list,
/// then moved to the front.
pub fn mtf_encode(data: &[u8]) -> MtfEncoded {
    let mut seen = [false; 256];
    let mut symbols = Vec::new();
    for &b in data {
        if !seen[b as usize] {
            seen[b as usize] = true;
            symbols.push(b);
        }
    }

    let mut front = symbols.clone();
    let mut indices = Vec::with_capacity(data.len());
    for &b in data {
        let pos = front.iter().position(|&x| x == b).expect("byte in front-list");
        indices.push(pos as u8);
        if pos != 0 {
            front[..=pos].rotate_right(1);
        }
    }

    MtfEncoded { indices, symbols }
}

/// Move-to-front decode an index stream given the front-list's initial
/// state (as produced by [`mtf_encode`]).
pub fn mtf_decode(indices: &[u8], symbols: &[u8]) -> Vec<u8> {
    let mut front = symbols.to_vec();
    let mut output = Vec::with_capacity(indices.len());
    for &idx in indices {
        let pos = idx as usize;
        let b = front[pos];
        output.push(b);
        if pos != 0 {
            front[..=pos].rotate_right(1);
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_basic() {
        let data = b"banana";
        let encoded = mtf_encode(data);
        let decoded = mtf_decode(&encoded.indices, &encoded.symbols);
        assert_eq!(decoded, data);
    }

    #[test]
    fn test_symbols_are_first_appearance_order() {
        let encoded = mtf_encode(b"banana");
        assert_eq!(encoded.symbols, b"ban");
    }

    #[test]
    fn test_repeated_byte_gives_zero_after_first() {
        let encoded = mtf_encode(b"aaaa");
        assert_eq!(encoded.indices, vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_roundtrip_all_byte_values() {
        let data: Vec<u8> = (0u16..256).map(|b| b as u8).chain((0u16..256).rev().map(|b| b as u8)).collect();
        let encoded = mtf_encode(&data);
        let decoded = mtf_decode(&encoded.indices, &encoded.symbols);
        assert_eq!(decoded, data);
    }

    #[test]
    fn test_empty_input() {
        let encoded = mtf_encode(b"");
        assert!(encoded.indices.is_empty());
        assert!(encoded.symbols.is_empty());
        assert_eq!(mtf_decode(&encoded.indices, &encoded.symbols), Vec::<u8>::new());
    }
}
