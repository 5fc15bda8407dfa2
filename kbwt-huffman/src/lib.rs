//! # kbwt-huffman
//!
//! Static per-block Huffman coding: one frequency table and code set built
//! per call, matching the container's convention of carrying the code
//! table and padding length as separate fields rather than a single
//! self-contained binary blob.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod tree;

use kbwt_core::bitstream::{BitSink, BitSource};
use kbwt_core::error::{KbwtError, Result};
use std::collections::BTreeMap;
use tree::HuffmanTree;

/// The output of [`encode`]: the bit-packed body, the symbol-to-code table,
/// and the number of zero padding bits in the final byte.
pub struct Encoded {
    /// MSB-first bit-packed body, zero-padded in the final byte.
    pub data: Vec<u8>,
    /// Symbol to bit-string code mapping.
    pub huffman_codes: BTreeMap<u8, String>,
    /// Number of padding zero bits appended to complete the final byte.
    pub padding_length: u8,
}

/// Huffman-encode a byte sequence.
///
/// An empty input encodes to an empty body with an empty code table.
pub fn encode(data: &[u8]) -> Encoded {
    if data.is_empty() {
        return Encoded {
            data: Vec::new(),
            huffman_codes: BTreeMap::new(),
            padding_length: 0,
        };
    }

    let mut freqs = [0u64; 256];
    for &b in data {
        freqs[b as usize] += 1;
    }

    let tree = HuffmanTree::build(&freqs);
    let huffman_codes: BTreeMap<u8, String> = tree.codes().into_iter().collect();

    let mut sink = BitSink::new();
    for &b in data {
        let code = &huffman_codes[&b];
        for bit in code.bytes() {
            sink.write_bit(bit == b'1');
        }
    }
    let (packed, padding_length) = sink.finish();

    Encoded {
        data: packed,
        huffman_codes,
        padding_length,
    }
}

/// A binary trie used to decode a Huffman-coded bit stream one symbol at a
/// time, built from the code table carried alongside the body.
struct DecodeTrie {
    // index 0 is the root; each node holds optional child indices and an
    // optional symbol for leaves.
    children: Vec<[Option<usize>; 2]>,
    symbols: Vec<Option<u8>>,
}

impl DecodeTrie {
    fn build(huffman_codes: &BTreeMap<u8, String>) -> Result<Self> {
        let mut trie = Self {
            children: vec![[None, None]],
            symbols: vec![None],
        };
        for (&symbol, code) in huffman_codes {
            let mut node = 0usize;
            for bit in code.bytes() {
                let branch = match bit {
                    b'0' => 0,
                    b'1' => 1,
                    _ => {
                        return Err(KbwtError::invalid_input(
                            "Huffman code table contains a non-binary character",
                        ));
                    }
                };
                node = match trie.children[node][branch] {
                    Some(next) => next,
                    None => {
                        let next = trie.children.len();
                        trie.children.push([None, None]);
                        trie.symbols.push(None);
                        trie.children[node][branch] = Some(next);
                        next
                    }
                };
            }
            trie.symbols[node] = Some(symbol);
        }
        Ok(trie)
    }
}

/// Invert [`encode`], consuming exactly `data.len() * 8 - padding_length`
/// bits from the body and decoding each symbol by walking the trie built
/// from `huffman_codes`.
pub fn decode(
    data: &[u8],
    huffman_codes: &BTreeMap<u8, String>,
    padding_length: u8,
) -> Result<Vec<u8>> {
    if huffman_codes.is_empty() {
        return Ok(Vec::new());
    }

    let total_bits = data
        .len()
        .checked_mul(8)
        .and_then(|n| n.checked_sub(padding_length as usize))
        .ok_or_else(|| KbwtError::invalid_input("Huffman padding length exceeds body length"))?;

    let trie = DecodeTrie::build(huffman_codes)?;
    let mut source = BitSource::new(data);
    let mut output = Vec::new();

    // Single-symbol alphabets use a synthetic root whose only child is the
    // leaf itself at code "0"; every consumed bit yields that one symbol.
    while source.bits_consumed() < total_bits {
        let mut node = 0usize;
        loop {
            let bit = source.read_bit().ok_or_else(|| {
                KbwtError::invalid_input("Huffman body ended mid-code")
            })?;
            let branch = bit as usize;
            node = trie.children[node][branch].ok_or_else(|| {
                KbwtError::invalid_input("Huffman body contains an unrecognized code")
            })?;
            if let Some(symbol) = trie.symbols[node] {
                output.push(symbol);
                break;
            }
        }
    }

    Ok(output)
}
