//! Run-Length Encoding with a reserved escape byte.
//!
//! `0xFF` never appears unescaped in the output: a literal `0xFF` in the
//! input is encoded as `0xFF, 0x00`, and any run of length >= 2 (including
//! runs of `0xFF` itself) is encoded as `0xFF, run_length, value`, with
//! runs longer than 255 split into multiple `0xFF, 0xFF, value` segments
//! (each worth exactly 255 copies) followed by a final `0xFF, remainder,
//! value` segment.

use kbwt_core::error::{KbwtError, Result};

const ESCAPE: u8 = 0xFF;

fn flush_run(out: &mut Vec<u8>, symbol: u8, run_length: usize) {
    if run_length == 0 {
        return;
    }
    if run_length == 1 {
        if symbol == ESCAPE {
            out.push(ESCAPE);
            out.push(0x00);
        } else {
            out.push(symbol);
        }
        return;
    }

    let mut remaining = run_length;
    while remaining > 255 {
        out.push(ESCAPE);
        out.push(ESCAPE);
        out.push(symbol);
        remaining -= 255;
    }
    out.push(ESCAPE);
    out.push(remaining as u8);
    out.push(symbol);
}

/// Run-length encode a byte sequence.
pub fn rle_encode(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.len());
    let mut iter = data.iter();
    let Some(&first) = iter.next() else {
        return out;
    };

    let mut current = first;
    let mut run = 1usize;
    for &b in iter {
        if b == current {
            run += 1;
        } else {
            flush_run(&mut out, current, run);
            current = b;
            run = 1;
        }
    }
    flush_run(&mut out, current, run);
    out
}

/// Invert [`rle_encode`]. Fails on a truncated escape sequence.
pub fn rle_decode(data: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    let mut i = 0;
    while i < data.len() {
        let b = data[i];
        if b != ESCAPE {
            out.push(b);
            i += 1;
            continue;
        }

        let marker = *data
            .get(i + 1)
            .ok_or_else(|| KbwtError::invalid_input("RLE stream truncated after escape byte"))?;
        if marker == 0x00 {
            out.push(ESCAPE);
            i += 2;
            continue;
        }

        let symbol = *data.get(i + 2).ok_or_else(|| {
            KbwtError::invalid_input("RLE stream truncated after run length byte")
        })?;
        out.extend(std::iter::repeat_n(symbol, marker as usize));
        i += 3;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_mixed() {
        let data = b"aaabbbbbbbbc";
        let encoded = rle_encode(data);
        let decoded = rle_decode(&encoded).unwrap();
        assert_eq!(decoded, data);
    }

    #[test]
    fn test_escape_stress_vector() {
        // MTF output mixing a run of 0xFF with a trailing lone 0xFF; this
        // exercises both the run-length escape form and the single-literal
        // escape form in one pass.
        let data: Vec<u8> = vec![0xFF, 0xFF, 0xFF, 7, 3, 0xFF];
        let encoded = rle_encode(&data);
        assert_eq!(encoded, vec![0xFF, 3, 0xFF, 7, 3, 0xFF, 0x00]);
        assert_eq!(rle_decode(&encoded).unwrap(), data);
    }

    #[test]
    fn test_single_escape_byte() {
        let data = [0xFFu8];
        let encoded = rle_encode(&data);
        assert_eq!(encoded, vec![0xFF, 0x00]);
        assert_eq!(rle_decode(&encoded).unwrap(), data);
    }

    #[test]
    fn test_long_run_splits_at_255() {
        let data = vec![7u8; 600];
        let encoded = rle_encode(&data);
        // 600 = 255 + 255 + 90
        assert_eq!(encoded, vec![0xFF, 0xFF, 7, 0xFF, 0xFF, 7, 0xFF, 90, 7]);
        assert_eq!(rle_decode(&encoded).unwrap(), data);
    }

    #[test]
    fn test_empty_input() {
        assert!(rle_encode(b"").is_empty());
        assert_eq!(rle_decode(b"").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_decode_rejects_truncated_escape() {
        assert!(rle_decode(&[0xFF]).is_err());
        assert!(rle_decode(&[0xFF, 5]).is_err());
    }
}
