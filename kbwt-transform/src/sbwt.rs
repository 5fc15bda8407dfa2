//! Scrambled Burrows-Wheeler Transform: a BWT whose sort order comes from a
//! [`KeyedAlphabetOrder`] instead of natural byte order.

use crate::kao::KeyedAlphabetOrder;
use kbwt_core::error::{KbwtError, Result};

/// The terminator byte appended to every block before transforming.
pub const TERMINATOR: u8 = 0xFF;

/// Build the suffix array of `data` under the order `kao`, via O(n log^2 n)
/// prefix doubling.
///
/// Ranks for positions past the end of the buffer use a sentinel of -1
/// (never cyclic wraparound) during the doubling comparisons; this treats
/// `data` as an ordinary (non-circular) string, which is valid because the
/// trailing terminator makes every suffix distinct.
fn build_suffix_array(data: &[u8], kao: &KeyedAlphabetOrder) -> Vec<usize> {
    let n = data.len();
    let mut sa: Vec<usize> = (0..n).collect();
    let mut rank: Vec<i64> = data
        .iter()
        .map(|&b| kao.rank(b).expect("byte must be in its own block's alphabet") as i64)
        .collect();
    let mut tmp = vec![0i64; n];

    let mut k = 1usize;
    while k < n {
        let second = |rank: &[i64], i: usize| -> i64 {
            if i + k < n { rank[i + k] } else { -1 }
        };
        sa.sort_unstable_by(|&a, &b| {
            (rank[a], second(&rank, a)).cmp(&(rank[b], second(&rank, b)))
        });

        tmp[sa[0]] = 0;
        for idx in 1..n {
            let prev = sa[idx - 1];
            let cur = sa[idx];
            let prev_key = (rank[prev], second(&rank, prev));
            let cur_key = (rank[cur], second(&rank, cur));
            tmp[cur] = tmp[prev] + if prev_key < cur_key { 1 } else { 0 };
        }
        rank.copy_from_slice(&tmp);

        if rank[sa[n - 1]] as usize == n - 1 {
            break;
        }
        k *= 2;
    }

    sa
}

/// Encode `data` (which must already end with exactly one [`TERMINATOR`]
/// byte, appended by the caller if necessary) into its last column and
/// original-row pointer under sub-key `key`.
pub fn sbwt_encode(data: &[u8], key: &[u8; 32]) -> (Vec<u8>, usize) {
    debug_assert_eq!(data.last(), Some(&TERMINATOR));
    let n = data.len();
    let kao = KeyedAlphabetOrder::build(data, key);
    let sa = build_suffix_array(data, &kao);

    let mut last_column = Vec::with_capacity(n);
    let mut orig_ptr = 0;
    for (i, &start) in sa.iter().enumerate() {
        last_column.push(data[(start + n - 1) % n]);
        if start == 0 {
            orig_ptr = i;
        }
    }

    (last_column, orig_ptr)
}

/// Cumulative start offsets, in keyed-alphabet order, of each byte's block
/// in the (implicit) sorted first column.
fn build_starts(last_column: &[u8], kao: &KeyedAlphabetOrder) -> [usize; 256] {
    let mut counts = [0usize; 256];
    for &b in last_column {
        counts[b as usize] += 1;
    }

    let mut present: Vec<(u16, usize)> = (0u16..256)
        .filter_map(|c| kao.rank(c as u8).map(|r| (r, c as usize)))
        .collect();
    present.sort_by_key(|&(r, _)| r);

    let mut start = [0usize; 256];
    let mut acc = 0usize;
    for (_, c) in present {
        start[c] = acc;
        acc += counts[c];
    }
    start
}

/// Invert [`sbwt_encode`], reconstructing the original (terminator-stripped)
/// data from its last column, original-row pointer, and sub-key.
pub fn sbwt_decode(last_column: &[u8], orig_ptr: usize, key: &[u8; 32]) -> Result<Vec<u8>> {
    let n = last_column.len();
    if n == 0 {
        return Err(KbwtError::invalid_input("SBWT last column is empty"));
    }
    if !last_column.contains(&TERMINATOR) {
        return Err(KbwtError::invalid_input(
            "SBWT last column has no terminator byte",
        ));
    }
    if orig_ptr >= n {
        return Err(KbwtError::invalid_input(
            "SBWT original-row pointer is out of range",
        ));
    }

    let kao = KeyedAlphabetOrder::build(last_column, key);
    let start = build_starts(last_column, &kao);

    let mut occurrence = [0usize; 256];
    let mut lf = vec![0usize; n];
    for (i, &b) in last_column.iter().enumerate() {
        let j = start[b as usize] + occurrence[b as usize];
        lf[j] = i;
        occurrence[b as usize] += 1;
    }

    let mut output = Vec::with_capacity(n - 1);
    let mut row = orig_ptr;
    for _ in 0..n - 1 {
        row = lf[row];
        output.push(last_column[row]);
    }
    Ok(output)
}
