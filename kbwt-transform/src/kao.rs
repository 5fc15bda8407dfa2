//! Keyed Alphabet Order: a per-block total order on bytes derived from a
//! sub-key, used in place of natural byte order throughout SBWT.

use sha2::{Digest, Sha256};

/// A total order on the distinct bytes observed in a block.
///
/// `rank(c)` gives the position of byte `c` in the keyed order; lower ranks
/// sort first. Only bytes that were present when the order was built have a
/// rank.
#[derive(Debug, Clone)]
pub struct KeyedAlphabetOrder {
    rank: [Option<u16>; 256],
}

impl KeyedAlphabetOrder {
    /// Build the order for the distinct bytes of `data` under sub-key `key`.
    ///
    /// For every distinct byte `c`, computes `h(c) = SHA-256(key || c)` and
    /// sorts byte/hash pairs lexicographically by hash; ties (practically
    /// impossible) fall back to natural byte value.
    pub fn build(data: &[u8], key: &[u8; 32]) -> Self {
        let mut present = [false; 256];
        for &b in data {
            present[b as usize] = true;
        }

        let mut entries: Vec<(u8, [u8; 32])> = (0u16..256)
            .filter(|&b| present[b as usize])
            .map(|b| {
                let b = b as u8;
                let mut hasher = Sha256::new();
                hasher.update(key);
                hasher.update([b]);
                let digest: [u8; 32] = hasher.finalize().into();
                (b, digest)
            })
            .collect();

        entries.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));

        let mut rank = [None; 256];
        for (i, (byte, _)) in entries.into_iter().enumerate() {
            rank[byte as usize] = Some(i as u16);
        }

        Self { rank }
    }

    /// Rank of `byte` in the keyed order, if it was present when built.
    pub fn rank(&self, byte: u8) -> Option<u16> {
        self.rank[byte as usize]
    }

    /// Compare two bytes under this order. Bytes absent from the alphabet
    /// compare equal to each other and greater than any present byte; this
    /// only matters for callers that probe bytes outside the known
    /// alphabet, which should not occur in a well-formed block.
    pub fn compare(&self, a: u8, b: u8) -> std::cmp::Ordering {
        match (self.rank(a), self.rank(b)) {
            (Some(ra), Some(rb)) => ra.cmp(&rb),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => a.cmp(&b),
        }
    }
}
