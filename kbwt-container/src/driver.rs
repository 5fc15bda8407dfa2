//! Block-parallel compress/decompress: splits input into fixed-size
//! blocks, fans them out to a bounded `rayon` pool, and reassembles in
//! block-number order regardless of completion order.

use kbwt_core::error::{KbwtError, Result};
use kbwt_core::key::MasterKey;
use kbwt_core::mode::Mode;
use rayon::prelude::*;

use crate::frame::{read_frames, write_frame};
use crate::pipeline::{decode_block, encode_block};

/// Fixed block size: input files are split into consecutive chunks of
/// this many bytes, with the final chunk possibly shorter.
pub const BLOCK_SIZE: usize = 65_536;

/// Number of workers in the bounded pool: ~60% of available cores,
/// never fewer than one.
pub fn worker_count() -> usize {
    let total = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    std::cmp::max(1, (total as f64 * 0.6).floor() as usize)
}

fn build_pool() -> Result<rayon::ThreadPool> {
    rayon::ThreadPoolBuilder::new()
        .num_threads(worker_count())
        .build()
        .map_err(|e| KbwtError::Io(std::io::Error::other(e.to_string())))
}

/// Compress `data` under `key` into a container byte buffer.
///
/// The input is split into [`BLOCK_SIZE`] blocks (one empty block for an
/// empty input, so the container is never zero frames for a present
/// input), encoded in parallel, and written out as frames strictly in
/// ascending block order.
pub fn compress(data: &[u8], key: &MasterKey, mode: Mode, extension: Option<&str>) -> Result<Vec<u8>> {
    let chunks: Vec<&[u8]> = if data.is_empty() {
        vec![&[][..]]
    } else {
        data.chunks(BLOCK_SIZE).collect()
    };
    let workers = worker_count();
    log::debug!(
        "compressing {} bytes in {} block(s) with mode {mode} on {workers} worker(s)",
        data.len(),
        chunks.len()
    );

    let pool = build_pool()?;
    let results: Vec<Result<_>> = pool.install(|| {
        chunks
            .par_iter()
            .enumerate()
            .map(|(i, chunk)| {
                let subkey = key.subkey(i as u64);
                encode_block(chunk, mode, &subkey, i as u64, extension)
            })
            .collect()
    });

    let mut container = Vec::new();
    for (i, result) in results.into_iter().enumerate() {
        let record = result.map_err(|e| {
            log::error!("block {i} failed to encode");
            KbwtError::worker_failure(i, e.to_string())
        })?;
        container.extend(write_frame(&record)?);
    }
    log::debug!("wrote {} frame(s), {} byte container", chunks.len(), container.len());
    Ok(container)
}

/// Decompress a container byte buffer back into the original bytes, plus
/// the original file extension if any block recorded one.
///
/// Frames are parsed sequentially, decoded in parallel, then reassembled
/// strictly by `metadata.block_number` before concatenation.
pub fn decompress(container: &[u8], key: &MasterKey) -> Result<(Vec<u8>, Option<String>)> {
    let records = read_frames(container)?;
    let extension = records
        .iter()
        .find_map(|r| r.metadata.extension.clone());
    log::debug!("decompressing {} frame(s)", records.len());

    let pool = build_pool()?;
    let results: Vec<Result<(u64, Vec<u8>)>> = pool.install(|| {
        records
            .par_iter()
            .map(|record| {
                let subkey = key.subkey(record.metadata.block_number);
                decode_block(record, &subkey).map(|bytes| (record.metadata.block_number, bytes))
            })
            .collect()
    });

    let mut decoded = Vec::with_capacity(results.len());
    for (i, result) in results.into_iter().enumerate() {
        decoded.push(result.map_err(|e| {
            log::error!("block {i} failed to decode");
            KbwtError::worker_failure(i, e.to_string())
        })?);
    }
    decoded.sort_by_key(|(block_number, _)| *block_number);

    let mut output = Vec::new();
    for (_, bytes) in decoded {
        output.extend(bytes);
    }
    Ok((output, extension))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key() -> MasterKey {
        MasterKey::new("abcdefghijklmnop").unwrap()
    }

    #[test]
    fn test_worker_count_is_at_least_one() {
        assert!(worker_count() >= 1);
    }

    #[test]
    fn test_roundtrip_small_input_all_modes() {
        let data = b"The quick brown fox jumps over the lazy dog";
        for &mode in &[Mode::Bzip2, Mode::Huffman, Mode::Lzw, Mode::Arithmetic] {
            let container = compress(data, &key(), mode, Some(".txt")).unwrap();
            let (decoded, extension) = decompress(&container, &key()).unwrap();
            assert_eq!(decoded, data);
            assert_eq!(extension.as_deref(), Some(".txt"));
        }
    }

    #[test]
    fn test_empty_input_produces_one_frame_and_round_trips() {
        let container = compress(b"", &key(), Mode::Huffman, Some(".bin")).unwrap();
        let records = read_frames(&container).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].metadata.block_number, 0);

        let (decoded, _) = decompress(&container, &key()).unwrap();
        assert!(decoded.is_empty());
    }

    #[test]
    fn test_multi_block_boundary_has_four_frames_in_order() {
        let data = vec![b'x'; 3 * BLOCK_SIZE + 1];
        let container = compress(&data, &key(), Mode::Lzw, None).unwrap();
        let records = read_frames(&container).unwrap();
        assert_eq!(records.len(), 4);
        let numbers: Vec<u64> = records.iter().map(|r| r.metadata.block_number).collect();
        assert_eq!(numbers, vec![0, 1, 2, 3]);

        let (decoded, _) = decompress(&container, &key()).unwrap();
        assert_eq!(decoded, data);
    }

    #[test]
    fn test_determinism_across_runs() {
        let data = b"deterministic payload".repeat(100);
        let a = compress(&data, &key(), Mode::Huffman, Some(".log")).unwrap();
        let b = compress(&data, &key(), Mode::Huffman, Some(".log")).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_wrong_key_never_silently_succeeds() {
        let data = b"The quick brown fox";
        let wrong_key = MasterKey::new("ponmlkjihgfedcbaponmlkji").unwrap();
        let container = compress(data, &key(), Mode::Huffman, None).unwrap();
        match decompress(&container, &wrong_key) {
            Err(_) => {}
            Ok((decoded, _)) => assert_ne!(decoded, data),
        }
    }
}
