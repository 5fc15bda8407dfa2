//! Length-prefixed framing around each serialized [`BlockRecord`].
//!
//! A frame is `u32_le frame_length` followed by exactly `frame_length`
//! bytes of a msgpack-encoded [`BlockRecord`]. The container file is a
//! flat concatenation of frames in submission order.

use kbwt_core::error::{KbwtError, Result};

use crate::record::BlockRecord;

/// Serialize one block record into its framed wire representation.
pub fn write_frame(record: &BlockRecord) -> Result<Vec<u8>> {
    let payload = rmp_serde::to_vec_named(record)
        .map_err(|e| KbwtError::invalid_input(format!("failed to encode block record: {e}")))?;
    let len = u32::try_from(payload.len())
        .map_err(|_| KbwtError::invalid_input("block record too large to frame"))?;

    let mut frame = Vec::with_capacity(4 + payload.len());
    frame.extend_from_slice(&len.to_le_bytes());
    frame.extend_from_slice(&payload);
    Ok(frame)
}

/// Parse every frame out of a container buffer, in order.
///
/// Fails with `InvalidInput` on a truncated length prefix, a truncated
/// payload, or a payload that doesn't decode as a [`BlockRecord`].
pub fn read_frames(container: &[u8]) -> Result<Vec<BlockRecord>> {
    let mut records = Vec::new();
    let mut offset = 0usize;

    while offset < container.len() {
        let header = container.get(offset..offset + 4).ok_or_else(|| {
            KbwtError::invalid_input("container truncated inside a frame length prefix")
        })?;
        let len = u32::from_le_bytes(header.try_into().unwrap()) as usize;
        offset += 4;

        let payload = container.get(offset..offset + len).ok_or_else(|| {
            KbwtError::invalid_input("container truncated inside a frame payload")
        })?;
        offset += len;

        let record: BlockRecord = rmp_serde::from_slice(payload)
            .map_err(|e| KbwtError::invalid_input(format!("malformed block record: {e}")))?;
        records.push(record);
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Metadata, PayloadData};
    use kbwt_core::mode::Mode;
    use serde_bytes::ByteBuf;

    fn sample_record(block_number: u64) -> BlockRecord {
        BlockRecord {
            metadata: Metadata {
                mode: Mode::Huffman,
                block_number,
                extension: Some(".txt".to_string()),
                symbols: Some(ByteBuf::from(vec![b'a'])),
                orig_ptr: Some(0),
            },
            data: PayloadData::Bytes(ByteBuf::from(vec![9, 9, 9])),
            huffman_codes: None,
            padding_length: Some(0),
        }
    }

    #[test]
    fn test_round_trips_single_frame() {
        let record = sample_record(0);
        let frame = write_frame(&record).unwrap();
        let records = read_frames(&frame).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].metadata.block_number, 0);
    }

    #[test]
    fn test_preserves_submission_order_across_frames() {
        let mut container = Vec::new();
        for i in 0..4u64 {
            container.extend(write_frame(&sample_record(i)).unwrap());
        }
        let records = read_frames(&container).unwrap();
        let numbers: Vec<u64> = records.iter().map(|r| r.metadata.block_number).collect();
        assert_eq!(numbers, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_rejects_truncated_length_prefix() {
        let err = read_frames(&[1, 2, 3]).unwrap_err();
        assert!(matches!(err, KbwtError::InvalidInput { .. }));
    }

    #[test]
    fn test_rejects_truncated_payload() {
        let mut frame = write_frame(&sample_record(0)).unwrap();
        frame.truncate(frame.len() - 1);
        let err = read_frames(&frame).unwrap_err();
        assert!(matches!(err, KbwtError::InvalidInput { .. }));
    }

    #[test]
    fn test_empty_container_has_no_frames() {
        assert!(read_frames(&[]).unwrap().is_empty());
    }
}
