//! Error types for kbwt operations.
//!
//! This module provides a single error type shared by every layer of the
//! pipeline, from the per-block transforms up through the parallel driver
//! and the CLI.

use std::io;
use thiserror::Error;

/// The main error type for kbwt operations.
#[derive(Debug, Error)]
pub enum KbwtError {
    /// Malformed input to a transform or container reader: a missing
    /// terminator, a truncated RLE stream, an out-of-range pointer, or an
    /// alphabet mismatch between the encoded block and its metadata.
    #[error("invalid input: {message}")]
    InvalidInput {
        /// Description of what was wrong.
        message: String,
    },

    /// The supplied master key failed validation (length or character set).
    #[error("invalid key: {message}")]
    InvalidKey {
        /// Description of the validation failure.
        message: String,
    },

    /// The underlying entropy/dictionary back-end reported a failure.
    #[error("backend failure ({mode}): {message}")]
    BackendFailure {
        /// Name of the back-end mode (e.g. "huffman", "lzw").
        mode: String,
        /// Description of the failure.
        message: String,
    },

    /// A parallel worker failed while processing a block.
    #[error("worker failed on block {block_index}: {message}")]
    WorkerFailure {
        /// Index of the block that failed.
        block_index: usize,
        /// Description of the failure.
        message: String,
    },

    /// I/O error reading or writing input, output, key, or log files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias for kbwt operations.
pub type Result<T> = std::result::Result<T, KbwtError>;

impl KbwtError {
    /// Create an invalid-input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create an invalid-key error.
    pub fn invalid_key(message: impl Into<String>) -> Self {
        Self::InvalidKey {
            message: message.into(),
        }
    }

    /// Create a backend-failure error.
    pub fn backend_failure(mode: impl Into<String>, message: impl Into<String>) -> Self {
        Self::BackendFailure {
            mode: mode.into(),
            message: message.into(),
        }
    }

    /// Create a worker-failure error, attaching the failing block's index.
    pub fn worker_failure(block_index: usize, message: impl Into<String>) -> Self {
        Self::WorkerFailure {
            block_index,
            message: message.into(),
        }
    }
}
