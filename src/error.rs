// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Errors raised while decoding STL data

use thiserror::Error;

/// Result type for STL decoding
pub type StlResult<T> = Result<T, StlError>;

/// Errors that reject a decode call. No partial mesh is ever returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StlError {
    /// Binary buffer too short to hold the 80-byte header and triangle count.
    #[error("binary STL header truncated: need 84 bytes, got {len}")]
    TruncatedHeader { len: usize },

    /// Binary buffer shorter than its declared triangle count requires.
    #[error(
        "binary STL truncated: header declares {declared} triangles \
         ({expected_len} bytes), buffer holds {actual_len} bytes"
    )]
    TruncatedBinary {
        declared: u32,
        expected_len: u64,
        actual_len: usize,
    },
}
