// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Binary vs ASCII STL detection
//!
//! ASCII files begin with `solid`, but so do plenty of binary files whose
//! header happens to carry that word. A `solid` prefix is therefore only
//! trusted when the header's triangle count does not describe the buffer
//! length exactly.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Size of the free-form binary header
pub const HEADER_LEN: usize = 80;

/// Header plus the little-endian `u32` triangle count
pub const PREAMBLE_LEN: usize = HEADER_LEN + 4;

/// Normal (12) + three vertices (36) + attribute (2)
pub const RECORD_LEN: usize = 50;

const ASCII_KEYWORD: &[u8] = b"solid";

/// STL storage format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StlFormat {
    Binary,
    Ascii,
}

impl fmt::Display for StlFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Binary => f.write_str("binary"),
            Self::Ascii => f.write_str("ascii"),
        }
    }
}

/// Exact byte length of a binary STL holding `triangles` records
pub fn binary_len(triangles: u32) -> u64 {
    PREAMBLE_LEN as u64 + RECORD_LEN as u64 * u64::from(triangles)
}

/// Triangle count stored at offset 80, if the buffer is long enough
pub fn declared_triangle_count(bytes: &[u8]) -> Option<u32> {
    let count = bytes.get(HEADER_LEN..PREAMBLE_LEN)?;
    Some(u32::from_le_bytes(count.try_into().ok()?))
}

/// Classify a raw buffer as binary or ASCII STL
pub fn detect_format(bytes: &[u8]) -> StlFormat {
    let starts_with_solid = bytes
        .get(..ASCII_KEYWORD.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(ASCII_KEYWORD));

    if !starts_with_solid {
        return StlFormat::Binary;
    }

    match declared_triangle_count(bytes) {
        Some(n) if binary_len(n) == bytes.len() as u64 => StlFormat::Binary,
        _ => StlFormat::Ascii,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid_header_with_count(count: u32, total_len: usize) -> Vec<u8> {
        let mut bytes = vec![b' '; total_len];
        bytes[..5].copy_from_slice(b"solid");
        bytes[HEADER_LEN..PREAMBLE_LEN].copy_from_slice(&count.to_le_bytes());
        bytes
    }

    #[test]
    fn test_solid_prefix_with_exact_length_is_binary() {
        let bytes = solid_header_with_count(5, 84 + 50 * 5);
        assert_eq!(detect_format(&bytes), StlFormat::Binary);
    }

    #[test]
    fn test_solid_prefix_with_other_length_is_ascii() {
        let text = b"solid cube\nfacet normal 0 0 1\n outer loop\n";
        assert_eq!(detect_format(text), StlFormat::Ascii);

        let bytes = solid_header_with_count(5, 84 + 50 * 5 + 1);
        assert_eq!(detect_format(&bytes), StlFormat::Ascii);
    }

    #[test]
    fn test_prefix_is_case_insensitive() {
        assert_eq!(detect_format(b"SOLID part\nendsolid"), StlFormat::Ascii);
        assert_eq!(detect_format(b"SoLiD"), StlFormat::Ascii);
    }

    #[test]
    fn test_short_solid_buffer_is_ascii() {
        let bytes = solid_header_with_count(0, 84);
        // 84 bytes with a zero count is an empty binary file
        assert_eq!(detect_format(&bytes), StlFormat::Binary);
        assert_eq!(detect_format(&bytes[..83]), StlFormat::Ascii);
    }

    #[test]
    fn test_non_solid_prefix_is_binary() {
        assert_eq!(detect_format(b""), StlFormat::Binary);
        assert_eq!(detect_format(b"sol"), StlFormat::Binary);
        assert_eq!(detect_format(b"  solid leading space"), StlFormat::Binary);
        assert_eq!(detect_format(&[0u8; 134]), StlFormat::Binary);
    }

    #[test]
    fn test_huge_declared_count_does_not_overflow() {
        let bytes = solid_header_with_count(u32::MAX, 200);
        assert_eq!(binary_len(u32::MAX), 84 + 50 * u64::from(u32::MAX));
        assert_eq!(detect_format(&bytes), StlFormat::Ascii);
    }
}
