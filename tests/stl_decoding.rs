// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Format detection and decoding against hand-built STL buffers

use anyhow::Result;
use approx::assert_abs_diff_eq;
use nalgebra::Vector3;
use printquote::geometry::Primitive;
use printquote::io::{decode_stl, detect_format, encode_ascii, encode_binary, StlFormat};
use printquote::{volume_cm3, StlError};

/// Binary STL with an arbitrary header and `count` zeroed records
fn binary_with_header(header: &[u8], count: u32) -> Vec<u8> {
    let mut bytes = vec![0u8; 80];
    bytes[..header.len()].copy_from_slice(header);
    bytes.extend_from_slice(&count.to_le_bytes());
    bytes.resize(84 + 50 * count as usize, 0);
    bytes
}

#[test]
fn test_solid_header_binary_is_binary() -> Result<()> {
    let bytes = binary_with_header(b"solidworks export", 5);
    assert_eq!(bytes.len(), 334);
    assert_eq!(detect_format(&bytes), StlFormat::Binary);

    let (format, mesh) = decode_stl(&bytes)?;
    assert_eq!(format, StlFormat::Binary);
    assert_eq!(mesh.triangle_count(), 5);

    Ok(())
}

#[test]
fn test_ascii_cube_text() -> Result<()> {
    let text = "solid cube\nfacet normal 0 0 1\nouter loop\nvertex 0 0 0\nvertex 1 0 0\nvertex 0 1 0\nendloop\nendfacet\nendsolid cube\n";
    assert_eq!(detect_format(text.as_bytes()), StlFormat::Ascii);

    let (format, mesh) = decode_stl(text.as_bytes())?;
    assert_eq!(format, StlFormat::Ascii);
    assert_eq!(mesh.triangle_count(), 1);

    Ok(())
}

#[test]
fn test_uppercase_solid_is_ascii() {
    assert_eq!(detect_format(b"SOLID part\nendsolid part\n"), StlFormat::Ascii);
    assert_eq!(detect_format(b"SoLiD"), StlFormat::Ascii);
}

#[test]
fn test_short_buffers() {
    // Without the "solid" prefix a short buffer is still binary, and too short to decode
    assert_eq!(detect_format(b""), StlFormat::Binary);
    assert_eq!(
        decode_stl(b"").unwrap_err(),
        StlError::TruncatedHeader { len: 0 }
    );
    assert_eq!(
        decode_stl(&[0u8; 83]).unwrap_err(),
        StlError::TruncatedHeader { len: 83 }
    );
}

#[test]
fn test_truncated_binary_reports_expected_length() {
    let mut bytes = binary_with_header(b"", 4);
    bytes.truncate(200);

    assert_eq!(
        decode_stl(&bytes).unwrap_err(),
        StlError::TruncatedBinary {
            declared: 4,
            expected_len: 284,
            actual_len: 200,
        }
    );
}

#[test]
fn test_binary_and_ascii_encodings_agree() -> Result<()> {
    let mesh = Primitive::cube(Vector3::new(10.0, 10.0, 10.0), true).to_mesh();
    let binary = encode_binary(&mesh)?;
    let ascii = encode_ascii(&mesh, "cube")?;

    let (binary_format, from_binary) = decode_stl(&binary)?;
    let (ascii_format, from_ascii) = decode_stl(ascii.as_bytes())?;

    assert_eq!(binary_format, StlFormat::Binary);
    assert_eq!(ascii_format, StlFormat::Ascii);
    assert_eq!(from_binary, from_ascii);
    assert_abs_diff_eq!(volume_cm3(&from_binary), 1.0, epsilon = 1e-6);

    Ok(())
}

#[test]
fn test_reencode_decoded_binary_is_identical() -> Result<()> {
    let mesh = Primitive::sphere(12.0, 24).to_mesh();
    let bytes = encode_binary(&mesh)?;
    let (_, decoded) = decode_stl(&bytes)?;

    assert_eq!(encode_binary(&decoded)?, bytes);

    Ok(())
}

#[test]
fn test_malformed_ascii_vertices_are_skipped() -> Result<()> {
    let text = "solid broken\nvertex 0 0 0\nvertex nan 0 0\nvertex 1 0 0\nvertex 0 1 0\nendsolid broken\n";
    let (_, mesh) = decode_stl(text.as_bytes())?;
    assert_eq!(mesh.triangle_count(), 1);

    Ok(())
}
