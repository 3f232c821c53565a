// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! ASCII STL decoder
//!
//! The grammar is not enforced. Only `vertex x y z` statements matter;
//! `solid`, `facet normal`, `outer loop`, `endloop`, `endfacet`, `endsolid`
//! and solid names are skipped. Every three vertices, in source order, make
//! one triangle.

use crate::geometry::{Mesh, Triangle, Vertex};
use std::borrow::Cow;
use tracing::{debug, warn};

const VERTEX_KEYWORD: &str = "vertex";

/// A `vertex` keyword whose coordinates could not be read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedVertex {
    /// 1-based line of the offending token
    pub line: usize,
    /// The token that is not a float literal, or `None` at end of input
    pub token: Option<String>,
}

/// Outcome of scanning ASCII STL text for vertices
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VertexScan {
    pub vertices: Vec<Vertex>,
    pub malformed: Vec<MalformedVertex>,
}

impl VertexScan {
    /// Vertices left over after grouping into triangles
    pub fn leftover(&self) -> usize {
        self.vertices.len() % 3
    }

    /// Group vertices into triangles, dropping any incomplete trailing group
    pub fn into_mesh(self) -> Mesh {
        self.vertices
            .chunks_exact(3)
            .map(|v| Triangle::new(v[0], v[1], v[2]))
            .collect()
    }
}

/// Decode a buffer holding ASCII STL.
///
/// Never fails: text without vertices yields an empty mesh, and malformed
/// vertex statements or leftover vertices are dropped with a warning.
pub fn decode_ascii(bytes: &[u8]) -> Mesh {
    let text: Cow<'_, str> = String::from_utf8_lossy(bytes);
    let scan = scan_vertices(&text);

    for bad in &scan.malformed {
        warn!(line = bad.line, token = ?bad.token, "skipping malformed vertex");
    }
    if scan.leftover() > 0 {
        warn!(
            leftover = scan.leftover(),
            "dropping vertices that do not complete a triangle"
        );
    }

    let mesh = scan.into_mesh();
    debug!(triangles = mesh.triangle_count(), "decoded ASCII STL");
    mesh
}

/// Scan text for `vertex` statements, in source order
pub fn scan_vertices(text: &str) -> VertexScan {
    let mut tokens = text
        .lines()
        .enumerate()
        .flat_map(|(index, line)| line.split_whitespace().map(move |t| (index + 1, t)))
        .peekable();

    let mut scan = VertexScan::default();
    let mut last_line = 0;

    while let Some((line, token)) = tokens.next() {
        last_line = line;
        if token != VERTEX_KEYWORD {
            continue;
        }

        let mut coords = [0.0f32; 3];
        let mut failure = None;

        for coord in &mut coords {
            // Peek so a token that breaks this vertex is rescanned; it may
            // be the next `vertex` keyword.
            match tokens.peek().copied() {
                Some((line, candidate)) => match parse_coordinate(candidate) {
                    Some(value) => {
                        *coord = value;
                        last_line = line;
                        tokens.next();
                    }
                    None => {
                        failure = Some(MalformedVertex {
                            line,
                            token: Some(candidate.to_string()),
                        });
                        break;
                    }
                },
                None => {
                    failure = Some(MalformedVertex {
                        line: last_line,
                        token: None,
                    });
                    break;
                }
            }
        }

        match failure {
            Some(bad) => scan.malformed.push(bad),
            None => scan.vertices.push(Vertex::from(coords)),
        }
    }

    scan
}

/// Parse a float literal: optional sign, digits with optional fraction,
/// optional exponent. `inf`, `nan` and friends are rejected, as are literals
/// that overflow `f32`.
fn parse_coordinate(token: &str) -> Option<f32> {
    let literal = token
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'));
    let has_digit = token.bytes().any(|b| b.is_ascii_digit());

    if literal && has_digit {
        token.parse().ok().filter(|v: &f32| v.is_finite())
    } else {
        None
    }
}
