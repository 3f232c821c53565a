// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! printquote
//!
//! Cost estimation for 3D prints from STL meshes: detects binary vs ASCII
//! STL, decodes the triangles, measures the enclosed volume and prices it
//! against a configurable rate table.
//!
//! ```
//! use printquote::{estimate, RateOverrides};
//!
//! let stl = b"solid t\nvertex 0 0 0\nvertex 10 0 0\nvertex 0 10 0\nendsolid t\n";
//! let quote = estimate(stl, &RateOverrides::none()).unwrap();
//! assert_eq!(quote.triangle_count, 1);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod geometry;
pub mod io;
pub mod pricing;
pub mod quote;

#[cfg(any(feature = "wasm", feature = "napi"))]
pub mod ffi;

pub use error::{StlError, StlResult};
pub use geometry::{volume_cm3, Mesh, Triangle, Vertex};
pub use io::{decode_stl, detect_format, StlFormat};
pub use pricing::{price, PricingResult, RateConfig, RateOverrides};
pub use quote::{estimate, estimate_with_raw_rates, Quote};
