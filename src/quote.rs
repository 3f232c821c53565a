// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Quote API: raw STL bytes plus rate overrides in, cost breakdown out
//!
//! This is the single entry point shared by the CLI and the FFI bindings.

use crate::error::StlResult;
use crate::geometry::volume_cm3;
use crate::io::{decode_stl, StlFormat};
use crate::pricing::{price, PricingResult, RateConfig, RateOverrides};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Priced estimate for one uploaded file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    pub format: StlFormat,
    pub triangle_count: usize,
    #[serde(flatten)]
    pub pricing: PricingResult,
    /// Rates actually applied, defaults merged with overrides
    pub rates: RateConfig,
}

impl Quote {
    /// Attach the name of the uploaded file
    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = Some(name.into());
        self
    }

    pub fn volume_cm3(&self) -> f64 {
        self.pricing.volume_cm3
    }

    pub fn total(&self) -> f64 {
        self.pricing.total
    }
}

/// Decode `bytes`, measure the enclosed volume and price it
pub fn estimate(bytes: &[u8], overrides: &RateOverrides) -> StlResult<Quote> {
    let (format, mesh) = decode_stl(bytes)?;
    let volume = volume_cm3(&mesh);
    let rates = overrides.resolve();

    debug!(%format, triangles = mesh.triangle_count(), volume_cm3 = volume, "measured mesh");

    Ok(Quote {
        file_name: None,
        format,
        triangle_count: mesh.triangle_count(),
        pricing: price(volume, &rates),
        rates,
    })
}

/// Like [`estimate`], with overrides still in their serialized JSON form.
///
/// Unparseable overrides fall back to the default rates.
pub fn estimate_with_raw_rates(bytes: &[u8], raw_rates: Option<&str>) -> StlResult<Quote> {
    estimate(bytes, &RateOverrides::parse_optional(raw_rates))
}
