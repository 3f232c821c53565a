// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Pricing module - rate configuration and cost calculation

mod calculator;
mod rates;

pub use calculator::{price, PricingResult, MIN_PRINT_SPEED_CM3_PER_HR};
pub use rates::{RateConfig, RateOverrides};
