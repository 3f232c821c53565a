// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Volume-to-cost calculator

use super::RateConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Floor for print throughput so a zero or negative speed never divides by zero
pub const MIN_PRINT_SPEED_CM3_PER_HR: f64 = 1e-4;

/// Grams per kilogram
const G_PER_KG: f64 = 1000.0;

/// Cost breakdown for one print job. Values are unrounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingResult {
    pub volume_cm3: f64,
    pub weight_g: f64,
    pub time_hours: f64,
    pub material_cost: f64,
    pub electricity_cost: f64,
    pub labor_cost: f64,
    /// Material + electricity + labour
    pub subtotal: f64,
    /// Subtotal with markup applied
    pub total: f64,
}

/// Price a print of `volume_cm3` under `rates`
pub fn price(volume_cm3: f64, rates: &RateConfig) -> PricingResult {
    let weight_g = volume_cm3 * rates.filament_density_g_per_cm3;
    let time_hours = volume_cm3 / rates.print_speed_cm3_per_hr.max(MIN_PRINT_SPEED_CM3_PER_HR);
    let material_cost = (rates.filament_cost_per_kg / G_PER_KG) * weight_g;
    let electricity_cost = rates.electricity_cost_per_hr * time_hours;
    let labor_cost = rates.labor_cost_per_job;
    let subtotal = material_cost + electricity_cost + labor_cost;
    let total = subtotal * (1.0 + rates.markup_percent / 100.0);

    debug!(volume_cm3, weight_g, time_hours, subtotal, total, "priced print job");

    PricingResult {
        volume_cm3,
        weight_g,
        time_hours,
        material_cost,
        electricity_cost,
        labor_cost,
        subtotal,
        total,
    }
}
