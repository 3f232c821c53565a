// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Rate configuration and per-field overrides
//!
//! Field names serialize as camelCase. The keys written by older admin
//! settings pages (`filamentTHBperKG` and friends) are accepted as aliases.

use serde::de::Error as _;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

/// Effective cost-model parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateConfig {
    /// Filament density in g/cm³
    #[serde(alias = "filamentDensityGperCm3")]
    pub filament_density_g_per_cm3: f64,
    /// Filament price per kilogram
    #[serde(alias = "filamentTHBperKG")]
    pub filament_cost_per_kg: f64,
    /// Print throughput in cm³/hour
    pub print_speed_cm3_per_hr: f64,
    /// Electricity price per printing hour
    #[serde(alias = "electricityTHBperHr")]
    pub electricity_cost_per_hr: f64,
    /// Flat labour charge per job
    #[serde(alias = "laborTHBperJob")]
    pub labor_cost_per_job: f64,
    /// Markup applied to the subtotal, in percent
    pub markup_percent: f64,
}

impl Default for RateConfig {
    fn default() -> Self {
        Self {
            filament_density_g_per_cm3: 1.24,
            filament_cost_per_kg: 800.0,
            print_speed_cm3_per_hr: 50.0,
            electricity_cost_per_hr: 5.0,
            labor_cost_per_job: 100.0,
            markup_percent: 0.0,
        }
    }
}

impl RateConfig {
    /// Apply overrides field by field; a present override wins
    pub fn merge(&self, overrides: &RateOverrides) -> Self {
        Self {
            filament_density_g_per_cm3: overrides
                .filament_density_g_per_cm3
                .unwrap_or(self.filament_density_g_per_cm3),
            filament_cost_per_kg: overrides
                .filament_cost_per_kg
                .unwrap_or(self.filament_cost_per_kg),
            print_speed_cm3_per_hr: overrides
                .print_speed_cm3_per_hr
                .unwrap_or(self.print_speed_cm3_per_hr),
            electricity_cost_per_hr: overrides
                .electricity_cost_per_hr
                .unwrap_or(self.electricity_cost_per_hr),
            labor_cost_per_job: overrides
                .labor_cost_per_job
                .unwrap_or(self.labor_cost_per_job),
            markup_percent: overrides.markup_percent.unwrap_or(self.markup_percent),
        }
    }
}

/// Caller-supplied partial rates; absent fields fall back to defaults.
///
/// A JSON `null` counts as absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RateOverrides {
    #[serde(alias = "filamentDensityGperCm3", skip_serializing_if = "Option::is_none")]
    pub filament_density_g_per_cm3: Option<f64>,
    #[serde(alias = "filamentTHBperKG", skip_serializing_if = "Option::is_none")]
    pub filament_cost_per_kg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub print_speed_cm3_per_hr: Option<f64>,
    #[serde(alias = "electricityTHBperHr", skip_serializing_if = "Option::is_none")]
    pub electricity_cost_per_hr: Option<f64>,
    #[serde(alias = "laborTHBperJob", skip_serializing_if = "Option::is_none")]
    pub labor_cost_per_job: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markup_percent: Option<f64>,
}

impl RateOverrides {
    pub fn none() -> Self {
        Self::default()
    }

    /// Parse a JSON override object.
    ///
    /// Malformed JSON, `null` and non-objects yield no overrides at all. A
    /// field with a non-numeric value is dropped on its own; the remaining
    /// fields still apply.
    pub fn parse(raw: &str) -> Self {
        match Self::try_parse(raw) {
            Ok(overrides) => overrides,
            Err(err) => {
                warn!(error = %err, "ignoring unparseable rate overrides, using defaults");
                Self::default()
            }
        }
    }

    fn try_parse(raw: &str) -> Result<Self, serde_json::Error> {
        match serde_json::from_str(raw)? {
            Value::Null => Ok(Self::default()),
            Value::Object(fields) => Ok(Self::from_fields(fields)),
            other => Err(serde_json::Error::custom(format!(
                "expected an object, found {other}"
            ))),
        }
    }

    /// Read each field on its own so a bad value only costs that field
    fn from_fields(fields: Map<String, Value>) -> Self {
        fields.into_iter().fold(Self::default(), |acc, (key, value)| {
            let single = Map::from_iter([(key.clone(), value)]);
            match serde_json::from_value::<Self>(Value::Object(single)) {
                Ok(field) => acc.layer(&field),
                Err(err) => {
                    warn!(field = %key, error = %err, "ignoring invalid rate override field");
                    acc
                }
            }
        })
    }

    /// Parse an optional raw override; `None` or blank input means no overrides
    pub fn parse_optional(raw: Option<&str>) -> Self {
        match raw {
            Some(raw) if !raw.trim().is_empty() => Self::parse(raw),
            _ => Self::default(),
        }
    }

    /// Stack `top` over `self`; fields set in `top` win
    pub fn layer(&self, top: &RateOverrides) -> Self {
        Self {
            filament_density_g_per_cm3: top
                .filament_density_g_per_cm3
                .or(self.filament_density_g_per_cm3),
            filament_cost_per_kg: top.filament_cost_per_kg.or(self.filament_cost_per_kg),
            print_speed_cm3_per_hr: top.print_speed_cm3_per_hr.or(self.print_speed_cm3_per_hr),
            electricity_cost_per_hr: top
                .electricity_cost_per_hr
                .or(self.electricity_cost_per_hr),
            labor_cost_per_job: top.labor_cost_per_job.or(self.labor_cost_per_job),
            markup_percent: top.markup_percent.or(self.markup_percent),
        }
    }

    /// Merge over the default rates
    pub fn resolve(&self) -> RateConfig {
        RateConfig::default().merge(self)
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
