// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Settings for the command-line front end
//!
//! ```toml
//! max_file_bytes = 52428800
//!
//! [rates]
//! filamentCostPerKg = 650
//! markupPercent = 10
//! ```

use crate::pricing::RateOverrides;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File looked up in the working directory by [`Settings::load`]
pub const DEFAULT_SETTINGS_FILE: &str = "printquote.toml";

/// Upload limit carried over from the web handler
pub const DEFAULT_MAX_FILE_BYTES: u64 = 50 * 1024 * 1024;

/// Front-end settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Inputs larger than this are rejected before being read
    pub max_file_bytes: u64,
    /// Rate overrides layered over the built-in defaults
    pub rates: RateOverrides,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_file_bytes: DEFAULT_MAX_FILE_BYTES,
            rates: RateOverrides::none(),
        }
    }
}

impl Settings {
    /// Load settings from file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read settings file: {:?}", path.as_ref()))?;
        let settings: Settings = toml::from_str(&content)
            .with_context(|| format!("Failed to parse settings file: {:?}", path.as_ref()))?;
        Ok(settings)
    }

    /// Load `printquote.toml` if present, then apply environment overrides
    pub fn load() -> Result<Self> {
        let settings = if PathBuf::from(DEFAULT_SETTINGS_FILE).exists() {
            Self::from_file(DEFAULT_SETTINGS_FILE)?
        } else {
            Self::default()
        };

        Ok(settings.with_env_overrides(|key| std::env::var(key).ok()))
    }

    /// Apply `PRINTQUOTE_*` overrides; values that do not parse are ignored
    pub fn with_env_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let number = |key: &str| lookup(key).and_then(|v| v.trim().parse::<f64>().ok());

        if let Some(max) = lookup("PRINTQUOTE_MAX_FILE_BYTES").and_then(|v| v.trim().parse().ok()) {
            self.max_file_bytes = max;
        }

        let env = RateOverrides {
            filament_density_g_per_cm3: number("PRINTQUOTE_DENSITY"),
            filament_cost_per_kg: number("PRINTQUOTE_FILAMENT_COST_PER_KG"),
            print_speed_cm3_per_hr: number("PRINTQUOTE_PRINT_SPEED"),
            electricity_cost_per_hr: number("PRINTQUOTE_ELECTRICITY_COST_PER_HR"),
            labor_cost_per_job: number("PRINTQUOTE_LABOR_COST"),
            markup_percent: number("PRINTQUOTE_MARKUP_PERCENT"),
        };
        self.rates = self.rates.layer(&env);
        self
    }

    /// Save settings to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize settings")?;
        std::fs::write(path.as_ref(), content)
            .with_context(|| format!("Failed to write settings file: {:?}", path.as_ref()))?;
        Ok(())
    }
}
