// ABOUTME: Planner tunables configuration for the periodization engine
// ABOUTME: Reference distance, undulation amplitude, split fraction, and default month frequency
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vianna Coach Contributors

//! Planner Configuration Module
//!
//! Tunable constants consumed by the calculation components. All values can
//! be overridden via environment variables with the `VIANNA_` prefix.
//! Components never read the global instance: callers pass a
//! `&PlannerConfig` explicitly.

/// Configuration error types
pub mod error;

pub use error::ConfigError;

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;
use vianna_core::constants::units::METERS_PER_KM;

/// Global configuration singleton
static PLANNER_CONFIG: OnceLock<PlannerConfig> = OnceLock::new();

/// Default oscillation amplitude (percentage points) for undulating weeks
pub const DEFAULT_UNDULATION_AMPLITUDE: f64 = 5.0;

/// Default share of the intensity span used for the athlete "easy" sessions
pub const DEFAULT_SPLIT_EASY_FRACTION: f64 = 0.5;

/// Default sessions per week assigned to generated month rows
pub const DEFAULT_SESSIONS_PER_WEEK: u32 = 3;

/// Tunables shared by the intensity, progression and macrocycle components
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Distance used for the time-over-distance column (meters)
    pub reference_distance_meters: f64,
    /// Percentage points added/subtracted on alternating undulating weeks
    pub undulation_amplitude_percent: f64,
    /// Fraction of the intensity span above the start used for easy sessions
    pub split_easy_fraction: f64,
    /// Sessions per week used when generating default month assignments
    pub default_sessions_per_week: u32,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            reference_distance_meters: METERS_PER_KM,
            undulation_amplitude_percent: DEFAULT_UNDULATION_AMPLITUDE,
            split_easy_fraction: DEFAULT_SPLIT_EASY_FRACTION,
            default_sessions_per_week: DEFAULT_SESSIONS_PER_WEEK,
        }
    }
}

impl PlannerConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        PLANNER_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load planner config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from environment, falling back per field on parse failure
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            reference_distance_meters: env_or(
                "VIANNA_REFERENCE_DISTANCE_M",
                defaults.reference_distance_meters,
            ),
            undulation_amplitude_percent: env_or(
                "VIANNA_UNDULATION_AMPLITUDE",
                defaults.undulation_amplitude_percent,
            ),
            split_easy_fraction: env_or("VIANNA_SPLIT_EASY_FRACTION", defaults.split_easy_fraction),
            default_sessions_per_week: env_or(
                "VIANNA_DEFAULT_SESSIONS_PER_WEEK",
                defaults.default_sessions_per_week,
            ),
        }
    }

    /// Load configuration from environment and validate it
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting values fail validation
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::from_env();
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if configuration values are invalid
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.reference_distance_meters.is_finite() || self.reference_distance_meters < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "reference_distance_meters must be finite and >= 0",
            ));
        }

        if !self.undulation_amplitude_percent.is_finite() || self.undulation_amplitude_percent < 0.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "undulation_amplitude_percent must be finite and >= 0",
            ));
        }

        if !(0.0..=1.0).contains(&self.split_easy_fraction) {
            return Err(ConfigError::InvalidRange(
                "split_easy_fraction must be between 0 and 1",
            ));
        }

        if self.default_sessions_per_week == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "default_sessions_per_week must be > 0",
            ));
        }

        Ok(())
    }
}

/// Read and parse an environment variable, keeping `default` when absent or unparsable
fn env_or<T>(name: &str, default: T) -> T
where
    T: FromStr + Copy,
{
    match env::var(name) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(variable = name, value = %raw, "Unparsable planner setting, using default");
            default
        }),
        Err(_) => default,
    }
}
