// ABOUTME: Intensity table generation from VO2max using the ACSM running cost equation
// ABOUTME: Converts relative-intensity percentages into speed, pace, and time-over-distance rows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vianna Coach Contributors

//! # Intensity Table Generator
//!
//! For every fixed relative intensity the target oxygen uptake is inverted
//! through the ACSM horizontal running equation:
//!
//! ```text
//! target_vo2        = vo2max x percent / 100
//! meters_per_minute = (target_vo2 - 3.5) / 0.2
//! km_per_hour       = meters_per_minute x 60 / 1000
//! pace_per_km       = 60 / km_per_hour                  (decimal minutes)
//! time_over_dist    = reference_distance / meters_per_minute
//! ```
//!
//! Rows whose speed is not strictly positive keep their target `VO2` but
//! carry `None` for every derived field, rendered as `"---"`.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};
use vianna_core::constants::display::UNAVAILABLE;
use vianna_core::constants::running_cost::{HORIZONTAL_COST_PER_METER_MINUTE, RESTING_VO2};
use vianna_core::constants::units::{METERS_PER_KM, MINUTES_PER_HOUR, SECONDS_PER_MINUTE};

/// Relative intensities of `VO2max`, highest to lowest
pub const INTENSITY_PERCENTAGES: [u32; 14] =
    [170, 160, 150, 110, 105, 100, 95, 90, 85, 80, 75, 70, 65, 60];

/// A duration rendered as zero-padded `mm:ss`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PaceClock {
    /// Whole minutes
    pub minutes: u64,
    /// Remaining seconds (0-59)
    pub seconds: u64,
}

impl PaceClock {
    /// Total duration in seconds
    #[must_use]
    pub const fn total_seconds(&self) -> u64 {
        self.minutes * 60 + self.seconds
    }
}

impl fmt::Display for PaceClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.minutes, self.seconds)
    }
}

/// Convert decimal minutes into a `mm:ss` clock rounded to the nearest second
///
/// Returns `None` for NaN, infinite or negative input.
#[must_use]
pub fn format_decimal_minutes(decimal_minutes: f64) -> Option<PaceClock> {
    if !decimal_minutes.is_finite() || decimal_minutes < 0.0 {
        return None;
    }

    // Non-negative and finite, so the cast only saturates on absurd magnitudes
    let total_seconds = (decimal_minutes * SECONDS_PER_MINUTE).round() as u64;
    Some(PaceClock {
        minutes: total_seconds / 60,
        seconds: total_seconds % 60,
    })
}

/// One relative-intensity row of the table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntensityRow {
    /// Display label, e.g. `"95%"`
    pub label: String,
    /// Relative intensity (percent of `VO2max`)
    pub percent: u32,
    /// Target oxygen uptake (ml/kg/min)
    pub target_vo2: f64,
    /// Running speed (m/min), `None` when not representable
    pub meters_per_minute: Option<f64>,
    /// Running speed (km/h), `None` when not representable
    pub km_per_hour: Option<f64>,
    /// Pace per kilometer, `None` when not representable
    pub pace_per_km: Option<PaceClock>,
    /// Time to cover the reference distance, `None` when not representable
    pub time_over_distance: Option<PaceClock>,
}

impl IntensityRow {
    /// Compute a single row
    #[must_use]
    pub fn compute(vo2max: f64, percent: u32, reference_distance_meters: f64) -> Self {
        let target_vo2 = vo2max * f64::from(percent) / 100.0;
        let meters_per_minute = (target_vo2 - RESTING_VO2) / HORIZONTAL_COST_PER_METER_MINUTE;
        let km_per_hour = meters_per_minute * MINUTES_PER_HOUR / METERS_PER_KM;

        let valid = meters_per_minute.is_finite()
            && km_per_hour.is_finite()
            && meters_per_minute > 0.0
            && km_per_hour > 0.0;

        let label = format!("{percent}%");
        if !valid {
            return Self {
                label,
                percent,
                target_vo2,
                meters_per_minute: None,
                km_per_hour: None,
                pace_per_km: None,
                time_over_distance: None,
            };
        }

        let time_over_distance = if reference_distance_meters > 0.0 {
            format_decimal_minutes(reference_distance_meters / meters_per_minute)
        } else {
            None
        };

        Self {
            label,
            percent,
            target_vo2,
            meters_per_minute: Some(meters_per_minute),
            km_per_hour: Some(km_per_hour),
            pace_per_km: format_decimal_minutes(MINUTES_PER_HOUR / km_per_hour),
            time_over_distance,
        }
    }

    /// Whether the speed fields are representable
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.meters_per_minute.is_some()
    }

    /// Target `VO2` with two decimals
    #[must_use]
    pub fn target_vo2_display(&self) -> String {
        format!("{:.2}", self.target_vo2)
    }

    /// Speed in m/min with two decimals, or `"---"`
    #[must_use]
    pub fn meters_per_minute_display(&self) -> String {
        decimal_or_unavailable(self.meters_per_minute)
    }

    /// Speed in km/h with two decimals, or `"---"`
    #[must_use]
    pub fn km_per_hour_display(&self) -> String {
        decimal_or_unavailable(self.km_per_hour)
    }

    /// Pace as `mm:ss`, or `"---"`
    #[must_use]
    pub fn pace_display(&self) -> String {
        clock_or_unavailable(self.pace_per_km)
    }

    /// Time over the reference distance as `mm:ss`, or `"---"`
    #[must_use]
    pub fn time_over_distance_display(&self) -> String {
        clock_or_unavailable(self.time_over_distance)
    }
}

fn decimal_or_unavailable(value: Option<f64>) -> String {
    value.map_or_else(|| UNAVAILABLE.to_owned(), |v| format!("{v:.2}"))
}

fn clock_or_unavailable(value: Option<PaceClock>) -> String {
    value.map_or_else(|| UNAVAILABLE.to_owned(), |clock| clock.to_string())
}

/// Ordered intensity rows for one `VO2max` and reference distance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntensityTable {
    /// `VO2max` the table was built from
    pub vo2max: f64,
    /// Distance used for the time-over-distance column (meters)
    pub reference_distance_meters: f64,
    /// Rows, highest intensity first
    pub rows: Vec<IntensityRow>,
}

impl IntensityTable {
    /// Row whose percentage matches exactly
    #[must_use]
    pub fn row_for_percent(&self, percent: u32) -> Option<&IntensityRow> {
        self.rows.iter().find(|row| row.percent == percent)
    }

    /// Row by display label (e.g. `"95%"`)
    #[must_use]
    pub fn row(&self, label: &str) -> Option<&IntensityRow> {
        self.rows.iter().find(|row| row.label == label)
    }

    /// Number of rows with representable speeds
    #[must_use]
    pub fn valid_row_count(&self) -> usize {
        self.rows.iter().filter(|row| row.is_valid()).count()
    }
}

/// Build the intensity table for a `VO2max` and reference distance
///
/// A non-positive `VO2max` yields a table whose rows are all sentinel.
///
/// # Example
///
/// ```rust
/// use vianna_intelligence::intensity::build_intensity_table;
///
/// let table = build_intensity_table(50.0, 1000.0);
/// let row = table.row_for_percent(100).unwrap();
/// assert_eq!(row.pace_display(), "04:18");
/// ```
#[must_use]
pub fn build_intensity_table(vo2max: f64, reference_distance_meters: f64) -> IntensityTable {
    let rows: Vec<IntensityRow> = INTENSITY_PERCENTAGES
        .iter()
        .map(|&percent| IntensityRow::compute(vo2max, percent, reference_distance_meters))
        .collect();

    let table = IntensityTable {
        vo2max,
        reference_distance_meters,
        rows,
    };

    let sentinel_rows = table.rows.len() - table.valid_row_count();
    if sentinel_rows > 0 {
        warn!(
            vo2max,
            sentinel_rows, "Intensity rows without a representable speed"
        );
    }
    debug!(
        vo2max,
        reference_distance_meters,
        rows = table.rows.len(),
        "Built intensity table"
    );

    table
}
