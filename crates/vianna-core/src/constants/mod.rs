// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Field-test formulas, running energy cost, classification bands, units, and sentinels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vianna Coach Contributors

//! Constants module
//!
//! Constants are grouped into logical domains rather than being scattered
//! across the calculation components that consume them.

/// Unit conversion and measurement constants
pub mod units;

/// Aerobic field-test formula coefficients
///
/// References:
/// - Cooper, K.H. (1968). "A means of assessing maximal oxygen intake." *JAMA*, 203(3), 201-204.
/// - Lima, J.R.P. & Vianna, J.M. track shuttle protocol (last completed stage speed).
pub mod field_tests {
    /// Cooper 12-minute run: distance intercept (meters)
    pub const COOPER_DISTANCE_OFFSET_M: f64 = 504.9;
    /// Cooper 12-minute run: meters per ml/kg/min
    pub const COOPER_DISTANCE_DIVISOR: f64 = 44.73;

    /// 2400 m run: numerator applied to the time in seconds
    pub const T2400M_TIME_NUMERATOR: f64 = 28_980.0;
    /// 2400 m run: additive resting component (ml/kg/min)
    pub const T2400M_OFFSET: f64 = 3.5;

    /// 3600 m run: fixed estimate returned regardless of the measured time
    pub const T3600M_FIXED_VO2MAX: f64 = 40.0;

    /// Lima-e-Vianna: ml/kg/min per km/h of the last completed stage
    pub const LIMA_VIANNA_SPEED_SLOPE: f64 = 3.333;
    /// Lima-e-Vianna: additive resting component (ml/kg/min)
    pub const LIMA_VIANNA_OFFSET: f64 = 3.5;
}

/// ACSM metabolic equation for running
///
/// `VO2 = 0.2 x speed (m/min) + 3.5`
///
/// Reference: ACSM's Guidelines for Exercise Testing and Prescription, 11th Edition
pub mod running_cost {
    /// Resting oxygen uptake (ml/kg/min), one MET
    pub const RESTING_VO2: f64 = 3.5;
    /// Oxygen cost of horizontal running (ml/kg/min per m/min)
    pub const HORIZONTAL_COST_PER_METER_MINUTE: f64 = 0.2;
}

/// `VO2max` classification band floors (exclusive: a value must be strictly greater)
pub mod classification {
    /// Above this: excellent
    pub const EXCELLENT_ABOVE: f64 = 45.0;
    /// Above this: good
    pub const GOOD_ABOVE: f64 = 38.0;
    /// Above this: medium, otherwise low
    pub const MEDIUM_ABOVE: f64 = 30.0;
}

/// Body-mass-index band ceilings (exclusive)
pub mod bmi {
    /// Below this: underweight
    pub const UNDERWEIGHT_BELOW: f64 = 18.5;
    /// Below this: normal weight
    pub const NORMAL_BELOW: f64 = 24.9;
    /// Below this: overweight
    pub const OVERWEIGHT_BELOW: f64 = 29.9;
    /// Below this: obesity class I
    pub const OBESITY_I_BELOW: f64 = 34.9;
    /// Below this: obesity class II, otherwise class III
    pub const OBESITY_II_BELOW: f64 = 39.9;
}

/// Display sentinels shared with the presentation layer
pub mod display {
    /// Marker for a speed, pace or time that cannot be represented
    pub const UNAVAILABLE: &str = "---";
    /// Marker for a field that does not apply (free-text blocks)
    pub const NOT_APPLICABLE: &str = "-";
    /// Description used when a free-text block is added without one
    pub const NO_DESCRIPTION: &str = "No description";
}
