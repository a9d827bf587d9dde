// ABOUTME: VO2max estimation from aerobic field tests and qualitative classification
// ABOUTME: Implements Cooper, 2400m, 3600m, and Lima-e-Vianna protocols with band lookup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vianna Coach Contributors

use tracing::debug;
use vianna_core::constants::{classification, field_tests};
use vianna_core::models::{FitnessTest, Sex, TestProtocol, Vo2Classification};

/// Estimate `VO2max` (ml/kg/min) from a raw field-test measurement
///
/// Formulas by protocol:
///
/// - `Cooper`: `(meters - 504.9) / 44.73`
/// - `T2400m`: `28980 / seconds + 3.5`
/// - `T3600m`: constant `40.0`, the measured time is not used
/// - `LimaVianna`: `3.333 x km/h + 3.5`
///
/// Returns `0.0` when `raw_value` is not a finite, strictly positive number.
/// Callers must treat `0.0` as "not computable", never as a real `VO2max`.
///
/// # Example
///
/// ```rust
/// use vianna_core::models::TestProtocol;
/// use vianna_intelligence::algorithms::vo2max::estimate_vo2max;
///
/// let vo2max = estimate_vo2max(TestProtocol::Cooper, 2800.0);
/// assert!((vo2max - 51.31).abs() < 0.01);
/// ```
#[must_use]
pub fn estimate_vo2max(protocol: TestProtocol, raw_value: f64) -> f64 {
    if !raw_value.is_finite() || raw_value <= 0.0 {
        return 0.0;
    }

    let vo2max = match protocol {
        TestProtocol::Cooper => {
            (raw_value - field_tests::COOPER_DISTANCE_OFFSET_M)
                / field_tests::COOPER_DISTANCE_DIVISOR
        }
        TestProtocol::T2400m => {
            field_tests::T2400M_TIME_NUMERATOR / raw_value + field_tests::T2400M_OFFSET
        }
        TestProtocol::T3600m => field_tests::T3600M_FIXED_VO2MAX,
        TestProtocol::LimaVianna => field_tests::LIMA_VIANNA_SPEED_SLOPE
            .mul_add(raw_value, field_tests::LIMA_VIANNA_OFFSET),
    };

    debug!(protocol = %protocol, raw_value, vo2max, "Estimated VO2max");
    vo2max
}

/// Classify a `VO2max` value into its qualitative band
///
/// Bands are strict: a value exactly on a floor (45, 38, 30) falls into the
/// lower band.
#[must_use]
pub fn classify(vo2max: f64) -> Vo2Classification {
    if vo2max > classification::EXCELLENT_ABOVE {
        Vo2Classification::Excellent
    } else if vo2max > classification::GOOD_ABOVE {
        Vo2Classification::Good
    } else if vo2max > classification::MEDIUM_ABOVE {
        Vo2Classification::Medium
    } else {
        Vo2Classification::Low
    }
}

/// Classify with the demographic parameters the test form collects
///
/// Age and sex are accepted for interface compatibility and have no effect
/// on the result: the bands are the same for every student.
#[must_use]
pub fn classify_with_demographics(
    vo2max: f64,
    _age: Option<u32>,
    _sex: Option<Sex>,
) -> Vo2Classification {
    classify(vo2max)
}

/// Derived fitness values for a recorded test
pub trait FitnessEstimate {
    /// Estimated `VO2max` (ml/kg/min), `0.0` when not computable
    fn estimated_vo2max(&self) -> f64;

    /// Qualitative band of the estimated `VO2max`
    fn classification(&self) -> Vo2Classification {
        classify(self.estimated_vo2max())
    }
}

impl FitnessEstimate for FitnessTest {
    fn estimated_vo2max(&self) -> f64 {
        estimate_vo2max(self.protocol, self.raw_value)
    }
}
