// ABOUTME: Physiological estimation algorithms used by the planner
// ABOUTME: Re-exports the field-test VO2max estimator and classification helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vianna Coach Contributors

/// `VO2max` estimation from field tests
pub mod vo2max;

pub use vo2max::{classify, classify_with_demographics, estimate_vo2max, FitnessEstimate};
