// ABOUTME: Core data models shared by the calculation engine and its collaborators
// ABOUTME: Re-exports fitness test, training tier, and athlete profile types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vianna Coach Contributors

//! # Data Models
//!
//! Plain records exchanged with the persistence and presentation
//! collaborators. None of them perform I/O.


/// Coach-assigned training tiers and periodization styles
pub mod training;

/// Student profile with age and body-mass-index helpers
pub mod athlete;

pub use athlete::{AthleteProfile, BmiClassification, Sex};
pub use fitness_test::{latest_test, FitnessTest, TestProtocol, Vo2Classification};
pub use training::{HoursRange, PeriodizationStyle, TierProfile, TrainingTier};
