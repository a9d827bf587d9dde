// ABOUTME: Main library entry point for the Vianna running periodization tooling
// ABOUTME: Re-exports the engine crates and provides logging, input validation, and record shapes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vianna Coach Contributors

#![deny(unsafe_code)]

//! # Vianna Coach
//!
//! Periodized running prescriptions for coaches: `VO2max` estimation from
//! field tests, pace tables, semester progressions, and six-month master
//! plans.
//!
//! ## Architecture
//!
//! - **`vianna_core`**: errors, constants, and data models
//! - **`vianna_intelligence`**: the pure calculation components
//! - **planner**: the single validation boundary for presentation input
//! - **persistence**: record shapes exchanged with the storage collaborator
//! - **logging**: `tracing` subscriber setup
//!
//! ## Example Usage
//!
//! ```rust
//! use vianna_coach::planner::{CalculationInput, RawForm};
//! use vianna_coach::PlannerConfig;
//!
//! let form = RawForm {
//!     vo2max: Some("50".into()),
//!     tier: Some("intermediate".into()),
//!     weekly_duration_minutes: Some("360".into()),
//!     sessions_per_week: Some("5".into()),
//!     total_sessions: Some("60".into()),
//!     ..RawForm::default()
//! };
//! let config = PlannerConfig::default();
//! let input = CalculationInput::from_form(&form, &[], &config)?;
//! let output = input.calculate(&config);
//! assert_eq!(output.progression.len(), 12);
//! # Ok::<(), vianna_coach::errors::AppError>(())
//! ```

/// Structured logging setup
pub mod logging;

/// Record shapes exchanged with the storage collaborator
pub mod persistence;

/// Validated calculation-input boundary
pub mod planner;

pub use vianna_core::{constants, errors, models};
pub use vianna_intelligence as intelligence;
pub use vianna_intelligence::PlannerConfig;
