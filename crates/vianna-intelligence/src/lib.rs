// ABOUTME: Training periodization calculation engine for the Vianna platform
// ABOUTME: Pure components for fitness estimation, intensity tables, progressions, and master plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vianna Coach Contributors

#![deny(unsafe_code)]

//! # Vianna Intelligence
//!
//! Deterministic calculation components. None of them perform I/O or read
//! the clock; tunables arrive as an explicit [`config::PlannerConfig`].
//!
//! Data flow:
//!
//! ```text
//! raw test -> algorithms::vo2max -> intensity -> sessions
//! tier + duration + frequency -> progression -> summary
//! target hours + template + assignments -> macrocycle
//! ```

/// Field-test `VO2max` estimation and classification
pub mod algorithms;

/// Planner tunables and configuration errors
pub mod config;

/// Intensity table generation from `VO2max`
pub mod intensity;

/// Macrocycle expansion into a master plan
pub mod macrocycle;

/// Week-by-week volume and intensity progression
pub mod progression;

/// Session block assembly
pub mod sessions;

/// Periodization summary
pub mod summary;

pub use algorithms::{classify, estimate_vo2max, FitnessEstimate};
pub use config::PlannerConfig;
pub use intensity::{build_intensity_table, IntensityRow, IntensityTable, PaceClock};
pub use macrocycle::{
    default_assignments, expand_master_plan, MacroTemplate, MasterPlan, MasterPlanWeek,
    MesocycleCatalog, MonthAssignment,
};
pub use progression::{build_progression, IntensityFocus, ProgressionBuilder, ProgressionWeek};
pub use sessions::{add_block, remove_block, BlockSpec, PlannedSessions, SessionBlock, SessionKey};
pub use summary::summarize;
