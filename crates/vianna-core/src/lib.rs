// ABOUTME: Core types and constants for the Vianna running periodization platform
// ABOUTME: Foundation crate with error handling, physiological constants, and data models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vianna Coach Contributors

#![deny(unsafe_code)]

//! # Vianna Core
//!
//! Foundation crate providing shared types and constants for the Vianna
//! coaching platform. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `ErrorResponse`
//! - **constants**: Field-test formulas, ACSM running cost, units, and display sentinels
//! - **models**: Fitness tests, classifications, training tiers, and athlete profiles

/// Unified error handling system with standard error codes
pub mod errors;

/// Physiological and unit constants organized by domain
pub mod constants;

/// Core data models (fitness tests, tiers, athlete profiles)
pub mod models;
